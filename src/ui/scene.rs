use crate::config::Rgb;
use crate::game::{GameSession, Point, RedirectKind};

/// Length of each arrow-head barb
pub const ARROW_HEAD_LENGTH: f64 = 20.0;
/// Angle between the shaft and each barb, in degrees
pub const ARROW_HEAD_ANGLE: f64 = 30.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub number: u8,
    pub origin: Point,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieceView {
    pub color: Rgb,
    /// Interpolated center of the piece
    pub center: Point,
    pub label: String,
    pub has_won: bool,
}

/// A snake or ladder drawn as an arrow from its origin to its destination
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowView {
    pub kind: RedirectKind,
    pub tail: Point,
    pub head: Point,
    pub barbs: [Point; 2],
}

/// Everything one frame needs to draw, captured from the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub cells: Vec<CellView>,
    pub pieces: Vec<PieceView>,
    pub arrows: Vec<ArrowView>,
    pub status: Option<String>,
    pub game_over: bool,
}

impl Scene {
    pub fn capture(session: &GameSession) -> Self {
        let grid = session.grid();
        let half = grid.cell_size() / 2.0;

        let cells = grid
            .cells()
            .iter()
            .map(|cell| CellView {
                number: cell.number(),
                origin: cell.origin(),
                size: cell.size(),
            })
            .collect();

        let pieces = session
            .players()
            .iter()
            .map(|player| PieceView {
                color: player.color(),
                center: player.coordinate().offset(half, half),
                label: player.label(),
                has_won: player.has_won(),
            })
            .collect();

        let arrows = session
            .redirects()
            .edges()
            .iter()
            .filter_map(|edge| {
                let tail = grid.cell(edge.origin())?.center();
                let head = grid.cell(edge.destination())?.center();
                Some(ArrowView {
                    kind: edge.kind(),
                    tail,
                    head,
                    barbs: arrow_barbs(tail, head),
                })
            })
            .collect();

        let game_over = session.is_game_over();
        let status = if game_over {
            Some("Game over".to_string())
        } else {
            match (session.current_player(), session.last_roll()) {
                (Some(player), Some(roll)) => Some(format!("{} moves by {}", player.name(), roll)),
                _ => None,
            }
        };

        Scene {
            cells,
            pieces,
            arrows,
            status,
            game_over,
        }
    }
}

/// End points of the two barbs at `head`, each swung 30 degrees off the
/// shaft back toward `tail`.
fn arrow_barbs(tail: Point, head: Point) -> [Point; 2] {
    let back = (tail.y - head.y).atan2(tail.x - head.x);
    let spread = ARROW_HEAD_ANGLE.to_radians();
    [back - spread, back + spread].map(|angle| {
        head.offset(
            ARROW_HEAD_LENGTH * angle.cos(),
            ARROW_HEAD_LENGTH * angle.sin(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, PlayerConfig};

    fn session_config() -> GameConfig {
        GameConfig {
            players: vec![
                PlayerConfig {
                    name: "Ada".into(),
                    color: Rgb(255, 0, 0),
                },
                PlayerConfig {
                    name: "Bo".into(),
                    color: Rgb(0, 0, 255),
                },
            ],
            snakes: vec![[40, 3]],
            ladders: vec![[10, 25]],
            ratelimit: 0,
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_capture_initial_scene() {
        let session = GameSession::new(&session_config());
        let scene = Scene::capture(&session);

        assert_eq!(scene.cells.len(), 100);
        assert_eq!(scene.cells[0].number, 1);
        assert_eq!(scene.cells[0].origin, Point::new(10.0, 550.0));
        assert_eq!(scene.cells[0].size, 60.0);

        assert_eq!(scene.pieces.len(), 2);
        assert_eq!(scene.pieces[0].center, Point::new(40.0, 580.0));
        assert_eq!(scene.pieces[0].label, "Ada: 1");
        assert_eq!(scene.pieces[1].color, Rgb(0, 0, 255));

        assert_eq!(scene.status, None);
        assert!(!scene.game_over);
    }

    #[test]
    fn test_arrows_point_at_destination() {
        let session = GameSession::new(&session_config());
        let scene = Scene::capture(&session);
        let grid = session.grid();

        assert_eq!(scene.arrows.len(), 2);
        let snake = &scene.arrows[0];
        assert_eq!(snake.kind, RedirectKind::Snake);
        assert_eq!(snake.tail, grid.cell(40).unwrap().center());
        assert_eq!(snake.head, grid.cell(3).unwrap().center());

        let ladder = &scene.arrows[1];
        assert_eq!(ladder.kind, RedirectKind::Ladder);
        for barb in ladder.barbs {
            assert!((barb.distance(ladder.head) - ARROW_HEAD_LENGTH).abs() < 1e-9);
            // Barbs sit on the tail side of the head
            assert!(barb.distance(ladder.tail) < ladder.head.distance(ladder.tail));
        }
    }

    #[test]
    fn test_off_board_edges_are_not_drawn() {
        let mut config = session_config();
        config.snakes.push([0, 5]);
        let session = GameSession::new(&config);
        assert_eq!(Scene::capture(&session).arrows.len(), 2);
    }

    #[test]
    fn test_barbs_are_symmetric() {
        let [a, b] = arrow_barbs(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y + b.y).abs() < 1e-9);
        assert!(a.x < 100.0);
    }

    #[test]
    fn test_status_text() {
        let mut session = GameSession::new(&session_config());
        session.request_roll(4);
        let scene = Scene::capture(&session);
        assert_eq!(scene.status.as_deref(), Some("Ada moves by 4"));
        assert_eq!(scene.pieces[0].label, "Ada: 5");
    }

    #[test]
    fn test_label_follows_settled_position_before_animation() {
        let mut session = GameSession::new(&session_config());
        session.request_roll(1); // 1 -> 2
        session.request_roll(2); // Bo 1 -> 3
        for _ in 0..200 {
            session.tick();
        }
        session.request_roll(6); // Ada 2 -> 8
        session.request_roll(6); // Bo 3 -> 9
        session.request_roll(2); // Ada 8 -> 10, ladder to 25

        let scene = Scene::capture(&session);
        assert_eq!(scene.pieces[0].label, "Ada: 25");
        // The piece is still drawn at cell 2
        assert_eq!(
            scene.pieces[0].center,
            session.grid().cell(2).unwrap().center()
        );
    }

    #[test]
    fn test_game_over_status() {
        let mut config = session_config();
        config.players.truncate(1);
        config.ladders = vec![[7, 100]];
        let mut session = GameSession::new(&config);
        session.request_roll(6);

        let scene = Scene::capture(&session);
        assert!(scene.game_over);
        assert!(scene.pieces[0].has_won);
        assert_eq!(scene.pieces[0].label, "Ada: won");
        assert_eq!(scene.status.as_deref(), Some("Game over"));
    }
}
