use super::player::Player;

/// Whose turn it is, cycling over players who have not finished yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnState {
    /// `None` until the first roll, which lands on player 0
    current: Option<usize>,
    game_over: bool,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn finish(&mut self) {
        self.game_over = true;
    }

    /// Move the turn to the next player who has not won, scanning each
    /// player at most once. When everyone has won the game is over and
    /// `None` is returned without touching the turn index.
    pub fn advance(&mut self, players: &[Player]) -> Option<usize> {
        if self.game_over || players.is_empty() {
            self.game_over = true;
            return None;
        }

        let count = players.len();
        let start = self.current.map_or(0, |i| i + 1);
        let next = (0..count)
            .map(|offset| (start + offset) % count)
            .find(|&i| !players[i].has_won());

        match next {
            Some(index) => {
                self.current = Some(index);
                Some(index)
            }
            None => {
                self.game_over = true;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rgb;
    use crate::game::board::Grid;

    fn players(won: &[bool]) -> Vec<Player> {
        let grid = Grid::default();
        won.iter()
            .enumerate()
            .map(|(i, &won)| {
                let cell = if won { 100 } else { 1 };
                Player::starting_at(format!("P{}", i + 1), Rgb(0, 0, 0), cell, &grid)
            })
            .collect()
    }

    #[test]
    fn test_first_advance_lands_on_player_zero() {
        let mut turn = TurnState::new();
        assert_eq!(turn.current(), None);
        assert_eq!(turn.advance(&players(&[false, false])), Some(0));
    }

    #[test]
    fn test_advance_cycles() {
        let players = players(&[false, false, false]);
        let mut turn = TurnState::new();
        let order: Vec<_> = (0..7).filter_map(|_| turn.advance(&players)).collect();
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_advance_skips_winners() {
        let players = players(&[true, false, true]);
        for start in [None, Some(0), Some(1), Some(2)] {
            let mut turn = TurnState {
                current: start,
                game_over: false,
            };
            assert_eq!(turn.advance(&players), Some(1));
            assert!(!turn.is_game_over());
        }
    }

    #[test]
    fn test_all_won_is_game_over() {
        let players = players(&[true, true, true]);
        let mut turn = TurnState {
            current: Some(1),
            game_over: false,
        };
        assert_eq!(turn.advance(&players), None);
        assert!(turn.is_game_over());
        assert_eq!(turn.current(), Some(1));
    }

    #[test]
    fn test_game_over_blocks_advance() {
        let players = players(&[false, false]);
        let mut turn = TurnState::new();
        turn.finish();
        assert_eq!(turn.advance(&players), None);
        assert_eq!(turn.current(), None);
    }
}
