use super::board::{CELL_COUNT, FINAL_CELL};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectKind {
    Snake,
    Ladder,
}

/// A snake or ladder from `origin` to `destination`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedirectEdge {
    origin: u8,
    destination: u8,
    kind: RedirectKind,
}

impl RedirectEdge {
    pub fn new(origin: u8, destination: u8, kind: RedirectKind) -> Self {
        RedirectEdge {
            origin,
            destination,
            kind,
        }
    }

    pub fn origin(&self) -> u8 {
        self.origin
    }

    pub fn destination(&self) -> u8 {
        self.destination
    }

    pub fn kind(&self) -> RedirectKind {
        self.kind
    }
}

/// Snakes and ladders indexed by origin cell.
///
/// Origins are expected to be unique; configuration validation rejects
/// duplicates, and if one slips through the first edge wins.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectTable {
    edges: Vec<RedirectEdge>,
    destinations: [Option<u8>; CELL_COUNT],
}

impl RedirectTable {
    /// Build from `[origin, destination]` pairs
    pub fn new(snakes: &[[u8; 2]], ladders: &[[u8; 2]]) -> Self {
        let snakes = snakes
            .iter()
            .map(|&[from, to]| RedirectEdge::new(from, to, RedirectKind::Snake));
        let ladders = ladders
            .iter()
            .map(|&[from, to]| RedirectEdge::new(from, to, RedirectKind::Ladder));
        Self::from_edges(snakes.chain(ladders))
    }

    pub fn from_edges(edges: impl IntoIterator<Item = RedirectEdge>) -> Self {
        let edges: Vec<RedirectEdge> = edges.into_iter().collect();
        let mut destinations = [None; CELL_COUNT];
        for edge in &edges {
            if let Some(i) = slot_index(edge.origin) {
                if destinations[i].is_none() {
                    destinations[i] = Some(edge.destination);
                }
            }
        }
        RedirectTable {
            edges,
            destinations,
        }
    }

    pub fn lookup(&self, cell: u8) -> Option<u8> {
        slot_index(cell).and_then(|i| self.destinations[i])
    }

    pub fn edges(&self) -> &[RedirectEdge] {
        &self.edges
    }

    /// Send the player down a snake or up a ladder if one starts on their
    /// settled cell. Only one redirect is followed per call; a destination
    /// that is itself an origin is not chained.
    pub fn apply_if_present(&self, player: &mut Player) -> Option<u8> {
        let destination = self.lookup(player.settled_position())?;
        player.redirect_to(destination);
        Some(destination)
    }
}

impl Default for RedirectTable {
    fn default() -> Self {
        Self::from_edges(Vec::new())
    }
}

fn slot_index(cell: u8) -> Option<usize> {
    (1..=FINAL_CELL)
        .contains(&cell)
        .then(|| usize::from(cell) - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rgb;
    use crate::game::board::Grid;
    use crate::game::motion::MoveInstruction;

    #[test]
    fn test_lookup() {
        let table = RedirectTable::new(&[[40, 3]], &[[10, 25]]);
        assert_eq!(table.lookup(10), Some(25));
        assert_eq!(table.lookup(40), Some(3));
        assert_eq!(table.lookup(11), None);
        assert_eq!(table.lookup(0), None);
        assert_eq!(table.lookup(101), None);
    }

    #[test]
    fn test_edges_keep_kind() {
        let table = RedirectTable::new(&[[40, 3]], &[[10, 25]]);
        let kinds: Vec<_> = table.edges().iter().map(|e| e.kind()).collect();
        assert_eq!(kinds, vec![RedirectKind::Snake, RedirectKind::Ladder]);
    }

    #[test]
    fn test_first_duplicate_origin_wins() {
        let table = RedirectTable::new(&[[30, 2]], &[[30, 60]]);
        assert_eq!(table.lookup(30), Some(2));
    }

    #[test]
    fn test_apply_if_present() {
        let grid = Grid::default();
        let table = RedirectTable::new(&[], &[[10, 25]]);
        let mut player = Player::starting_at("Bo", Rgb(0, 0, 255), 10, &grid);

        assert_eq!(table.apply_if_present(&mut player), Some(25));
        assert_eq!(player.settled_position(), 25);
        assert_eq!(
            player.motion().queue().back(),
            Some(&MoveInstruction::JumpTo(25))
        );
    }

    #[test]
    fn test_apply_if_absent_leaves_player() {
        let grid = Grid::default();
        let table = RedirectTable::new(&[], &[[10, 25]]);
        let mut player = Player::starting_at("Bo", Rgb(0, 0, 255), 11, &grid);
        let before = player.clone();

        assert_eq!(table.apply_if_present(&mut player), None);
        assert_eq!(player, before);
    }

    #[test]
    fn test_redirects_do_not_chain() {
        let grid = Grid::default();
        let table = RedirectTable::new(&[], &[[10, 25], [25, 50]]);
        let mut player = Player::starting_at("Bo", Rgb(0, 0, 255), 10, &grid);

        table.apply_if_present(&mut player);
        assert_eq!(player.settled_position(), 25);
        assert_eq!(player.motion().queue().len(), 1);
    }
}
