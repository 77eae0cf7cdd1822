use crate::config::Rgb;

use super::board::{Grid, Point, FINAL_CELL, START_CELL};
use super::motion::{MoveInstruction, Motion};

/// A player's piece: authoritative board position plus its animation.
///
/// `settled_position` and `has_won` are the game state. `motion` only
/// chases `settled_position` for display and never changes it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    name: String,
    color: Rgb,
    settled_position: u8,
    has_won: bool,
    motion: Motion,
}

impl Player {
    pub fn new(name: impl Into<String>, color: Rgb, grid: &Grid) -> Self {
        Self::starting_at(name, color, START_CELL, grid)
    }

    /// A player resting on an arbitrary cell
    pub fn starting_at(name: impl Into<String>, color: Rgb, cell: u8, grid: &Grid) -> Self {
        let cell = cell.clamp(START_CELL, FINAL_CELL);
        Player {
            name: name.into(),
            color,
            settled_position: cell,
            has_won: cell == FINAL_CELL,
            motion: Motion::new(cell, grid),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn settled_position(&self) -> u8 {
        self.settled_position
    }

    pub fn has_won(&self) -> bool {
        self.has_won
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Interpolated top-left coordinate for drawing
    pub fn coordinate(&self) -> Point {
        self.motion.coordinate()
    }

    /// Score box text: `"name: 42"`, or `"name: won"`
    pub fn label(&self) -> String {
        if self.has_won {
            format!("{}: won", self.name)
        } else {
            format!("{}: {}", self.name, self.settled_position)
        }
    }

    /// Move forward by a die roll. Overshooting the final cell is illegal:
    /// the player stays put, nothing is queued and `false` is returned.
    pub fn advance(&mut self, amount: u8) -> bool {
        let Some(next) = self
            .settled_position
            .checked_add(amount)
            .filter(|&cell| cell <= FINAL_CELL)
        else {
            return false;
        };

        self.settled_position = next;
        if next == FINAL_CELL {
            self.has_won = true;
        }
        self.motion.enqueue(MoveInstruction::StepTo(next));
        true
    }

    /// Follow a snake or ladder. Takes effect immediately; only the
    /// animation is deferred.
    pub fn redirect_to(&mut self, cell: u8) {
        self.settled_position = cell;
        if cell == FINAL_CELL {
            self.has_won = true;
        }
        self.motion.enqueue(MoveInstruction::JumpTo(cell));
    }

    pub fn advance_one_frame(&mut self, grid: &Grid) {
        self.motion.advance_one_frame(grid);
    }
}
