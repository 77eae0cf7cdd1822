//! Core Snakes and Ladders logic: the serpentine board, snakes and ladders,
//! per-player motion, turn order and the session that ties them together.
//! Nothing here draws or reads input.

mod board;
mod dice;
mod motion;
mod player;
mod redirect;
mod session;
mod turn;

pub use board::{Cell, Grid, Point, BOARD_MARGIN, CELL_COUNT, CELL_SIZE, FINAL_CELL, START_CELL};
pub use dice::{Die, DIE_FACES};
pub use motion::{interpolation_fraction, MoveInstruction, Motion};
pub use player::Player;
pub use redirect::{RedirectEdge, RedirectKind, RedirectTable};
pub use session::{GameSession, RollOutcome};
pub use turn::TurnState;
