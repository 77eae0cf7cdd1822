//! # Snakes and Ladders
//!
//! A Snakes and Ladders board game whose pieces glide across a 100-cell
//! serpentine board, drawn on a terminal canvas with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board geometry, snakes and ladders, piece
//!   motion, turn order, session
//! - [`ui`] — Terminal UI: scene capture, canvas rendering, input, frame loop
//! - [`config`] — JSON/TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
