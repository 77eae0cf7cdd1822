//! Terminal UI: captures a scene from the game session each frame, draws it
//! on a braille canvas, and turns key presses and mouse clicks into roll,
//! reset and quit requests.

mod app;
pub mod board_view;
pub mod input;
pub mod scene;

pub use app::App;
