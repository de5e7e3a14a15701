//! Grid snake on a macroquad canvas.
//!
//! - `game`: board, snake, movement, food, difficulty
//! - `session`: start / game over / restart, high score
//! - `ticker`: the periodic tick
//! - `input`: keys, buttons and swipes to commands
//! - `render`: board painting behind a small drawing trait
//! - `ui` and `app`: window furniture and the frame loop

pub mod app;
pub mod game;
pub mod input;
pub mod render;
pub mod session;
pub mod storage;
pub mod ticker;
pub mod ui;
