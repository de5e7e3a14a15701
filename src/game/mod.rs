//! Core game logic for the snake
//!
//! No I/O, windowing or timing lives here; the session drives it tick by tick.

pub mod config;
pub mod difficulty;
pub mod engine;
pub mod grid;
pub mod state;

pub use config::{ConfigError, GameConfig};
pub use difficulty::Difficulty;
pub use engine::{CollisionType, GameEngine, START_HEADING, StepOutcome};
pub use grid::{Cell, Direction, Grid};
pub use state::{GameState, Snake};
