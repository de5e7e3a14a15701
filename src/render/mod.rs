//! Board rendering.
//!
//! [`paint`] turns a [`GameState`](crate::game::GameState) into primitive
//! calls on a [`Surface`]; the macroquad-backed surface lives in `canvas`.

pub mod canvas;
pub mod painter;
pub mod surface;

pub use canvas::MacroquadSurface;
pub use painter::paint;
pub use surface::{DisplayList, DrawCmd, Rgba, Surface};
