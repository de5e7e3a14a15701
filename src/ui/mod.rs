//! Screen furniture around the board: labels, overlays and the direction pad.

pub mod hud;
pub mod layout;

pub use hud::Hud;
pub use layout::Layout;
