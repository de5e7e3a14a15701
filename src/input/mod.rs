pub mod dpad;
pub mod router;
pub mod swipe;

pub use dpad::{ButtonRect, DPad};
pub use router::{Command, InputEvent, InputRouter};
pub use swipe::{SwipeTracker, swipe_direction};
