use crate::game::Direction;

/// Direction of a swipe from `start` to `end`.
///
/// The axis with the larger displacement wins; a tie goes to the vertical
/// axis. A zero-length swipe (a tap) has no direction.
pub fn swipe_direction(start: (f32, f32), end: (f32, f32)) -> Option<Direction> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    if dx.abs() > dy.abs() {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

/// Remembers where a touch or drag began
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, at: (f32, f32)) {
        self.start = Some(at);
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Finish the gesture; `None` when nothing was started here
    pub fn end(&mut self, at: (f32, f32)) -> Option<((f32, f32), (f32, f32))> {
        self.start.take().map(|start| (start, at))
    }
}
