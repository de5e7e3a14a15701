use crate::game::Direction;

/// Axis-aligned button area in screen pixels
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl ButtonRect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// On-screen direction pad: Up on top, Left and Right in the middle row,
/// Down at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct DPad {
    buttons: [(Direction, ButtonRect); 4],
}

impl DPad {
    /// Lay the cross out around `center` with square buttons of side `button`
    pub fn new(center: (f32, f32), button: f32) -> Self {
        let (cx, cy) = center;
        let half = button / 2.0;
        let rect = |ox: f32, oy: f32| ButtonRect {
            x: cx + ox - half,
            y: cy + oy - half,
            w: button,
            h: button,
        };
        Self {
            buttons: [
                (Direction::Up, rect(0.0, -button)),
                (Direction::Left, rect(-button, 0.0)),
                (Direction::Right, rect(button, 0.0)),
                (Direction::Down, rect(0.0, button)),
            ],
        }
    }

    pub fn buttons(&self) -> &[(Direction, ButtonRect)] {
        &self.buttons
    }

    /// Which button, if any, a press at `(x, y)` landed on
    pub fn hit(&self, x: f32, y: f32) -> Option<Direction> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(dir, _)| *dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_layout_hits() {
        let pad = DPad::new((100.0, 100.0), 40.0);
        assert_eq!(pad.hit(100.0, 60.0), Some(Direction::Up));
        assert_eq!(pad.hit(100.0, 140.0), Some(Direction::Down));
        assert_eq!(pad.hit(60.0, 100.0), Some(Direction::Left));
        assert_eq!(pad.hit(140.0, 100.0), Some(Direction::Right));
    }

    #[test]
    fn test_center_and_corners_miss() {
        let pad = DPad::new((100.0, 100.0), 40.0);
        assert_eq!(pad.hit(100.0, 100.0), None);
        assert_eq!(pad.hit(60.0, 60.0), None);
        assert_eq!(pad.hit(500.0, 500.0), None);
    }
}
