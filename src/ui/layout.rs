use crate::input::DPad;

pub const HUD_HEIGHT: f32 = 48.0;
pub const PAD_BUTTON: f32 = 52.0;
const PAD_MARGIN: f32 = 12.0;

/// Where things go on the current window: HUD band on top, the board
/// scaled to fit in the middle, the direction pad underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub screen: (f32, f32),
    pub board_origin: (f32, f32),
    /// Screen pixels per logical canvas pixel
    pub scale: f32,
    pub board_side: f32,
    pad_center: (f32, f32),
    pad_button: f32,
}

impl Layout {
    pub fn pad_band_height() -> f32 {
        PAD_BUTTON * 3.0 + PAD_MARGIN * 2.0
    }

    pub fn compute(screen_w: f32, screen_h: f32, canvas_size: f32) -> Self {
        let pad_h = Self::pad_band_height();
        let avail_h = (screen_h - HUD_HEIGHT - pad_h).max(1.0);
        let scale = (screen_w / canvas_size).min(avail_h / canvas_size).max(0.01);
        let board_side = canvas_size * scale;
        let board_origin = (
            (screen_w - board_side) / 2.0,
            HUD_HEIGHT + (avail_h - board_side) / 2.0,
        );
        let pad_center = (screen_w / 2.0, screen_h - pad_h / 2.0);

        Self {
            screen: (screen_w, screen_h),
            board_origin,
            scale,
            board_side,
            pad_center,
            pad_button: PAD_BUTTON,
        }
    }

    pub fn dpad(&self) -> DPad {
        DPad::new(self.pad_center, self.pad_button)
    }

    pub fn board_contains(&self, x: f32, y: f32) -> bool {
        let (ox, oy) = self.board_origin;
        x >= ox && x < ox + self.board_side && y >= oy && y < oy + self.board_side
    }
}
