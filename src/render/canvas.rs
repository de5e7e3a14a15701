use macroquad::prelude::*;

use super::surface::{Rgba, Surface};

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::from_rgba(c.r, c.g, c.b, c.a)
    }
}

/// Draws logical canvas coordinates onto the window, scaled and offset
/// into the area the layout reserved for the board.
pub struct MacroquadSurface {
    origin: Vec2,
    scale: f32,
    logical_size: f32,
}

impl MacroquadSurface {
    pub fn new(origin: Vec2, scale: f32, logical_size: f32) -> Self {
        Self {
            origin,
            scale,
            logical_size,
        }
    }

    fn to_screen(&self, x: f32, y: f32) -> Vec2 {
        self.origin + vec2(x, y) * self.scale
    }
}

impl Surface for MacroquadSurface {
    fn clear(&mut self, color: Rgba) {
        let side = self.logical_size * self.scale;
        draw_rectangle(self.origin.x, self.origin.y, side, side, color.into());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let p = self.to_screen(x, y);
        draw_rectangle(p.x, p.y, w * self.scale, h * self.scale, color.into());
    }

    fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, rotation: f32, color: Rgba) {
        let p = self.to_screen(cx, cy);
        if rx == ry {
            draw_circle(p.x, p.y, rx * self.scale, color.into());
        } else {
            // macroquad takes degrees
            draw_ellipse(
                p.x,
                p.y,
                rx * self.scale,
                ry * self.scale,
                rotation.to_degrees(),
                color.into(),
            );
        }
    }

    fn stroke_path(&mut self, points: &[(f32, f32)], thickness: f32, color: Rgba) {
        for pair in points.windows(2) {
            let a = self.to_screen(pair[0].0, pair[0].1);
            let b = self.to_screen(pair[1].0, pair[1].1);
            draw_line(a.x, a.y, b.x, b.y, thickness * self.scale, color.into());
        }
    }
}
