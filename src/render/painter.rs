use std::f32::consts::FRAC_PI_4;

use super::surface::{Rgba, Surface};
use crate::game::{Cell, GameState};

// Palette
pub const BACKGROUND: Rgba = Rgba::hex(0x111111);
pub const TILE_DARK: Rgba = Rgba::hex(0x1a1a1a);
pub const TILE_LIGHT: Rgba = Rgba::hex(0x222222);
pub const APPLE: Rgba = Rgba::hex(0xff4444);
pub const APPLE_SHINE: Rgba = Rgba::hex(0xff8888);
pub const APPLE_STEM: Rgba = Rgba::hex(0x8b4513);
pub const LEAF: Rgba = Rgba::hex(0x4caf50);
pub const HEAD: Rgba = Rgba::hex(0x2e7d32);
pub const BODY_EVEN: Rgba = Rgba::hex(0x4caf50);
pub const BODY_ODD: Rgba = Rgba::hex(0x43a047);
pub const TAIL: Rgba = Rgba::hex(0x388e3c);
pub const EYE: Rgba = Rgba::hex(0xffffff);
pub const PUPIL: Rgba = Rgba::hex(0x000000);

/// Sprite offsets below are tuned for this cell size and scaled from it
const REFERENCE_CELL: f32 = 25.0;

/// Paint the whole board. Reads nothing but `state` and writes nothing but
/// `surface`.
pub fn paint(state: &GameState, cell_size: f32, surface: &mut impl Surface) {
    surface.clear(BACKGROUND);
    paint_checkerboard(state.grid.size(), cell_size, surface);
    paint_apple(state.food, cell_size, surface);
    paint_snake(state, cell_size, surface);
}

fn center_of(cell: Cell, cell_size: f32) -> (f32, f32) {
    (
        cell.x as f32 * cell_size + cell_size / 2.0,
        cell.y as f32 * cell_size + cell_size / 2.0,
    )
}

fn paint_checkerboard(size: u32, cell_size: f32, surface: &mut impl Surface) {
    for i in 0..size {
        for j in 0..size {
            let color = if (i + j) % 2 == 0 { TILE_DARK } else { TILE_LIGHT };
            surface.fill_rect(
                i as f32 * cell_size,
                j as f32 * cell_size,
                cell_size,
                cell_size,
                color,
            );
        }
    }
}

fn paint_apple(food: Cell, cell_size: f32, surface: &mut impl Surface) {
    let k = cell_size / REFERENCE_CELL;
    let (cx, cy) = center_of(food, cell_size);
    let radius = cell_size / 2.0 - 2.0 * k;

    // glow
    surface.fill_circle(cx, cy + k, radius + 3.0 * k, APPLE.with_alpha(0x40));
    surface.fill_circle(cx, cy + k, radius, APPLE);
    surface.fill_circle(cx - 3.0 * k, cy - 3.0 * k, radius / 4.0, APPLE_SHINE);
    surface.fill_rect(cx - k, cy - radius - 2.0 * k, 2.0 * k, 6.0 * k, APPLE_STEM);
    surface.fill_ellipse(cx + 4.0 * k, cy - radius, 6.0 * k, 3.0 * k, FRAC_PI_4, LEAF);
}

fn paint_snake(state: &GameState, cell_size: f32, surface: &mut impl Surface) {
    let last = state.snake.len() - 1;
    let radius = cell_size / 2.0;
    let k = cell_size / REFERENCE_CELL;

    // tail first so the head ends up on top
    let cells: Vec<Cell> = state.snake.cells().collect();
    for (index, cell) in cells.iter().enumerate().rev() {
        let (cx, cy) = center_of(*cell, cell_size);
        if index == 0 {
            paint_head(cx, cy, state.velocity.angle(), cell_size, surface);
        } else if index == last {
            surface.fill_circle(cx, cy, radius - 4.0 * k, TAIL);
        } else {
            let color = if index % 2 == 0 { BODY_EVEN } else { BODY_ODD };
            surface.fill_circle(cx, cy, radius + k, color);
        }
    }
}

/// Head sprite drawn in a local frame facing +x, then rotated to `angle`
fn paint_head(cx: f32, cy: f32, angle: f32, cell_size: f32, surface: &mut impl Surface) {
    let k = cell_size / REFERENCE_CELL;
    let (sin, cos) = angle.sin_cos();
    let at = |lx: f32, ly: f32| {
        let (lx, ly) = (lx * k, ly * k);
        (cx + lx * cos - ly * sin, cy + lx * sin + ly * cos)
    };

    let (hx, hy) = at(2.0, 0.0);
    surface.fill_ellipse(hx, hy, cell_size / 1.8, cell_size / 2.0, angle, HEAD);

    for side in [-5.0, 5.0] {
        let (ex, ey) = at(4.0, side);
        surface.fill_circle(ex, ey, 4.0 * k, EYE);
    }
    for side in [-5.0, 5.0] {
        let (px, py) = at(6.0, side);
        surface.fill_circle(px, py, 2.0 * k, PUPIL);
    }
}
