use macroquad::prelude::*;

use super::layout::{HUD_HEIGHT, Layout};
use crate::game::Direction;
use crate::render::{MacroquadSurface, Rgba, Surface};
use crate::session::{Phase, SessionEvent};

const TEXT: Color = Color::new(0.93, 0.93, 0.93, 1.0);
const ACCENT: Color = Color::new(0.30, 0.69, 0.31, 1.0);
const DIM: Color = Color::new(0.6, 0.6, 0.6, 1.0);
const BUTTON: Rgba = Rgba::hex(0x333333);
const ARROW: Rgba = Rgba::hex(0xdddddd);

/// Labels shown around the board, kept current from session events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub final_score: Option<u32>,
    pub new_best: bool,
}

impl Hud {
    pub fn new(high_score: u32) -> Self {
        Self {
            high_score,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Started => {
                self.final_score = None;
                self.new_best = false;
            }
            SessionEvent::ScoreChanged(score) => self.score = score,
            SessionEvent::HighScoreChanged(high) => {
                self.high_score = high;
                self.new_best = true;
            }
            SessionEvent::GameOver { score, .. } => self.final_score = Some(score),
        }
    }

    pub fn draw(&self, phase: Phase, layout: &Layout) {
        let (sw, _) = layout.screen;
        draw_text(&format!("Score: {}", self.score), 12.0, HUD_HEIGHT * 0.65, 28.0, TEXT);
        let best = format!("Best: {}", self.high_score);
        let m = measure_text(&best, None, 28, 1.0);
        draw_text(&best, sw - m.width - 12.0, HUD_HEIGHT * 0.65, 28.0, ACCENT);

        draw_dpad(layout);

        match phase {
            Phase::Idle => overlay(layout, "SNAKE", &[
                "Enter / Space or tap the board to start".to_string(),
                "Arrows / WASD, buttons or swipe to steer".to_string(),
            ]),
            Phase::Over => {
                let mut lines = vec![format!("Final score: {}", self.final_score.unwrap_or(self.score))];
                if self.new_best {
                    lines.push("New best!".to_string());
                }
                lines.push("Enter / Space or tap the board to play again".to_string());
                overlay(layout, "GAME OVER", &lines);
            }
            Phase::Running => {}
        }
    }
}

fn overlay(layout: &Layout, title: &str, lines: &[String]) {
    let (ox, oy) = layout.board_origin;
    let side = layout.board_side;
    draw_rectangle(ox, oy, side, side, Color::new(0.0, 0.0, 0.0, 0.6));

    let cx = ox + side / 2.0;
    let mut y = oy + side * 0.4;
    let t = measure_text(title, None, 44, 1.0);
    draw_text(title, cx - t.width / 2.0, y, 44.0, ACCENT);
    y += 44.0;
    for line in lines {
        let m = measure_text(line, None, 20, 1.0);
        draw_text(line, cx - m.width / 2.0, y, 20.0, DIM);
        y += 26.0;
    }
}

fn draw_dpad(layout: &Layout) {
    let mut surface = MacroquadSurface::new(Vec2::ZERO, 1.0, layout.screen.0.max(layout.screen.1));
    for (direction, rect) in layout.dpad().buttons() {
        surface.fill_rect(rect.x, rect.y, rect.w, rect.h, BUTTON);
        let (cx, cy) = rect.center();
        surface.stroke_path(&chevron(*direction, cx, cy, rect.w * 0.2), 3.0, ARROW);
    }
}

/// Three-point arrow head pointing along `direction`
fn chevron(direction: Direction, cx: f32, cy: f32, size: f32) -> [(f32, f32); 3] {
    let (dx, dy) = direction.delta();
    let (dx, dy) = (dx as f32, dy as f32);
    // perpendicular to the heading
    let (px, py) = (-dy, dx);
    [
        (cx - dx * size / 2.0 + px * size, cy - dy * size / 2.0 + py * size),
        (cx + dx * size / 2.0, cy + dy * size / 2.0),
        (cx - dx * size / 2.0 - px * size, cy - dy * size / 2.0 - py * size),
    ]
}
