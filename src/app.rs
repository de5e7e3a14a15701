//! macroquad frame loop.
//!
//! Each frame: gather input, apply it, poll the ticker, repaint the cached
//! board only when the session asks for it, then replay it and draw the HUD.

use macroquad::prelude::*;
use tracing::info;

use crate::input::{InputEvent, InputRouter, SwipeTracker};
use crate::render::{DisplayList, MacroquadSurface, paint};
use crate::session::{Phase, Session};
use crate::storage::HighScoreStore;
use crate::ui::{Hud, Layout};

const CLEAR_COLOR: Color = Color::new(0.07, 0.07, 0.07, 1.0);

pub async fn run<S: HighScoreStore>(mut session: Session<S>) {
    let router = InputRouter::new();
    let mut swipe = SwipeTracker::new();
    let mut hud = Hud::new(session.high_score());
    let mut board = DisplayList::new();
    let cell_size = session.config().cell_size as f32;
    let canvas_size = session.config().canvas_size() as f32;

    info!(grid = session.config().grid_size, "window open");

    loop {
        let now = get_time();
        let layout = Layout::compute(screen_width(), screen_height(), canvas_size);

        for event in poll_input(&mut swipe, &layout, session.phase()) {
            if let Some(command) = router.route(event) {
                if !session.apply(command, now) {
                    info!("quit requested");
                    return;
                }
            }
        }

        session.update(now);
        for event in session.drain_events() {
            hud.apply(event);
        }
        if session.take_redraw() {
            paint(session.state(), cell_size, &mut board);
        }

        clear_background(CLEAR_COLOR);
        let mut surface = MacroquadSurface::new(layout.board_origin.into(), layout.scale, canvas_size);
        board.replay(&mut surface);
        hud.draw(session.phase(), &layout);

        next_frame().await;
    }
}

/// Everything that happened since the last frame, in arrival order
fn poll_input(swipe: &mut SwipeTracker, layout: &Layout, phase: Phase) -> Vec<InputEvent> {
    let mut events: Vec<InputEvent> = get_keys_pressed().into_iter().map(InputEvent::Key).collect();

    // touches arrive as simulated mouse presses
    let (mx, my) = mouse_position();
    if is_mouse_button_pressed(MouseButton::Left) {
        if let Some(direction) = layout.dpad().hit(mx, my) {
            events.push(InputEvent::Button(direction));
        } else if layout.board_contains(mx, my) {
            if phase == Phase::Running {
                swipe.begin((mx, my));
            } else {
                events.push(InputEvent::StartButton);
            }
        }
    }
    if is_mouse_button_released(MouseButton::Left) {
        if let Some((start, end)) = swipe.end((mx, my)) {
            events.push(InputEvent::Swipe { start, end });
        }
    }
    events
}
