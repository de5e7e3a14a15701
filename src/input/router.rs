use macroquad::input::KeyCode;

use super::swipe::swipe_direction;
use crate::game::Direction;

/// Raw input, already separated by source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyCode),
    /// On-screen direction button pressed
    Button(Direction),
    Swipe { start: (f32, f32), end: (f32, f32) },
    /// Start / play-again button on the title and game over screens
    StartButton,
}

/// What the session should do in response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    /// Start from the title screen or restart after game over
    Start,
    Quit,
}

/// Normalises keys, buttons and swipes into [`Command`]s
pub struct InputRouter;

impl InputRouter {
    pub fn new() -> Self {
        Self
    }

    pub fn route(&self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Key(key) => Self::key_command(key),
            InputEvent::Button(direction) => Some(Command::Steer(direction)),
            InputEvent::Swipe { start, end } => swipe_direction(start, end).map(Command::Steer),
            InputEvent::StartButton => Some(Command::Start),
        }
    }

    fn key_command(key: KeyCode) -> Option<Command> {
        // macroquad reports letters by key, so case does not matter
        let command = match key {
            KeyCode::Up | KeyCode::W => Command::Steer(Direction::Up),
            KeyCode::Down | KeyCode::S => Command::Steer(Direction::Down),
            KeyCode::Left | KeyCode::A => Command::Steer(Direction::Left),
            KeyCode::Right | KeyCode::D => Command::Steer(Direction::Right),
            KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space => Command::Start,
            KeyCode::Escape | KeyCode::Q => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}
