use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Heading;

/// What a key event asks the game loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Heading),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // The four directional keys map 1:1 to headings
            KeyCode::Up => KeyAction::Steer(Heading::Up),
            KeyCode::Down => KeyAction::Steer(Heading::Down),
            KeyCode::Left => KeyAction::Steer(Heading::Left),
            KeyCode::Right => KeyAction::Steer(Heading::Right),

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            // Everything else is silently ignored
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
