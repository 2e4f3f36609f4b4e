use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    /// Start, jump or restart, depending on the phase.
    Activate,
}

impl Action {
    /// Fixed key map.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') if ctrl => Some(Action::Quit),
            KeyCode::Char('z') | KeyCode::Char('Z') if ctrl => Some(Action::Suspend),
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(Action::Activate),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        }
    }
}
