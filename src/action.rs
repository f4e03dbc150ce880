use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    None,
}

impl Action {
    /// `q` and Ctrl+C quit; every other key, and a timeout, keep the loop running.
    pub fn from_key(key: Option<KeyEvent>) -> Self {
        match key {
            Some(KeyEvent {
                code: KeyCode::Char('q'),
                modifiers,
                ..
            }) if !modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            Some(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            _ => Action::None,
        }
    }
}
