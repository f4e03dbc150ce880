use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize,
    Other,
}

impl From<CrosstermEvent> for Event {
    fn from(evt: CrosstermEvent) -> Self {
        match evt {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Resize(_, _) => Event::Resize,
            _ => Event::Other,
        }
    }
}

/// Blocks until an event arrives or `timeout` elapses.
pub fn next_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?.into()))
    } else {
        Ok(None)
    }
}

/// Blocks for at most `timeout` and returns the first key press seen, if any.
/// Non-key events end the wait early without yielding a key.
pub fn next_key(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    match next_event(timeout)? {
        Some(Event::Key(key)) => Ok(Some(key)),
        _ => Ok(None),
    }
}
