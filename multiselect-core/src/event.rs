//! Terminal events as seen by components

use crossterm::event::{KeyEvent, MouseEvent};

/// Event payload delivered to [`Component::handle_event`](crate::Component::handle_event)
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse click/move (scroll is split out into [`EventKind::Scroll`])
    Mouse(MouseEvent),
    /// Scroll wheel with position and direction (+1 down, -1 up)
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
}

impl EventKind {
    /// The key event, if this is one
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            EventKind::Key(key) => Some(key),
            _ => None,
        }
    }
}

/// Whether a handler claimed a key press
///
/// `Consumed` means the key must not reach any other handler (the terminal
/// analogue of stopping propagation and preventing the default action).
/// `Ignored` lets the host keep routing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Consumed,
    Ignored,
}

impl KeyOutcome {
    pub fn is_consumed(self) -> bool {
        matches!(self, KeyOutcome::Consumed)
    }
}
