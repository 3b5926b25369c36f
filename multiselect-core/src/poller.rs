//! Crossterm event polling for async event loops

use crossterm::event::{self, MouseEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::event::EventKind;

/// Terminal event as read from crossterm, before routing
#[derive(Debug)]
pub enum RawEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
}

impl RawEvent {
    fn from_crossterm(evt: event::Event) -> Option<Self> {
        match evt {
            event::Event::Key(key) => Some(RawEvent::Key(key)),
            event::Event::Mouse(mouse) => Some(RawEvent::Mouse(mouse)),
            event::Event::Resize(w, h) => Some(RawEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Spawn a task that forwards crossterm events into `tx`
///
/// Each cycle sleeps `loop_sleep`, then reads at most a small batch of
/// events, waiting up to `poll_timeout` for each. Cancelling the token
/// drains whatever crossterm still has buffered so it does not leak into
/// the shell after the TUI exits.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<RawEvent>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        const MAX_EVENTS_PER_BATCH: usize = 20;

        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("Event poller cancelled");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    for _ in 0..MAX_EVENTS_PER_BATCH {
                        if !event::poll(poll_timeout).unwrap_or(false) {
                            break;
                        }
                        let Some(raw) = event::read().ok().and_then(RawEvent::from_crossterm) else {
                            continue;
                        };
                        if tx.send(raw).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}

/// Convert a raw event into the [`EventKind`] components receive
///
/// Wheel events become [`EventKind::Scroll`] with `delta` +1 (down) or -1 (up).
pub fn process_raw_event(raw: RawEvent) -> EventKind {
    match raw {
        RawEvent::Key(key) => EventKind::Key(key),
        RawEvent::Mouse(mouse) => {
            let delta = match mouse.kind {
                MouseEventKind::ScrollDown => 1,
                MouseEventKind::ScrollUp => -1,
                _ => return EventKind::Mouse(mouse),
            };
            EventKind::Scroll {
                column: mouse.column,
                row: mouse.row,
                delta,
            }
        }
        RawEvent::Resize(w, h) => EventKind::Resize(w, h),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_passes_through() {
        let kind = process_raw_event(RawEvent::Key(crate::testing::key("alt+up")));
        match kind {
            EventKind::Key(key) => assert!(key.modifiers.contains(KeyModifiers::ALT)),
            other => panic!("Expected key event, got {:?}", other),
        }
    }

    #[test]
    fn test_scroll_directions() {
        let down = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::ScrollDown)));
        assert!(matches!(
            down,
            EventKind::Scroll {
                column: 4,
                row: 7,
                delta: 1
            }
        ));

        let up = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::ScrollUp)));
        assert!(matches!(up, EventKind::Scroll { delta: -1, .. }));
    }

    #[test]
    fn test_click_stays_mouse() {
        let kind = process_raw_event(RawEvent::Mouse(mouse(MouseEventKind::Down(
            MouseButton::Left,
        ))));
        assert!(matches!(kind, EventKind::Mouse(_)));
    }

    #[test]
    fn test_resize() {
        let kind = process_raw_event(RawEvent::Resize(100, 30));
        assert!(matches!(kind, EventKind::Resize(100, 30)));
    }
}
