//! Test helpers for components built on multiselect-core
//!
//! - [`key`]: build a `KeyEvent` from a key spec (`key("alt+down")`)
//! - [`click`]: build a left-click mouse event
//! - [`RenderHarness`]: render into an in-memory terminal and read it back as text
//! - [`TestHarness`]: host state plus a channel that collects emitted actions
//! - [`assert_emitted!`], [`assert_not_emitted!`], [`count_emitted!`]
//!
//! ```ignore
//! use multiselect_core::testing::{key, RenderHarness};
//!
//! let actions: Vec<_> = panel
//!     .handle_event(&EventKind::Key(key("space")), props)
//!     .into_iter()
//!     .collect();
//!
//! let mut render = RenderHarness::new(40, 10);
//! let text = render.render_to_string_plain(|frame| panel.render(frame, frame.area(), props));
//! assert!(text.contains("Select All"));
//! ```

use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};
use tokio::sync::mpsc;

use crate::keybindings::parse_key_string;
use crate::Action;

/// Build a `KeyEvent` from a key spec
///
/// # Panics
///
/// Panics if the spec does not parse; intended for tests only.
pub fn key(spec: &str) -> KeyEvent {
    parse_key_string(spec).unwrap_or_else(|| panic!("Invalid key string: {:?}", spec))
}

/// Build a left-button press at `(column, row)`
pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Renders into a ratatui [`TestBackend`] of fixed size
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {}", e));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer
    pub fn render(&mut self, draw: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("Failed to draw test frame: {}", e));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per row, styles dropped
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Text content of a buffer with trailing spaces trimmed on each row
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Host state plus a channel collecting the actions a component emitted
///
/// ```ignore
/// let mut harness = TestHarness::<PickerState, PickerAction>::new(PickerState::default());
/// for action in panel.handle_event(&event, props) {
///     harness.emit(action);
/// }
/// let emitted = harness.drain_emitted();
/// ```
pub struct TestHarness<S, A: Action> {
    pub state: S,
    tx: mpsc::UnboundedSender<A>,
    rx: mpsc::UnboundedReceiver<A>,
}

impl<S, A: Action> TestHarness<S, A> {
    pub fn new(state: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { state, tx, rx }
    }

    pub fn emit(&self, action: A) {
        let _ = self.tx.send(action);
    }

    pub fn emit_all(&self, actions: impl IntoIterator<Item = A>) {
        for action in actions {
            self.emit(action);
        }
    }

    pub fn drain_emitted(&mut self) -> Vec<A> {
        let mut actions = Vec::new();
        while let Ok(action) = self.rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Drain pending actions through `reducer`, returning whether any changed state
    pub fn apply(&mut self, reducer: crate::Reducer<S, A>) -> bool {
        let mut changed = false;
        for action in self.drain_emitted() {
            changed |= reducer(&mut self.state, action);
        }
        changed
    }
}

impl<S: Default, A: Action> Default for TestHarness<S, A> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

/// Assert that an action matching the pattern was emitted
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching the pattern was emitted
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Count actions matching the pattern
#[macro_export]
macro_rules! count_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        $actions.iter().filter(|a| matches!(a, $pattern $(if $guard)?)).count()
    };
}
