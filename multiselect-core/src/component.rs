//! Component trait for props-driven UI elements

use ratatui::{layout::Rect, Frame};

use crate::event::EventKind;

/// A UI element that renders from props and reports intents as actions
///
/// Rules:
/// 1. Props carry every piece of host-owned data the component reads
/// 2. `handle_event` returns actions for the host; it never writes host data
/// 3. `render` depends only on props plus the component's own UI state
///
/// Component-local state (cursor position, scroll offset, the search text of
/// a dropdown panel) may live in `&mut self`. Anything the host owns changes
/// only through the returned actions.
///
/// # Example
///
/// ```ignore
/// use multiselect_core::{Component, EventKind, Frame, Rect};
///
/// struct Toggle;
///
/// struct ToggleProps {
///     on: bool,
///     is_focused: bool,
///     on_change: fn(bool) -> AppAction,
/// }
///
/// impl Component<AppAction> for Toggle {
///     type Props<'a> = ToggleProps;
///
///     fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> impl IntoIterator<Item = AppAction> {
///         match event {
///             EventKind::Key(key) if props.is_focused && key.code == KeyCode::Char(' ') => {
///                 Some((props.on_change)(!props.on))
///             }
///             _ => None,
///         }
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
///         let text = if props.on { "[x]" } else { "[ ]" };
///         frame.render_widget(Paragraph::new(text), area);
///     }
/// }
/// ```
pub trait Component<A> {
    /// Read-only data needed to handle events and render
    type Props<'a>;

    /// Handle an event and return the actions it produces
    ///
    /// Any `IntoIterator<Item = A>` works: `None`, `Some(action)`, a `Vec`.
    /// Render-only components can rely on the default, which emits nothing.
    #[allow(unused_variables)]
    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        None::<A>
    }

    /// Draw the component into `area`
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
