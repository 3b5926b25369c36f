//! Rows and row renderers
//!
//! A row is derived on every render from the search text, the options and
//! the selection; nothing here is stored. Renderers only turn a [`RowView`]
//! into a line of text. Interaction comes back to the panel as
//! [`RowEvent`]s, which the panel maps to select-all or option toggles.

use ratatui::text::{Line, Span};

use crate::option::SelectOption;
use crate::theme::PanelTheme;

/// What a visible row shows
#[derive(Debug)]
pub enum Row<'a, T> {
    /// The synthetic first row
    SelectAll { label: &'a str },
    /// A filtered option; `index` is its position in the filtered list
    Item {
        index: usize,
        option: &'a SelectOption<T>,
    },
}

// manual impls: a derive would demand `T: Clone`/`T: Copy`
impl<T> Clone for Row<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Row<'_, T> {}

impl<'a, T> Row<'a, T> {
    pub fn label(&self) -> &'a str {
        match *self {
            Row::SelectAll { label } => label,
            Row::Item { option, .. } => &option.label,
        }
    }

    /// Position in the visible row list (select-all is 0)
    pub fn row_index(&self) -> usize {
        match *self {
            Row::SelectAll { .. } => 0,
            Row::Item { index, .. } => index + 1,
        }
    }
}

/// A row plus the flags a renderer needs
#[derive(Debug)]
pub struct RowView<'a, T> {
    pub row: Row<'a, T>,
    pub focused: bool,
    pub checked: bool,
    pub disabled: bool,
}

impl<T> Clone for RowView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RowView<'_, T> {}

/// The two things a row can report back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEvent {
    /// Checkbox toggled to the given state
    Toggled(bool),
    /// Row was clicked
    Clicked,
}

/// Turns a row into a line of text
///
/// Hosts override this to change how rows look; behavior stays with the panel.
pub trait ItemRenderer<T> {
    fn render_row<'a>(&self, view: &RowView<'a, T>, theme: &PanelTheme) -> Line<'a>;
}

/// `[x] label` / `[ ] label`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultItemRenderer;

impl<T> ItemRenderer<T> for DefaultItemRenderer {
    fn render_row<'a>(&self, view: &RowView<'a, T>, theme: &PanelTheme) -> Line<'a> {
        let (mark, mark_style) = if view.checked {
            ("[x] ", theme.checkbox_checked)
        } else {
            ("[ ] ", theme.checkbox_unchecked)
        };

        let mut row_style = if view.focused {
            theme.row_focused
        } else {
            theme.row
        };
        if view.disabled {
            row_style = row_style.patch(theme.disabled);
        }

        Line::from(vec![
            Span::styled(mark, row_style.patch(mark_style)),
            Span::raw(view.row.label()),
        ])
        .style(row_style)
    }
}
