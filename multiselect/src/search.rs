//! Search box: single-line input with a cursor

use crossterm::event::{KeyCode, KeyModifiers};
use multiselect_core::{Component, EventKind};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::PanelTheme;

pub struct SearchInputProps<'a, A> {
    pub value: &'a str,
    pub placeholder: &'a str,
    /// Whether the search box has input focus; unfocused input ignores keys
    pub has_focus: bool,
    pub theme: &'a PanelTheme,
    /// Builds the action for a new search value
    pub on_change: fn(String) -> A,
}

/// Text input whose value is owned by the caller
///
/// Only the cursor position (a byte offset on a char boundary) is kept here.
/// Every edit is reported through `on_change` with the complete new value.
#[derive(Debug, Default)]
pub struct SearchInput {
    cursor: usize,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Put the cursor after the last character of `value`
    pub fn move_to_end(&mut self, value: &str) {
        self.cursor = value.len();
    }

    /// Pull the cursor back inside `value` after an external change
    fn sync(&mut self, value: &str) {
        self.cursor = self.cursor.min(value.len());
        while !value.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    fn prev_boundary(value: &str, from: usize) -> usize {
        value[..from]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(value: &str, from: usize) -> usize {
        value[from..]
            .chars()
            .next()
            .map_or(from, |c| from + c.len_utf8())
    }

    /// Apply one key to `value`; `Some(new_value)` when the text changed
    fn edit(&mut self, value: &str, code: KeyCode, modifiers: KeyModifiers) -> Option<String> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('a') => self.cursor = 0,
                KeyCode::Char('e') => self.cursor = value.len(),
                KeyCode::Char('u') if !value.is_empty() => {
                    self.cursor = 0;
                    return Some(String::new());
                }
                _ => {}
            }
            return None;
        }

        match code {
            KeyCode::Char(c) => {
                let mut next = String::with_capacity(value.len() + c.len_utf8());
                next.push_str(&value[..self.cursor]);
                next.push(c);
                next.push_str(&value[self.cursor..]);
                self.cursor += c.len_utf8();
                Some(next)
            }
            KeyCode::Backspace if self.cursor > 0 => {
                let start = Self::prev_boundary(value, self.cursor);
                let next = format!("{}{}", &value[..start], &value[self.cursor..]);
                self.cursor = start;
                Some(next)
            }
            KeyCode::Delete if self.cursor < value.len() => {
                let end = Self::next_boundary(value, self.cursor);
                Some(format!("{}{}", &value[..self.cursor], &value[end..]))
            }
            KeyCode::Left => {
                self.cursor = Self::prev_boundary(value, self.cursor);
                None
            }
            KeyCode::Right => {
                self.cursor = Self::next_boundary(value, self.cursor);
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = value.len();
                None
            }
            _ => None,
        }
    }
}

impl<A> Component<A> for SearchInput {
    type Props<'a> = SearchInputProps<'a, A>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = A> {
        if !props.has_focus {
            return None;
        }
        let EventKind::Key(key) = event else {
            return None;
        };

        self.sync(props.value);
        self.edit(props.value, key.code, key.modifiers)
            .map(props.on_change)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        self.sync(props.value);

        let (text, style) = if props.value.is_empty() {
            (props.placeholder, props.theme.placeholder)
        } else {
            (props.value, props.theme.search_text)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(props.theme.search_border(props.has_focus));
        let inner = block.inner(area);
        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if props.has_focus && inner.width > 0 && inner.height > 0 {
            let column = props.value[..self.cursor].chars().count() as u16;
            if column < inner.width {
                frame.set_cursor_position((inner.x + column, inner.y));
            }
        }
    }
}
