//! Styles used by the panel and the default row renderer

use ratatui::style::{Color, Modifier, Style};

/// Styles passed explicitly to everything that draws part of the panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelTheme {
    /// Search box border when the search box does not have focus
    pub search_border: Style,
    /// Search box border while it has focus
    pub search_border_focused: Style,
    /// Search text
    pub search_text: Style,
    /// Placeholder shown while the search box is empty
    pub placeholder: Style,
    pub row: Style,
    /// Row under the focus cursor
    pub row_focused: Style,
    /// Checkbox of a checked row
    pub checkbox_checked: Style,
    pub checkbox_unchecked: Style,
    /// Applied on top of the row style when the panel is disabled
    pub disabled: Style,
    /// Shown in the list area when the filter matches nothing
    pub empty: Style,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            search_border: Style::default().fg(Color::DarkGray),
            search_border_focused: Style::default().fg(Color::Green),
            search_text: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            row: Style::default(),
            row_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            checkbox_checked: Style::default().fg(Color::Green),
            checkbox_unchecked: Style::default().fg(Color::Gray),
            disabled: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM),
            empty: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

impl PanelTheme {
    /// Border style for the search box
    pub fn search_border(&self, has_focus: bool) -> Style {
        if has_focus {
            self.search_border_focused
        } else {
            self.search_border
        }
    }
}
