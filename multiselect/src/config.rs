//! Host-supplied panel configuration

use crate::theme::PanelTheme;

pub const DEFAULT_SELECT_ALL_LABEL: &str = "Select All";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search";

/// Everything about the panel the host may configure besides data
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Label of the synthetic first row
    pub select_all_label: String,
    /// Whether the search box is shown at all
    pub has_search: bool,
    pub search_placeholder: String,
    /// Rows render dimmed and toggles emit nothing
    pub disabled: bool,
    pub theme: PanelTheme,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            select_all_label: DEFAULT_SELECT_ALL_LABEL.to_string(),
            has_search: true,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            disabled: false,
            theme: PanelTheme::default(),
        }
    }
}

impl PanelConfig {
    pub fn with_select_all_label(mut self, label: impl Into<String>) -> Self {
        self.select_all_label = label.into();
        self
    }

    pub fn with_search(mut self, has_search: bool) -> Self {
        self.has_search = has_search;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_theme(mut self, theme: PanelTheme) -> Self {
        self.theme = theme;
        self
    }
}
