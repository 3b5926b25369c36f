//! Panel-local state
//!
//! Only what the panel owns lives here. Options and the current selection
//! belong to the host and arrive as props on every call.

/// State of one open panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelState {
    /// Current search query
    pub search_text: String,
    /// Whether the search box has input focus (styling only)
    pub search_has_focus: bool,
    /// Focused row: 0 = select-all, `i` = i-th filtered option; `None` = no focus
    pub focus_index: Option<usize>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            search_has_focus: false,
            focus_index: Some(0),
        }
    }
}
