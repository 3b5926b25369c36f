//! Panel-local actions
//!
//! These only touch the panel's own state (search text, search focus, focus
//! cursor). Selection changes are host actions built from
//! `PanelProps::on_selected_changed`.

use multiselect_core::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    /// Search text replaced; focus is reset
    SearchChange(String),
    /// Search text emptied; focus kept
    SearchClear,
    /// Search box gained or lost input focus; focus cursor is reset
    SearchFocus(bool),
    /// A row was clicked (0 = select-all)
    ItemClick(usize),
    /// Move the focus cursor, bounded by the filtered option count
    FocusMove { offset: isize, option_count: usize },
    /// Pull the focus cursor back inside `0..=option_count`
    FocusClamp { option_count: usize },
}

impl Action for PanelAction {
    fn name(&self) -> &'static str {
        match self {
            PanelAction::SearchChange(_) => "SearchChange",
            PanelAction::SearchClear => "SearchClear",
            PanelAction::SearchFocus(_) => "SearchFocus",
            PanelAction::ItemClick(_) => "ItemClick",
            PanelAction::FocusMove { .. } => "FocusMove",
            PanelAction::FocusClamp { .. } => "FocusClamp",
        }
    }
}
