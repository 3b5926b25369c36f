//! Panel reducer: `(state, action) -> state`
//!
//! Returns `true` when state changed and the panel should be redrawn.

use crate::action::PanelAction;
use crate::focus;
use crate::state::PanelState;

pub fn reducer(state: &mut PanelState, action: PanelAction) -> bool {
    match action {
        PanelAction::SearchChange(text) => {
            let changed = state.search_text != text || state.focus_index.is_some();
            state.search_text = text;
            // the visible rows are about to change
            state.focus_index = None;
            changed
        }

        PanelAction::SearchClear => {
            if state.search_text.is_empty() {
                return false;
            }
            state.search_text.clear();
            true
        }

        PanelAction::SearchFocus(has_focus) => {
            let changed = state.search_has_focus != has_focus || state.focus_index.is_some();
            state.search_has_focus = has_focus;
            state.focus_index = None;
            changed
        }

        PanelAction::ItemClick(row) => set_focus(state, row),

        PanelAction::FocusMove {
            offset,
            option_count,
        } => set_focus(state, focus::step(state.focus_index, offset, option_count)),

        PanelAction::FocusClamp { option_count } => {
            let fitted = focus::fit(state.focus_index, option_count);
            if fitted == state.focus_index {
                return false;
            }
            state.focus_index = fitted;
            true
        }
    }
}

fn set_focus(state: &mut PanelState, row: usize) -> bool {
    if state.focus_index == Some(row) {
        return false;
    }
    state.focus_index = Some(row);
    true
}
