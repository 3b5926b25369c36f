//! Picker state, actions and reducer

use multiselect::{PanelConfig, SelectOption};
use multiselect_core::Action;

/// What the picker host owns: the catalog and the current selection
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    pub options: Vec<SelectOption<String>>,
    pub selected: Vec<String>,
    pub panel: PanelConfig,
}

impl PickerState {
    pub fn new(options: Vec<SelectOption<String>>, panel: PanelConfig) -> Self {
        Self {
            options,
            selected: Vec::new(),
            panel,
        }
    }

    /// Selected values in catalog order
    pub fn selected_in_catalog_order(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.is_selected(&self.selected))
            .map(|o| o.value.clone())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PickerAction {
    /// The panel proposed a new selection
    SelectionDidChange(Vec<String>),
    UiTerminalResize(u16, u16),
    /// Leave and print the selection
    Confirm,
    /// Leave without printing anything
    Cancel,
}

impl Action for PickerAction {
    fn name(&self) -> &'static str {
        match self {
            PickerAction::SelectionDidChange(_) => "SelectionDidChange",
            PickerAction::UiTerminalResize(..) => "UiTerminalResize",
            PickerAction::Confirm => "Confirm",
            PickerAction::Cancel => "Cancel",
        }
    }

    fn summary(&self) -> String {
        match self {
            PickerAction::SelectionDidChange(selected) => {
                format!("SelectionDidChange({} values)", selected.len())
            }
            other => format!("{:?}", other),
        }
    }
}

pub fn reducer(state: &mut PickerState, action: PickerAction) -> bool {
    match action {
        PickerAction::SelectionDidChange(selected) => {
            if state.selected == selected {
                return false;
            }
            state.selected = selected;
            true
        }
        PickerAction::UiTerminalResize(..) => true,
        // handled in the main loop
        PickerAction::Confirm | PickerAction::Cancel => false,
    }
}
