//! Panel keybinding contexts and commands
//!
//! Up/Down navigation is fixed and never goes through keybindings. Everything
//! else the panel reacts to is looked up here, so hosts can remap it.

use multiselect_core::{BindingContext, Keybindings};

/// Where keyboard input is going
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelContext {
    /// The search box has input focus
    Search,
    /// The row list has input focus
    List,
}

impl BindingContext for PanelContext {
    fn name(&self) -> &'static str {
        match self {
            PanelContext::Search => "search",
            PanelContext::List => "list",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "search" => Some(PanelContext::Search),
            "list" => Some(PanelContext::List),
            _ => None,
        }
    }

    fn all() -> &'static [Self] {
        &[PanelContext::Search, PanelContext::List]
    }
}

/// Commands the panel understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelCommand {
    /// Toggle the checkbox of the focused row
    ToggleRow,
    /// Move input focus into or out of the search box
    ToggleSearchFocus,
    /// Empty the search box
    ClearSearch,
}

impl PanelCommand {
    pub const CMD_TOGGLE_ROW: &'static str = "row.toggle";
    pub const CMD_SEARCH_FOCUS: &'static str = "search.focus";
    pub const CMD_SEARCH_CLEAR: &'static str = "search.clear";

    pub fn from_command(cmd: &str) -> Option<Self> {
        match cmd {
            Self::CMD_TOGGLE_ROW => Some(Self::ToggleRow),
            Self::CMD_SEARCH_FOCUS => Some(Self::ToggleSearchFocus),
            Self::CMD_SEARCH_CLEAR => Some(Self::ClearSearch),
            _ => None,
        }
    }

    pub fn command(self) -> &'static str {
        match self {
            Self::ToggleRow => Self::CMD_TOGGLE_ROW,
            Self::ToggleSearchFocus => Self::CMD_SEARCH_FOCUS,
            Self::ClearSearch => Self::CMD_SEARCH_CLEAR,
        }
    }
}

/// Default panel bindings
///
/// | command | global | search | list |
/// |---|---|---|---|
/// | `row.toggle` | | `enter` | `space`, `enter` |
/// | `search.focus` | `tab`, `shift+tab` | | |
/// | `search.clear` | | `esc` | |
pub fn default_keybindings() -> Keybindings<PanelContext> {
    let mut bindings = Keybindings::new();
    bindings.add_global(PanelCommand::CMD_SEARCH_FOCUS, &["tab", "shift+tab"]);
    bindings.add(PanelContext::List, PanelCommand::CMD_TOGGLE_ROW, &["space", "enter"]);
    bindings.add(PanelContext::Search, PanelCommand::CMD_TOGGLE_ROW, &["enter"]);
    bindings.add(PanelContext::Search, PanelCommand::CMD_SEARCH_CLEAR, &["esc"]);
    bindings
}
