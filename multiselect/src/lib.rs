//! Multi-select dropdown panel for ratatui applications
//!
//! [`SelectPanel`] is the open panel of a dropdown: a search box, a
//! "select all" row and the filtered option list, navigated with one focus
//! cursor. It follows the `multiselect-core` pattern: the host passes data in
//! through [`PanelProps`] and gets back its own actions, built from the
//! `on_selected_changed` callback, whenever the user proposes a new selection.
//!
//! # Pieces
//!
//! - [`SelectOption`]: a label/value pair supplied by the host
//! - [`FilterOptions`]: narrows options by the search text ([`FuzzyFilter`] by default)
//! - [`ItemRenderer`]: draws one row ([`DefaultItemRenderer`] draws checkboxes)
//! - [`PanelConfig`] / [`PanelTheme`]: labels, search box toggle, styles
//! - [`default_keybindings`]: remappable panel commands
//!
//! # Example
//!
//! ```ignore
//! use multiselect::prelude::*;
//!
//! let mut panel = SelectPanel::new();
//! let config = PanelConfig::default();
//!
//! let props = PanelProps {
//!     options: &state.options,
//!     selected: &state.selected,
//!     config: &config,
//!     filter: &FuzzyFilter,
//!     item_renderer: None,
//!     is_focused: true,
//!     on_selected_changed: Action::SelectionDidChange,
//! };
//!
//! for action in panel.handle_event(&event, props) {
//!     store.dispatch(action);
//! }
//! panel.render(frame, area, props);
//! ```

pub mod action;
pub mod config;
pub mod filter;
pub mod focus;
pub mod item;
pub mod keys;
pub mod list;
pub mod option;
pub mod panel;
pub mod reducer;
pub mod search;
pub mod state;
pub mod theme;

pub use action::PanelAction;
pub use config::{PanelConfig, DEFAULT_SEARCH_PLACEHOLDER, DEFAULT_SELECT_ALL_LABEL};
pub use filter::{FilterOptions, FuzzyFilter, SubstringFilter};
pub use item::{DefaultItemRenderer, ItemRenderer, Row, RowEvent, RowView};
pub use keys::{default_keybindings, PanelCommand, PanelContext};
pub use list::{toggle_selection, OptionList, OptionListProps};
pub use option::{all_values, SelectOption};
pub use panel::{NavKey, PanelProps, SelectPanel};
pub use search::{SearchInput, SearchInputProps};
pub use state::PanelState;
pub use theme::PanelTheme;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        default_keybindings, DefaultItemRenderer, FilterOptions, FuzzyFilter, ItemRenderer,
        NavKey, PanelConfig, PanelContext, PanelProps, PanelTheme, SelectOption, SelectPanel,
        SubstringFilter,
    };
    pub use multiselect_core::prelude::*;
}
