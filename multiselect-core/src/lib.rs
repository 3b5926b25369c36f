//! Core traits and types for tui-multiselect
//!
//! The building blocks the dropdown panel and its hosts share, following a
//! Redux/Elm-style split:
//!
//! - **Action**: a typed description of something that happened
//! - **Store**: state plus the reducer that is the only way to change it
//! - **Component**: renders from props, reports intents as actions
//! - **Keybindings**: context-aware key-spec lookup with serde config support
//!
//! # Example
//!
//! ```ignore
//! use multiselect_core::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! enum HostAction {
//!     SelectionDidChange(Vec<u32>),
//! }
//!
//! impl Action for HostAction {
//!     fn name(&self) -> &'static str {
//!         "SelectionDidChange"
//!     }
//! }
//!
//! fn reducer(state: &mut Vec<u32>, action: HostAction) -> bool {
//!     match action {
//!         HostAction::SelectionDidChange(selected) => {
//!             *state = selected;
//!             true
//!         }
//!     }
//! }
//!
//! let mut store = Store::new(Vec::new(), reducer);
//! store.dispatch(HostAction::SelectionDidChange(vec![1, 2]));
//! ```

pub mod action;
pub mod component;
pub mod event;
pub mod keybindings;
pub mod poller;
pub mod store;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{EventKind, KeyOutcome};
pub use keybindings::{
    format_key_for_display, parse_key_string, BindingContext, BindingMap, Keybindings,
};
pub use poller::{process_raw_event, spawn_event_poller, RawEvent};
pub use store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

pub use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    Frame,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::event::{EventKind, KeyOutcome};
    pub use crate::keybindings::{
        format_key_for_display, parse_key_string, BindingContext, Keybindings,
    };
    pub use crate::poller::{process_raw_event, spawn_event_poller, RawEvent};
    pub use crate::store::{LoggingMiddleware, Middleware, Reducer, Store, StoreWithMiddleware};

    pub use ratatui::{
        layout::Rect,
        style::{Color, Modifier, Style},
        text::{Line, Span, Text},
        Frame,
    };
}
