//! Terminal multi-select picker
//!
//! Hosts a [`multiselect::SelectPanel`] full screen: options come from the
//! command line or a JSON file, the chosen values are printed on exit.

pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod state;
pub mod ui;

pub use config::PickerConfig;
pub use error::PickerError;
pub use state::{reducer, PickerAction, PickerState};
pub use ui::PickerUi;
