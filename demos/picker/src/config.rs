//! Picker configuration file
//!
//! Loaded from `<config_dir>/multiselect-picker/config.json` unless `--config`
//! names another file. Every field is optional; keybindings given here are
//! laid over the panel defaults command by command.

use std::fs;
use std::path::{Path, PathBuf};

use multiselect::{default_keybindings, PanelConfig, PanelContext, DEFAULT_SELECT_ALL_LABEL};
use multiselect_core::Keybindings;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PickerError;

const APPLICATION: &str = "multiselect-picker";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub select_all_label: String,
    pub has_search: bool,
    pub keybindings: Keybindings<PanelContext>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            select_all_label: DEFAULT_SELECT_ALL_LABEL.to_string(),
            has_search: true,
            keybindings: default_keybindings(),
        }
    }
}

impl PickerConfig {
    /// Parse a config document, merging its keybindings over the defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let mut config: PickerConfig = serde_json::from_str(text)?;
        config.keybindings = Keybindings::merge(default_keybindings(), config.keybindings);
        Ok(config)
    }

    /// Load the config file
    ///
    /// An explicit `path` must exist. The default location may be absent, in
    /// which case defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, PickerError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match default_config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path).map_err(|e| PickerError::read(&path, e))?;
        let config = Self::from_json(&text).map_err(|e| PickerError::json(&path, e))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn panel_config(&self) -> PanelConfig {
        PanelConfig::default()
            .with_select_all_label(self.select_all_label.clone())
            .with_search(self.has_search)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APPLICATION).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiselect::PanelCommand;
    use multiselect_core::testing::key;

    #[test]
    fn test_empty_document_is_default() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config.select_all_label, "Select All");
        assert!(config.has_search);
        assert_eq!(
            config
                .keybindings
                .get_command(&key("space"), PanelContext::List),
            Some(PanelCommand::CMD_TOGGLE_ROW)
        );
    }

    #[test]
    fn test_user_bindings_override_per_command() {
        let config = PickerConfig::from_json(
            r#"{
                "select_all_label": "All of them",
                "keybindings": {
                    "list": { "row.toggle": ["x"] },
                    "nonsense": { "row.toggle": ["y"] }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.select_all_label, "All of them");
        let bindings = &config.keybindings;
        assert_eq!(
            bindings.get_command(&key("x"), PanelContext::List),
            Some(PanelCommand::CMD_TOGGLE_ROW)
        );
        assert_eq!(bindings.get_command(&key("space"), PanelContext::List), None);
        // untouched contexts keep their defaults
        assert_eq!(
            bindings.get_command(&key("esc"), PanelContext::Search),
            Some(PanelCommand::CMD_SEARCH_CLEAR)
        );
    }

    #[test]
    fn test_panel_config() {
        let config = PickerConfig::from_json(r#"{"has_search": false}"#).unwrap();
        let panel = config.panel_config();
        assert!(!panel.has_search);
        assert_eq!(panel.select_all_label, "Select All");
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let err = PickerConfig::load(Some(Path::new("/nonexistent/picker.json"))).unwrap_err();
        assert!(matches!(err, PickerError::Read { .. }));
    }

    #[test]
    fn test_serialized_config_round_trips() {
        let text = serde_json::to_string(&PickerConfig::default()).unwrap();
        let config = PickerConfig::from_json(&text).unwrap();
        assert_eq!(
            config
                .keybindings
                .get_command(&key("tab"), PanelContext::Search),
            Some(PanelCommand::CMD_SEARCH_FOCUS)
        );
    }
}
