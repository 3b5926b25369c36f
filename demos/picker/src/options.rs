//! Where the picker's options come from

use std::fs;
use std::path::Path;

use multiselect::SelectOption;

use crate::error::PickerError;

/// Options from a JSON file (`[{"label": ..., "value": ...}]`) or from labels
///
/// A file wins over labels. Label options use the label as their value.
pub fn load_options(
    file: Option<&Path>,
    labels: &[String],
) -> Result<Vec<SelectOption<String>>, PickerError> {
    let options: Vec<SelectOption<String>> = match file {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| PickerError::read(path, e))?;
            serde_json::from_str(&text).map_err(|e| PickerError::json(path, e))?
        }
        None => labels.iter().map(SelectOption::from_label).collect(),
    };

    if options.is_empty() {
        return Err(PickerError::NoOptions);
    }
    Ok(options)
}
