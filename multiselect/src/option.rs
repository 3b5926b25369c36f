//! Options offered by the host

use serde::{Deserialize, Serialize};

/// One selectable entry: a display label and the host's value for it
///
/// `T` is opaque to the panel; it is only compared for equality. Options are
/// owned by the host and never modified by the panel. Duplicate values are
/// the host's problem: selection checks treat them as the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> SelectOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Whether this option's value appears in `selected`
    pub fn is_selected(&self, selected: &[T]) -> bool
    where
        T: PartialEq,
    {
        selected.contains(&self.value)
    }
}

impl SelectOption<String> {
    /// Option whose value is its own label
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

/// Every option value in catalog order
pub fn all_values<T: Clone>(options: &[SelectOption<T>]) -> Vec<T> {
    options.iter().map(|o| o.value.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_selected() {
        let option = SelectOption::new("Banana", 2);
        assert!(option.is_selected(&[1, 2]));
        assert!(!option.is_selected(&[3]));
        assert!(!option.is_selected(&[]));
    }

    #[test]
    fn test_all_values_keeps_order() {
        let options = vec![
            SelectOption::new("C", 3),
            SelectOption::new("A", 1),
            SelectOption::new("B", 2),
        ];
        assert_eq!(all_values(&options), vec![3, 1, 2]);
    }

    #[test]
    fn test_from_label() {
        let option = SelectOption::from_label("kiwi");
        assert_eq!(option.value, "kiwi");
        assert_eq!(option.label, "kiwi");
    }

    #[test]
    fn test_deserialize() {
        let options: Vec<SelectOption<u32>> =
            serde_json::from_str(r#"[{"label":"A","value":1},{"label":"B","value":2}]"#).unwrap();
        assert_eq!(options[1], SelectOption::new("B", 2));
    }
}
