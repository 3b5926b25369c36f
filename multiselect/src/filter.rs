//! Search filtering of the option catalog
//!
//! The panel treats filtering as a black box: given the full catalog and the
//! current search text, return the matching options in display order. A
//! query matching nothing yields an empty list, never an error.

use std::cmp::Reverse;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::option::SelectOption;

/// Narrows the catalog by a search string
///
/// Implementations must be pure: the same `options` and `query` always give
/// the same result. The panel calls this on every render and navigation step.
pub trait FilterOptions<T> {
    fn filter_options<'a>(
        &self,
        options: &'a [SelectOption<T>],
        query: &str,
    ) -> Vec<&'a SelectOption<T>>;
}

/// Fuzzy matching on labels, best match first
///
/// Case-insensitive with Unicode normalization. Whitespace splits the query
/// into terms that must all match. Options with equal scores keep their
/// catalog order. A blank query returns the whole catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyFilter;

impl<T> FilterOptions<T> for FuzzyFilter {
    fn filter_options<'a>(
        &self,
        options: &'a [SelectOption<T>],
        query: &str,
    ) -> Vec<&'a SelectOption<T>> {
        if query.trim().is_empty() {
            return options.iter().collect();
        }

        let pattern = Pattern::new(
            query,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut scored: Vec<(u32, &SelectOption<T>)> = options
            .iter()
            .filter_map(|option| {
                let haystack = Utf32Str::new(&option.label, &mut buf);
                pattern
                    .score(haystack, &mut matcher)
                    .map(|score| (score, option))
            })
            .collect();

        // stable sort: ties stay in catalog order
        scored.sort_by_key(|(score, _)| Reverse(*score));
        tracing::trace!(query, matched = scored.len(), total = options.len(), "Fuzzy filter");

        scored.into_iter().map(|(_, option)| option).collect()
    }
}

/// Case-insensitive substring match on labels, catalog order
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter;

impl<T> FilterOptions<T> for SubstringFilter {
    fn filter_options<'a>(
        &self,
        options: &'a [SelectOption<T>],
        query: &str,
    ) -> Vec<&'a SelectOption<T>> {
        let needle = query.trim().to_lowercase();
        options
            .iter()
            .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<SelectOption<u32>> {
        vec![
            SelectOption::new("A", 1),
            SelectOption::new("B", 2),
            SelectOption::new("C", 3),
        ]
    }

    fn fruit() -> Vec<SelectOption<&'static str>> {
        ["Apple", "Banana", "Blueberry", "Cherry", "Grape"]
            .into_iter()
            .map(|label| SelectOption::new(label, label))
            .collect()
    }

    fn labels<T>(options: &[&SelectOption<T>]) -> Vec<String> {
        options.iter().map(|o| o.label.clone()).collect()
    }

    #[test]
    fn test_fuzzy_single_letter() {
        let options = letters();
        let result = FuzzyFilter.filter_options(&options, "b");
        assert_eq!(result, vec![&options[1]]);
    }

    #[test]
    fn test_fuzzy_blank_query_returns_catalog() {
        let options = fruit();
        assert_eq!(FuzzyFilter.filter_options(&options, "").len(), 5);
        assert_eq!(
            labels(&FuzzyFilter.filter_options(&options, "   ")),
            labels(&options.iter().collect::<Vec<_>>())
        );
    }

    #[test]
    fn test_fuzzy_is_case_insensitive_and_subsequence() {
        let options = fruit();
        let result = FuzzyFilter.filter_options(&options, "BRY");
        assert_eq!(labels(&result), vec!["Blueberry"]);
    }

    #[test]
    fn test_fuzzy_ties_keep_catalog_order() {
        let options = vec![
            SelectOption::new("Pear", 1),
            SelectOption::new("Plum", 2),
            SelectOption::new("Pear", 3),
        ];
        let values: Vec<u32> = FuzzyFilter
            .filter_options(&options, "pear")
            .iter()
            .map(|o| o.value)
            .collect();
        assert_eq!(values, vec![1, 3]);
    }

    #[test]
    fn test_fuzzy_no_match_is_empty() {
        let options = fruit();
        assert!(FuzzyFilter.filter_options(&options, "zzz").is_empty());
    }

    #[test]
    fn test_fuzzy_is_restartable() {
        let options = fruit();
        let first = FuzzyFilter.filter_options(&options, "an");
        let second = FuzzyFilter.filter_options(&options, "an");
        assert_eq!(first, second);
    }

    #[test]
    fn test_substring_filter() {
        let options = fruit();
        assert_eq!(
            labels(&SubstringFilter.filter_options(&options, "an")),
            vec!["Banana"]
        );
        assert_eq!(
            labels(&SubstringFilter.filter_options(&options, "ERR")),
            vec!["Blueberry", "Cherry"]
        );
        assert_eq!(SubstringFilter.filter_options(&options, "").len(), 5);
    }
}
