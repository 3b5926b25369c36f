//! Focus cursor arithmetic
//!
//! The panel's visible rows are numbered with the select-all row at 0 and the
//! filtered options at `1..=option_count`. The cursor is `Option<usize>`;
//! `None` means nothing is focused and counts as `-1` when stepping.

/// `max(lo, min(value, hi))`
///
/// Unlike [`Ord::clamp`] this never panics: if `lo > hi` the result is `lo`.
pub fn clamp(value: isize, lo: isize, hi: isize) -> isize {
    lo.max(value.min(hi))
}

/// Move the cursor by `offset`, keeping it within `0..=option_count`
///
/// `option_count` is the number of *filtered* options, so the cursor tracks
/// the visible list rather than the whole catalog.
pub fn step(current: Option<usize>, offset: isize, option_count: usize) -> usize {
    let from = current.map_or(-1, |index| index as isize);
    let upper = isize::try_from(option_count).unwrap_or(isize::MAX);
    clamp(from.saturating_add(offset), 0, upper) as usize
}

/// Keep an existing cursor within `0..=option_count`; `None` stays `None`
pub fn fit(current: Option<usize>, option_count: usize) -> Option<usize> {
    current.map(|index| index.min(option_count))
}
