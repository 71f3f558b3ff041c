//! Utility functions for working with data slices

use std::cmp::Ordering;

/// Whether `data` is non-decreasing under `compare`
///
/// # Examples
///
/// ```rust
/// use ordstat_core::utils::is_sorted_by;
///
/// assert!(is_sorted_by(&[1, 2, 2, 5], |a, b| a.cmp(b)));
/// assert!(!is_sorted_by(&[2, 1], |a, b| a.cmp(b)));
/// ```
pub fn is_sorted_by<T, F>(data: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    data.windows(2)
        .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
}
