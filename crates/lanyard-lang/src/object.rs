// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Null coalescing, emptiness checks, and null-safe comparison.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use lanyard_core::config::LangConfig;
use lanyard_core::error::{LanyardError, Result};
use lanyard_core::types::NullOrdering;
use tracing::debug;

// ---------------------------------------------------------------------------
// Coalescing
// ---------------------------------------------------------------------------

/// Return the first present value, or `None` when every value is absent.
pub fn first_non_null<T>(values: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    values.into_iter().flatten().next()
}

pub fn default_if_null<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Lazily computed variant of [`default_if_null`].
pub fn default_if_null_with<T>(value: Option<T>, default: impl FnOnce() -> T) -> T {
    value.unwrap_or_else(default)
}

/// True when every value is absent (vacuously true for no values).
pub fn all_null<T>(values: &[Option<T>]) -> bool {
    values.iter().all(Option::is_none)
}

/// True when at least one value is absent.
pub fn any_null<T>(values: &[Option<T>]) -> bool {
    values.iter().any(Option::is_none)
}

/// True when every value is present (vacuously true for no values).
pub fn all_not_null<T>(values: &[Option<T>]) -> bool {
    values.iter().all(Option::is_some)
}

pub fn any_not_null<T>(values: &[Option<T>]) -> bool {
    values.iter().any(Option::is_some)
}

/// Unwrap a required argument, failing with `InvalidArgument` naming it.
pub fn require_non_null<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| {
        debug!(argument = name, "required argument missing");
        LanyardError::invalid(format!("{name} must not be null"))
    })
}

// ---------------------------------------------------------------------------
// Emptiness
// ---------------------------------------------------------------------------

/// Values that have a notion of "empty".
pub trait Emptiness {
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> Emptiness for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

/// `None` is empty; `Some` defers to the wrapped value.
impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptiness::is_empty_value)
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

/// True when the value is absent or empty.
pub fn is_empty<T: Emptiness + ?Sized>(value: Option<&T>) -> bool {
    value.is_none_or(Emptiness::is_empty_value)
}

pub fn is_not_empty<T: Emptiness + ?Sized>(value: Option<&T>) -> bool {
    !is_empty(value)
}

// ---------------------------------------------------------------------------
// Null-safe comparison
// ---------------------------------------------------------------------------

/// Compare two optional values; two absent values are equal.
pub fn safe_compare_to<T: Ord + ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    nulls: NullOrdering,
) -> Ordering {
    compare_with(a, b, nulls, T::cmp)
}

/// [`safe_compare_to`] with the null ordering from `config`.
pub fn safe_compare_configured<T: Ord + ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    config: &LangConfig,
) -> Ordering {
    safe_compare_to(a, b, config.null_ordering)
}

/// Wrap a comparator so it accepts absent values.
pub fn null_safe_comparator<T: ?Sized, F>(
    cmp: F,
    nulls: NullOrdering,
) -> impl Fn(Option<&T>, Option<&T>) -> Ordering
where
    F: Fn(&T, &T) -> Ordering,
{
    move |a: Option<&T>, b: Option<&T>| compare_with(a, b, nulls, &cmp)
}

fn compare_with<T: ?Sized>(
    a: Option<&T>,
    b: Option<&T>,
    nulls: NullOrdering,
    cmp: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => nulls.absent_vs_present(),
        (Some(_), None) => nulls.absent_vs_present().reverse(),
        (Some(x), Some(y)) => cmp(x, y),
    }
}

/// Largest present value; absent values are skipped.
pub fn null_safe_max<T: Ord>(values: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    values.into_iter().flatten().max()
}

/// Smallest present value; absent values are skipped.
pub fn null_safe_min<T: Ord>(values: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    values.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_null_picks_leftmost_present() {
        assert_eq!(first_non_null([None, Some(2), Some(3)]), Some(2));
        assert_eq!(first_non_null::<i32>([None, None]), None);
        assert_eq!(first_non_null::<i32>([]), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(default_if_null(None, 7), 7);
        assert_eq!(default_if_null(Some(1), 7), 1);
        assert_eq!(default_if_null_with(None, || "x".to_string()), "x");
    }

    #[test]
    fn null_counting() {
        assert!(all_null::<i32>(&[]));
        assert!(!any_null::<i32>(&[]));
        assert!(all_null::<i32>(&[None, None]));
        assert!(any_null(&[Some(1), None]));
        assert!(all_not_null(&[Some(1), Some(2)]));
        assert!(any_not_null(&[None, Some(2)]));
        assert!(!any_not_null::<i32>(&[None]));
    }

    #[test]
    fn require_non_null_names_argument() {
        let err = require_non_null::<i32>(None, "width").unwrap_err();
        assert!(err.to_string().contains("width"));
        assert_eq!(require_non_null(Some(3), "width").unwrap(), 3);
    }

    #[test]
    fn emptiness_across_containers() {
        assert!(is_empty::<str>(None));
        assert!(is_empty(Some("")));
        assert!(is_not_empty(Some("a")));
        assert!(is_empty(Some(&Vec::<u8>::new())));
        assert!(is_empty(Some(&HashMap::<u8, u8>::new())));
        assert!(is_not_empty(Some(&BTreeSet::from([1]))));
        assert!(is_empty(Some(&VecDeque::<u8>::new())));
        assert!(is_not_empty(Some(&VecDeque::from([1]))));
        assert!(is_empty(Some(&HashSet::<u8>::new())));
        assert!(is_not_empty(Some(&HashSet::from([1]))));
        assert!(is_empty(Some(&BTreeMap::<u8, u8>::new())));
        assert!(is_not_empty(Some(&BTreeMap::from([(1, 2)]))));
        assert!(is_empty(Some(&"")));
        assert!(is_not_empty(Some(&"a")));
        assert!(is_empty(Some(&Option::<String>::None)));
        assert!(is_empty(Some(&Some(String::new()))));
        assert!(is_not_empty(Some(&Some(vec![1]))));
    }

    #[test]
    fn nulls_first_treats_absent_as_less() {
        assert_eq!(safe_compare_to(None, Some(&1), NullOrdering::First), Ordering::Less);
        assert_eq!(safe_compare_to(Some(&1), None, NullOrdering::First), Ordering::Greater);
        assert_eq!(safe_compare_to::<i32>(None, None, NullOrdering::First), Ordering::Equal);
        assert_eq!(safe_compare_to(Some(&1), Some(&2), NullOrdering::First), Ordering::Less);
    }

    #[test]
    fn nulls_last_treats_absent_as_greater() {
        assert_eq!(safe_compare_to(None, Some("a"), NullOrdering::Last), Ordering::Greater);
        assert_eq!(safe_compare_to(Some("a"), None, NullOrdering::Last), Ordering::Less);
    }

    #[test]
    fn configured_null_ordering_is_honoured() {
        let mut config = LangConfig::default();
        assert_eq!(safe_compare_configured(None, Some(&1), &config), Ordering::Less);

        config.null_ordering = NullOrdering::Last;
        assert_eq!(safe_compare_configured(None, Some(&1), &config), Ordering::Greater);
        assert_eq!(safe_compare_configured(Some(&1), Some(&2), &config), Ordering::Less);
    }

    #[test]
    fn comparator_sorts_with_custom_order() {
        let by_len = null_safe_comparator(|a: &str, b: &str| a.len().cmp(&b.len()), NullOrdering::Last);
        let mut words = vec![Some("ccc"), None, Some("a"), Some("bb")];
        words.sort_by(|a, b| by_len(*a, *b));
        assert_eq!(words, vec![Some("a"), Some("bb"), Some("ccc"), None]);
    }

    #[test]
    fn max_and_min_skip_absent() {
        assert_eq!(null_safe_max([Some(3), None, Some(9)]), Some(9));
        assert_eq!(null_safe_min([Some(3), None, Some(9)]), Some(3));
        assert_eq!(null_safe_max::<i32>([None, None]), None);
    }
}
