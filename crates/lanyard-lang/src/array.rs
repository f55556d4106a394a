// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Slice helpers that accept an absent array (`None`) wherever a caller might
// hold one.

/// Clone an optional slice. Absent stays absent.
pub fn clone_array<T: Clone>(array: Option<&[T]>) -> Option<Vec<T>> {
    array.map(<[T]>::to_vec)
}

/// Replace an absent array with an empty one.
pub fn null_to_empty<T>(array: Option<Vec<T>>) -> Vec<T> {
    array.unwrap_or_default()
}

pub fn is_empty<T>(array: Option<&[T]>) -> bool {
    array.is_none_or(<[T]>::is_empty)
}

pub fn is_not_empty<T>(array: Option<&[T]>) -> bool {
    !is_empty(array)
}

/// Number of elements; an absent array has length 0.
pub fn length<T>(array: Option<&[T]>) -> usize {
    array.map_or(0, <[T]>::len)
}

/// Whether two optional arrays have the same length (absent counts as 0).
pub fn is_same_length<A, B>(a: Option<&[A]>, b: Option<&[B]>) -> bool {
    length(a) == length(b)
}

/// Concatenate two optional arrays.
///
/// Absent when both inputs are absent; a copy of the present one when only
/// one is.
pub fn add_all<T: Clone>(first: Option<&[T]>, second: Option<&[T]>) -> Option<Vec<T>> {
    match (first, second) {
        (None, None) => None,
        (Some(a), None) => Some(a.to_vec()),
        (None, Some(b)) => Some(b.to_vec()),
        (Some(a), Some(b)) => {
            let mut joined = Vec::with_capacity(a.len() + b.len());
            joined.extend_from_slice(a);
            joined.extend_from_slice(b);
            Some(joined)
        }
    }
}

/// Index of the first element equal to `value`.
pub fn index_of<T: PartialEq>(array: &[T], value: &T) -> Option<usize> {
    array.iter().position(|item| item == value)
}

/// Index of the last element equal to `value`.
pub fn last_index_of<T: PartialEq>(array: &[T], value: &T) -> Option<usize> {
    array.iter().rposition(|item| item == value)
}

/// Copy of `array[start..end]` with both indices clamped to the slice.
///
/// Returns an empty vector when `start >= end` after clamping.
pub fn sub_array<T: Clone>(array: &[T], start: usize, end: usize) -> Vec<T> {
    let end = end.min(array.len());
    let start = start.min(end);
    array[start..end].to_vec()
}

/// Reversed copy of `array`.
pub fn reversed<T: Clone>(array: &[T]) -> Vec<T> {
    array.iter().rev().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_keeps_absent_absent() {
        assert_eq!(clone_array::<u8>(None), None);
        assert_eq!(clone_array(Some(&[1, 2][..])), Some(vec![1, 2]));
    }

    #[test]
    fn emptiness_treats_absent_as_empty() {
        assert!(is_empty::<u8>(None));
        assert!(is_empty::<u8>(Some(&[])));
        assert!(is_not_empty(Some(&[0u8][..])));
        assert_eq!(length::<u8>(None), 0);
        assert!(is_same_length::<u8, char>(None, Some(&[])));
        assert_eq!(null_to_empty::<u8>(None), Vec::<u8>::new());
    }

    #[test]
    fn add_all_handles_each_absent_combination() {
        let a = [1, 2];
        let b = [3];
        assert_eq!(add_all::<i32>(None, None), None);
        assert_eq!(add_all(Some(&a[..]), None), Some(vec![1, 2]));
        assert_eq!(add_all(None, Some(&b[..])), Some(vec![3]));
        assert_eq!(add_all(Some(&a[..]), Some(&b[..])), Some(vec![1, 2, 3]));
    }

    #[test]
    fn index_lookups() {
        let data = ['a', 'b', 'a'];
        assert_eq!(index_of(&data, &'a'), Some(0));
        assert_eq!(last_index_of(&data, &'a'), Some(2));
        assert_eq!(index_of(&data, &'z'), None);
    }

    #[test]
    fn sub_array_clamps() {
        let data = [0, 1, 2, 3, 4];
        assert_eq!(sub_array(&data, 1, 3), vec![1, 2]);
        assert_eq!(sub_array(&data, 3, 100), vec![3, 4]);
        assert!(sub_array(&data, 4, 2).is_empty());
        assert!(sub_array(&data, 10, 20).is_empty());
    }

    #[test]
    fn reversed_copy() {
        assert_eq!(reversed(&[1, 2, 3]), vec![3, 2, 1]);
    }
}
