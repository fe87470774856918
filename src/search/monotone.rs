// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Insertion-point search over non-increasing slices.
//!
//! Both functions require `a` to be sorted in non-increasing order, and return the minimal index
//! `i` such that `a[i] <= x`, or `a.len()` if every element is greater than `x`. The result on an
//! unsorted slice is unspecified, but is always in `0..=a.len()`.
//!
//! # Examples
//!
//! ```
//! use ringqueue::search::monotone;
//!
//! let a = [10, 8, 8, 5, 1];
//! assert_eq!(monotone::search(&8, &a), 1);
//! assert_eq!(monotone::search(&6, &a), 3);
//! assert_eq!(monotone::search(&0, &a), 5);
//! assert_eq!(monotone::search_recursive(&0, &a), 5);
//! ```

/// Returns the minimal index `i` with `a[i] <= x`, or `a.len()`, iteratively.
pub fn search<T: Ord>(x: &T, a: &[T]) -> usize {
	// Everything left of `left` is greater than `x`; everything from `right` on is not.
	let mut left = 0;
	let mut right = a.len();
	while left < right {
		let mid = left + (right - left) / 2;
		if a[mid] > *x {
			left = mid + 1;
		} else {
			right = mid;
		}
	}
	left
}

/// Returns the minimal index `i` with `a[i] <= x`, or `a.len()`, recursively.
pub fn search_recursive<T: Ord>(x: &T, a: &[T]) -> usize {
	search_between(x, a, 0, a.len())
}

fn search_between<T: Ord>(x: &T, a: &[T], left: usize, right: usize) -> usize {
	if left >= right {
		return left;
	}

	let mid = left + (right - left) / 2;
	if a[mid] > *x {
		search_between(x, a, mid + 1, right)
	} else {
		search_between(x, a, left, mid)
	}
}
