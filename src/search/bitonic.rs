// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! First-occurrence search over bitonic slices: a strictly decreasing run followed by a strictly
//! increasing run, either of which may be empty.
//!
//! The search first locates the *breakpoint*, the index where the increasing run starts, then
//! binary-searches the decreasing prefix and, failing that, the increasing suffix.
//!
//! ```text
//!  index: 0  1  2  3  4  5  6  7
//!  value: 9  7  5  3  2  4  6  8
//!                        ^ breakpoint (5)
//! ```
//!
//! # Examples
//!
//! ```
//! use ringqueue::search::bitonic;
//!
//! let a = [9, 7, 5, 3, 2, 4, 6, 8];
//! assert_eq!(bitonic::find_breakpoint(&a), 5);
//! assert_eq!(bitonic::search(&5, &a), Some(2));
//! assert_eq!(bitonic::search(&6, &a), Some(6));
//! assert_eq!(bitonic::search(&1, &a), None);
//! ```

use core::cmp::Ordering;
use core::ops::Range;
use tracing::trace;

/// The sort order of a run being searched.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Order {
	/// Non-decreasing.
	Ascending,
	/// Non-increasing.
	Descending,
}

/// Whether a search runs as a loop or as a recursion.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Strategy {
	/// Loop until the range is exhausted.
	#[default]
	Iterative,
	/// Recurse on the narrowed range; the depth is logarithmic in the slice length.
	Recursive,
}

/// Returns the index of the first occurrence of `x` in the bitonic slice `a`, or `None` if it is
/// absent. Occurrences in the decreasing run take precedence over the increasing run.
pub fn search<T: Ord>(x: &T, a: &[T]) -> Option<usize> {
	search_with(x, a, Strategy::Iterative)
}

/// The recursive form of [`search`].
pub fn search_recursive<T: Ord>(x: &T, a: &[T]) -> Option<usize> {
	search_with(x, a, Strategy::Recursive)
}

/// Searches for the first occurrence of `x` in the bitonic slice `a` using `strategy` for both
/// runs.
pub fn search_with<T: Ord>(x: &T, a: &[T], strategy: Strategy) -> Option<usize> {
	let find: fn(&T, &[T], Range<usize>, Order) -> Option<usize> = match strategy {
		Strategy::Iterative => first_occurrence::<T>,
		Strategy::Recursive => first_occurrence_recursive::<T>,
	};

	let breakpoint = find_breakpoint(a);
	trace!(len = a.len(), breakpoint, ?strategy, "searching bitonic slice");

	// A breakpoint of zero marks a purely decreasing slice.
	let prefix = if breakpoint == 0 { 0..a.len() } else { 0..breakpoint };
	find(x, a, prefix, Order::Descending)
		.or_else(|| find(x, a, breakpoint..a.len(), Order::Ascending))
}

/// Returns the smallest index `p` where `a[p - 1] < a[p]`, the start of the increasing run.
///
/// Returns `0` if the search for an ascending pair ends on the last element, which is the case
/// for a purely decreasing slice, a single element, or an empty slice.
///
/// # Examples
///
/// ```
/// use ringqueue::search::bitonic::find_breakpoint;
///
/// assert_eq!(find_breakpoint(&[5, 3, 1]), 0);
/// assert_eq!(find_breakpoint(&[5, 3, 4]), 2);
/// assert_eq!(find_breakpoint(&[1, 2, 3]), 1);
/// assert_eq!(find_breakpoint::<i32>(&[]), 0);
/// ```
pub fn find_breakpoint<T: Ord>(a: &[T]) -> usize {
	let Some(last) = a.len().checked_sub(1) else {
		return 0
	};

	let mut left = 0;
	let mut right = last;
	while left < right {
		let mid = left + (right - left) / 2;
		if a[mid] < a[mid + 1] {
			right = mid;
		} else {
			left = mid + 1;
		}
	}

	if left == last { 0 } else { left + 1 }
}

/// Returns the index of the first occurrence of `x` within `range` of `a`, where that range is
/// sorted in `order`, iteratively.
///
/// # Panics
///
/// Panics if `range` is out of bounds of `a`.
pub fn first_occurrence<T: Ord>(x: &T, a: &[T], range: Range<usize>, order: Order) -> Option<usize> {
	let Range { start: mut left, end: mut right } = range;
	assert!(right <= a.len(), "range end {right} is out of bounds for length {}", a.len());

	let mut found = None;
	while left < right {
		let mid = left + (right - left) / 2;
		match step(&a[mid], x, order) {
			Step::Found => {
				found = Some(mid);
				right = mid;
			}
			Step::Left  => right = mid,
			Step::Right => left = mid + 1,
		}
	}
	found
}

/// The recursive form of [`first_occurrence`].
///
/// # Panics
///
/// Panics if `range` is out of bounds of `a`.
pub fn first_occurrence_recursive<T: Ord>(x: &T, a: &[T], range: Range<usize>, order: Order) -> Option<usize> {
	let Range { start: left, end: right } = range;
	if left >= right {
		return None;
	}

	let mid = left + (right - left) / 2;
	match step(&a[mid], x, order) {
		Step::Found => first_occurrence_recursive(x, a, left..mid, order).or(Some(mid)),
		Step::Left  => first_occurrence_recursive(x, a, left..mid, order),
		Step::Right => first_occurrence_recursive(x, a, mid + 1..right, order),
	}
}

/// Which way a first-occurrence search narrows after probing one element.
enum Step {
	/// The probe equals the target; keep narrowing left for an earlier occurrence.
	Found,
	/// The target can only lie left of the probe.
	Left,
	/// The target can only lie right of the probe.
	Right,
}

fn step<T: Ord>(probe: &T, x: &T, order: Order) -> Step {
	match (probe.cmp(x), order) {
		(Ordering::Equal, _) => Step::Found,
		(Ordering::Less, Order::Ascending) |
		(Ordering::Greater, Order::Descending) => Step::Right,
		(Ordering::Less, Order::Descending) |
		(Ordering::Greater, Order::Ascending) => Step::Left,
	}
}
