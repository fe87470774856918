// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use std::vec::Vec;
use proptest::prelude::*;
use super::bitonic::{self, find_breakpoint, first_occurrence, first_occurrence_recursive, Order};
use super::monotone;

const VALLEY: [i32; 8] = [9, 7, 5, 3, 2, 4, 6, 8];

#[test]
fn bitonic_scenario() {
	assert_eq!(find_breakpoint(&VALLEY), 5);
	assert_eq!(VALLEY[4], 2);

	for strategy in [bitonic::Strategy::Iterative, bitonic::Strategy::Recursive] {
		assert_eq!(bitonic::search_with(&5, &VALLEY, strategy), Some(2));
		assert_eq!(bitonic::search_with(&6, &VALLEY, strategy), Some(6));
		assert_eq!(bitonic::search_with(&1, &VALLEY, strategy), None);
		assert_eq!(bitonic::search_with(&2, &VALLEY, strategy), Some(4));
		assert_eq!(bitonic::search_with(&9, &VALLEY, strategy), Some(0));
		assert_eq!(bitonic::search_with(&8, &VALLEY, strategy), Some(7));
	}
}

#[test]
fn monotone_scenario() {
	let a = [10, 8, 8, 5, 1];
	assert_eq!(monotone::search(&8, &a), 1);
	assert_eq!(monotone::search_recursive(&8, &a), 1);
	assert_eq!(monotone::search(&0, &a), 5);
	assert_eq!(monotone::search_recursive(&0, &a), 5);
	assert_eq!(monotone::search(&11, &a), 0);
	assert_eq!(monotone::search(&7, &a), 3);
	assert_eq!(monotone::search::<i32>(&7, &[]), 0);
}

#[test]
fn breakpoint_conventions() {
	assert_eq!(find_breakpoint::<i32>(&[]), 0);
	assert_eq!(find_breakpoint(&[4]), 0);
	assert_eq!(find_breakpoint(&[4, 3, 2, 1]), 0);
	assert_eq!(find_breakpoint(&[1, 2, 3, 4]), 1);
	assert_eq!(find_breakpoint(&[4, 1, 2]), 2);
	assert_eq!(find_breakpoint(&[3, 2, 1, 2]), 3);
}

#[test]
fn purely_decreasing_and_increasing() {
	let decreasing = [8, 6, 4, 2];
	assert_eq!(bitonic::search(&4, &decreasing), Some(2));
	assert_eq!(bitonic::search(&5, &decreasing), None);

	let increasing = [1, 3, 5, 7];
	assert_eq!(bitonic::search(&1, &increasing), Some(0));
	assert_eq!(bitonic::search(&7, &increasing), Some(3));
	assert_eq!(bitonic::search_recursive(&5, &increasing), Some(2));
	assert_eq!(bitonic::search::<i32>(&5, &[]), None);
}

#[test]
fn first_occurrence_finds_leftmost() {
	let descending = [9, 7, 7, 7, 3];
	let ascending = [1, 4, 4, 4, 4, 8];
	assert_eq!(first_occurrence(&7, &descending, 0..5, Order::Descending), Some(1));
	assert_eq!(first_occurrence_recursive(&7, &descending, 0..5, Order::Descending), Some(1));
	assert_eq!(first_occurrence(&4, &ascending, 0..6, Order::Ascending), Some(1));
	assert_eq!(first_occurrence_recursive(&4, &ascending, 0..6, Order::Ascending), Some(1));
	// The range bounds the search.
	assert_eq!(first_occurrence(&4, &ascending, 2..6, Order::Ascending), Some(2));
	assert_eq!(first_occurrence(&8, &ascending, 0..5, Order::Ascending), None);
	assert_eq!(first_occurrence_recursive(&3, &descending, 3..3, Order::Descending), None);
}

/// A non-increasing slice of 0 to 200 elements.
fn non_increasing() -> impl Strategy<Value = Vec<i32>> {
	prop::collection::vec(-100..100i32, 0..=200).prop_map(|mut a| {
		a.sort_unstable_by(|x, y| y.cmp(x));
		a
	})
}

/// A strictly decreasing run followed by a strictly increasing run.
fn bitonic_slice() -> impl Strategy<Value = Vec<i32>> {
	(
		prop::collection::btree_set(-100..100i32, 0..100),
		prop::collection::btree_set(-100..100i32, 0..100),
	).prop_map(|(falling, rising)| {
		falling.into_iter().rev().chain(rising).collect()
	})
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(1000))]

	#[test]
	fn monotone_forms_agree(a in non_increasing(), x in -110..110i32) {
		let iterative = monotone::search(&x, &a);
		prop_assert_eq!(iterative, monotone::search_recursive(&x, &a));
		prop_assert_eq!(iterative, a.partition_point(|v| *v > x));
	}

	#[test]
	fn first_occurrence_forms_agree(a in non_increasing(), x in -110..110i32) {
		let range = 0..a.len();
		let expected = a.iter().position(|v| *v == x);
		prop_assert_eq!(first_occurrence(&x, &a, range.clone(), Order::Descending), expected);
		prop_assert_eq!(first_occurrence_recursive(&x, &a, range, Order::Descending), expected);

		let ascending: Vec<i32> = a.iter().rev().copied().collect();
		let expected = ascending.iter().position(|v| *v == x);
		prop_assert_eq!(first_occurrence(&x, &ascending, 0..ascending.len(), Order::Ascending), expected);
		prop_assert_eq!(first_occurrence_recursive(&x, &ascending, 0..ascending.len(), Order::Ascending), expected);
	}

	#[test]
	fn bitonic_forms_agree(a in bitonic_slice(), x in -110..110i32) {
		let iterative = bitonic::search(&x, &a);
		prop_assert_eq!(iterative, bitonic::search_recursive(&x, &a));
		prop_assert_eq!(iterative, a.iter().position(|v| *v == x));
	}
}
