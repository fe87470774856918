// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::rc::Rc;
use std::string::{String, ToString};
use std::vec::Vec;
use proptest::prelude::*;
use crate::error::Error;
use crate::queue::Queue;
use super::CircularBuffer;

/// Checks the ring bookkeeping: `tail` follows from `head` and `len`, and exactly the logical
/// range is occupied.
fn assert_ring_invariants<T>(buffer: &CircularBuffer<T>) {
	let cap = buffer.capacity();
	assert!(cap >= 1);
	assert!(buffer.len <= cap);
	assert!(buffer.head < cap);
	assert!(buffer.tail < cap);
	assert_eq!(buffer.tail, (buffer.head + buffer.len) % cap);

	let occupied = buffer.buf.iter().filter(|slot| slot.is_some()).count();
	assert_eq!(occupied, buffer.len);
	for i in 0..buffer.len {
		assert!(buffer.buf[(buffer.head + i) % cap].is_some());
	}
}

#[test]
fn new_is_empty_with_unit_capacity() {
	let buffer: CircularBuffer<i32> = CircularBuffer::new();
	assert!(buffer.is_empty());
	assert_eq!(buffer.len(), 0);
	assert_eq!(buffer.capacity(), 1);
	assert_ring_invariants(&buffer);
}

#[test]
fn empty_access_fails() {
	let mut buffer: CircularBuffer<i32> = CircularBuffer::new();
	assert_eq!(buffer.front(), Err(Error::EmptyContainer));
	assert_eq!(buffer.back(), Err(Error::EmptyContainer));
	assert_eq!(buffer.dequeue(), Err(Error::EmptyContainer));
	assert_eq!(buffer.remove_back(), Err(Error::EmptyContainer));
	assert_eq!(buffer.front_mut(), Err(Error::EmptyContainer));
	assert_eq!(buffer.get(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
	assert_eq!(buffer.len(), 0);
	assert_ring_invariants(&buffer);
}

#[test]
fn fifo() {
	let mut buffer = CircularBuffer::new();
	for i in 0..10 {
		buffer.enqueue(i);
	}
	for i in 0..10 {
		assert_eq!(buffer.dequeue(), Ok(i));
	}
	assert!(buffer.is_empty());
}

#[test]
fn lifo_at_front() {
	let mut buffer = CircularBuffer::new();
	for i in 0..10 {
		buffer.push_front(i);
		assert_eq!(buffer.front(), Ok(&i));
		assert_eq!(buffer.back(), Ok(&0));
	}
	assert_eq!(buffer, [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
}

#[test]
fn back_indexing() {
	let mut buffer = CircularBuffer::new();
	buffer.push_front(1);
	buffer.push_front(0);
	buffer.enqueue(2);
	buffer.enqueue(3);

	// Front to back: 0 1 2 3
	assert_eq!(buffer.get(0), Ok(&3));
	assert_eq!(buffer.get(1), Ok(&2));
	assert_eq!(buffer.get(2), Ok(&1));
	assert_eq!(buffer.get(3), Ok(&0));
	assert_eq!(buffer.get(4), Err(Error::IndexOutOfRange { index: 4, len: 4 }));
	assert_eq!(buffer[0], 3);
}

#[test]
fn set_round_trip() {
	let mut buffer = CircularBuffer::from([1, 2, 3, 4]);
	buffer.dequeue().unwrap();
	buffer.enqueue(5);

	for i in 0..buffer.len() {
		let old = *buffer.get(i).unwrap();
		assert_eq!(buffer.set(i, old * 10), Ok(old));
		assert_eq!(buffer.get(i), Ok(&(old * 10)));
		assert_eq!(buffer.len(), 4);
	}
	assert_eq!(buffer, [20, 30, 40, 50]);
}

#[test]
fn set_out_of_range_leaves_buffer() {
	let mut buffer = CircularBuffer::from([1, 2]);
	assert_eq!(buffer.set(2, 9), Err(Error::IndexOutOfRange { index: 2, len: 2 }));
	assert_eq!(buffer, [1, 2]);
}

#[test]
fn absent_values_are_rejected() {
	let mut buffer = CircularBuffer::from([1, 2]);
	assert_eq!(buffer.try_enqueue(None), Err(Error::InvalidArgument));
	assert_eq!(buffer.try_push_front(None), Err(Error::InvalidArgument));
	assert_eq!(buffer.try_set(0, None), Err(Error::InvalidArgument));
	// The argument is checked before the index.
	assert_eq!(buffer.try_set(7, None), Err(Error::InvalidArgument));
	assert_eq!(buffer, [1, 2]);

	assert_eq!(buffer.try_enqueue(Some(3)), Ok(()));
	assert_eq!(buffer.try_push_front(Some(0)), Ok(()));
	assert_eq!(buffer.try_set(0, Some(4)), Ok(3));
	assert_eq!(buffer, [0, 1, 2, 4]);
}

#[test]
fn growth_transparency() {
	for k in 0..8 {
		let count = (1 << k) + 1;
		let mut buffer = CircularBuffer::new();
		let mut reference = Vec::new();
		for i in 0..count {
			buffer.enqueue(i);
			reference.push(i);
			assert_ring_invariants(&buffer);
		}

		assert_eq!(buffer.capacity(), 1 << (k + 1));
		for (i, expected) in reference.iter().rev().enumerate() {
			assert_eq!(buffer.get(i), Ok(expected));
		}
		assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), reference);
		for expected in reference {
			assert_eq!(buffer.dequeue(), Ok(expected));
		}
	}
}

#[test]
fn growth_while_wrapped() {
	let mut buffer = CircularBuffer::with_capacity(4);
	buffer.enqueue(2);
	buffer.enqueue(3);
	buffer.push_front(1);
	buffer.push_front(0);
	assert!(buffer.is_full());
	assert_ne!(buffer.head, 0);

	buffer.enqueue(4);
	assert_eq!(buffer.head, 0);
	assert_eq!(buffer.tail, 5);
	assert_eq!(buffer.capacity(), 8);
	assert_eq!(buffer, [0, 1, 2, 3, 4]);
	assert_ring_invariants(&buffer);
}

#[test]
fn clear_resets() {
	let mut buffer = CircularBuffer::new();
	buffer.extend(0..20);
	buffer.clear();

	assert_eq!(buffer.len(), 0);
	assert!(buffer.is_empty());
	assert_eq!(buffer.capacity(), 1);
	assert_ring_invariants(&buffer);

	buffer.enqueue(7);
	let mut fresh = CircularBuffer::new();
	fresh.enqueue(7);
	assert_eq!(buffer.capacity(), fresh.capacity());
	assert_eq!(buffer.head, fresh.head);
	assert_eq!(buffer.tail, fresh.tail);
	assert_eq!(buffer, fresh);
}

#[test]
fn removal_releases_elements() {
	let shared = Rc::new(());
	let mut buffer = CircularBuffer::new();
	for _ in 0..3 {
		buffer.enqueue(Rc::clone(&shared));
	}
	assert_eq!(Rc::strong_count(&shared), 4);

	drop(buffer.dequeue());
	drop(buffer.remove_back());
	assert_eq!(Rc::strong_count(&shared), 2);
	assert_ring_invariants(&buffer);

	buffer.clear();
	assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn set_moves_old_element_out() {
	let mut buffer = CircularBuffer::new();
	buffer.enqueue("a".to_string());
	buffer.enqueue("b".to_string());
	assert_eq!(buffer.set(1, "c".to_string()), Ok(String::from("a")));
	assert_eq!(buffer, ["c", "b"]);
}

#[test]
fn iterators_cross_the_wrap() {
	let mut buffer = CircularBuffer::with_capacity(4);
	buffer.extend([2, 3]);
	buffer.push_front(1);
	buffer.push_front(0);

	assert_eq!(buffer.iter().len(), 4);
	assert_eq!(buffer.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1, 0]);

	let mut iter = buffer.iter();
	assert_eq!(iter.next(), Some(&0));
	assert_eq!(iter.next_back(), Some(&3));
	assert_eq!(iter.next(), Some(&1));
	assert_eq!(iter.next_back(), Some(&2));
	assert_eq!(iter.next(), None);
	assert_eq!(iter.next_back(), None);

	for elem in &mut buffer {
		*elem += 1;
	}
	assert_eq!(buffer.iter_mut().rev().map(|x| *x).collect::<Vec<_>>(), [4, 3, 2, 1]);
	assert_eq!(buffer.clone().into_iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
	assert_eq!(buffer.into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1]);
}

#[test]
fn conversions() {
	let empty = CircularBuffer::<u8>::from(Vec::new());
	assert_eq!(empty.capacity(), 1);
	assert!(empty.is_empty());

	let full = CircularBuffer::from([1, 2, 3]);
	assert!(full.is_full());
	assert_ring_invariants(&full);

	let collected: CircularBuffer<_> = (1..=3).collect();
	assert_eq!(collected, full);
	assert!(collected.contains(&2));
	assert!(!collected.contains(&4));
	assert_eq!(std::format!("{full:?}"), "[1, 2, 3]");
}

#[derive(Clone, Debug)]
enum Op {
	Enqueue(i32),
	PushFront(i32),
	Dequeue,
	RemoveBack,
	Set(usize, i32),
	Clear,
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		4 => any::<i32>().prop_map(Op::Enqueue),
		4 => any::<i32>().prop_map(Op::PushFront),
		3 => Just(Op::Dequeue),
		3 => Just(Op::RemoveBack),
		2 => (0..64usize, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
		1 => Just(Op::Clear),
	]
}

proptest! {
	/// Every operation sequence matches a `VecDeque` model, with back-relative indexing mapped to
	/// `model[len - 1 - i]`.
	#[test]
	fn matches_vec_deque(ops in prop::collection::vec(op(), 0..300)) {
		let mut buffer = CircularBuffer::new();
		let mut model = VecDeque::new();

		for op in ops {
			match op {
				Op::Enqueue(v) => {
					buffer.enqueue(v);
					model.push_back(v);
				}
				Op::PushFront(v) => {
					buffer.push_front(v);
					model.push_front(v);
				}
				Op::Dequeue => {
					prop_assert_eq!(buffer.dequeue().ok(), model.pop_front());
				}
				Op::RemoveBack => {
					prop_assert_eq!(buffer.remove_back().ok(), model.pop_back());
				}
				Op::Set(i, v) => {
					let expected = model.len().checked_sub(i + 1).map(|j| core::mem::replace(&mut model[j], v));
					prop_assert_eq!(buffer.set(i, v).ok(), expected);
				}
				Op::Clear => {
					buffer.clear();
					model.clear();
				}
			}

			prop_assert_eq!(buffer.len(), model.len());
			prop_assert_eq!(buffer.front().ok(), model.front());
			prop_assert_eq!(buffer.back().ok(), model.back());
			assert_ring_invariants(&buffer);
		}

		prop_assert!(buffer.iter().eq(model.iter()));
		for (i, expected) in model.iter().rev().enumerate() {
			prop_assert_eq!(buffer.get(i), Ok(expected));
		}
	}
}
