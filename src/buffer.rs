// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! # Internal Layout
//!
//! A [`CircularBuffer`] owns a boxed slice of optional slots. Live elements occupy the `len`
//! slots walking forward from `head`, wrapping at the end of the slice; `tail` is the slot one
//! past the back element. Every other slot is `None`.
//!
//! ```text
//!  wrapped (head = 5, tail = 2, len = 5, capacity = 8):
//! |  d  |  e  |  -  |  -  |  -  |  a  |  b  |  c  |
//!                ^tail             ^head
//! ```
//!
//! When an element is inserted into a full buffer, the slots are reallocated at twice the
//! capacity and the ring is moved front-to-back into slots `0..len`, so `head` becomes `0`.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use core::ops::{Index, Range};
use core::{fmt, mem};
use core::iter::repeat_with;
use tracing::trace;
use crate::error::{Error, Result};
use crate::internal::{back_slot, front_slot, wrap_add, wrap_sub};
use crate::macros::delegate;
use crate::queue::Queue;
pub use into_iter::IntoIter;
pub use iter::{Iter, IterMut};

mod eq;
mod into_iter;
mod iter;
#[cfg(test)]
mod tests;

/// The capacity of a new or cleared buffer.
const MIN_CAPACITY: usize = 1;

/// A growable double-ended queue stored in a ring of slots.
///
/// Insertion at either end is amortized *O*(1); the ring doubles its capacity whenever it is
/// full. Indexed access through [`get`](Self::get) and [`set`](Self::set) counts from the
/// **back**, so index `0` is the most recently enqueued element.
///
/// # Examples
///
/// ```
/// use ringqueue::buffer::CircularBuffer;
///
/// let mut buffer = CircularBuffer::new();
/// buffer.enqueue(2);
/// buffer.enqueue(3);
/// buffer.push_front(1);
///
/// assert_eq!(buffer, [1, 2, 3]);
/// assert_eq!(buffer.get(0), Ok(&3));
/// assert_eq!(buffer.dequeue(), Ok(1));
/// assert_eq!(buffer.remove_back(), Ok(3));
/// assert_eq!(buffer.len(), 1);
/// ```
#[derive(Clone)]
pub struct CircularBuffer<T> {
	buf: Box<[Option<T>]>,
	head: usize,
	tail: usize,
	len: usize,
}

/// Allocates `capacity` empty slots.
fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
	repeat_with(|| None).take(capacity).collect()
}

impl<T> CircularBuffer<T> {
	/// Creates a new, empty buffer with a capacity of one element.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	///
	/// let buffer: CircularBuffer<i32> = CircularBuffer::new();
	/// assert!(buffer.is_empty());
	/// assert_eq!(buffer.capacity(), 1);
	/// ```
	#[must_use]
	pub fn new() -> Self {
		Self::with_capacity(MIN_CAPACITY)
	}

	/// Creates a new, empty buffer able to hold `capacity` elements before growing. A capacity of
	/// zero is raised to one.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	///
	/// let mut buffer = CircularBuffer::with_capacity(4);
	/// for i in 0..4 {
	///     buffer.enqueue(i);
	/// }
	/// assert_eq!(buffer.capacity(), 4);
	///
	/// buffer.enqueue(4);
	/// assert_eq!(buffer.capacity(), 8);
	/// ```
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: empty_slots(capacity.max(MIN_CAPACITY)),
			head: 0,
			tail: 0,
			len: 0,
		}
	}

	/// Returns the number of elements the buffer can hold before it must grow.
	pub fn capacity(&self) -> usize {
		self.buf.len()
	}

	/// Returns the number of elements in the buffer.
	pub fn len(&self) -> usize {
		self.len
	}
	/// Returns `true` if the buffer contains no elements.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
	/// Returns `true` if the next insertion will grow the buffer.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	///
	/// let mut buffer = CircularBuffer::new();
	/// assert!(!buffer.is_full());
	/// buffer.enqueue(1);
	/// assert!(buffer.is_full());
	/// ```
	pub fn is_full(&self) -> bool {
		self.len == self.capacity()
	}

	/// Appends an element to the back of the buffer, growing it if full.
	///
	/// # Panics
	///
	/// Panics if the doubled capacity overflows `usize`, or aborts if allocation fails.
	pub fn enqueue(&mut self, value: T) {
		if self.is_full() {
			self.grow();
		}

		self.buf[self.tail] = Some(value);
		self.tail = wrap_add(self.tail, 1, self.capacity());
		self.len += 1;
	}

	/// Prepends an element to the front of the buffer, growing it if full.
	///
	/// # Panics
	///
	/// Panics if the doubled capacity overflows `usize`, or aborts if allocation fails.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	///
	/// let mut buffer = CircularBuffer::new();
	/// buffer.push_front(1);
	/// buffer.push_front(2);
	/// assert_eq!(buffer.front(), Ok(&2));
	/// assert_eq!(buffer, [2, 1]);
	/// ```
	pub fn push_front(&mut self, value: T) {
		if self.is_full() {
			self.grow();
		}

		self.head = wrap_sub(self.head, 1, self.capacity());
		self.buf[self.head] = Some(value);
		self.len += 1;
	}

	/// Returns a reference to the front element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the buffer is empty.
	pub fn front(&self) -> Result<&T> {
		Error::check_not_empty(self.len)?;
		self.buf[self.head].as_ref().ok_or(Error::EmptyContainer)
	}
	/// Returns a reference to the back element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the buffer is empty.
	pub fn back(&self) -> Result<&T> {
		Error::check_not_empty(self.len)?;
		self.buf[self.back_slot(0)].as_ref().ok_or(Error::EmptyContainer)
	}
	/// Returns a mutable reference to the front element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the buffer is empty.
	pub fn front_mut(&mut self) -> Result<&mut T> {
		Error::check_not_empty(self.len)?;
		self.buf[self.head].as_mut().ok_or(Error::EmptyContainer)
	}
	/// Returns a mutable reference to the back element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the buffer is empty.
	pub fn back_mut(&mut self) -> Result<&mut T> {
		Error::check_not_empty(self.len)?;
		let slot = self.back_slot(0);
		self.buf[slot].as_mut().ok_or(Error::EmptyContainer)
	}

	/// Removes the front element and returns it.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the buffer is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	/// use ringqueue::error::Error;
	///
	/// let mut buffer = CircularBuffer::from([1, 2]);
	/// assert_eq!(buffer.dequeue(), Ok(1));
	/// assert_eq!(buffer.dequeue(), Ok(2));
	/// assert_eq!(buffer.dequeue(), Err(Error::EmptyContainer));
	/// ```
	pub fn dequeue(&mut self) -> Result<T> {
		Error::check_not_empty(self.len)?;
		let value = self.buf[self.head].take().ok_or(Error::EmptyContainer)?;
		self.head = wrap_add(self.head, 1, self.capacity());
		self.len -= 1;
		Ok(value)
	}
	/// Removes the back element and returns it.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the buffer is empty.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	/// use ringqueue::error::Error;
	///
	/// let mut buffer = CircularBuffer::from([1, 2]);
	/// assert_eq!(buffer.remove_back(), Ok(2));
	/// assert_eq!(buffer.remove_back(), Ok(1));
	/// assert_eq!(buffer.remove_back(), Err(Error::EmptyContainer));
	/// ```
	pub fn remove_back(&mut self) -> Result<T> {
		Error::check_not_empty(self.len)?;
		let slot = self.back_slot(0);
		let value = self.buf[slot].take().ok_or(Error::EmptyContainer)?;
		self.tail = slot;
		self.len -= 1;
		Ok(value)
	}

	/// Returns a reference to the element `index` positions from the back. Index `0` is the
	/// most recently enqueued element.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	/// use ringqueue::error::Error;
	///
	/// let buffer = CircularBuffer::from([1, 2, 3]);
	/// assert_eq!(buffer.get(0), Ok(&3));
	/// assert_eq!(buffer.get(2), Ok(&1));
	/// assert_eq!(buffer.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
	/// ```
	pub fn get(&self, index: usize) -> Result<&T> {
		Error::check_index(index, self.len)?;
		self.buf[self.back_slot(index)]
			.as_ref()
			.ok_or(Error::IndexOutOfRange { index, len: self.len })
	}
	/// Returns a mutable reference to the element `index` positions from the back.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
	pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
		let len = self.len;
		Error::check_index(index, len)?;
		let slot = self.back_slot(index);
		self.buf[slot]
			.as_mut()
			.ok_or(Error::IndexOutOfRange { index, len })
	}
	/// Replaces the element `index` positions from the back with `value`, returning the replaced
	/// element. The length is unchanged.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	///
	/// let mut buffer = CircularBuffer::from([1, 2, 3]);
	/// assert_eq!(buffer.set(1, 5), Ok(2));
	/// assert_eq!(buffer, [1, 5, 3]);
	/// ```
	pub fn set(&mut self, index: usize, value: T) -> Result<T> {
		self.get_mut(index).map(|elem| mem::replace(elem, value))
	}

	/// Returns `true` if the buffer contains an element equal to `value`.
	pub fn contains(&self, value: &T) -> bool
	where
		T: PartialEq
	{
		self.iter().any(|elem| elem == value)
	}

	/// Drops all elements and shrinks the buffer back to a capacity of one.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	///
	/// let mut buffer = CircularBuffer::from([1, 2, 3]);
	/// buffer.clear();
	///
	/// assert!(buffer.is_empty());
	/// assert_eq!(buffer.capacity(), 1);
	/// ```
	pub fn clear(&mut self) {
		trace!(len = self.len, capacity = self.capacity(), "clearing circular buffer");
		self.buf = empty_slots(MIN_CAPACITY);
		self.head = 0;
		self.tail = 0;
		self.len = 0;
	}

	/// Returns a front-to-back iterator.
	pub fn iter(&self) -> Iter<T> {
		let (a, b) = self.slot_ranges();
		Iter::new(self.buf[a].iter(), self.buf[b].iter())
	}
	/// Returns a front-to-back iterator yielding mutable references.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::buffer::CircularBuffer;
	///
	/// let mut buffer = CircularBuffer::from([1, 2, 3]);
	/// for elem in buffer.iter_mut() {
	///     *elem *= 2;
	/// }
	/// assert_eq!(buffer, [2, 4, 6]);
	/// ```
	pub fn iter_mut(&mut self) -> IterMut<T> {
		let (a, b) = self.slot_ranges();
		// Either `b` is empty or the ring wraps, in which case `b` ends before `a` starts.
		let (lower, upper) = self.buf.split_at_mut(a.start);
		IterMut::new(
			upper[..a.len()].iter_mut(),
			lower[b].iter_mut()
		)
	}

	/// Returns the physical slot of the element `index` positions from the back.
	fn back_slot(&self, index: usize) -> usize {
		back_slot(self.tail, index, self.capacity())
	}

	/// Returns the two physical slot ranges holding the elements, in front-to-back order. The
	/// second range is empty unless the ring wraps.
	fn slot_ranges(&self) -> (Range<usize>, Range<usize>) {
		let cap = self.capacity();
		if self.head + self.len <= cap {
			(self.head..self.head + self.len, 0..0)
		} else {
			(self.head..cap, 0..self.tail)
		}
	}

	/// Doubles the capacity, moving the elements into slots `0..len`.
	fn grow(&mut self) {
		let old_cap = self.capacity();
		let new_cap = old_cap.checked_mul(2).expect("capacity overflow");
		let mut buf = empty_slots(new_cap);
		for (i, slot) in buf.iter_mut().take(self.len).enumerate() {
			*slot = self.buf[front_slot(self.head, i, old_cap)].take();
		}

		self.buf = buf;
		self.head = 0;
		self.tail = self.len;
		trace!(from = old_cap, to = new_cap, len = self.len, "grew circular buffer");
	}
}

impl<T> Queue<T> for CircularBuffer<T> {
	delegate! {
		fn enqueue(&mut self, value: T);
		fn push_front(&mut self, value: T);
		fn front(&self) -> Result<&T>;
		fn back(&self) -> Result<&T>;
		fn dequeue(&mut self) -> Result<T>;
		fn remove_back(&mut self) -> Result<T>;
		fn get(&self, index: usize) -> Result<&T>;
		fn set(&mut self, index: usize, value: T) -> Result<T>;
		fn len(&self) -> usize;
		fn is_empty(&self) -> bool;
		fn clear(&mut self);
	}
}

impl<T: Hash> Hash for CircularBuffer<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_usize(self.len());
		for v in self.iter() {
			Hash::hash(v, state);
		}
	}
}

impl<T> Index<usize> for CircularBuffer<T> {
	type Output = T;

	/// Indexes from the back, like [`get`](CircularBuffer::get).
	fn index(&self, index: usize) -> &Self::Output {
		self.get(index).expect("Out of bounds access")
	}
}

impl<T> FromIterator<T> for CircularBuffer<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let iter = iter.into_iter();
		let mut buffer = Self::with_capacity(iter.size_hint().0);
		buffer.extend(iter);
		buffer
	}
}

impl<T> IntoIterator for CircularBuffer<T> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	/// Consumes the buffer into a front-to-back iterator yielding elements by value.
	fn into_iter(self) -> Self::IntoIter {
		IntoIter::new(self)
	}
}

impl<'a, T> IntoIterator for &'a CircularBuffer<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut CircularBuffer<T> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl<T> Extend<T> for CircularBuffer<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.enqueue(value);
		}
	}
}

impl<'a, T: Copy + 'a> Extend<&'a T> for CircularBuffer<T> {
	fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
		self.extend(iter.into_iter().copied());
	}
}

impl<T> Default for CircularBuffer<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: fmt::Debug> fmt::Debug for CircularBuffer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T> From<Vec<T>> for CircularBuffer<T> {
	/// Converts a vector into a buffer whose front is the vector's first element, reusing no
	/// storage. The capacity is the vector's length, or one if it is empty.
	fn from(value: Vec<T>) -> Self {
		let len = value.len();
		let cap = len.max(MIN_CAPACITY);
		let buf = value.into_iter()
					   .map(Some)
					   .chain(repeat_with(|| None))
					   .take(cap)
					   .collect();
		Self {
			buf,
			head: 0,
			tail: len % cap,
			len,
		}
	}
}

impl<T, const N: usize> From<[T; N]> for CircularBuffer<T> {
	fn from(value: [T; N]) -> Self {
		Vec::from(value).into()
	}
}
