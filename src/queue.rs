// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! The queue contract shared by [`CircularBuffer`] and [`LinkedQueue`].
//!
//! A queue holds elements between a *front* (the oldest enqueued element) and a *back* (the most
//! recently enqueued element). Elements enter at the back with [`enqueue`] or at the front with
//! [`push_front`], and leave from the front with [`dequeue`] or from the back with
//! [`remove_back`].
//!
//! # Indexing
//!
//! [`get`] and [`set`] count from the **back**: index `0` is the most recently enqueued element,
//! index `1` the one enqueued before it, and so on up to `len() - 1`, the front.
//!
//! ```
//! use ringqueue::prelude::*;
//!
//! let mut queue = CircularBuffer::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! queue.enqueue(3);
//!
//! assert_eq!(queue.get(0), Ok(&3));
//! assert_eq!(queue.get(2), Ok(&1));
//! assert_eq!(queue.front(), Ok(&1));
//! ```
//!
//! [`CircularBuffer`]: crate::buffer::CircularBuffer
//! [`LinkedQueue`]: crate::linked::LinkedQueue
//! [`enqueue`]: Queue::enqueue
//! [`push_front`]: Queue::push_front
//! [`dequeue`]: Queue::dequeue
//! [`remove_back`]: Queue::remove_back
//! [`get`]: Queue::get
//! [`set`]: Queue::set

use crate::error::{Error, Result};
use crate::marker::private;

/// A double-ended queue with back-relative indexing. This trait is sealed.
pub trait Queue<T>: private::Queue {
	/// Appends an element to the back of the queue.
	fn enqueue(&mut self, value: T);
	/// Prepends an element to the front of the queue.
	fn push_front(&mut self, value: T);

	/// Returns a reference to the front element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	fn front(&self) -> Result<&T>;
	/// Returns a reference to the back element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	fn back(&self) -> Result<&T>;

	/// Removes and returns the front element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	fn dequeue(&mut self) -> Result<T>;
	/// Removes and returns the back element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	fn remove_back(&mut self) -> Result<T>;

	/// Returns a reference to the element `index` positions from the back.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
	fn get(&self, index: usize) -> Result<&T>;
	/// Replaces the element `index` positions from the back, returning the old element.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`. The value is dropped in this case.
	fn set(&mut self, index: usize, value: T) -> Result<T>;

	/// Returns the number of elements in the queue.
	fn len(&self) -> usize;
	/// Returns `true` if the queue holds no elements.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
	/// Removes all elements, returning the queue to its freshly constructed state.
	fn clear(&mut self);

	/// Appends a possibly absent element to the back of the queue.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if `value` is `None`.
	fn try_enqueue(&mut self, value: Option<T>) -> Result {
		let value = value.ok_or(Error::InvalidArgument)?;
		self.enqueue(value);
		Ok(())
	}
	/// Prepends a possibly absent element to the front of the queue.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if `value` is `None`.
	fn try_push_front(&mut self, value: Option<T>) -> Result {
		let value = value.ok_or(Error::InvalidArgument)?;
		self.push_front(value);
		Ok(())
	}
	/// Replaces the element `index` positions from the back with a possibly absent value.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidArgument`] if `value` is `None`, checked first, or
	/// [`Error::IndexOutOfRange`] if `index >= len()`.
	fn try_set(&mut self, index: usize, value: Option<T>) -> Result<T> {
		let value = value.ok_or(Error::InvalidArgument)?;
		self.set(index, value)
	}
}
