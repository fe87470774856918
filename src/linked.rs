// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! A singly linked [`Queue`] implementation.
//!
//! Nodes are individually boxed and chained from front to back. The queue keeps pointers to the
//! first and last node, so insertion at either end and removal from the front are *O*(1).
//! Removal from the back, and indexed access, walk the chain from the front.

use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;
use tracing::trace;
use crate::error::{Error, Result};
use crate::macros::{delegate, gen_eq};
use crate::queue::Queue;


struct Node<T> {
	value: T,
	next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
	/// Moves a new, unlinked node onto the heap, returning an owning pointer to it.
	fn alloc(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Self> {
		NonNull::from(Box::leak(Box::new(Self { value, next })))
	}
}

/// A double-ended queue stored as a chain of heap nodes.
///
/// Like [`CircularBuffer`](crate::buffer::CircularBuffer), indexed access counts from the back.
///
/// # Examples
///
/// ```
/// use ringqueue::linked::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue(2);
/// queue.push_front(1);
/// queue.enqueue(3);
///
/// assert_eq!(queue, [1, 2, 3]);
/// assert_eq!(queue.get(0), Ok(&3));
/// assert_eq!(queue.remove_back(), Ok(3));
/// assert_eq!(queue.dequeue(), Ok(1));
/// ```
pub struct LinkedQueue<T> {
	head: Option<NonNull<Node<T>>>,
	tail: Option<NonNull<Node<T>>>,
	len: usize,
	_owns: PhantomData<Box<Node<T>>>,
}

// Safety: the queue uniquely owns its nodes, so it may cross threads whenever its elements can.
unsafe impl<T: Send> Send for LinkedQueue<T> { }
// Safety: shared access only hands out shared references to elements.
unsafe impl<T: Sync> Sync for LinkedQueue<T> { }

impl<T> LinkedQueue<T> {
	/// Creates a new, empty queue. No memory is allocated until an element is inserted.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			head: None,
			tail: None,
			len: 0,
			_owns: PhantomData,
		}
	}

	/// Returns the number of elements in the queue.
	pub fn len(&self) -> usize {
		self.len
	}
	/// Returns `true` if the queue contains no elements.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Appends an element to the back of the queue.
	pub fn enqueue(&mut self, value: T) {
		let node = Node::alloc(value, None);
		match self.tail {
			Some(mut tail) => {
				// Safety: the tail node is owned by this queue, and no other reference to it is
				//  live while we hold `&mut self`.
				let tail = unsafe { tail.as_mut() };
				tail.next = Some(node);
			}
			None => self.head = Some(node),
		}
		self.tail = Some(node);
		self.len += 1;
	}

	/// Prepends an element to the front of the queue.
	pub fn push_front(&mut self, value: T) {
		let node = Node::alloc(value, self.head);
		if self.tail.is_none() {
			self.tail = Some(node);
		}
		self.head = Some(node);
		self.len += 1;
	}

	/// Returns a reference to the front element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	pub fn front(&self) -> Result<&T> {
		let node = self.head.ok_or(Error::EmptyContainer)?;
		// Safety: nodes reachable from the queue are valid for as long as it is borrowed.
		Ok(unsafe { &node.as_ref().value })
	}
	/// Returns a reference to the back element.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	pub fn back(&self) -> Result<&T> {
		let node = self.tail.ok_or(Error::EmptyContainer)?;
		// Safety: nodes reachable from the queue are valid for as long as it is borrowed.
		Ok(unsafe { &node.as_ref().value })
	}

	/// Removes the front element and returns it.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	pub fn dequeue(&mut self) -> Result<T> {
		let node = self.head.ok_or(Error::EmptyContainer)?;
		// Safety: the head node was allocated by `Node::alloc` and is unlinked below, so
		//  ownership moves back into the box exactly once.
		let node = unsafe { Box::from_raw(node.as_ptr()) };
		self.head = node.next;
		if self.head.is_none() {
			self.tail = None;
		}
		self.len -= 1;
		Ok(node.value)
	}

	/// Removes the back element and returns it. This walks the queue from the front.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptyContainer`] if the queue is empty.
	pub fn remove_back(&mut self) -> Result<T> {
		Error::check_not_empty(self.len)?;
		if self.len == 1 {
			return self.dequeue();
		}

		let mut penultimate = self.node_at(self.len - 2).ok_or(Error::EmptyContainer)?;
		// Safety: the node is owned by this queue and no other reference to it is live.
		let penultimate_ref = unsafe { penultimate.as_mut() };
		let last = penultimate_ref.next.take().ok_or(Error::EmptyContainer)?;
		// Safety: the last node was allocated by `Node::alloc` and was just unlinked.
		let last = unsafe { Box::from_raw(last.as_ptr()) };
		self.tail = Some(penultimate);
		self.len -= 1;
		Ok(last.value)
	}

	/// Returns a reference to the element `index` positions from the back. This walks the queue
	/// from the front.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
	pub fn get(&self, index: usize) -> Result<&T> {
		let node = self.back_node(index)?;
		// Safety: nodes reachable from the queue are valid for as long as it is borrowed.
		Ok(unsafe { &node.as_ref().value })
	}
	/// Returns a mutable reference to the element `index` positions from the back.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
	pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
		let mut node = self.back_node(index)?;
		// Safety: the node is owned by this queue, which is mutably borrowed for the lifetime of
		//  the returned reference.
		Ok(unsafe { &mut node.as_mut().value })
	}
	/// Replaces the element `index` positions from the back with `value`, returning the replaced
	/// element.
	///
	/// # Errors
	///
	/// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
	pub fn set(&mut self, index: usize, value: T) -> Result<T> {
		self.get_mut(index).map(|elem| mem::replace(elem, value))
	}

	/// Drops all elements.
	pub fn clear(&mut self) {
		trace!(len = self.len, "clearing linked queue");
		self.free();
	}

	/// Returns a front-to-back iterator.
	pub fn iter(&self) -> Iter<T> {
		Iter {
			next: self.head,
			remaining: self.len,
			_ref: PhantomData,
		}
	}

	/// Returns the node at front-relative `index`, walking from the head.
	fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
		let mut current = self.head;
		for _ in 0..index {
			// Safety: nodes reachable from the queue are valid.
			current = unsafe { current?.as_ref() }.next;
		}
		current
	}

	/// Returns the node `index` positions from the back.
	fn back_node(&self, index: usize) -> Result<NonNull<Node<T>>> {
		let len = self.len;
		Error::check_index(index, len)?;
		self.node_at(len - 1 - index)
			.ok_or(Error::IndexOutOfRange { index, len })
	}

	/// Frees every node, front to back.
	fn free(&mut self) {
		while self.dequeue().is_ok() { }
	}
}

impl<T> Queue<T> for LinkedQueue<T> {
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

impl<T> Drop for LinkedQueue<T> {
	fn drop(&mut self) {
		self.free();
	}
}

impl<T> Default for LinkedQueue<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for LinkedQueue<T> {
	fn clone(&self) -> Self {
		self.iter().cloned().collect()
	}
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T> FromIterator<T> for LinkedQueue<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut queue = Self::new();
		queue.extend(iter);
		queue
	}
}

impl<T> Extend<T> for LinkedQueue<T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for value in iter {
			self.enqueue(value);
		}
	}
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

gen_eq! {
	LinkedQueue<T>, LinkedQueue<U>;
	LinkedQueue<T>, [U];
	LinkedQueue<T>, &[U];
	LinkedQueue<T>, [U; N]  [const N: usize];
	LinkedQueue<T>, &[U; N] [const N: usize];
}

impl<T: Eq> Eq for LinkedQueue<T> { }

/// A front-to-back iterator over references to the elements of a [`LinkedQueue`].
pub struct Iter<'a, T: 'a> {
	next: Option<NonNull<Node<T>>>,
	remaining: usize,
	_ref: PhantomData<&'a Node<T>>,
}

// Safety: the iterator only hands out shared references to elements, like `&LinkedQueue<T>`.
unsafe impl<T: Sync> Send for Iter<'_, T> { }
// Safety: a shared iterator exposes nothing beyond shared access to elements.
unsafe impl<T: Sync> Sync for Iter<'_, T> { }

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self {
			next: self.next,
			remaining: self.remaining,
			_ref: PhantomData,
		}
	}
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		let node = self.next?;
		// Safety: the queue is borrowed for `'a`, so its nodes outlive the iterator.
		let node = unsafe { node.as_ref() };
		self.next = node.next;
		self.remaining -= 1;
		Some(&node.value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> { }

impl<T> FusedIterator for Iter<'_, T> { }
