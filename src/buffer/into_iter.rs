// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use core::fmt;
use core::iter::FusedIterator;
use super::CircularBuffer;

/// A front-to-back iterator moving elements out of a [`CircularBuffer`]. Elements not yet
/// yielded are dropped with the iterator.
#[derive(Clone)]
pub struct IntoIter<T> {
	inner: CircularBuffer<T>,
}

impl<T> IntoIter<T> {
	pub(super) fn new(inner: CircularBuffer<T>) -> Self {
		Self { inner }
	}
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter")
		 .field(&self.inner)
		 .finish()
	}
}

impl<T> Iterator for IntoIter<T> {
	type Item = T;

	fn next(&mut self) -> Option<Self::Item> {
		self.inner.dequeue().ok()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.inner.len();
		(len, Some(len))
	}

	fn count(self) -> usize {
		self.len()
	}

	fn last(mut self) -> Option<Self::Item> {
		self.inner.remove_back().ok()
	}
}

impl<T> DoubleEndedIterator for IntoIter<T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		self.inner.remove_back().ok()
	}
}

impl<T> ExactSizeIterator for IntoIter<T> {
	fn len(&self) -> usize {
		self.inner.len()
	}
}

impl<T> FusedIterator for IntoIter<T> { }
