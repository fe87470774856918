// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use core::{fmt, mem, slice};
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;

/// A front-to-back iterator over references to the elements of a
/// [`CircularBuffer`](super::CircularBuffer).
///
/// The ring is split into two runs of occupied slots: `a` from the front to the end of the
/// storage (or to the back, if the ring doesn't wrap), and `b` from the start of the storage to
/// the back.
pub struct Iter<'a, T: 'a> {
	a: slice::Iter<'a, Option<T>>,
	b: slice::Iter<'a, Option<T>>
}

impl<'a, T: 'a> Iter<'a, T> {
	pub(super) fn new(a: slice::Iter<'a, Option<T>>, b: slice::Iter<'a, Option<T>>) -> Self {
		Self { a, b }
	}
}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self {
			a: self.a.clone(),
			b: self.b.clone()
		}
	}
}

impl<T: Debug> Debug for Iter<'_, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list()
		 .entries(self.clone())
		 .finish()
	}
}

impl<T> Default for Iter<'_, T> {
	fn default() -> Self {
		Self::new(Default::default(), Default::default())
	}
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		match self.a.next() {
			Some(slot) => slot.as_ref(),
			None => {
				mem::swap(&mut self.a, &mut self.b);
				self.a.next()?.as_ref()
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	fn last(mut self) -> Option<&'a T> {
		self.next_back()
	}

	fn fold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.a.flatten().fold(init, &mut f);
		self.b.flatten().fold(accum, &mut f)
	}
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		match self.b.next_back() {
			Some(slot) => slot.as_ref(),
			None => {
				mem::swap(&mut self.a, &mut self.b);
				self.b.next_back()?.as_ref()
			}
		}
	}

	fn rfold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.b.flatten().rfold(init, &mut f);
		self.a.flatten().rfold(accum, &mut f)
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {
	fn len(&self) -> usize {
		self.a.len() + self.b.len()
	}
}

impl<T> FusedIterator for Iter<'_, T> { }

/// A front-to-back iterator over mutable references to the elements of a
/// [`CircularBuffer`](super::CircularBuffer).
pub struct IterMut<'a, T: 'a> {
	a: slice::IterMut<'a, Option<T>>,
	b: slice::IterMut<'a, Option<T>>
}

impl<'a, T: 'a> IterMut<'a, T> {
	pub(super) fn new(a: slice::IterMut<'a, Option<T>>, b: slice::IterMut<'a, Option<T>>) -> Self {
		Self { a, b }
	}
}

impl<T> Default for IterMut<'_, T> {
	fn default() -> Self {
		Self::new(Default::default(), Default::default())
	}
}

impl<T: Debug> Debug for IterMut<'_, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_list()
		 .entries(self.a.as_slice().iter().flatten())
		 .entries(self.b.as_slice().iter().flatten())
		 .finish()
	}
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
	type Item = &'a mut T;

	fn next(&mut self) -> Option<&'a mut T> {
		match self.a.next() {
			Some(slot) => slot.as_mut(),
			None => {
				mem::swap(&mut self.a, &mut self.b);
				self.a.next()?.as_mut()
			}
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.len();
		(len, Some(len))
	}

	fn last(mut self) -> Option<&'a mut T> {
		self.next_back()
	}

	fn fold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.a.flatten().fold(init, &mut f);
		self.b.flatten().fold(accum, &mut f)
	}
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
	fn next_back(&mut self) -> Option<Self::Item> {
		match self.b.next_back() {
			Some(slot) => slot.as_mut(),
			None => {
				mem::swap(&mut self.a, &mut self.b);
				self.b.next_back()?.as_mut()
			}
		}
	}

	fn rfold<Acc, F>(self, init: Acc, mut f: F) -> Acc
	where
		F: FnMut(Acc, Self::Item) -> Acc,
	{
		let accum = self.b.flatten().rfold(init, &mut f);
		self.a.flatten().rfold(accum, &mut f)
	}
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {
	fn len(&self) -> usize {
		self.a.len() + self.b.len()
	}
}

impl<T> FusedIterator for IterMut<'_, T> { }
