// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T = (), E = Error> = core::result::Result<T, E>;

/// An error returned when a queue operation's precondition is violated. The queue is left
/// unchanged when any of these is returned.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
	/// An absent value was supplied where an element is required.
	#[error("an element is required, but none was given")]
	InvalidArgument,
	/// An element was requested from, or removed from, an empty queue.
	#[error("queue is empty")]
	EmptyContainer,
	/// An index was outside `[0, len)`.
	#[error("index {index} is out of range for a queue of length {len}")]
	IndexOutOfRange {
		/// The requested index.
		index: usize,
		/// The length of the queue at the time of the request.
		len: usize,
	},
}

impl Error {
	/// Checks that `index` lies in `[0, len)`.
	pub(crate) fn check_index(index: usize, len: usize) -> Result {
		if index < len {
			Ok(())
		} else {
			Err(Self::IndexOutOfRange { index, len })
		}
	}

	/// Checks that a queue of `len` elements is not empty.
	pub(crate) fn check_not_empty(len: usize) -> Result {
		if len == 0 {
			Err(Self::EmptyContainer)
		} else {
			Ok(())
		}
	}
}
