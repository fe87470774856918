// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod private {
	/// Seals [`Queue`](crate::queue::Queue): only queues in this crate may implement it.
	pub trait Queue { }

	#[cfg(feature = "buffer")]
	impl<T> Queue for crate::buffer::CircularBuffer<T> { }
	#[cfg(feature = "linked")]
	impl<T> Queue for crate::linked::LinkedQueue<T> { }
}
