// Copyright 2024 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(
	clippy::alloc_instead_of_core,
	clippy::as_pointer_underscore,
	clippy::as_underscore,
	clippy::assertions_on_result_states,
	clippy::clone_on_ref_ptr,
	clippy::decimal_literal_representation,
	clippy::deref_by_slicing,
	clippy::else_if_without_else,
	clippy::empty_drop,
	clippy::empty_enum_variants_with_brackets,
	clippy::empty_structs_with_brackets,
	clippy::exhaustive_enums,
	clippy::field_scoped_visibility_modifiers,
	clippy::if_then_some_else_none,
	clippy::impl_trait_in_params,
	clippy::infinite_loop,
	clippy::map_err_ignore,
	clippy::mem_forget,
	clippy::missing_assert_message,
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,
	clippy::missing_safety_doc,
	clippy::multiple_unsafe_ops_per_block,
	clippy::panic,
	clippy::partial_pub_fields,
	clippy::redundant_type_annotations,
	clippy::ref_patterns,
	clippy::renamed_function_params,
	clippy::semicolon_inside_block,
	clippy::std_instead_of_alloc,
	clippy::std_instead_of_core,
	clippy::undocumented_unsafe_blocks,
	clippy::unwrap_used,
)]
#![cfg_attr(test, allow(
	clippy::decimal_literal_representation,
	clippy::missing_assert_message,
	clippy::unwrap_used,
))]

//! # `ringqueue`
//!
//! `ringqueue` provides double-ended queues that act as a FIFO from one end and a LIFO from the
//! other, plus binary searches over monotone and bitonic slices.
//!
//! | Type | Storage | Insert (either end) | Remove front | Remove back | Indexed access |
//! |------|---------|---------------------|--------------|-------------|----------------|
//! | [`CircularBuffer<T>`] | ring of slots, doubled when full | amortized *O*(1) | *O*(1) | *O*(1) | *O*(1) |
//! | [`LinkedQueue<T>`]    | singly linked nodes              | *O*(1)           | *O*(1) | *O*(n) | *O*(n) |
//!
//! Both implement the sealed [`Queue`] trait. Its indexed accessors, [`get`] and [`set`], count
//! from the **back** of the queue: index `0` is the most recently enqueued element.
//!
//! ```
//! use ringqueue::prelude::*;
//!
//! let mut queue = CircularBuffer::new();
//! queue.enqueue("b");
//! queue.enqueue("c");
//! queue.push_front("a");
//!
//! assert_eq!(queue.front(), Ok(&"a"));
//! assert_eq!(queue.get(0), Ok(&"c"));
//! assert_eq!(queue.dequeue(), Ok("a"));
//! assert_eq!(queue.remove_back(), Ok("c"));
//! assert_eq!(queue.remove_back(), Ok("b"));
//! assert_eq!(queue.dequeue(), Err(Error::EmptyContainer));
//! ```
//!
//! # Errors
//!
//! Operations that need an element (`front`, `back`, `dequeue`, `remove_back`) or a valid index
//! (`get`, `set`) return an [`Error`] instead of panicking, and leave the queue unchanged when
//! they do.
//!
//! # Features
//!
//! - `buffer`, `linked`, `search`: the [`buffer`], [`linked`], and [`search`] modules, all
//!   enabled by default.
//! - `std`: links the standard library, and enables the `cli` module used by the
//!   `monotone-search` and `bitonic-search` binaries.
//!
//! [`CircularBuffer<T>`]: buffer::CircularBuffer
//! [`LinkedQueue<T>`]: linked::LinkedQueue
//! [`Queue`]: queue::Queue
//! [`get`]: queue::Queue::get
//! [`set`]: queue::Queue::set
//! [`Error`]: error::Error

extern crate alloc;

pub mod error;
#[cfg(feature = "buffer")]
mod internal;
mod macros;
mod marker;
pub mod queue;
#[cfg(feature = "buffer")]
pub mod buffer;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "search")]
pub mod search;
#[cfg(feature = "std")]
pub mod cli;

pub mod prelude {
	pub use crate::error::Error;
	pub use crate::queue::Queue;
	#[cfg(feature = "buffer")]
	pub use crate::buffer::CircularBuffer;
	#[cfg(feature = "linked")]
	pub use crate::linked::LinkedQueue;
}
