// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Vec;
use crate::macros::gen_eq;
use super::CircularBuffer;

gen_eq! {
	CircularBuffer<T>, CircularBuffer<U>;
	CircularBuffer<T>, &[U];
	CircularBuffer<T>, &mut [U];
	&[T], CircularBuffer<U>;
	&mut [T], CircularBuffer<U>;
	CircularBuffer<T>, [U];
	[T], CircularBuffer<U>;
	CircularBuffer<T>, Vec<U>;
	Vec<T>, CircularBuffer<U>;
	CircularBuffer<T>, [U; N]      [const N: usize];
	CircularBuffer<T>, &[U; N]     [const N: usize];
	CircularBuffer<T>, &mut [U; N] [const N: usize];
	[T; N], CircularBuffer<U>      [const N: usize];
	&[T; N], CircularBuffer<U>     [const N: usize];
	&mut [T; N], CircularBuffer<U> [const N: usize];
}

#[cfg(feature = "linked")]
gen_eq! {
	CircularBuffer<T>, crate::linked::LinkedQueue<U>;
	crate::linked::LinkedQueue<T>, CircularBuffer<U>;
}

impl<T: Eq> Eq for CircularBuffer<T> { }
