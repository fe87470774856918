// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Modular index arithmetic for ring storage. Every function takes a non-zero `cap` and indices
//! already inside `[0, cap)`, and returns an index inside `[0, cap)`.

/// Returns `(index + offset) mod cap`.
#[inline]
pub(crate) fn wrap_add(index: usize, offset: usize, cap: usize) -> usize {
	debug_assert!(cap > 0, "ring capacity must be non-zero");
	(index + offset % cap) % cap
}

/// Returns `(index - offset) mod cap`, normalized into `[0, cap)`.
#[inline]
pub(crate) fn wrap_sub(index: usize, offset: usize, cap: usize) -> usize {
	debug_assert!(cap > 0, "ring capacity must be non-zero");
	(index + cap - offset % cap) % cap
}

/// Translates a front-relative logical index into a physical slot.
#[inline]
pub(crate) fn front_slot(head: usize, index: usize, cap: usize) -> usize {
	wrap_add(head, index, cap)
}

/// Translates a back-relative logical index (`0` is the back) into a physical slot.
#[inline]
pub(crate) fn back_slot(tail: usize, index: usize, cap: usize) -> usize {
	wrap_sub(tail, index + 1, cap)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wrap_sub_normalizes_negative() {
		assert_eq!(wrap_sub(0, 1, 4), 3);
		assert_eq!(wrap_sub(2, 7, 4), 3);
		assert_eq!(wrap_sub(3, 3, 4), 0);
	}

	#[test]
	fn wrap_add_wraps() {
		assert_eq!(wrap_add(3, 1, 4), 0);
		assert_eq!(wrap_add(1, 9, 4), 2);
		assert_eq!(wrap_add(0, 0, 1), 0);
	}

	#[test]
	fn slots() {
		// tail at 1 in a ring of 4: back is slot 0, then 3, 2, 1
		assert_eq!(back_slot(1, 0, 4), 0);
		assert_eq!(back_slot(1, 1, 4), 3);
		assert_eq!(back_slot(1, 3, 4), 1);
		assert_eq!(front_slot(2, 3, 4), 1);
	}
}
