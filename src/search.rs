// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Binary searches over monotone and bitonic slices.
//!
//! Every search comes in an iterative and a recursive form, which return identical results for
//! all valid inputs. Inputs are borrowed; nothing is retained between calls.
//!
//! - [`monotone`] finds the insertion point in a non-increasing slice.
//! - [`bitonic`] finds the first occurrence of a value in a slice that decreases, then increases.

pub mod bitonic;
pub mod monotone;

pub use bitonic::{Order, Strategy};

#[cfg(test)]
mod tests;
