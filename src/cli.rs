// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Argument handling shared by the search demos.
//!
//! Both demos take a target value followed by the elements of the slice to search, all as
//! decimal integers:
//!
//! ```text
//! bitonic-search x a1 a2 ... an
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Parsed demo arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Args {
	/// The value to search for.
	pub target: i32,
	/// The slice to search.
	pub values: Vec<i32>,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ArgsError {
	/// Fewer arguments were given than the demo needs.
	#[error("expected a target followed by at least {min_values} element(s), got {given} argument(s)")]
	Usage {
		/// The number of elements required after the target.
		min_values: usize,
		/// The number of arguments given, not counting the program name.
		given: usize,
	},
	/// An argument could not be parsed as an integer.
	#[error("argument {position} is not an integer: {value:?}")]
	InvalidInteger {
		/// The one-based position of the argument, not counting the program name.
		position: usize,
		/// The argument as given.
		value: String,
	},
}

impl Args {
	/// Parses a target and at least `min_values` elements from `args`, which must not include the
	/// program name.
	///
	/// # Errors
	///
	/// Returns [`ArgsError::Usage`] if too few arguments are given, checked before any parsing, or
	/// [`ArgsError::InvalidInteger`] for the first argument that isn't an integer.
	///
	/// # Examples
	///
	/// ```
	/// use ringqueue::cli::{Args, ArgsError};
	///
	/// let args = Args::parse(["5", "9", "7", "5"], 1).unwrap();
	/// assert_eq!(args.target, 5);
	/// assert_eq!(args.values, [9, 7, 5]);
	///
	/// assert!(matches!(Args::parse(["5"], 1), Err(ArgsError::Usage { .. })));
	/// ```
	pub fn parse<I, S>(args: I, min_values: usize) -> Result<Self, ArgsError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let args: Vec<S> = args.into_iter().collect();
		if args.len() < min_values + 1 {
			return Err(ArgsError::Usage { min_values, given: args.len() });
		}

		let numbers = args
			.iter()
			.enumerate()
			.map(|(i, arg)| parse_integer(i + 1, arg.as_ref()))
			.collect::<Result<Vec<_>, _>>()?;
		let Some((&target, values)) = numbers.split_first() else {
			return Err(ArgsError::Usage { min_values, given: 0 })
		};
		Ok(Self { target, values: values.to_vec() })
	}
}

fn parse_integer(position: usize, value: &str) -> Result<i32, ArgsError> {
	value.parse().map_err(|_err| ArgsError::InvalidInteger {
		position,
		value: value.to_string(),
	})
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, defaulting to warnings, so stdout
/// carries only the demo's result.
pub fn init_tracing() {
	let filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::WARN.into())
		.from_env_lossy();
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
