// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Prints the minimal index `i` with `a[i] <= x` in a non-increasing sequence, or its length.
//!
//! ```text
//! monotone-search x a1 a2 ... an
//! ```

use std::process::ExitCode;
use ringqueue::cli::{self, Args, ArgsError};
use ringqueue::search::monotone;
use tracing::debug;

fn main() -> ExitCode {
	cli::init_tracing();

	let args = match Args::parse(std::env::args().skip(1), 0) {
		Ok(args) => args,
		Err(err @ ArgsError::Usage { .. }) => {
			debug!(%err, "not enough arguments");
			eprintln!("Usage: monotone-search x a1 a2 ... an");
			return ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("monotone-search: {err}");
			return ExitCode::FAILURE
		}
	};

	let index = monotone::search(&args.target, &args.values);
	debug_assert_eq!(
		index,
		monotone::search_recursive(&args.target, &args.values),
		"iterative and recursive searches disagree"
	);
	println!("{index}");
	ExitCode::SUCCESS
}
