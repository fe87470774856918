// Copyright 2025 - Strixpyrr
// SPDX-License-Identifier: Apache-2.0

//! Prints the index of the first occurrence of `x` in a bitonic sequence, or `-1`.
//!
//! ```text
//! bitonic-search x a1 a2 ... an
//! ```

use std::process::ExitCode;
use ringqueue::cli::{self, Args, ArgsError};
use ringqueue::search::bitonic;
use tracing::debug;

fn main() -> ExitCode {
	cli::init_tracing();

	let args = match Args::parse(std::env::args().skip(1), 1) {
		Ok(args) => args,
		Err(err @ ArgsError::Usage { .. }) => {
			debug!(%err, "not enough arguments");
			eprintln!("Usage: bitonic-search x a1 a2 ... an");
			return ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("bitonic-search: {err}");
			return ExitCode::FAILURE
		}
	};

	match bitonic::search(&args.target, &args.values) {
		Some(index) => println!("{index}"),
		None => println!("-1"),
	}
	ExitCode::SUCCESS
}
