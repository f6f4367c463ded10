// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Command-line front end for the `lenext` binary.
//!
//! Parsing ([`Cli`]) and execution ([`run`]) are split so that a parsed
//! [`Request`] can be run against any reader and writer.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod cli;
mod error;
mod logging;
mod request;
mod run;

pub use cli::Cli;
pub use error::UsageError;
pub use logging::{env_filter, init_tracing};
pub use request::Request;
pub use run::{Outcome, read_message, run};
