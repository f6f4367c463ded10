// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lenext_sha256::DigestParseError;
use thiserror::Error;

/// Command-line input that parses but cannot be turned into a [`Request`](crate::Request).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No mode flag was given.
    #[error("one of -c, -s, -v or -e is required")]
    MissingMode,

    /// A mode was given without one of its arguments.
    #[error("missing required argument {0}")]
    MissingArgument(&'static str),

    /// The key length does not fit in memory on this platform.
    #[error("key length {0} is out of range")]
    KeyLengthOutOfRange(u64),

    /// The -m argument is not a well-formed digest.
    #[error("malformed MAC: {0}")]
    Digest(#[from] DigestParseError),
}
