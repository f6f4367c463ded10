// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lenext_sha256::DigestParseError;
use thiserror::Error;

/// MAC validation error
///
/// A MAC that parses but does not match is not an error; validation returns
/// `false` for it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacError {
    /// Claimed MAC is not a well-formed hex digest
    #[error("malformed MAC: {0}")]
    Digest(#[from] DigestParseError),
}
