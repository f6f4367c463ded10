// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lenext_sha256::DigestParseError;
use thiserror::Error;

/// Length-extension attack input error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// Assumed secret key length is zero
    #[error("assumed key length must be a positive number of bytes")]
    InvalidKeyLength,

    /// Leaked MAC is not a well-formed hex digest
    #[error("malformed leaked MAC: {0}")]
    Digest(#[from] DigestParseError),
}
