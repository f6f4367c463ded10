// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Malformed hex digest
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestParseError {
    /// Digest string is not exactly 64 characters long
    #[error("digest must be exactly 64 hex characters, got {len}")]
    InvalidLength {
        /// Length of the rejected string in bytes
        len: usize,
    },

    /// Digest string contains a character outside `[0-9a-fA-F]`
    #[error("invalid hex character {character:?} at index {index}")]
    InvalidHexCharacter {
        /// Character position in the string
        index: usize,
        /// The offending character
        character: char,
    },
}
