// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Chaining values and digests.
//!
//! SHA-256's final chaining value *is* the digest, so the two types convert
//! freely in both directions. A `ChainingValue` feeds the compression
//! function; a `Digest` is what gets rendered and compared.

use core::fmt;
use core::str::FromStr;

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::consts::{H0, HASH_LEN, HEX_LEN, STATE_WORDS};
use crate::error::DigestParseError;

/// Running SHA-256 state H(i): 8 × 32-bit words.
#[derive(Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct ChainingValue([u32; STATE_WORDS]);

impl ChainingValue {
    /// The standard initial hash value H(0).
    pub const fn initial() -> Self {
        Self(H0)
    }

    /// Builds a chaining value from raw words.
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Returns the raw words.
    pub const fn words(&self) -> [u32; STATE_WORDS] {
        self.0
    }
}

impl Default for ChainingValue {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Debug for ChainingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ChainingValue")
            .field(&format_args!("{}", Digest(self.0)))
            .finish()
    }
}

impl From<Digest> for ChainingValue {
    fn from(digest: Digest) -> Self {
        Self(digest.0)
    }
}

/// 256-bit SHA-256 digest.
///
/// Renders as 64 lowercase hex characters and parses from the same form
/// (upper case accepted).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Zeroize)]
pub struct Digest([u32; STATE_WORDS]);

impl Digest {
    /// Builds a digest from raw words.
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Returns the raw words.
    pub const fn words(&self) -> [u32; STATE_WORDS] {
        self.0
    }

    /// Returns the digest as 32 big-endian bytes.
    pub fn to_bytes(&self) -> [u8; HASH_LEN] {
        let mut out = [0u8; HASH_LEN];

        for (chunk, word) in out.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        out
    }

    /// Parses a 64-character hex digest.
    ///
    /// Each group of 8 characters is one big-endian word.
    pub fn from_hex(hex: &str) -> Result<Self, DigestParseError> {
        if hex.len() != HEX_LEN {
            return Err(DigestParseError::InvalidLength { len: hex.len() });
        }

        let mut words = [0u32; STATE_WORDS];

        for (index, character) in hex.chars().enumerate() {
            let nibble = character
                .to_digit(16)
                .ok_or(DigestParseError::InvalidHexCharacter { index, character })?;
            words[index / 8] = (words[index / 8] << 4) | nibble;
        }

        Ok(Self(words))
    }
}

impl From<ChainingValue> for Digest {
    fn from(chaining_value: ChainingValue) -> Self {
        Self(chaining_value.0)
    }
}

impl FromStr for Digest {
    type Err = DigestParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0 {
            write!(f, "{word:08x}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self})")
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}
