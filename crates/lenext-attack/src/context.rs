// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::RangeInclusive;

use lenext_buffer::ByteBuffer;
use lenext_sha256::{BLOCK_LEN, ChainingValue, Digest, glue_padding, hash};

use crate::error::AttackError;
use crate::forgery::Forgery;

/// Inputs of one length-extension forgery.
#[derive(Debug, Clone, Copy)]
pub struct AttackContext<'a> {
    leaked: ChainingValue,
    key_len: usize,
    original: &'a [u8],
    suffix: &'a [u8],
}

impl<'a> AttackContext<'a> {
    /// Creates a context from a leaked MAC of `key ‖ original`.
    ///
    /// # Errors
    ///
    /// Returns [`AttackError::InvalidKeyLength`] if `key_len` is zero.
    pub fn new(
        leaked: Digest,
        key_len: usize,
        original: &'a [u8],
        suffix: &'a [u8],
    ) -> Result<Self, AttackError> {
        if key_len == 0 {
            return Err(AttackError::InvalidKeyLength);
        }

        Ok(Self {
            leaked: ChainingValue::from(leaked),
            key_len,
            original,
            suffix,
        })
    }

    /// [`AttackContext::new`] with the leaked MAC given as 64 hex characters.
    ///
    /// # Errors
    ///
    /// Returns [`AttackError::Digest`] for a malformed MAC and
    /// [`AttackError::InvalidKeyLength`] if `key_len` is zero.
    pub fn from_hex(
        leaked_hex: &str,
        key_len: usize,
        original: &'a [u8],
        suffix: &'a [u8],
    ) -> Result<Self, AttackError> {
        let leaked = Digest::from_hex(leaked_hex)?;
        Self::new(leaked, key_len, original, suffix)
    }

    /// Assumed key length in bytes.
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Length of `key ‖ original`, the input of the leaked MAC.
    ///
    /// Counted mod 2^64 like the SHA-256 length field, so any assumed key
    /// length is accepted.
    pub fn prior_total_len(&self) -> u64 {
        (self.key_len as u64).wrapping_add(self.original.len() as u64)
    }

    /// Computes the forged MAC and the message a verifier must receive.
    pub fn forge(&self) -> Forgery {
        let prior_total_len = self.prior_total_len();
        let glue = glue_padding(prior_total_len);

        // key ‖ original ‖ glue is a whole number of blocks
        let prior_padded_len = prior_total_len.wrapping_add(glue.len() as u64);
        let prior_blocks = prior_padded_len / BLOCK_LEN as u64;

        tracing::debug!(
            key_len = self.key_len,
            original_len = self.original.len(),
            glue_len = glue.len(),
            prior_blocks,
            suffix_len = self.suffix.len(),
            "forging extended MAC"
        );

        let digest = hash(
            ByteBuffer::from_slice(self.suffix),
            prior_padded_len,
            self.leaked,
        );

        let mut message =
            ByteBuffer::with_capacity(self.original.len() + glue.len() + self.suffix.len());
        message.append(self.original);
        message.append(&glue);
        message.append(self.suffix);

        Forgery::new(
            digest,
            message,
            self.original.len(),
            glue.len(),
            self.suffix.len(),
            prior_blocks,
        )
    }
}

/// One-shot forgery from a hex-encoded leaked MAC.
///
/// # Errors
///
/// See [`AttackContext::from_hex`].
pub fn extend_mac(
    leaked_hex: &str,
    key_len: usize,
    original: &[u8],
    suffix: &[u8],
) -> Result<Forgery, AttackError> {
    Ok(AttackContext::from_hex(leaked_hex, key_len, original, suffix)?.forge())
}

/// Forges once per candidate key length until `accepts` approves a forgery.
///
/// For when the key length is unknown but a verifier can be queried. Returns
/// the accepted key length together with its forgery.
pub fn find_key_len(
    leaked: Digest,
    candidates: RangeInclusive<usize>,
    original: &[u8],
    suffix: &[u8],
    mut accepts: impl FnMut(&Forgery) -> bool,
) -> Option<(usize, Forgery)> {
    for key_len in candidates {
        let Ok(context) = AttackContext::new(leaked, key_len, original, suffix) else {
            continue;
        };

        let forgery = context.forge();

        if accepts(&forgery) {
            tracing::debug!(key_len, "verifier accepted forgery");
            return Some((key_len, forgery));
        }
    }

    None
}
