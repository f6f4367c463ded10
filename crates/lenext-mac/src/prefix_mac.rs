// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lenext_buffer::ByteBuffer;
use lenext_sha256::{ChainingValue, Digest, hash};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::MacError;

/// Computes `SHA-256(key ‖ message)`.
///
/// The key is prepended to the message buffer in place, so passing an owned
/// [`ByteBuffer`] avoids copying the message.
pub fn generate_mac(key: &[u8], message: impl Into<ByteBuffer>) -> Digest {
    let mut buffer = message.into();
    let message_len = buffer.len();

    buffer.prepend(key);

    tracing::debug!(key_len = key.len(), message_len, "generating prefix MAC");

    hash(buffer, 0, ChainingValue::initial())
}

/// Recomputes the MAC of `message` under `key` and compares it with
/// `claimed` over all 8 words.
///
/// The comparison runs in constant time.
pub fn validate_mac(key: &[u8], message: impl Into<ByteBuffer>, claimed: &Digest) -> bool {
    let computed = generate_mac(key, message);
    let matches: bool = computed.ct_eq(claimed).into();

    tracing::debug!(matches, "validated prefix MAC");

    matches
}

/// [`validate_mac`] with the claimed MAC given as 64 hex characters.
///
/// # Errors
///
/// Returns [`MacError::Digest`] if `claimed_hex` has the wrong length or a
/// non-hex character. A well-formed MAC that does not match is `Ok(false)`.
pub fn validate_mac_hex(
    key: &[u8],
    message: impl Into<ByteBuffer>,
    claimed_hex: &str,
) -> Result<bool, MacError> {
    let claimed = Digest::from_hex(claimed_hex)?;

    Ok(validate_mac(key, message, &claimed))
}

/// Keyed prefix-MAC signer/verifier.
///
/// Holds the key for repeated use and wipes it on drop.
#[derive(Debug, Zeroize, ZeroizeOnDrop)]
pub struct PrefixMac {
    key: ByteBuffer,
}

impl PrefixMac {
    /// Creates a signer for `key`.
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: ByteBuffer::from_slice(key),
        }
    }

    /// Length of the key in bytes.
    pub fn key_len(&self) -> usize {
        self.key.len()
    }

    /// Computes the MAC of `message`.
    pub fn sign(&self, message: impl Into<ByteBuffer>) -> Digest {
        generate_mac(&self.key, message)
    }

    /// Checks `claimed` against the MAC of `message`.
    pub fn verify(&self, message: impl Into<ByteBuffer>, claimed: &Digest) -> bool {
        validate_mac(&self.key, message, claimed)
    }
}
