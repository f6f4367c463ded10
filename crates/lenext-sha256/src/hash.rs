// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lenext_buffer::ByteBuffer;

use crate::consts::BLOCK_LEN;
use crate::digest::{ChainingValue, Digest};
use crate::padding::pad;
use crate::state::Sha256State;

/// Hashes `message`, starting from `initial`.
///
/// - Ordinary SHA-256: `prior_len = 0`, `initial = ChainingValue::initial()`.
/// - Resumed hashing: `initial` is a chaining value reached after absorbing
///   `prior_len` bytes (a whole number of blocks, padding included). Only
///   `message` goes through the compression function; the final length field
///   covers `prior_len + message.len()`.
///
/// Blocks are threaded strictly in order: each block's output chaining value
/// is the next block's input.
pub fn hash(mut message: ByteBuffer, prior_len: u64, initial: ChainingValue) -> Digest {
    pad(&mut message, prior_len);

    let mut state = Sha256State::resume(initial, prior_len / BLOCK_LEN as u64);

    for chunk in message.chunks_exact(BLOCK_LEN) {
        state.compress_chunk(chunk);
    }

    tracing::trace!(
        padded_len = message.len(),
        prior_len,
        blocks = state.blocks(),
        "sha256 blocks compressed"
    );

    state.finalize()
}

/// Standard SHA-256 of `data`.
///
/// ```rust
/// use lenext_sha256::sha256;
///
/// assert_eq!(
///     sha256(b"abc").to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
/// );
/// ```
pub fn sha256(data: &[u8]) -> Digest {
    hash(ByteBuffer::from_slice(data), 0, ChainingValue::initial())
}
