// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message padding per FIPS 180-4 Section 5.1.1
//!
//! Padding is `0x80 ‖ 0x00 * k ‖ be64(total_bits)`, where `k` is the smallest
//! count that leaves exactly 8 bytes before the next 64-byte boundary.
//!
//! `total_bits` may cover more than the bytes being padded: a caller resuming
//! from an earlier chaining value declares the bytes already absorbed as
//! `prior_len`, and the length field reports the whole stream.

use lenext_buffer::ByteBuffer;

use crate::consts::{BLOCK_LEN, LENGTH_FIELD_LEN, PADDING_MARKER};

/// Offset inside a block where the length field starts.
const LENGTH_FIELD_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// Number of zero bytes between the `0x80` marker and the length field.
///
/// With `base = message_len mod 64`, the marker lands at `base`, so zeros run
/// from `base + 1` up to offset 56 of the same block when `base <= 55`
/// (`55 - base` zeros), or of the next block otherwise (`119 - base` zeros).
pub fn padding_zero_len(message_len: u64) -> usize {
    let base = (message_len % BLOCK_LEN as u64) as usize;

    if base < LENGTH_FIELD_OFFSET {
        LENGTH_FIELD_OFFSET - 1 - base
    } else {
        BLOCK_LEN + LENGTH_FIELD_OFFSET - 1 - base
    }
}

/// Length of a `message_len`-byte message once padded, mod 2^64.
pub fn padded_len(message_len: u64) -> u64 {
    let padding = 1 + padding_zero_len(message_len) as u64 + LENGTH_FIELD_LEN as u64;
    message_len.wrapping_add(padding)
}

fn append_padding(buffer: &mut ByteBuffer, message_len: u64, prior_len: u64) {
    buffer.push(PADDING_MARKER);
    buffer.resize(buffer.len() + padding_zero_len(message_len), 0);

    // Length field is mod 2^64 bits
    let bit_len = message_len.wrapping_add(prior_len).wrapping_mul(8);
    buffer.append(&bit_len.to_be_bytes());
}

/// Pads `buffer` in place.
///
/// `prior_len` is the number of bytes absorbed before this buffer's content
/// (0 for ordinary hashing). It only affects the length field.
///
/// # Panics
///
/// Panics if the padded length is not a multiple of 64 bytes. That can only
/// happen through a defect in the zero-count arithmetic and is not recoverable.
pub fn pad(buffer: &mut ByteBuffer, prior_len: u64) {
    let original_len = buffer.len() as u64;

    append_padding(buffer, original_len, prior_len);

    assert!(
        buffer.len() % BLOCK_LEN == 0,
        "padded message is {} bytes, not a multiple of {BLOCK_LEN}",
        buffer.len()
    );
}

/// Rebuilds the padding a hash of a `message_len`-byte message appended.
///
/// This is the glue between a message and anything hashed after it by
/// resuming from its digest. Only the length is needed, never the content.
///
/// ```rust
/// use lenext_sha256::glue_padding;
///
/// // 10 bytes: marker, 45 zeros, then 80 bits as a big-endian u64
/// let glue = glue_padding(10);
///
/// assert_eq!(glue.len(), 54);
/// assert_eq!(glue[0], 0x80);
/// assert_eq!(&glue[46..], &80u64.to_be_bytes());
/// ```
///
/// # Panics
///
/// Panics if `message_len + glue` is not a multiple of 64 bytes.
pub fn glue_padding(message_len: u64) -> ByteBuffer {
    let mut glue = ByteBuffer::with_capacity(BLOCK_LEN + LENGTH_FIELD_LEN + 1);

    append_padding(&mut glue, message_len, 0);

    // 2^64 is a multiple of 64, so wrapping keeps the residue
    assert!(
        message_len.wrapping_add(glue.len() as u64) % BLOCK_LEN as u64 == 0,
        "glue of {} bytes does not align a {message_len}-byte message to {BLOCK_LEN}",
        glue.len()
    );

    glue
}
