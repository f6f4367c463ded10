// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 compression function per FIPS 180-4 Section 6.2.2

use crate::consts::{BLOCK_LEN, K256, STATE_WORDS};
use crate::digest::ChainingValue;
use crate::state::Sha256State;
use crate::word::{bsig0, bsig1, ch, maj, ssig0, ssig1};

/// Prepares the message schedule W[0..63] for one block.
pub(crate) fn expand_schedule(w: &mut [u32; 64], block: &[u8; BLOCK_LEN]) {
    // W[0..15] from block (big-endian)
    for (wt, bytes) in w.iter_mut().zip(block.chunks_exact(4)) {
        *wt = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }

    // W[16..63]: W[t] = σ1(W[t-2]) + W[t-7] + σ0(W[t-15]) + W[t-16]
    for t in 16..64 {
        w[t] = ssig1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(ssig0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
}

/// Runs the 64 rounds over the working variables (a..h).
pub(crate) fn run_rounds(wv: &mut [u32; STATE_WORDS], w: &[u32; 64]) {
    for (k, wt) in K256.iter().zip(w.iter()) {
        // T1 = h + Σ1(e) + Ch(e,f,g) + K[t] + W[t]
        let t1 = wv[7]
            .wrapping_add(bsig1(wv[4]))
            .wrapping_add(ch(wv[4], wv[5], wv[6]))
            .wrapping_add(*k)
            .wrapping_add(*wt);

        // T2 = Σ0(a) + Maj(a,b,c)
        let t2 = bsig0(wv[0]).wrapping_add(maj(wv[0], wv[1], wv[2]));

        // h=g, g=f, f=e, e=d+T1, d=c, c=b, b=a, a=T1+T2
        wv.copy_within(0..7, 1);
        wv[4] = wv[4].wrapping_add(t1);
        wv[0] = t1.wrapping_add(t2);
    }
}

/// Maps a chaining value and one 512-bit block to the next chaining value.
///
/// Pure: the same inputs always give the same output, whether the chaining
/// value is H(0), an intermediate state, or a digest leaked by a prefix MAC.
///
/// ```rust
/// use lenext_sha256::{ChainingValue, Digest, compress};
///
/// // "abc" padded to a single block
/// let mut block = [0u8; 64];
/// block[..3].copy_from_slice(b"abc");
/// block[3] = 0x80;
/// block[63] = 24;
///
/// let next = compress(&ChainingValue::initial(), &block);
/// assert_eq!(
///     Digest::from(next).to_string(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
/// );
/// ```
pub fn compress(chaining_value: &ChainingValue, block: &[u8; BLOCK_LEN]) -> ChainingValue {
    let mut state = Sha256State::resume(*chaining_value, 0);
    state.compress_block(block);
    state.chaining_value()
}
