// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::{expand_schedule, run_rounds};
use crate::consts::{BLOCK_LEN, STATE_WORDS};
use crate::digest::{ChainingValue, Digest};

/// SHA-256 block threader.
///
/// Holds the chaining value H(i) and the per-block scratch (message schedule,
/// working variables, block copy). Scratch is wiped after every block and the
/// whole state is wiped on drop.
///
/// The state also counts absorbed blocks. A state resumed from a leaked digest
/// starts from the caller's count of blocks already absorbed elsewhere.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Sha256State {
    // Hash state H(i)
    h: [u32; STATE_WORDS],

    // Message schedule W[0..63]
    w: [u32; 64],

    // Working variables a..h
    wv: [u32; STATE_WORDS],

    block: [u8; BLOCK_LEN],
    blocks: u64,
}

impl Sha256State {
    /// Creates a state initialized with H(0).
    pub fn new() -> Self {
        Self::resume(ChainingValue::initial(), 0)
    }

    /// Creates a state continuing from `chaining_value`, as if `absorbed_blocks`
    /// blocks had already been compressed.
    pub fn resume(chaining_value: ChainingValue, absorbed_blocks: u64) -> Self {
        Self {
            h: chaining_value.words(),
            w: [0u32; 64],
            wv: [0u32; STATE_WORDS],
            block: [0u8; BLOCK_LEN],
            blocks: absorbed_blocks,
        }
    }

    /// Compresses one 512-bit block into the chaining value.
    pub fn compress_block(&mut self, block: &[u8; BLOCK_LEN]) {
        self.block.copy_from_slice(block);
        self.compress_loaded();
    }

    /// Compresses a block given as a slice of exactly `BLOCK_LEN` bytes.
    pub(crate) fn compress_chunk(&mut self, chunk: &[u8]) {
        self.block.copy_from_slice(chunk);
        self.compress_loaded();
    }

    fn compress_loaded(&mut self) {
        expand_schedule(&mut self.w, &self.block);

        self.wv = self.h;
        run_rounds(&mut self.wv, &self.w);

        // H(i) = H(i-1) + working variables
        for (h, v) in self.h.iter_mut().zip(self.wv.iter()) {
            *h = h.wrapping_add(*v);
        }

        self.blocks = self.blocks.wrapping_add(1);

        self.w.zeroize();
        self.wv.zeroize();
        self.block.zeroize();
    }

    /// Number of blocks absorbed, including those declared at `resume`.
    pub fn blocks(&self) -> u64 {
        self.blocks
    }

    /// Current chaining value.
    pub fn chaining_value(&self) -> ChainingValue {
        ChainingValue::from_words(self.h)
    }

    /// Consumes the state and returns the current chaining value as a digest.
    pub fn finalize(self) -> Digest {
        Digest::from_words(self.h)
    }
}

impl Default for Sha256State {
    fn default() -> Self {
        Self::new()
    }
}
