// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io::{self, Write};

use lenext_buffer::ByteBuffer;
use lenext_sha256::Digest;

/// Result of a length-extension forgery.
///
/// The forged message is `original ‖ glue ‖ suffix`; a verifier holding the
/// real key computes exactly [`Forgery::digest`] for it.
#[derive(Debug)]
pub struct Forgery {
    digest: Digest,
    message: ByteBuffer,
    original_len: usize,
    glue_len: usize,
    suffix_len: usize,
    prior_blocks: u64,
}

impl Forgery {
    pub(crate) fn new(
        digest: Digest,
        message: ByteBuffer,
        original_len: usize,
        glue_len: usize,
        suffix_len: usize,
        prior_blocks: u64,
    ) -> Self {
        debug_assert_eq!(message.len(), original_len + glue_len + suffix_len);

        Self {
            digest,
            message,
            original_len,
            glue_len,
            suffix_len,
            prior_blocks,
        }
    }

    /// The forged MAC.
    pub fn digest(&self) -> Digest {
        self.digest
    }

    /// `original ‖ glue ‖ suffix`, the bytes to hand to the verifier.
    pub fn forged_message(&self) -> &[u8] {
        &self.message
    }

    /// The message part whose MAC leaked.
    pub fn original(&self) -> &[u8] {
        &self.message[..self.original_len]
    }

    /// Padding the leaked hash appended after `key ‖ original`.
    pub fn glue(&self) -> &[u8] {
        &self.message[self.original_len..self.original_len + self.glue_len]
    }

    /// The attacker-chosen extension.
    pub fn suffix(&self) -> &[u8] {
        &self.message[self.original_len + self.glue_len..]
    }

    /// Length of the original message in bytes.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Length of the suffix in bytes.
    pub fn suffix_len(&self) -> usize {
        self.suffix_len
    }

    /// Blocks the leaked hash absorbed for `key ‖ original ‖ glue`.
    pub fn prior_blocks(&self) -> u64 {
        self.prior_blocks
    }

    /// Writes the forged message with the glue escaped.
    ///
    /// Original and suffix bytes are written raw; each glue byte is written
    /// as a `\xHH` escape (lowercase hex). No trailing newline.
    pub fn write_escaped<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.original())?;

        for byte in self.glue() {
            write!(out, "\\x{byte:02x}")?;
        }

        out.write_all(self.suffix())
    }
}
