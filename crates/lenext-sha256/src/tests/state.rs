// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ChainingValue, Sha256State, sha256};

#[test]
fn test_new_starts_from_initial_value() {
    let state = Sha256State::new();

    assert_eq!(state.chaining_value(), ChainingValue::initial());
    assert_eq!(state.blocks(), 0);
}

#[test]
fn test_resume_tracks_prior_blocks() {
    let cv = ChainingValue::from_words([9; 8]);
    let mut state = Sha256State::resume(cv, 3);

    assert_eq!(state.chaining_value(), cv);
    assert_eq!(state.blocks(), 3);

    state.compress_block(&[0u8; 64]);

    assert_eq!(state.blocks(), 4);
    assert_ne!(state.chaining_value(), cv);
}

#[test]
fn test_finalize_returns_chaining_value() {
    let mut block = [0u8; 64];
    block[0] = 0x80;

    let mut state = Sha256State::default();
    state.compress_block(&block);

    assert_eq!(state.finalize(), sha256(b""));
}
