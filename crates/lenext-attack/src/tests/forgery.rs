// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::extend_mac;

const SECRET_DATA_MAC: &str = "ca2c6fe0b879f58a8afea413fef7202c94a5156ccfb5d22c4ef690af5117a081";

#[test]
fn test_parts_split_forged_message() {
    let forgery = extend_mac(SECRET_DATA_MAC, 6, b"data", b"evil").expect("Failed to forge");

    assert_eq!(forgery.original(), b"data");
    assert_eq!(forgery.original_len(), 4);
    assert_eq!(forgery.suffix(), b"evil");
    assert_eq!(forgery.suffix_len(), 4);
    assert_eq!(forgery.glue().len(), 54);
    assert_eq!(forgery.forged_message().len(), 62);
}

#[test]
fn test_glue_layout() {
    let forgery = extend_mac(SECRET_DATA_MAC, 6, b"data", b"evil").expect("Failed to forge");
    let glue = forgery.glue();

    assert_eq!(glue[0], 0x80);
    assert!(glue[1..46].iter().all(|&b| b == 0));
    // 10 bytes of key ‖ message = 0x50 bits
    assert_eq!(&glue[46..], &[0, 0, 0, 0, 0, 0, 0, 0x50]);
}

#[test]
fn test_write_escaped() {
    let forgery = extend_mac(SECRET_DATA_MAC, 6, b"data", b"evil").expect("Failed to forge");

    let mut out = Vec::new();
    forgery.write_escaped(&mut out).expect("Failed to write");

    let expected = format!("data\\x80{}\\x50evil", "\\x00".repeat(52));
    assert_eq!(String::from_utf8(out).expect("Not UTF-8"), expected);
}

#[test]
fn test_write_escaped_keeps_raw_bytes() {
    // Non-ASCII bytes in original and suffix are written as-is
    let forgery = extend_mac(SECRET_DATA_MAC, 6, &[0xff, 0x00], &[0xfe]).expect("Failed to forge");

    let mut out = Vec::new();
    forgery.write_escaped(&mut out).expect("Failed to write");

    assert_eq!(&out[..2], &[0xff, 0x00]);
    assert_eq!(out[2..6], *b"\\x80");
    assert_eq!(out.last(), Some(&0xfe));
}
