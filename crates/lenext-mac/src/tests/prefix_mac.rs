// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use lenext_buffer::ByteBuffer;
use lenext_sha256::{Digest, DigestParseError, sha256};
use proptest::prelude::*;
use sha2::{Digest as _, Sha256};

use crate::{MacError, PrefixMac, generate_mac, validate_mac, validate_mac_hex};

const SECRET_DATA_MAC: &str = "ca2c6fe0b879f58a8afea413fef7202c94a5156ccfb5d22c4ef690af5117a081";

// =============================================================================
// generate_mac()
// =============================================================================

#[test]
fn test_generate_mac_is_hash_of_key_then_message() {
    let mac = generate_mac(b"secret", b"data");

    assert_eq!(mac, sha256(b"secretdata"));
    assert_eq!(mac.to_string(), SECRET_DATA_MAC);
}

#[test]
fn test_generate_mac_known_vector() {
    let mac = generate_mac(b"key", b"The quick brown fox jumps over the lazy dog");

    assert_eq!(
        mac.to_string(),
        "51729876100348eb46ed8c4bf39efa4037a3a2c687f864348ed69292a67ffdbc"
    );
}

#[test]
fn test_generate_mac_empty_key_is_checksum() {
    assert_eq!(generate_mac(b"", b"abc"), sha256(b"abc"));
}

#[test]
fn test_generate_mac_accepts_owned_buffer() {
    let buffer = ByteBuffer::from(b"data".to_vec());

    assert_eq!(generate_mac(b"secret", buffer).to_string(), SECRET_DATA_MAC);
}

// =============================================================================
// validate_mac(), validate_mac_hex()
// =============================================================================

#[test]
fn test_validate_mac_accepts_own_mac() {
    let mac = generate_mac(b"secret", b"data");

    assert!(validate_mac(b"secret", b"data", &mac));
}

#[test]
fn test_validate_mac_rejects_wrong_key() {
    let mac = generate_mac(b"secret", b"data");

    assert!(!validate_mac(b"Secret", b"data", &mac));
}

#[test]
fn test_validate_mac_ignores_key_message_boundary() {
    // Same concatenation, different split: the prefix MAC cannot tell
    let mac = generate_mac(b"secret", b"data");

    assert!(validate_mac(b"secretd", b"ata", &mac));
}

#[test]
fn test_validate_mac_hex_ok() {
    assert_eq!(validate_mac_hex(b"secret", b"data", SECRET_DATA_MAC), Ok(true));
    assert_eq!(
        validate_mac_hex(b"secret", b"data", &SECRET_DATA_MAC.to_uppercase()),
        Ok(true)
    );
}

#[test]
fn test_validate_mac_hex_mismatch_is_not_an_error() {
    let other = sha256(b"other").to_string();

    assert_eq!(validate_mac_hex(b"secret", b"data", &other), Ok(false));
}

#[test]
fn test_validate_mac_hex_rejects_malformed() {
    let too_long = format!("{SECRET_DATA_MAC}a");

    assert_eq!(
        validate_mac_hex(b"secret", b"data", &too_long),
        Err(MacError::Digest(DigestParseError::InvalidLength { len: 65 }))
    );
    assert!(matches!(
        validate_mac_hex(b"secret", b"data", &"z".repeat(64)),
        Err(MacError::Digest(DigestParseError::InvalidHexCharacter { index: 0, .. }))
    ));
}

// =============================================================================
// PrefixMac
// =============================================================================

#[test]
fn test_prefix_mac_sign_and_verify() {
    let signer = PrefixMac::new(b"secret");
    let mac = signer.sign(b"data");

    assert_eq!(signer.key_len(), 6);
    assert_eq!(mac.to_string(), SECRET_DATA_MAC);
    assert!(signer.verify(b"data", &mac));
    assert!(!signer.verify(b"data!", &mac));
}

#[test]
fn test_prefix_mac_debug_hides_key() {
    let signer = PrefixMac::new(b"hunter2");

    assert!(!format!("{signer:?}").contains("hunter2"));
}

// =============================================================================
// Properties
// =============================================================================

fn bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..max)
}

proptest! {
    #[test]
    fn prop_mac_is_deterministic_and_validates(key in bytes(80), msg in bytes(300)) {
        let first = generate_mac(&key, msg.as_slice());
        let second = generate_mac(&key, msg.as_slice());

        prop_assert_eq!(first, second);
        prop_assert!(validate_mac(&key, msg.as_slice(), &first));
    }

    #[test]
    fn prop_mac_matches_reference(key in bytes(80), msg in bytes(300)) {
        let mut hasher = Sha256::new();
        hasher.update(&key);
        hasher.update(&msg);
        let expected: String = hasher.finalize().iter().map(|b| format!("{b:02x}")).collect();

        prop_assert_eq!(generate_mac(&key, msg.as_slice()).to_string(), expected);
    }

    #[test]
    fn prop_single_byte_change_changes_mac(
        key in proptest::collection::vec(any::<u8>(), 1..64),
        msg in proptest::collection::vec(any::<u8>(), 1..200),
        flip_key in any::<bool>(),
        index in any::<prop::sample::Index>(),
        delta in 1u8..=255,
    ) {
        let original = generate_mac(&key, msg.as_slice());

        let (mut key2, mut msg2) = (key.clone(), msg.clone());
        if flip_key {
            let i = index.index(key2.len());
            key2[i] = key2[i].wrapping_add(delta);
        } else {
            let i = index.index(msg2.len());
            msg2[i] = msg2[i].wrapping_add(delta);
        }

        prop_assert_ne!(generate_mac(&key2, msg2.as_slice()), original);
    }

    #[test]
    fn prop_hex_roundtrip_validates(key in bytes(40), msg in bytes(100)) {
        let mac: Digest = generate_mac(&key, msg.as_slice());
        prop_assert_eq!(validate_mac_hex(&key, msg.as_slice(), &mac.to_string()), Ok(true));
    }
}
