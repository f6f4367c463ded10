// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Prefix MAC over SHA-256: `MAC = SHA-256(key ‖ message)`.
//!
//! This construction is **insecure**. The MAC is SHA-256's final chaining
//! value, so anyone holding a MAC and the key length can resume the hash and
//! authenticate `message ‖ glue ‖ suffix` without the key (see
//! `lenext-attack`). It is implemented as-is to demonstrate that weakness;
//! use HMAC for anything real.
//!
//! # Example
//!
//! ```rust
//! use lenext_mac::{generate_mac, validate_mac};
//!
//! let mac = generate_mac(b"secret", b"data");
//!
//! assert!(validate_mac(b"secret", b"data", &mac));
//! assert!(!validate_mac(b"secret", b"date", &mac));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod prefix_mac;

pub use error::MacError;
pub use prefix_mac::{PrefixMac, generate_mac, validate_mac, validate_mac_hex};
