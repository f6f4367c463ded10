// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 length extension, end to end.
//!
//! A MAC computed as `SHA-256(key ‖ message)` leaks the hash's internal
//! chaining value. Anyone holding that MAC, the message, and the key length
//! can compute a valid MAC for `message ‖ glue ‖ suffix` without the key.
//!
//! # Crates
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`buffer`] | Growable byte buffer with prepend, zeroized on drop |
//! | [`sha256`] | SHA-256 engine with a resumable chaining value |
//! | [`mac`] | Prefix MAC: generate and validate |
//! | [`attack`] | Length-extension forgery |
//!
//! # Example
//!
//! ```rust
//! use lenext::attack::AttackContext;
//! use lenext::mac::{generate_mac, validate_mac};
//!
//! let leaked = generate_mac(b"secret", b"data");
//!
//! // The attacker knows the MAC, the message and the key length only
//! let forgery = AttackContext::new(leaked, 6, b"data", b"evil")?.forge();
//!
//! assert!(validate_mac(b"secret", forgery.forged_message(), &forgery.digest()));
//! assert_eq!(
//!     forgery.digest().to_string(),
//!     "ffc4dda23dfc54b6d16168e1b3fb66b37eb8a72aded6f77697def8356d33e4cb"
//! );
//! # Ok::<(), lenext::attack::AttackError>(())
//! ```
//!
//! # Security
//!
//! The prefix MAC in [`mac`] is broken on purpose. Use HMAC for anything
//! real.
//!
//! # License
//!
//! GPL-3.0-only

pub use lenext_attack as attack;
pub use lenext_buffer as buffer;
pub use lenext_mac as mac;
pub use lenext_sha256 as sha256;
