// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Length-extension forgery against `SHA-256(key ‖ message)` prefix MACs.
//!
//! Given the MAC of `key ‖ message`, the key *length* and the message, an
//! attacker can compute a valid MAC for `message ‖ glue ‖ suffix` for any
//! suffix:
//!
//! 1. The leaked MAC is the chaining value SHA-256 reached after absorbing
//!    `key ‖ message ‖ glue`, where `glue` is the padding that hash appended.
//! 2. `glue` depends only on `key.len() + message.len()`, so it can be rebuilt
//!    without the key.
//! 3. Resuming from the leaked chaining value and hashing `suffix`, with the
//!    final length field covering everything before it, yields
//!    `SHA-256(key ‖ message ‖ glue ‖ suffix)`.
//!
//! The key is only ever a byte count here. Its content is never needed and
//! never materialized.
//!
//! # Example
//!
//! ```rust
//! use lenext_attack::AttackContext;
//! use lenext_mac::{generate_mac, validate_mac};
//!
//! # fn main() -> Result<(), lenext_attack::AttackError> {
//! // Verifier side: the key stays secret
//! let leaked = generate_mac(b"secret", b"data");
//!
//! // Attacker side: knows the MAC, the message and the key length
//! let forgery = AttackContext::new(leaked, 6, b"data", b"evil")?.forge();
//!
//! assert!(validate_mac(b"secret", forgery.forged_message(), &forgery.digest()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod context;
mod error;
mod forgery;

pub use context::{AttackContext, extend_mac, find_key_len};
pub use error::AttackError;
pub use forgery::Forgery;
