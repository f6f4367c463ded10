// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-256 with an exposed, resumable chaining value.
//!
//! Implementation per FIPS 180-4 (Secure Hash Standard). Whole messages only:
//! the message is materialized in a [`ByteBuffer`](lenext_buffer::ByteBuffer),
//! padded in place, then compressed block by block.
//!
//! Besides ordinary hashing, [`hash`] accepts an arbitrary starting
//! [`ChainingValue`] and a count of bytes already absorbed. There is no
//! special mode in the compression function for this: a resumed hash runs
//! exactly the same rounds from different initial conditions.
//!
//! References:
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/fips/nist.fips.180-4.pdf>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod compress;
mod consts;
mod digest;
mod error;
mod hash;
mod padding;
mod state;
mod word;

pub use compress::compress;
pub use consts::{BLOCK_LEN, HASH_LEN, HEX_LEN, LENGTH_FIELD_LEN, PADDING_MARKER, STATE_WORDS};
pub use digest::{ChainingValue, Digest};
pub use error::DigestParseError;
pub use hash::{hash, sha256};
pub use padding::{glue_padding, pad, padded_len, padding_zero_len};
pub use state::Sha256State;
