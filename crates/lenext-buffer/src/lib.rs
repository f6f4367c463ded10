// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable owned byte buffer used as the message substrate for hashing.
//!
//! `ByteBuffer` is a `Vec<u8>` wrapper with an explicit growth policy and
//! automatic zeroization:
//!
//! - **Amortized doubling**: when the required length reaches or exceeds the
//!   current capacity, the buffer reallocates to twice the required length.
//! - **Prepend**: [`ByteBuffer::prepend`] shifts existing content forward and
//!   writes the prefix at the start, preserving the order of both.
//! - **Zeroization**: the old allocation is wiped on every growth and the
//!   live allocation is wiped on drop. Buffers carry secret keys in the MAC
//!   path.
//! - **Fatal allocation failure**: a failed reallocation terminates the
//!   process through [`std::alloc::handle_alloc_error`].
//!
//! # Example
//!
//! ```rust
//! use lenext_buffer::ByteBuffer;
//!
//! let mut buffer = ByteBuffer::from_slice(b"message");
//! buffer.prepend(b"key");
//! buffer.push(0x80);
//!
//! assert_eq!(buffer.as_slice(), b"keymessage\x80");
//! ```

#![warn(missing_docs)]

mod byte_buffer;

#[cfg(test)]
mod tests;

pub use byte_buffer::ByteBuffer;
