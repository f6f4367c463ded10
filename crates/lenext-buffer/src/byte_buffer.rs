// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::alloc::{Layout, handle_alloc_error};
use std::ops::{Deref, DerefMut};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Owned, exclusively-held growable byte sequence.
///
/// Invariant: `capacity() >= len()`. Growth is amortized doubling relative to
/// the required length, and every growth zeroizes the allocation it leaves
/// behind.
#[derive(Default, Zeroize, ZeroizeOnDrop)]
pub struct ByteBuffer {
    inner: Vec<u8>,
}

impl core::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("data", &"REDACTED")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl ByteBuffer {
    /// Creates an empty buffer without allocating.
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Creates an empty buffer with room for at least `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut buffer = Self::new();
        buffer.grow_to(capacity);
        buffer
    }

    /// Creates a buffer holding a copy of `bytes`.
    pub fn from_slice(bytes: &[u8]) -> Self {
        let mut buffer = Self::new();
        buffer.append(bytes);
        buffer
    }

    /// Returns the number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current capacity in bytes.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the buffer contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.inner
    }

    /// Returns the buffer contents mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.inner
    }

    /// Appends a single byte.
    pub fn push(&mut self, byte: u8) {
        self.reserve_for(self.len() + 1);
        self.inner.push(byte);
    }

    /// Appends `bytes` at the end.
    pub fn append(&mut self, bytes: &[u8]) {
        self.reserve_for(self.len() + bytes.len());
        self.inner.extend_from_slice(bytes);
    }

    /// Inserts `bytes` at the start.
    ///
    /// Existing content is shifted forward by `bytes.len()` before the prefix
    /// is written, so `prepend(p)` on `m` yields `p ‖ m`.
    pub fn prepend(&mut self, bytes: &[u8]) {
        let old_len = self.len();
        let shift = bytes.len();

        self.reserve_for(old_len + shift);
        self.inner.resize(old_len + shift, 0);
        self.inner.copy_within(0..old_len, shift);
        self.inner[..shift].copy_from_slice(bytes);
    }

    /// Resizes the buffer to `new_len`, filling new bytes with `value`.
    ///
    /// Shrinking zeroizes the truncated tail.
    pub fn resize(&mut self, new_len: usize, value: u8) {
        if new_len < self.len() {
            self.inner[new_len..].zeroize();
            self.inner.truncate(new_len);
            return;
        }

        self.reserve_for(new_len);
        self.inner.resize(new_len, value);
    }

    /// Zeroizes and removes all bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.inner.as_mut_slice().zeroize();
        self.inner.clear();
    }

    /// Grows when `required` would reach or exceed the current capacity.
    #[inline(always)]
    fn reserve_for(&mut self, required: usize) {
        if required < self.capacity() {
            return;
        }

        self.grow_to(required.saturating_mul(2));
    }

    /// Moves the content into a fresh allocation of `new_capacity` bytes.
    ///
    /// 1. Reserve the new allocation (fatal on failure)
    /// 2. Copy current content
    /// 3. Zeroize the old allocation, spare capacity included
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, new_capacity: usize) {
        let mut next = Vec::new();

        if next.try_reserve_exact(new_capacity).is_err() {
            let layout = Layout::array::<u8>(new_capacity).unwrap_or_else(|_| Layout::new::<u8>());
            handle_alloc_error(layout);
        }

        next.extend_from_slice(&self.inner);

        let mut old = core::mem::replace(&mut self.inner, next);
        old.zeroize();
    }
}

impl Deref for ByteBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ByteBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl From<&[u8]> for ByteBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_slice(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for ByteBuffer {
    fn from(bytes: &[u8; N]) -> Self {
        Self::from_slice(bytes)
    }
}

impl From<Vec<u8>> for ByteBuffer {
    fn from(inner: Vec<u8>) -> Self {
        Self { inner }
    }
}

impl From<&str> for ByteBuffer {
    fn from(text: &str) -> Self {
        Self::from_slice(text.as_bytes())
    }
}

impl Extend<u8> for ByteBuffer {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.push(byte);
        }
    }
}

impl PartialEq for ByteBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for ByteBuffer {}
