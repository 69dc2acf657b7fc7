// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Identity of a hash variant: canonical name and its two lengths.
///
/// Immutable and `Copy`; shared by value between every layer that needs to
/// size buffers (HMAC pads, HKDF blocks, PBKDF2 blocks, TLS secrets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmDescriptor {
    /// Canonical lowercase name (`"sha256"`, `"md5"`, ...)
    pub name: &'static str,
    /// Digest output length in bytes
    pub output_len: usize,
    /// Compression block length in bytes
    pub block_len: usize,
}

impl AlgorithmDescriptor {
    /// Largest output HKDF-Expand can produce with this digest (255 * HashLen).
    pub const fn max_expand_len(&self) -> usize {
        255 * self.output_len
    }
}
