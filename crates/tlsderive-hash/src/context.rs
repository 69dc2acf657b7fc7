// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use digest::DynDigest;

/// Per-call streaming digest context.
///
/// Created by [`HashFunction::context`](crate::HashFunction::context),
/// fed with [`update`](Self::update) any number of times and consumed by
/// [`finalize`](Self::finalize). A finalized context cannot be touched again.
pub struct HashContext {
    inner: Box<dyn DynDigest + Send>,
    output_len: usize,
}

impl HashContext {
    /// Wraps any [`DynDigest`], so digests outside [`HashAlgorithm`](crate::HashAlgorithm)
    /// can implement [`HashFunction`](crate::HashFunction).
    pub fn new(inner: Box<dyn DynDigest + Send>) -> Self {
        let output_len = inner.output_size();
        Self { inner, output_len }
    }

    /// Absorbs `data`.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Output length of the digest this context produces.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Consumes the context and returns the digest.
    pub fn finalize(self) -> Vec<u8> {
        self.inner.finalize().into_vec()
    }
}

impl core::fmt::Debug for HashContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "HashContext {{ output_len: {} }}", self.output_len)
    }
}
