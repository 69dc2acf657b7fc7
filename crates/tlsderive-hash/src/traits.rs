// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::context::HashContext;
use crate::descriptor::AlgorithmDescriptor;

/// Streaming digest capability.
///
/// Implementors expose their [`AlgorithmDescriptor`] and hand out fresh
/// [`HashContext`]s. A context follows `create -> update* -> finalize` exactly
/// once; `finalize` consumes it.
pub trait HashFunction {
    /// Name and lengths of this digest.
    fn descriptor(&self) -> AlgorithmDescriptor;

    /// Creates a fresh streaming context.
    fn context(&self) -> HashContext;

    /// Canonical name.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Digest output length in bytes.
    fn output_len(&self) -> usize {
        self.descriptor().output_len
    }

    /// Compression block length in bytes.
    fn block_len(&self) -> usize {
        self.descriptor().block_len
    }

    /// One-shot digest of `data`.
    fn hash(&self, data: &[u8]) -> Vec<u8> {
        let mut ctx = self.context();
        ctx.update(data);
        ctx.finalize()
    }
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn descriptor(&self) -> AlgorithmDescriptor {
        (**self).descriptor()
    }

    fn context(&self) -> HashContext {
        (**self).context()
    }
}

impl<H: HashFunction + ?Sized> HashFunction for Box<H> {
    fn descriptor(&self) -> AlgorithmDescriptor {
        (**self).descriptor()
    }

    fn context(&self) -> HashContext {
        (**self).context()
    }
}
