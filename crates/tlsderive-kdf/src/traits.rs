// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::KdfError;

/// Key derivation contract.
pub trait Kdf {
    /// Algorithm name in the `hkdf-<hash>` / `pbkdf2-<hash>` grammar.
    fn name(&self) -> String;

    /// Derives `length` bytes from `secret`.
    ///
    /// `info` binds the output to a context; PBKDF2 ignores it.
    ///
    /// # Errors
    ///
    /// [`KdfError::InvalidOutputLength`] for `length == 0` or above
    /// `255 * hash_len`; algorithm-specific input errors otherwise.
    fn derive(
        &self,
        secret: &[u8],
        salt: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, KdfError>;
}

impl<K: Kdf + ?Sized> Kdf for Box<K> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn derive(
        &self,
        secret: &[u8],
        salt: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, KdfError> {
        (**self).derive(secret, salt, info, length)
    }
}
