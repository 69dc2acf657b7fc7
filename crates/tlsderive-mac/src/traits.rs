// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::MacError;

/// Message authentication code contract.
pub trait Mac {
    /// Algorithm name in the `hmac-<hash>` / `gmac-<bits>` / `poly1305` grammar.
    fn name(&self) -> String;

    /// Length in bytes of what [`compute`](Self::compute) returns.
    fn output_len(&self) -> usize;

    /// Authenticates `data` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MacError::InvalidKeyLength`] when the algorithm has a fixed
    /// key size and `key` does not match it, or a backend failure.
    fn compute(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, MacError>;

    /// Checks `mac` against `data` and `key`.
    ///
    /// Total: every failure (wrong length, wrong key, wrong tag, backend
    /// fault) is reported as `false`.
    fn verify(&self, data: &[u8], mac: &[u8], key: &[u8]) -> bool;
}

impl<M: Mac + ?Sized> Mac for Box<M> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn output_len(&self) -> usize {
        (**self).output_len()
    }

    fn compute(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, MacError> {
        (**self).compute(data, key)
    }

    fn verify(&self, data: &[u8], mac: &[u8], key: &[u8]) -> bool {
        (**self).verify(data, mac, key)
    }
}
