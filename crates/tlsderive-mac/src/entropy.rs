// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Used to draw GMAC nonces. Implementations must provide randomness suitable
/// for cryptographic operations; typically backed by the OS CSPRNG.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source fails.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// System-provided cryptographically secure random number generator.
///
/// Uses the OS-level CSPRNG via `getrandom`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        fill_fn(dest).map_err(|err| {
            tracing::error!(%err, "system entropy source failed");
            EntropyError::EntropyNotAvailable
        })
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}
