// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! GMAC: the AES-GCM authentication tag over empty plaintext.
//!
//! Output layout is `nonce (12 bytes) || tag (16 bytes)`; the split point is
//! part of the persisted format.
//!
//! **Nonce caveat**: `compute` draws a fresh random 96-bit nonce on every call
//! instead of taking a caller-managed one. GCM requires nonce uniqueness under
//! a key; random 96-bit nonces only give that probabilistically, so callers
//! authenticating many messages under one key must bound the message count at
//! the integration layer.

use crate::entropy::{EntropySource, SystemEntropySource};
use crate::error::MacError;
use crate::gcm;
use crate::traits::Mac;

/// GMAC nonce length in bytes.
pub const NONCE_LEN: usize = 12;
/// GMAC tag length in bytes.
pub const TAG_LEN: usize = 16;

/// AES key size used by GMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GmacKeySize {
    /// AES-128 (16-byte key)
    Aes128,
    /// AES-192 (24-byte key)
    Aes192,
    /// AES-256 (32-byte key)
    #[default]
    Aes256,
}

impl GmacKeySize {
    /// Every supported size.
    pub const ALL: [GmacKeySize; 3] = [
        GmacKeySize::Aes128,
        GmacKeySize::Aes192,
        GmacKeySize::Aes256,
    ];

    /// Parses a key size given in bits.
    ///
    /// # Errors
    ///
    /// [`MacError::InvalidKeySize`] for anything but 128, 192 or 256.
    pub fn from_bits(bits: usize) -> Result<Self, MacError> {
        match bits {
            128 => Ok(GmacKeySize::Aes128),
            192 => Ok(GmacKeySize::Aes192),
            256 => Ok(GmacKeySize::Aes256),
            other => Err(MacError::InvalidKeySize(other)),
        }
    }

    /// Key size in bits.
    pub const fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        match self {
            GmacKeySize::Aes128 => 16,
            GmacKeySize::Aes192 => 24,
            GmacKeySize::Aes256 => 32,
        }
    }
}

/// GMAC over AES-GCM with a per-call random nonce.
#[derive(Debug, Clone)]
pub struct Gmac<E: EntropySource = SystemEntropySource> {
    key_size: GmacKeySize,
    entropy: E,
}

impl Gmac<SystemEntropySource> {
    /// GMAC drawing nonces from the OS CSPRNG.
    pub fn new(key_size: GmacKeySize) -> Self {
        Self::with_entropy(key_size, SystemEntropySource {})
    }
}

impl<E: EntropySource> Gmac<E> {
    /// Nonce length in bytes.
    pub const NONCE_LEN: usize = NONCE_LEN;
    /// Tag length in bytes.
    pub const TAG_LEN: usize = TAG_LEN;

    /// GMAC drawing nonces from `entropy`.
    pub fn with_entropy(key_size: GmacKeySize, entropy: E) -> Self {
        Self { key_size, entropy }
    }

    /// Configured AES key size.
    pub fn key_size(&self) -> GmacKeySize {
        self.key_size
    }

    fn check_key(&self, key: &[u8]) -> Result<(), MacError> {
        let expected = self.key_size.key_len();
        if key.len() != expected {
            return Err(MacError::InvalidKeyLength {
                expected,
                actual: key.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn compute_with_nonce(
        &self,
        data: &[u8],
        key: &[u8],
        nonce: &[u8; NONCE_LEN],
    ) -> Result<Vec<u8>, MacError> {
        self.check_key(key)?;
        let tag = gcm::seal_empty(self.key_size, key, nonce, data)?;

        let mut out = Vec::with_capacity(NONCE_LEN + TAG_LEN);
        out.extend_from_slice(nonce);
        out.extend_from_slice(&tag);
        Ok(out)
    }
}

impl<E: EntropySource> Mac for Gmac<E> {
    fn name(&self) -> String {
        format!("gmac-{}", self.key_size.bits())
    }

    fn output_len(&self) -> usize {
        NONCE_LEN + TAG_LEN
    }

    fn compute(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, MacError> {
        self.check_key(key)?;

        let mut nonce = [0u8; NONCE_LEN];
        self.entropy.fill_bytes(&mut nonce)?;

        self.compute_with_nonce(data, key, &nonce)
    }

    fn verify(&self, data: &[u8], mac: &[u8], key: &[u8]) -> bool {
        if mac.len() != NONCE_LEN + TAG_LEN {
            tracing::debug!(len = mac.len(), "GMAC value has wrong length");
            return false;
        }
        if self.check_key(key).is_err() {
            tracing::debug!(len = key.len(), "GMAC key has wrong length");
            return false;
        }

        let (nonce, tag) = mac.split_at(NONCE_LEN);
        let (Ok(nonce), Ok(tag)) = (
            <&[u8; NONCE_LEN]>::try_from(nonce),
            <&[u8; TAG_LEN]>::try_from(tag),
        ) else {
            return false;
        };

        gcm::open_empty(self.key_size, key, nonce, data, tag)
    }
}
