// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time authenticator (RFC 8439 Section 2.5).
//!
//! Two backends compute the same function and must agree bit for bit:
//!
//! - [`FixedLimbBackend`]: five 26-bit limbs in `u32` words, `u64` products,
//!   reduction by folding the overflow times 5 (`2^130 ≡ 5 mod 2^130 - 5`)
//! - [`BigUintBackend`]: arbitrary-precision reference arithmetic
//!
//! The backend is picked explicitly through [`Poly1305BackendKind`].

mod biguint;
mod limb;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::error::MacError;
use crate::traits::Mac;

pub use biguint::BigUintBackend;
pub use limb::FixedLimbBackend;

/// Key length: 16-byte `r` followed by 16-byte `s`.
pub const KEY_LEN: usize = 32;
/// Tag length.
pub const TAG_LEN: usize = 16;
pub(crate) const BLOCK_LEN: usize = 16;

/// One Poly1305 arithmetic strategy.
pub trait Poly1305Backend {
    /// Short backend identifier, used in logs and benchmarks.
    fn name(&self) -> &'static str;

    /// Computes the 16-byte tag of `data` under the one-time `key`.
    ///
    /// # Errors
    ///
    /// [`MacError::ComputationFailure`] if the arithmetic backend fails.
    fn authenticate(&self, key: &[u8; KEY_LEN], data: &[u8]) -> Result<[u8; TAG_LEN], MacError>;
}

/// Backend selection flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Poly1305BackendKind {
    /// [`FixedLimbBackend`]
    #[default]
    FixedLimb,
    /// [`BigUintBackend`]
    BigUint,
}

impl Poly1305BackendKind {
    /// Both backends.
    pub const ALL: [Poly1305BackendKind; 2] =
        [Poly1305BackendKind::FixedLimb, Poly1305BackendKind::BigUint];

    /// Runs the selected backend.
    pub fn authenticate(
        self,
        key: &[u8; KEY_LEN],
        data: &[u8],
    ) -> Result<[u8; TAG_LEN], MacError> {
        match self {
            Poly1305BackendKind::FixedLimb => FixedLimbBackend.authenticate(key, data),
            Poly1305BackendKind::BigUint => BigUintBackend.authenticate(key, data),
        }
    }

    /// Identifier of the selected backend.
    pub fn name(self) -> &'static str {
        match self {
            Poly1305BackendKind::FixedLimb => FixedLimbBackend.name(),
            Poly1305BackendKind::BigUint => BigUintBackend.name(),
        }
    }
}

/// Poly1305 MAC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Poly1305 {
    backend: Poly1305BackendKind,
}

impl Poly1305 {
    /// Key length in bytes.
    pub const KEY_LEN: usize = KEY_LEN;
    /// Tag length in bytes.
    pub const TAG_LEN: usize = TAG_LEN;

    /// Poly1305 with the default (fixed-limb) backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Poly1305 with an explicit backend.
    pub fn with_backend(backend: Poly1305BackendKind) -> Self {
        Self { backend }
    }

    /// Selected backend.
    pub fn backend(&self) -> Poly1305BackendKind {
        self.backend
    }

    fn key_array(key: &[u8]) -> Result<&[u8; KEY_LEN], MacError> {
        key.try_into().map_err(|_| MacError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: key.len(),
        })
    }
}

impl Mac for Poly1305 {
    fn name(&self) -> String {
        "poly1305".to_owned()
    }

    fn output_len(&self) -> usize {
        TAG_LEN
    }

    fn compute(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, MacError> {
        let key = Self::key_array(key)?;

        self.backend
            .authenticate(key, data)
            .map(|tag| tag.to_vec())
            .map_err(|err| {
                tracing::error!(backend = self.backend.name(), %err, "poly1305 computation failed");
                err
            })
    }

    fn verify(&self, data: &[u8], mac: &[u8], key: &[u8]) -> bool {
        if mac.len() != TAG_LEN {
            tracing::debug!(len = mac.len(), "poly1305 tag has wrong length");
            return false;
        }
        let Ok(key) = Self::key_array(key) else {
            tracing::debug!(len = key.len(), "poly1305 key has wrong length");
            return false;
        };

        match self.backend.authenticate(key, data) {
            Ok(tag) => {
                let tag = Zeroizing::new(tag);
                tag.as_slice().ct_eq(mac).into()
            }
            Err(_) => false,
        }
    }
}

/// Reads four little-endian 32-bit words.
pub(crate) fn le_words(bytes: &[u8; BLOCK_LEN]) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}

/// Splits the key into the clamped `r` words and the raw `s` bytes.
///
/// Clamp mask: word 0 `&= 0x0fffffff`, words 1..=3 `&= 0x0ffffffc`.
///
/// Both halves are returned in [`Zeroizing`] so they are wiped when the
/// caller drops them.
pub(crate) fn split_key(
    key: &[u8; KEY_LEN],
) -> (Zeroizing<[u32; 4]>, Zeroizing<[u8; BLOCK_LEN]>) {
    let mut r = Zeroizing::new([0u8; BLOCK_LEN]);
    let mut s = Zeroizing::new([0u8; BLOCK_LEN]);
    r.copy_from_slice(&key[..BLOCK_LEN]);
    s.copy_from_slice(&key[BLOCK_LEN..]);

    let mut r_words = Zeroizing::new(le_words(&r));
    r_words[0] &= 0x0fff_ffff;
    r_words[1] &= 0x0fff_fffc;
    r_words[2] &= 0x0fff_fffc;
    r_words[3] &= 0x0fff_fffc;

    (r_words, s)
}

/// Message block with its padding applied.
///
/// Full blocks carry an implicit 2^128 bit (`full = true`). A final partial
/// block gets `0x01` right after the last byte and zeros after that, and no
/// implicit bit.
pub(crate) struct PaddedBlock {
    pub(crate) bytes: [u8; BLOCK_LEN],
    pub(crate) full: bool,
}

pub(crate) fn padded_blocks(data: &[u8]) -> impl Iterator<Item = PaddedBlock> + '_ {
    data.chunks(BLOCK_LEN).map(|chunk| {
        let mut bytes = [0u8; BLOCK_LEN];
        bytes[..chunk.len()].copy_from_slice(chunk);
        let full = chunk.len() == BLOCK_LEN;
        if !full {
            bytes[chunk.len()] = 0x01;
        }
        PaddedBlock { bytes, full }
    })
}
