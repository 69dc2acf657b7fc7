// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HKDF per RFC 5869.

use zeroize::Zeroizing;

use tlsderive_hash::{HashAlgorithm, HashFunction};
use tlsderive_mac::Hmac;

use crate::error::KdfError;
use crate::length::{check_output_len, max_output_len};
use crate::traits::Kdf;

/// HKDF over a configured digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hkdf<H = HashAlgorithm> {
    hmac: Hmac<H>,
}

impl<H: HashFunction> Hkdf<H> {
    /// Creates an HKDF over `hash`.
    pub fn new(hash: H) -> Self {
        Self {
            hmac: Hmac::new(hash),
        }
    }

    /// Underlying digest.
    pub fn hash(&self) -> &H {
        self.hmac.hash()
    }

    /// Largest length [`expand`](Self::expand) accepts (`255 * hash_len`).
    pub fn max_output_len(&self) -> usize {
        max_output_len(self.hash().output_len())
    }

    /// HKDF-Extract (RFC 5869 Section 2.2): `PRK = HMAC(salt, ikm)`.
    ///
    /// An empty salt is replaced by `hash_len` zero bytes.
    pub fn extract(&self, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
        if salt.is_empty() {
            let zero_salt = vec![0u8; self.hash().output_len()];
            return self.hmac.authenticate(&zero_salt, ikm);
        }
        self.hmac.authenticate(salt, ikm)
    }

    /// HKDF-Expand (RFC 5869 Section 2.3).
    ///
    /// `T(i) = HMAC(prk, T(i-1) || info || i)` for `i = 1..=ceil(length / hash_len)`,
    /// concatenated and truncated to `length`.
    ///
    /// # Errors
    ///
    /// [`KdfError::InvalidOutputLength`] for `length == 0` or above
    /// [`max_output_len`](Self::max_output_len).
    pub fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>, KdfError> {
        let hash_len = self.hash().output_len();
        check_output_len(length, hash_len)?;

        // Single-byte counter: at most 255 rounds
        let rounds = u8::try_from(length.div_ceil(hash_len)).map_err(|_| {
            KdfError::InvalidOutputLength {
                requested: length,
                max: max_output_len(hash_len),
            }
        })?;

        let keyed = self.hmac.keyed(prk);
        let mut okm = Vec::with_capacity(usize::from(rounds) * hash_len);
        let mut t_prev = Zeroizing::new(Vec::new());

        for counter in 1..=rounds {
            let t = Zeroizing::new(keyed.compute_parts(&[&t_prev, info, &[counter]]));
            okm.extend_from_slice(&t);
            t_prev = t;
        }

        okm.truncate(length);

        tracing::trace!(hash = self.hash().name(), length, rounds, "hkdf expand");
        Ok(okm)
    }
}

impl<H: HashFunction> Kdf for Hkdf<H> {
    fn name(&self) -> String {
        format!("hkdf-{}", self.hash().name())
    }

    fn derive(
        &self,
        secret: &[u8],
        salt: &[u8],
        info: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, KdfError> {
        check_output_len(length, self.hash().output_len())?;

        let prk = Zeroizing::new(self.extract(salt, secret));
        self.expand(&prk, info, length)
    }
}
