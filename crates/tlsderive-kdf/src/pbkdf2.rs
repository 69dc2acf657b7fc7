// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 per RFC 8018 Section 5.2, HMAC as the PRF.
//!
//! ```text
//! U(1)   = HMAC(password, salt || INT_32_BE(i))
//! U(j+1) = HMAC(password, U(j))
//! T(i)   = U(1) ^ U(2) ^ ... ^ U(c)
//! DK     = T(1) || T(2) || ...   truncated to dkLen
//! ```

use zeroize::Zeroizing;

use tlsderive_hash::HashAlgorithm;
use tlsderive_mac::Hmac;

use crate::error::KdfError;
use crate::length::check_output_len;
use crate::traits::Kdf;

/// How PBKDF2 blocks are computed. Both strategies are byte-identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pbkdf2Strategy {
    /// RustCrypto `pbkdf2::pbkdf2_hmac` over the concrete digest type
    #[default]
    Optimized,
    /// U-chain over [`Hmac`] with precomputed pads
    BlockLoop,
}

impl Pbkdf2Strategy {
    /// Both strategies.
    pub const ALL: [Pbkdf2Strategy; 2] = [Pbkdf2Strategy::Optimized, Pbkdf2Strategy::BlockLoop];
}

/// PBKDF2-HMAC with a fixed iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2 {
    hash: HashAlgorithm,
    iterations: u32,
    strategy: Pbkdf2Strategy,
}

impl Pbkdf2 {
    /// Smallest accepted iteration count.
    pub const MIN_ITERATIONS: u32 = 1_000;
    /// Iteration count used when none is configured.
    pub const DEFAULT_ITERATIONS: u32 = 10_000;

    /// PBKDF2 over `hash` with `iterations` rounds per block.
    ///
    /// # Errors
    ///
    /// [`KdfError::InvalidIterationCount`] below [`MIN_ITERATIONS`](Self::MIN_ITERATIONS).
    pub fn new(hash: HashAlgorithm, iterations: u32) -> Result<Self, KdfError> {
        if iterations < Self::MIN_ITERATIONS {
            return Err(KdfError::InvalidIterationCount(iterations));
        }
        Ok(Self {
            hash,
            iterations,
            strategy: Pbkdf2Strategy::default(),
        })
    }

    /// Same parameters, different block strategy.
    pub fn with_strategy(self, strategy: Pbkdf2Strategy) -> Self {
        Self { strategy, ..self }
    }

    /// Underlying digest.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Iterations per block.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Block strategy.
    pub fn strategy(&self) -> Pbkdf2Strategy {
        self.strategy
    }

    fn derive_optimized(&self, password: &[u8], salt: &[u8], out: &mut [u8]) {
        use ::pbkdf2::pbkdf2_hmac;

        let rounds = self.iterations;
        match self.hash {
            HashAlgorithm::Sha256 => pbkdf2_hmac::<sha2::Sha256>(password, salt, rounds, out),
            HashAlgorithm::Sha384 => pbkdf2_hmac::<sha2::Sha384>(password, salt, rounds, out),
            HashAlgorithm::Sha512 => pbkdf2_hmac::<sha2::Sha512>(password, salt, rounds, out),
            HashAlgorithm::Sha1 => pbkdf2_hmac::<sha1::Sha1>(password, salt, rounds, out),
            HashAlgorithm::Md5 => pbkdf2_hmac::<md5::Md5>(password, salt, rounds, out),
        }
    }

    fn derive_block_loop(&self, password: &[u8], salt: &[u8], out: &mut [u8]) {
        let hmac = Hmac::new(self.hash);
        let keyed = hmac.keyed(password);

        // Block indices are 1-based, big-endian on the wire
        for (block_index, block) in (1u32..).zip(out.chunks_mut(self.hash.output_len())) {
            let mut u = Zeroizing::new(keyed.compute_parts(&[salt, &block_index.to_be_bytes()]));
            let mut t = Zeroizing::new(u.to_vec());

            for _ in 1..self.iterations {
                u = Zeroizing::new(keyed.compute(&u));
                for (t_byte, u_byte) in t.iter_mut().zip(u.iter()) {
                    *t_byte ^= u_byte;
                }
            }

            block.copy_from_slice(&t[..block.len()]);
        }
    }
}

impl Kdf for Pbkdf2 {
    fn name(&self) -> String {
        format!("pbkdf2-{}", self.hash.name())
    }

    /// `secret` is the password; `info` is ignored.
    fn derive(
        &self,
        secret: &[u8],
        salt: &[u8],
        _info: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, KdfError> {
        check_output_len(length, self.hash.output_len())?;
        if salt.is_empty() {
            return Err(KdfError::EmptySalt);
        }

        let mut out = vec![0u8; length];
        match self.strategy {
            Pbkdf2Strategy::Optimized => self.derive_optimized(secret, salt, &mut out),
            Pbkdf2Strategy::BlockLoop => self.derive_block_loop(secret, salt, &mut out),
        }

        tracing::trace!(
            hash = self.hash.name(),
            iterations = self.iterations,
            strategy = ?self.strategy,
            length,
            "pbkdf2 derive"
        );
        Ok(out)
    }
}
