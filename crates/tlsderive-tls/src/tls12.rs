// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TLS 1.2 PRF (RFC 5246 Section 5).
//!
//! ```text
//! A(0) = seed
//! A(i) = HMAC(secret, A(i-1))
//! P_hash(secret, seed) = HMAC(secret, A(1) || seed) || HMAC(secret, A(2) || seed) || ...
//! PRF(secret, label, seed) = P_hash(secret, label || seed)
//! ```

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use tlsderive_hash::{HashAlgorithm, HashFunction};
use tlsderive_mac::Hmac;

use crate::error::TlsError;

/// `"master secret"`
pub const MASTER_SECRET_LABEL: &str = "master secret";
/// `"extended master secret"` (RFC 7627)
pub const EXTENDED_MASTER_SECRET_LABEL: &str = "extended master secret";
/// `"key expansion"`
pub const KEY_EXPANSION_LABEL: &str = "key expansion";
/// `"client finished"`
pub const CLIENT_FINISHED_LABEL: &str = "client finished";
/// `"server finished"`
pub const SERVER_FINISHED_LABEL: &str = "server finished";

/// Master secret length.
pub const MASTER_SECRET_LEN: usize = 48;
/// Finished `verify_data` length.
pub const VERIFY_DATA_LEN: usize = 12;

/// TLS 1.2 PRF over a configured digest (SHA-256 unless the suite says otherwise).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tls12Prf<H = HashAlgorithm> {
    hmac: Hmac<H>,
}

impl<H: HashFunction> Tls12Prf<H> {
    /// PRF over `hash`.
    pub fn new(hash: H) -> Self {
        Self {
            hmac: Hmac::new(hash),
        }
    }

    /// Underlying digest.
    pub fn hash(&self) -> &H {
        self.hmac.hash()
    }

    /// `P_hash(secret, seed)` truncated to `length` bytes.
    ///
    /// # Errors
    ///
    /// [`TlsError::InvalidOutputLength`] for `length == 0`.
    pub fn p_hash(&self, secret: &[u8], seed: &[u8], length: usize) -> Result<Vec<u8>, TlsError> {
        self.p_hash_parts(secret, &[seed], length)
    }

    /// `P_hash` over a seed given in pieces (`label`, `seed`), without
    /// concatenating them.
    fn p_hash_parts(
        &self,
        secret: &[u8],
        seed: &[&[u8]],
        length: usize,
    ) -> Result<Vec<u8>, TlsError> {
        if length == 0 {
            return Err(TlsError::InvalidOutputLength {
                requested: 0,
                max: usize::MAX,
            });
        }

        let keyed = self.hmac.keyed(secret);
        let hash_len = self.hash().output_len();
        let mut out = Vec::with_capacity(length.div_ceil(hash_len) * hash_len);

        // A(1)
        let mut a = Zeroizing::new(keyed.compute_parts(seed));

        while out.len() < length {
            let mut input: Vec<&[u8]> = Vec::with_capacity(seed.len() + 1);
            input.push(&a);
            input.extend_from_slice(seed);
            out.extend_from_slice(&keyed.compute_parts(&input));

            a = Zeroizing::new(keyed.compute(&a));
        }

        out.truncate(length);
        Ok(out)
    }

    /// `PRF(secret, label, seed)` truncated to `length` bytes.
    ///
    /// # Errors
    ///
    /// [`TlsError::InvalidOutputLength`] for `length == 0`.
    pub fn compute(
        &self,
        secret: &[u8],
        label: &str,
        seed: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, TlsError> {
        tracing::trace!(label, length, "tls12 prf");
        self.p_hash_parts(secret, &[label.as_bytes(), seed], length)
    }

    /// 48-byte master secret from the pre-master secret.
    ///
    /// Seed is `client_random || server_random`.
    ///
    /// # Errors
    ///
    /// Only on internal length errors; the length is fixed.
    pub fn generate_master_secret(
        &self,
        premaster: &[u8],
        client_random: &[u8],
        server_random: &[u8],
    ) -> Result<Vec<u8>, TlsError> {
        let seed = [client_random, server_random].concat();
        self.compute(premaster, MASTER_SECRET_LABEL, &seed, MASTER_SECRET_LEN)
    }

    /// 48-byte extended master secret (RFC 7627), seeded with the session hash.
    ///
    /// # Errors
    ///
    /// Only on internal length errors; the length is fixed.
    pub fn generate_extended_master_secret(
        &self,
        premaster: &[u8],
        session_hash: &[u8],
    ) -> Result<Vec<u8>, TlsError> {
        self.compute(
            premaster,
            EXTENDED_MASTER_SECRET_LABEL,
            session_hash,
            MASTER_SECRET_LEN,
        )
    }

    /// Key block of `length` bytes.
    ///
    /// Seed is `server_random || client_random`, the reverse of
    /// [`generate_master_secret`](Self::generate_master_secret).
    ///
    /// # Errors
    ///
    /// [`TlsError::InvalidOutputLength`] for `length == 0`.
    pub fn generate_key_block(
        &self,
        master_secret: &[u8],
        client_random: &[u8],
        server_random: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, TlsError> {
        let seed = [server_random, client_random].concat();
        self.compute(master_secret, KEY_EXPANSION_LABEL, &seed, length)
    }

    /// 12-byte Finished `verify_data` for `label`
    /// ([`CLIENT_FINISHED_LABEL`] or [`SERVER_FINISHED_LABEL`]).
    ///
    /// # Errors
    ///
    /// Only on internal length errors; the length is fixed.
    pub fn generate_verify_data(
        &self,
        master_secret: &[u8],
        handshake_hash: &[u8],
        label: &str,
    ) -> Result<Vec<u8>, TlsError> {
        self.compute(master_secret, label, handshake_hash, VERIFY_DATA_LEN)
    }
}

/// Connection keys cut from a TLS 1.2 key block (RFC 5246 Section 6.3).
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyBlock {
    client_write_mac_key: Vec<u8>,
    server_write_mac_key: Vec<u8>,
    client_write_key: Vec<u8>,
    server_write_key: Vec<u8>,
    client_write_iv: Vec<u8>,
    server_write_iv: Vec<u8>,
}

impl KeyBlock {
    /// Bytes consumed by [`partition`](Self::partition); `None` when the
    /// total does not fit in `usize`.
    pub fn required_len(
        mac_key_len: usize,
        enc_key_len: usize,
        fixed_iv_len: usize,
    ) -> Option<usize> {
        mac_key_len
            .checked_add(enc_key_len)?
            .checked_add(fixed_iv_len)?
            .checked_mul(2)
    }

    /// Splits `key_block` into MAC keys, write keys and IVs, client before
    /// server for each. Trailing bytes are ignored.
    ///
    /// # Errors
    ///
    /// [`TlsError::KeyBlockTooShort`] when `key_block` cannot hold all six.
    pub fn partition(
        key_block: &[u8],
        mac_key_len: usize,
        enc_key_len: usize,
        fixed_iv_len: usize,
    ) -> Result<Self, TlsError> {
        let required =
            Self::required_len(mac_key_len, enc_key_len, fixed_iv_len).unwrap_or(usize::MAX);
        if key_block.len() < required {
            return Err(TlsError::KeyBlockTooShort {
                required,
                actual: key_block.len(),
            });
        }

        let (client_write_mac_key, rest) = key_block.split_at(mac_key_len);
        let (server_write_mac_key, rest) = rest.split_at(mac_key_len);
        let (client_write_key, rest) = rest.split_at(enc_key_len);
        let (server_write_key, rest) = rest.split_at(enc_key_len);
        let (client_write_iv, rest) = rest.split_at(fixed_iv_len);
        let (server_write_iv, _) = rest.split_at(fixed_iv_len);

        Ok(Self {
            client_write_mac_key: client_write_mac_key.to_vec(),
            server_write_mac_key: server_write_mac_key.to_vec(),
            client_write_key: client_write_key.to_vec(),
            server_write_key: server_write_key.to_vec(),
            client_write_iv: client_write_iv.to_vec(),
            server_write_iv: server_write_iv.to_vec(),
        })
    }

    /// `client_write_MAC_key`
    pub fn client_write_mac_key(&self) -> &[u8] {
        &self.client_write_mac_key
    }

    /// `server_write_MAC_key`
    pub fn server_write_mac_key(&self) -> &[u8] {
        &self.server_write_mac_key
    }

    /// `client_write_key`
    pub fn client_write_key(&self) -> &[u8] {
        &self.client_write_key
    }

    /// `server_write_key`
    pub fn server_write_key(&self) -> &[u8] {
        &self.server_write_key
    }

    /// `client_write_IV`
    pub fn client_write_iv(&self) -> &[u8] {
        &self.client_write_iv
    }

    /// `server_write_IV`
    pub fn server_write_iv(&self) -> &[u8] {
        &self.server_write_iv
    }
}

impl core::fmt::Debug for KeyBlock {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeyBlock")
            .field("mac_key_len", &self.client_write_mac_key.len())
            .field("enc_key_len", &self.client_write_key.len())
            .field("fixed_iv_len", &self.client_write_iv.len())
            .finish_non_exhaustive()
    }
}
