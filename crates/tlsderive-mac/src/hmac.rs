// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104 over any [`HashFunction`].

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use tlsderive_hash::{HashAlgorithm, HashFunction};

use crate::error::MacError;
use crate::traits::Mac;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Key-dependent HMAC pads.
///
/// All sensitive data lives in this struct for guaranteed zeroization on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
struct HmacPads {
    /// K ⊕ ipad
    k_ipad: Vec<u8>,
    /// K ⊕ opad
    k_opad: Vec<u8>,
}

impl HmacPads {
    fn new<H: HashFunction>(hash: &H, key: &[u8]) -> Self {
        let block_len = hash.block_len();

        // Key block: hashed key when key > block, zero-padded otherwise
        let mut key_block = Zeroizing::new(vec![0u8; block_len]);
        if key.len() > block_len {
            let hashed = Zeroizing::new(hash.hash(key));
            key_block[..hashed.len()].copy_from_slice(&hashed);
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut k_ipad = vec![IPAD; block_len];
        let mut k_opad = vec![OPAD; block_len];
        for (i, kb) in key_block.iter().enumerate() {
            k_ipad[i] ^= kb;
            k_opad[i] ^= kb;
        }

        Self { k_ipad, k_opad }
    }
}

/// HMAC keyed once, reusable for many messages under the same key.
///
/// PBKDF2 and HKDF-Expand run thousands of HMACs with one key; this keeps the
/// pads around instead of rebuilding them per call.
pub struct HmacKey<'a, H: HashFunction> {
    hash: &'a H,
    pads: HmacPads,
}

impl<H: HashFunction> HmacKey<'_, H> {
    /// HMAC over the concatenation of `parts`, without concatenating them.
    pub fn compute_parts(&self, parts: &[&[u8]]) -> Vec<u8> {
        // Inner hash: H(k_ipad || parts...)
        let mut inner = self.hash.context();
        inner.update(&self.pads.k_ipad);
        for part in parts {
            inner.update(part);
        }
        let inner_hash = Zeroizing::new(inner.finalize());

        // Outer hash: H(k_opad || inner_hash)
        let mut outer = self.hash.context();
        outer.update(&self.pads.k_opad);
        outer.update(&inner_hash);
        outer.finalize()
    }

    /// HMAC of a single message.
    pub fn compute(&self, data: &[u8]) -> Vec<u8> {
        self.compute_parts(&[data])
    }
}

/// HMAC over a configured digest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hmac<H = HashAlgorithm> {
    hash: H,
}

impl<H: HashFunction> Hmac<H> {
    /// Creates an HMAC over `hash`.
    pub fn new(hash: H) -> Self {
        Self { hash }
    }

    /// Underlying digest.
    pub fn hash(&self) -> &H {
        &self.hash
    }

    /// Precomputes the pads for `key`.
    pub fn keyed(&self, key: &[u8]) -> HmacKey<'_, H> {
        HmacKey {
            hash: &self.hash,
            pads: HmacPads::new(&self.hash, key),
        }
    }

    /// HMAC over the concatenation of `parts`. Infallible: any key length works.
    pub fn compute_parts(&self, key: &[u8], parts: &[&[u8]]) -> Vec<u8> {
        self.keyed(key).compute_parts(parts)
    }

    /// HMAC of `data` under `key`. Infallible: any key length works.
    pub fn authenticate(&self, key: &[u8], data: &[u8]) -> Vec<u8> {
        self.compute_parts(key, &[data])
    }
}

impl<H: HashFunction> Mac for Hmac<H> {
    fn name(&self) -> String {
        format!("hmac-{}", self.hash.name())
    }

    fn output_len(&self) -> usize {
        self.hash.output_len()
    }

    fn compute(&self, data: &[u8], key: &[u8]) -> Result<Vec<u8>, MacError> {
        Ok(self.authenticate(key, data))
    }

    fn verify(&self, data: &[u8], mac: &[u8], key: &[u8]) -> bool {
        let computed = Zeroizing::new(self.authenticate(key, data));

        // Length mismatch makes ct_eq return false without comparing bytes
        computed.as_slice().ct_eq(mac).into()
    }
}
