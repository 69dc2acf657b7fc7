// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Arbitrary-precision Poly1305, written for clarity rather than speed.

use num_bigint::BigUint;
use zeroize::Zeroizing;

use super::{BLOCK_LEN, KEY_LEN, Poly1305Backend, TAG_LEN, split_key};
use crate::error::MacError;

/// Clears `value` digit by digit in place.
///
/// Bits go low to high so the top digit empties last; the buffer is never
/// shrunk while it still holds nonzero digits.
pub(crate) fn wipe(value: &mut BigUint) {
    for bit in 0..value.bits() {
        value.set_bit(bit, false);
    }
}

/// Reference backend over [`BigUint`].
///
/// Every block is read as `n = le(chunk) + 2^(8 * chunk.len())`, then
/// `h = (h + n) * r mod (2^130 - 5)`; the tag is `(h + s) mod 2^128`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigUintBackend;

impl Poly1305Backend for BigUintBackend {
    fn name(&self) -> &'static str {
        "biguint"
    }

    fn authenticate(&self, key: &[u8; KEY_LEN], data: &[u8]) -> Result<[u8; TAG_LEN], MacError> {
        let one = BigUint::from(1u32);
        let p: BigUint = (&one << 130usize) - 5u32;

        let (r_words, s_bytes) = split_key(key);
        let r_bytes: Zeroizing<Vec<u8>> =
            Zeroizing::new(r_words.iter().flat_map(|w| w.to_le_bytes()).collect());
        let mut r = BigUint::from_bytes_le(&r_bytes);
        let mut s = BigUint::from_bytes_le(s_bytes.as_slice());

        let mut h = BigUint::default();
        for chunk in data.chunks(BLOCK_LEN) {
            h += BigUint::from_bytes_le(chunk) + (&one << (8 * chunk.len()));
            let mut product = &h * &r;
            wipe(&mut h);
            h = &product % &p;
            wipe(&mut product);
        }

        h += &s;
        wipe(&mut r);
        wipe(&mut s);

        // Little-endian, minimal length; keep the low 128 bits
        let h_bytes = Zeroizing::new(h.to_bytes_le());
        wipe(&mut h);
        if h_bytes.len() > TAG_LEN + 1 {
            return Err(MacError::ComputationFailure(
                "poly1305 accumulator exceeded 136 bits",
            ));
        }

        let mut tag = [0u8; TAG_LEN];
        for (dst, src) in tag.iter_mut().zip(h_bytes.iter()) {
            *dst = *src;
        }
        Ok(tag)
    }
}
