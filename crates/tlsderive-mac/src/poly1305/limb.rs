// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-width Poly1305: radix 2^26, five limbs held in `u32` words.
//!
//! Every step takes the accumulator by value and returns the new one; nothing
//! is mutated through references across function boundaries.

use zeroize::{Zeroize, Zeroizing};

use super::{BLOCK_LEN, KEY_LEN, Poly1305Backend, TAG_LEN, le_words, padded_blocks, split_key};
use crate::error::MacError;

const LIMB_MASK: u32 = 0x03ff_ffff;
const LIMB_BITS: u32 = 26;
/// 2^128 expressed in limb 4 (bit 128 = bit 24 of the fifth limb)
const HIBIT: u32 = 1 << 24;

/// Five 26-bit limbs, least significant first.
#[derive(Clone, Default, Zeroize)]
struct Limbs([u32; 5]);

/// Splits four little-endian words into five 26-bit limbs.
fn limbs_from_words(t: [u32; 4], hibit: u32) -> Limbs {
    Limbs([
        t[0] & LIMB_MASK,
        ((t[0] >> 26) | (t[1] << 6)) & LIMB_MASK,
        ((t[1] >> 20) | (t[2] << 12)) & LIMB_MASK,
        ((t[2] >> 14) | (t[3] << 18)) & LIMB_MASK,
        (t[3] >> 8) | hibit,
    ])
}

/// `h + m` limb-wise. Limbs stay below 2^27, no carry needed yet.
fn add(h: Limbs, m: Limbs) -> Limbs {
    let Limbs(mut h) = h;
    for (hi, mi) in h.iter_mut().zip(m.0.iter()) {
        *hi += mi;
    }
    Limbs(h)
}

/// `h * r mod 2^130 - 5`, partially reduced (limbs < 2^26 except a small
/// excess in limb 1).
fn multiply(h: Limbs, r: &Limbs) -> Limbs {
    let [h0, h1, h2, h3, h4] = h.0.map(u64::from);
    let [r0, r1, r2, r3, r4] = r.0.map(u64::from);

    // Terms that land at or above 2^130 wrap around multiplied by 5
    let (s1, s2, s3, s4) = (r1 * 5, r2 * 5, r3 * 5, r4 * 5);

    let d0 = h0 * r0 + h1 * s4 + h2 * s3 + h3 * s2 + h4 * s1;
    let d1 = h0 * r1 + h1 * r0 + h2 * s4 + h3 * s3 + h4 * s2;
    let d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * s4 + h4 * s3;
    let d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * s4;
    let d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

    carry_wide([d0, d1, d2, d3, d4])
}

/// Carry chain over 64-bit partial products, folding the top carry by 5.
fn carry_wide(d: [u64; 5]) -> Limbs {
    let mask = u64::from(LIMB_MASK);
    let [mut d0, mut d1, mut d2, mut d3, mut d4] = d;

    d1 += d0 >> LIMB_BITS;
    d0 &= mask;
    d2 += d1 >> LIMB_BITS;
    d1 &= mask;
    d3 += d2 >> LIMB_BITS;
    d2 &= mask;
    d4 += d3 >> LIMB_BITS;
    d3 &= mask;
    d0 += (d4 >> LIMB_BITS) * 5;
    d4 &= mask;
    d1 += d0 >> LIMB_BITS;
    d0 &= mask;

    Limbs([d0 as u32, d1 as u32, d2 as u32, d3 as u32, d4 as u32])
}

/// Absorbs one padded block: `h = (h + m) * r`.
fn absorb(h: Limbs, block: &[u8; BLOCK_LEN], full: bool, r: &Limbs) -> Limbs {
    let hibit = if full { HIBIT } else { 0 };
    let m = limbs_from_words(le_words(block), hibit);
    multiply(add(h, m), r)
}

/// Fully reduces `h` modulo 2^130 - 5 in constant time.
fn reduce(h: Limbs) -> Limbs {
    let Limbs([mut h0, mut h1, mut h2, mut h3, mut h4]) = h;

    // Full carry
    let mut c = h1 >> LIMB_BITS;
    h1 &= LIMB_MASK;
    h2 += c;
    c = h2 >> LIMB_BITS;
    h2 &= LIMB_MASK;
    h3 += c;
    c = h3 >> LIMB_BITS;
    h3 &= LIMB_MASK;
    h4 += c;
    c = h4 >> LIMB_BITS;
    h4 &= LIMB_MASK;
    h0 += c * 5;
    c = h0 >> LIMB_BITS;
    h0 &= LIMB_MASK;
    h1 += c;

    // g = h + 5 - 2^130
    let mut g0 = h0 + 5;
    c = g0 >> LIMB_BITS;
    g0 &= LIMB_MASK;
    let mut g1 = h1 + c;
    c = g1 >> LIMB_BITS;
    g1 &= LIMB_MASK;
    let mut g2 = h2 + c;
    c = g2 >> LIMB_BITS;
    g2 &= LIMB_MASK;
    let mut g3 = h3 + c;
    c = g3 >> LIMB_BITS;
    g3 &= LIMB_MASK;
    let g4 = (h4 + c).wrapping_sub(1 << LIMB_BITS);

    // g4 negative (top bit set): h < p, keep h. Otherwise take g.
    let select_g = (g4 >> 31).wrapping_sub(1);
    let keep_h = !select_g;

    Limbs([
        (h0 & keep_h) | (g0 & select_g),
        (h1 & keep_h) | (g1 & select_g),
        (h2 & keep_h) | (g2 & select_g),
        (h3 & keep_h) | (g3 & select_g),
        (h4 & keep_h) | (g4 & select_g),
    ])
}

/// `(h + s) mod 2^128`, serialised little-endian.
///
/// The reduced accumulator and the word copies of `h` and `s` are wiped
/// before returning.
fn finish(h: Limbs, s: &[u8; BLOCK_LEN]) -> [u8; TAG_LEN] {
    let mut reduced = reduce(h);
    let [h0, h1, h2, h3, h4] = reduced.0;

    // Radix 2^26 -> four 32-bit words (bits above 128 drop out)
    let words = Zeroizing::new([
        h0 | (h1 << 26),
        (h1 >> 6) | (h2 << 20),
        (h2 >> 12) | (h3 << 14),
        (h3 >> 18) | (h4 << 8),
    ]);
    let s_words = Zeroizing::new(le_words(s));
    reduced.zeroize();

    let mut tag = [0u8; TAG_LEN];
    let mut carry = 0u64;
    for (i, (w, sw)) in words.iter().zip(s_words.iter()).enumerate() {
        let f = u64::from(*w) + u64::from(*sw) + carry;
        tag[i * 4..i * 4 + 4].copy_from_slice(&(f as u32).to_le_bytes());
        carry = f >> 32;
    }
    tag
}

/// Fixed-limb backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedLimbBackend;

impl Poly1305Backend for FixedLimbBackend {
    fn name(&self) -> &'static str {
        "fixed-limb"
    }

    fn authenticate(&self, key: &[u8; KEY_LEN], data: &[u8]) -> Result<[u8; TAG_LEN], MacError> {
        let (r_words, s) = split_key(key);
        let mut r = limbs_from_words(*r_words, 0);

        let mut h = Limbs::default();
        for block in padded_blocks(data) {
            h = absorb(h, &block.bytes, block.full, &r);
        }

        let tag = finish(h, &s);

        r.zeroize();
        Ok(tag)
    }
}
