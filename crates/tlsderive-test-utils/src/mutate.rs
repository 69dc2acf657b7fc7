// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Returns a copy of `bytes` with bit `bit` (0 = LSB of byte 0) flipped.
///
/// # Panics
///
/// Panics if `bit` is outside `bytes`.
pub fn flip_bit(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

/// Every single-bit mutation of `bytes`, in bit order.
pub fn single_bit_mutations(bytes: &[u8]) -> impl Iterator<Item = Vec<u8>> + '_ {
    (0..bytes.len() * 8).map(move |bit| flip_bit(bytes, bit))
}
