// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tlsderive_test_utils::{flip_bit, hex_to_bytes};

use crate::error::{EntropyError, MacError};
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::{Gmac, GmacKeySize, Mac};

fn fixed_gmac(key_size: GmacKeySize, byte: u8) -> Gmac<MockEntropySource> {
    Gmac::with_entropy(
        key_size,
        MockEntropySource::new(MockEntropySourceBehaviour::Fixed(byte)),
    )
}

#[test]
fn test_gmac_aes128_zero_key_empty_data() {
    // AES-GCM, K = 0^128, IV = 0^96, empty P and A
    let gmac = fixed_gmac(GmacKeySize::Aes128, 0);
    let out = gmac.compute(&[], &[0u8; 16]).expect("Failed to compute(..)");

    let mut expected = vec![0u8; 12];
    expected.extend(hex_to_bytes("58e2fccefa7e3061367f1d57a4e7455a"));
    assert_eq!(out, expected);
}

#[test]
fn test_gmac_aes256_zero_key_empty_data() {
    // AES-GCM, K = 0^256, IV = 0^96, empty P and A
    let gmac = fixed_gmac(GmacKeySize::Aes256, 0);
    let out = gmac.compute(&[], &[0u8; 32]).expect("Failed to compute(..)");

    assert_eq!(&out[..12], &[0u8; 12]);
    assert_eq!(out[12..], hex_to_bytes("530f8afbc74536b9a963b4f1c4cb738b"));
}

#[test]
fn test_gmac_output_layout_is_nonce_then_tag() {
    let gmac = fixed_gmac(GmacKeySize::Aes192, 0x42);
    let out = gmac
        .compute(b"aad", &[7u8; 24])
        .expect("Failed to compute(..)");

    assert_eq!(out.len(), gmac.output_len());
    assert_eq!(
        out.len(),
        Gmac::<MockEntropySource>::NONCE_LEN + Gmac::<MockEntropySource>::TAG_LEN
    );
    assert_eq!(&out[..12], &[0x42; 12]);
}

#[test]
fn test_gmac_same_nonce_is_deterministic() {
    let gmac = fixed_gmac(GmacKeySize::Aes256, 9);
    let key = [3u8; 32];

    let a = gmac.compute(b"message", &key).expect("Failed to compute(..) (#a)");
    let b = gmac.compute(b"message", &key).expect("Failed to compute(..) (#b)");

    assert_eq!(a, b);
}

#[test]
fn test_gmac_fresh_nonce_per_call() {
    let gmac = Gmac::new(GmacKeySize::Aes256);
    let key = [1u8; 32];

    let a = gmac.compute(b"message", &key).expect("Failed to compute(..) (#a)");
    let b = gmac.compute(b"message", &key).expect("Failed to compute(..) (#b)");

    assert_ne!(a[..12], b[..12]);
    assert!(gmac.verify(b"message", &a, &key));
    assert!(gmac.verify(b"message", &b, &key));
}

#[test]
fn test_gmac_roundtrip_all_key_sizes() {
    for key_size in GmacKeySize::ALL {
        let gmac = Gmac::new(key_size);
        let key = vec![0x5au8; key_size.key_len()];

        let out = gmac.compute(b"authenticated", &key).expect("Failed to compute(..)");

        assert!(gmac.verify(b"authenticated", &out, &key), "{key_size:?}");
    }
}

#[test]
fn test_gmac_verify_rejects_bit_flips() {
    let gmac = Gmac::new(GmacKeySize::Aes128);
    let key = [0x11u8; 16];
    let out = gmac.compute(b"data", &key).expect("Failed to compute(..)");

    // Nonce region and tag region
    for bit in [0, 50, 95, 96, 150, 223] {
        assert!(!gmac.verify(b"data", &flip_bit(&out, bit), &key), "bit {bit}");
    }
    assert!(!gmac.verify(&flip_bit(b"data", 3), &out, &key));
    assert!(!gmac.verify(b"data", &out, &flip_bit(&key, 0)));
}

#[test]
fn test_gmac_verify_rejects_bad_shapes() {
    let gmac = Gmac::new(GmacKeySize::Aes256);
    let key = [0u8; 32];
    let out = gmac.compute(b"data", &key).expect("Failed to compute(..)");

    assert!(!gmac.verify(b"data", &out[..27], &key));
    assert!(!gmac.verify(b"data", &[], &key));
    assert!(!gmac.verify(b"data", &out, &key[..16]));
}

#[test]
fn test_gmac_rejects_wrong_key_length() {
    let gmac = Gmac::new(GmacKeySize::Aes192);
    let result = gmac.compute(b"data", &[0u8; 16]);

    assert_eq!(
        result,
        Err(MacError::InvalidKeyLength {
            expected: 24,
            actual: 16
        })
    );
}

#[test]
fn test_gmac_propagates_entropy_failure() {
    let gmac = Gmac::with_entropy(
        GmacKeySize::Aes128,
        MockEntropySource::new(MockEntropySourceBehaviour::FailAlways),
    );
    let result = gmac.compute(b"data", &[0u8; 16]);

    assert_eq!(
        result,
        Err(MacError::EntropyNotAvailable(EntropyError::EntropyNotAvailable))
    );
}

#[test]
fn test_gmac_key_size_from_bits() {
    assert_eq!(GmacKeySize::from_bits(128), Ok(GmacKeySize::Aes128));
    assert_eq!(GmacKeySize::from_bits(192), Ok(GmacKeySize::Aes192));
    assert_eq!(GmacKeySize::from_bits(256), Ok(GmacKeySize::Aes256));
    assert_eq!(GmacKeySize::from_bits(512), Err(MacError::InvalidKeySize(512)));

    for key_size in GmacKeySize::ALL {
        assert_eq!(GmacKeySize::from_bits(key_size.bits()), Ok(key_size));
    }
}

#[test]
fn test_gmac_name() {
    assert_eq!(Gmac::new(GmacKeySize::Aes128).name(), "gmac-128");
    assert_eq!(Gmac::new(GmacKeySize::default()).name(), "gmac-256");
}
