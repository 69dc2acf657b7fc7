// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use tlsderive_hash::{HashAlgorithm, HashFunction};
use tlsderive_kdf::KdfError;
use tlsderive_test_utils::hex_to_bytes;

use crate::{Tls13Hkdf, TlsError};

// RFC 8448 Section 3, Simple 1-RTT Handshake
const EARLY_SECRET: &str = "33ad0a1c607ec03b09e6cd9893680ce210adf300aa1f2660e1b22e10f170f92a";
const DERIVED_FROM_EARLY: &str = "6f2615a108c702c5678f54fc9dbab69716c076189c48250cebeac3576c3611ba";
const ECDHE_SHARED_SECRET: &str = "8bd4054fb55b9d63fdfbacf9f04b9f0d35e6d63f537563efd46272900f89492d";
const HANDSHAKE_SECRET: &str = "1dc826e93606aa6fdc0aadc12f741b01046aa6b99f691ed221a9f0ca043fbeac";
const MASTER_SECRET: &str = "18df06843d13a08bf2a449844c5f8a478001bc4d4c627984d5a41da8d0402919";

/// `HkdfLabel` serialised by hand.
fn manual_hkdf_label(label: &str, context: &[u8], length: u16) -> Vec<u8> {
    let full_label = format!("tls13 {label}");
    let mut info = length.to_be_bytes().to_vec();
    info.push(full_label.len() as u8);
    info.extend_from_slice(full_label.as_bytes());
    info.push(context.len() as u8);
    info.extend_from_slice(context);
    info
}

fn reference_expand_label(secret: &[u8], label: &str, context: &[u8], length: u16) -> Vec<u8> {
    let hk = ::hkdf::Hkdf::<sha2::Sha256>::from_prk(secret).expect("Failed to from_prk(..)");
    let mut okm = vec![0u8; usize::from(length)];
    hk.expand(&manual_hkdf_label(label, context, length), &mut okm)
        .expect("Failed to expand(..)");
    okm
}

#[test]
fn test_rfc8448_early_secret() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    assert_eq!(hkdf.derive_early_secret(None), hex_to_bytes(EARLY_SECRET));
}

#[test]
fn test_rfc8448_derived_secret() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let derived = hkdf
        .derive_secret(&hex_to_bytes(EARLY_SECRET), "derived", &[])
        .expect("Failed to derive_secret(..)");

    assert_eq!(derived, hex_to_bytes(DERIVED_FROM_EARLY));
}

#[test]
fn test_rfc8448_handshake_secret() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let handshake = hkdf
        .derive_handshake_secret(
            &hex_to_bytes(EARLY_SECRET),
            &hex_to_bytes(ECDHE_SHARED_SECRET),
        )
        .expect("Failed to derive_handshake_secret(..)");

    assert_eq!(handshake, hex_to_bytes(HANDSHAKE_SECRET));
}

#[test]
fn test_rfc8448_master_secret() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let master = hkdf
        .derive_master_secret(&hex_to_bytes(HANDSHAKE_SECRET))
        .expect("Failed to derive_master_secret(..)");

    assert_eq!(master, hex_to_bytes(MASTER_SECRET));
}

#[test]
fn test_master_secret_matches_reference() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let handshake = hex_to_bytes(HANDSHAKE_SECRET);

    let master = hkdf
        .derive_master_secret(&handshake)
        .expect("Failed to derive_master_secret(..)");

    let empty_hash = HashAlgorithm::Sha256.hash(&[]);
    let salt = reference_expand_label(&handshake, "derived", &empty_hash, 32);
    let (expected, _) = ::hkdf::Hkdf::<sha2::Sha256>::extract(Some(salt.as_slice()), &[0u8; 32]);

    assert_eq!(master.len(), 32);
    assert_eq!(master, expected.to_vec());
}

#[test]
fn test_expand_label_matches_manual_encoding() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let secret = [0x17u8; 32];

    for (label, context, length) in [
        ("key", &b""[..], 16u16),
        ("iv", &b""[..], 12),
        ("c hs traffic", &[0xaa; 32][..], 32),
        ("finished", &b""[..], 32),
        ("exporter", &b"context"[..], 100),
    ] {
        let out = hkdf
            .expand_label(&secret, label, context, usize::from(length))
            .expect("Failed to expand_label(..)");

        assert_eq!(
            out,
            reference_expand_label(&secret, label, context, length),
            "{label}"
        );
    }
}

#[test]
fn test_expand_label_length_bounds() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let secret = [0u8; 32];

    assert!(matches!(
        hkdf.expand_label(&secret, "key", &[], 0),
        Err(TlsError::Kdf(KdfError::InvalidOutputLength { requested: 0, .. }))
    ));
    assert!(matches!(
        hkdf.expand_label(&secret, "key", &[], 255 * 32 + 1),
        Err(TlsError::Kdf(KdfError::InvalidOutputLength { .. }))
    ));
    assert_eq!(
        hkdf.expand_label(&secret, "key", &[], usize::from(u16::MAX) + 1),
        Err(TlsError::InvalidOutputLength {
            requested: 65536,
            max: 65535
        })
    );
    assert_eq!(
        hkdf.expand_label(&secret, "key", &[], 255 * 32)
            .expect("Failed to expand_label(..)")
            .len(),
        255 * 32
    );
}

#[test]
fn test_expand_label_rejects_long_label_and_context() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let secret = [0u8; 32];

    // "tls13 " + 249 bytes = 255, the largest that fits
    let fits = "x".repeat(249);
    assert!(hkdf.expand_label(&secret, &fits, &[], 32).is_ok());

    let too_long = "x".repeat(250);
    assert_eq!(
        hkdf.expand_label(&secret, &too_long, &[], 32),
        Err(TlsError::LabelTooLong(256))
    );

    assert!(hkdf.expand_label(&secret, "key", &[0u8; 255], 32).is_ok());
    assert_eq!(
        hkdf.expand_label(&secret, "key", &[0u8; 256], 32),
        Err(TlsError::ContextTooLong(256))
    );
}

#[test]
fn test_derive_secret_depends_on_messages() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let secret = [0x33u8; 32];

    let a = hkdf
        .derive_secret(&secret, "c hs traffic", b"ClientHello + ServerHello")
        .expect("Failed to derive_secret(..) (#a)");
    let b = hkdf
        .derive_secret(&secret, "c hs traffic", b"Different messages")
        .expect("Failed to derive_secret(..) (#b)");

    assert_eq!(a.len(), 32);
    assert_eq!(b.len(), 32);
    assert_ne!(a, b);
}

#[test]
fn test_early_secret_psk_changes_output() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);

    let without = hkdf.derive_early_secret(None);
    let with = hkdf.derive_early_secret(Some(&[0x77; 32][..]));

    assert_ne!(without, with);
    assert_eq!(with, hkdf.derive_early_secret(Some(&[0x77; 32][..])));
}

#[test]
fn test_traffic_key_iv_and_update() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let traffic_secret = [0x5au8; 32];

    let key = hkdf
        .traffic_key(&traffic_secret, 16)
        .expect("Failed to traffic_key(..)");
    let iv = hkdf
        .traffic_iv(&traffic_secret, 12)
        .expect("Failed to traffic_iv(..)");
    let next = hkdf
        .next_traffic_secret(&traffic_secret)
        .expect("Failed to next_traffic_secret(..)");

    assert_eq!(key, reference_expand_label(&traffic_secret, "key", &[], 16));
    assert_eq!(iv, reference_expand_label(&traffic_secret, "iv", &[], 12));
    assert_eq!(
        next,
        reference_expand_label(&traffic_secret, "traffic upd", &[], 32)
    );
    assert_ne!(next, traffic_secret.to_vec());
}

#[test]
fn test_finished_key_uses_hash_length() {
    let sha256 = Tls13Hkdf::new(HashAlgorithm::Sha256);
    let sha384 = Tls13Hkdf::new(HashAlgorithm::Sha384);

    let k256 = sha256
        .finished_key(&[1u8; 32])
        .expect("Failed to finished_key(..) (sha256)");
    let k384 = sha384
        .finished_key(&[1u8; 48])
        .expect("Failed to finished_key(..) (sha384)");

    assert_eq!(k256, reference_expand_label(&[1u8; 32], "finished", &[], 32));
    assert_eq!(k384.len(), 48);
}

#[test]
fn test_sha384_chain_lengths() {
    let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha384);

    let early = hkdf.derive_early_secret(None);
    let handshake = hkdf
        .derive_handshake_secret(&early, &[0x11; 48])
        .expect("Failed to derive_handshake_secret(..)");
    let master = hkdf
        .derive_master_secret(&handshake)
        .expect("Failed to derive_master_secret(..)");

    assert_eq!(early.len(), 48);
    assert_eq!(handshake.len(), 48);
    assert_eq!(master.len(), 48);
    assert_eq!(hkdf.hash_len(), 48);
}

proptest! {
    #[test]
    fn expand_label_matches_reference(
        secret in proptest::collection::vec(any::<u8>(), 32..=32),
        label in "[a-z ]{1,40}",
        context in proptest::collection::vec(any::<u8>(), 0..=64),
        length in 1u16..=512,
    ) {
        let hkdf = Tls13Hkdf::new(HashAlgorithm::Sha256);
        let out = hkdf
            .expand_label(&secret, &label, &context, usize::from(length))
            .expect("Failed to expand_label(..)");

        prop_assert_eq!(out, reference_expand_label(&secret, &label, &context, length));
    }
}
