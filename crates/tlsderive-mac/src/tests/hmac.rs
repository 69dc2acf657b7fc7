// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use tlsderive_hash::{AlgorithmDescriptor, HashAlgorithm, HashContext, HashFunction};
use tlsderive_test_utils::{hex_to_bytes, single_bit_mutations};

use crate::{Hmac, Mac};

const JEFE_KEY: &[u8] = b"Jefe";
const JEFE_DATA: &[u8] = b"what do ya want for nothing?";

fn reference_hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    use ::hmac::Mac as _;

    let mut mac = <::hmac::Hmac<sha2::Sha256> as ::hmac::Mac>::new_from_slice(key)
        .expect("Failed to new_from_slice(..)");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn reference_hmac_sha512(key: &[u8], data: &[u8]) -> Vec<u8> {
    use ::hmac::Mac as _;

    let mut mac = <::hmac::Hmac<sha2::Sha512> as ::hmac::Mac>::new_from_slice(key)
        .expect("Failed to new_from_slice(..)");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

#[test]
fn test_hmac_sha256_rfc4231_case_2() {
    let hmac = Hmac::new(HashAlgorithm::Sha256);
    let tag = hmac
        .compute(JEFE_DATA, JEFE_KEY)
        .expect("Failed to compute(..)");

    assert_eq!(
        tag,
        hex_to_bytes("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
    );
}

#[test]
fn test_hmac_sha1_rfc2202_case_2() {
    let hmac = Hmac::new(HashAlgorithm::Sha1);
    let tag = hmac
        .compute(JEFE_DATA, JEFE_KEY)
        .expect("Failed to compute(..)");

    assert_eq!(tag, hex_to_bytes("effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"));
}

#[test]
fn test_hmac_md5_rfc2202_case_2() {
    let hmac = Hmac::new(HashAlgorithm::Md5);
    let tag = hmac
        .compute(JEFE_DATA, JEFE_KEY)
        .expect("Failed to compute(..)");

    assert_eq!(tag, hex_to_bytes("750c783e6ab0b503eaa86e310a5db738"));
}

#[test]
fn test_hmac_long_key_is_hashed_first() {
    // Keys longer than the block are replaced by their digest
    let hmac = Hmac::new(HashAlgorithm::Sha256);
    let long_key = [0xaau8; 131];

    let tag = hmac.authenticate(&long_key, b"payload");

    assert_eq!(tag, reference_hmac_sha256(&long_key, b"payload"));
}

#[test]
fn test_hmac_empty_key_and_data() {
    let hmac = Hmac::new(HashAlgorithm::Sha256);
    assert_eq!(hmac.authenticate(&[], &[]), reference_hmac_sha256(&[], &[]));
}

#[test]
fn test_hmac_compute_parts_matches_concatenation() {
    let hmac = Hmac::new(HashAlgorithm::Sha384);
    let key = b"parts-key";

    let joined = hmac.authenticate(key, b"label-context-\x01");
    let parts = hmac.compute_parts(key, &[b"label-", b"context-", &[0x01]]);

    assert_eq!(joined, parts);
}

#[test]
fn test_hmac_keyed_is_reusable() {
    let hmac = Hmac::new(HashAlgorithm::Sha256);
    let keyed = hmac.keyed(JEFE_KEY);

    assert_eq!(keyed.compute(b"one"), hmac.authenticate(JEFE_KEY, b"one"));
    assert_eq!(keyed.compute(b"two"), hmac.authenticate(JEFE_KEY, b"two"));
}

#[test]
fn test_hmac_name_and_output_len() {
    for alg in HashAlgorithm::ALL {
        let hmac = Hmac::new(alg);
        assert_eq!(hmac.name(), format!("hmac-{}", alg.name()));
        assert_eq!(hmac.output_len(), alg.output_len());
    }
}

#[test]
fn test_hmac_verify_accepts_own_tag() {
    let hmac = Hmac::new(HashAlgorithm::Sha256);
    let tag = hmac.compute(b"data", b"key").expect("Failed to compute(..)");

    assert!(hmac.verify(b"data", &tag, b"key"));
}

#[test]
fn test_hmac_verify_rejects_every_single_bit_flip() {
    let hmac = Hmac::new(HashAlgorithm::Sha1);
    let tag = hmac.compute(b"data", b"key").expect("Failed to compute(..)");

    for mutated in single_bit_mutations(&tag) {
        assert!(!hmac.verify(b"data", &mutated, b"key"));
    }
    for mutated in single_bit_mutations(b"data") {
        assert!(!hmac.verify(&mutated, &tag, b"key"));
    }
}

#[test]
fn test_hmac_verify_rejects_wrong_key_and_length() {
    let hmac = Hmac::new(HashAlgorithm::Sha256);
    let tag = hmac.compute(b"data", b"key").expect("Failed to compute(..)");

    assert!(!hmac.verify(b"data", &tag, b"other key"));
    assert!(!hmac.verify(b"data", &tag[..31], b"key"));
    assert!(!hmac.verify(b"data", &[], b"key"));
}

proptest! {
    #[test]
    fn hmac_sha256_matches_reference(
        key in proptest::collection::vec(any::<u8>(), 0..200),
        data in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        let hmac = Hmac::new(HashAlgorithm::Sha256);
        prop_assert_eq!(hmac.authenticate(&key, &data), reference_hmac_sha256(&key, &data));
    }

    #[test]
    fn hmac_sha512_matches_reference(
        key in proptest::collection::vec(any::<u8>(), 0..300),
        data in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        let hmac = Hmac::new(HashAlgorithm::Sha512);
        prop_assert_eq!(hmac.authenticate(&key, &data), reference_hmac_sha512(&key, &data));
    }
}

/// SHA-224, which the built-in algorithm set does not carry.
struct Sha224Digest;

impl HashFunction for Sha224Digest {
    fn descriptor(&self) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            name: "sha224",
            output_len: 28,
            block_len: 64,
        }
    }

    fn context(&self) -> HashContext {
        HashContext::new(Box::new(sha2::Sha224::default()))
    }
}

#[test]
fn test_hmac_over_caller_supplied_digest() {
    let hmac = Hmac::new(Sha224Digest);

    // RFC 4231 test case 2, HMAC-SHA-224
    assert_eq!(
        hmac.authenticate(JEFE_KEY, JEFE_DATA),
        hex_to_bytes("a30e01098bc6dbbf45690f3a7e9e6d0f8bbea2a39e6148008fd05e44")
    );
    assert_eq!(hmac.name(), "hmac-sha224");
    assert_eq!(hmac.output_len(), 28);
}
