// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! AES-GCM collaborator, used with an empty plaintext.

use aes_gcm::aead::consts::{U12, U16};
use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm, AesGcm};

use crate::error::MacError;
use crate::gmac::{GmacKeySize, NONCE_LEN, TAG_LEN};

type Aes192Gcm = AesGcm<aes::Aes192, U12>;

/// Tag of `AES-GCM(key, nonce, aad, plaintext = "")`.
pub(crate) fn seal_empty(
    key_size: GmacKeySize,
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
) -> Result<[u8; TAG_LEN], MacError> {
    match key_size {
        GmacKeySize::Aes128 => seal_empty_with::<Aes128Gcm>(key, nonce, aad),
        GmacKeySize::Aes192 => seal_empty_with::<Aes192Gcm>(key, nonce, aad),
        GmacKeySize::Aes256 => seal_empty_with::<Aes256Gcm>(key, nonce, aad),
    }
}

/// Whether `tag` authenticates `aad` under `key` and `nonce` with an empty ciphertext.
pub(crate) fn open_empty(
    key_size: GmacKeySize,
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
    tag: &[u8; TAG_LEN],
) -> bool {
    match key_size {
        GmacKeySize::Aes128 => open_empty_with::<Aes128Gcm>(key, nonce, aad, tag),
        GmacKeySize::Aes192 => open_empty_with::<Aes192Gcm>(key, nonce, aad, tag),
        GmacKeySize::Aes256 => open_empty_with::<Aes256Gcm>(key, nonce, aad, tag),
    }
}

fn seal_empty_with<C>(
    key: &[u8],
    nonce: &[u8; NONCE_LEN],
    aad: &[u8],
) -> Result<[u8; TAG_LEN], MacError>
where
    C: KeyInit + AeadInPlace<NonceSize = U12, TagSize = U16>,
{
    let cipher = C::new_from_slice(key).map_err(|_| {
        tracing::error!("AES-GCM rejected the key");
        MacError::ComputationFailure("AES-GCM key setup failed")
    })?;

    let mut empty: [u8; 0] = [];
    let tag = cipher
        .encrypt_in_place_detached(GenericArray::from_slice(nonce), aad, &mut empty)
        .map_err(|_| {
            tracing::error!("AES-GCM encryption failed");
            MacError::ComputationFailure("AES-GCM encryption failed")
        })?;

    let mut out = [0u8; TAG_LEN];
    out.copy_from_slice(tag.as_slice());
    Ok(out)
}

fn open_empty_with<C>(key: &[u8], nonce: &[u8; NONCE_LEN], aad: &[u8], tag: &[u8; TAG_LEN]) -> bool
where
    C: KeyInit + AeadInPlace<NonceSize = U12, TagSize = U16>,
{
    let Ok(cipher) = C::new_from_slice(key) else {
        return false;
    };

    let mut empty: [u8; 0] = [];
    cipher
        .decrypt_in_place_detached(
            GenericArray::from_slice(nonce),
            aad,
            &mut empty,
            GenericArray::from_slice(tag),
        )
        .is_ok()
}
