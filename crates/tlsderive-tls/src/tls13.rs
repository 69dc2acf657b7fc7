// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TLS 1.3 key derivation building blocks (RFC 8446 Section 7.1).
//!
//! ```text
//! HKDF-Expand-Label(Secret, Label, Context, Length) =
//!     HKDF-Expand(Secret, HkdfLabel, Length)
//!
//! struct {
//!     uint16 length = Length;
//!     opaque label<7..255> = "tls13 " + Label;
//!     opaque context<0..255> = Context;
//! } HkdfLabel;
//!
//! Derive-Secret(Secret, Label, Messages) =
//!     HKDF-Expand-Label(Secret, Label, Transcript-Hash(Messages), Hash.length)
//! ```
//!
//! Schedule chain:
//!
//! ```text
//!          0
//!          |
//! PSK -> HKDF-Extract = Early Secret
//!          |
//!    Derive-Secret(., "derived", "")
//!          |
//! (EC)DHE -> HKDF-Extract = Handshake Secret
//!          |
//!    Derive-Secret(., "derived", "")
//!          |
//!     0 -> HKDF-Extract = Master Secret
//! ```

use zeroize::Zeroizing;

use tlsderive_hash::{HashAlgorithm, HashFunction};
use tlsderive_kdf::Hkdf;

use crate::error::TlsError;

const LABEL_PREFIX: &[u8] = b"tls13 ";

pub(crate) const DERIVED: &str = "derived";
pub(crate) const EXTERNAL_BINDER: &str = "ext binder";
pub(crate) const RESUMPTION_BINDER: &str = "res binder";
pub(crate) const CLIENT_EARLY_TRAFFIC: &str = "c e traffic";
pub(crate) const EARLY_EXPORTER_MASTER: &str = "e exp master";
pub(crate) const CLIENT_HANDSHAKE_TRAFFIC: &str = "c hs traffic";
pub(crate) const SERVER_HANDSHAKE_TRAFFIC: &str = "s hs traffic";
pub(crate) const CLIENT_APPLICATION_TRAFFIC: &str = "c ap traffic";
pub(crate) const SERVER_APPLICATION_TRAFFIC: &str = "s ap traffic";
pub(crate) const EXPORTER_MASTER: &str = "exp master";
pub(crate) const RESUMPTION_MASTER: &str = "res master";
const FINISHED: &str = "finished";
const TRAFFIC_KEY: &str = "key";
const TRAFFIC_IV: &str = "iv";
const TRAFFIC_UPDATE: &str = "traffic upd";

/// TLS 1.3 HKDF functions over a configured digest (SHA-256 by default).
///
/// Every function is pure: secrets go in, secrets come out. [`KeySchedule`]
/// wraps the same chain with stage tracking.
///
/// [`KeySchedule`]: crate::KeySchedule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tls13Hkdf<H = HashAlgorithm> {
    hkdf: Hkdf<H>,
}

impl<H: HashFunction> Tls13Hkdf<H> {
    /// Schedule functions over `hash`.
    pub fn new(hash: H) -> Self {
        Self {
            hkdf: Hkdf::new(hash),
        }
    }

    /// Underlying digest.
    pub fn hash(&self) -> &H {
        self.hkdf.hash()
    }

    /// Digest length; every schedule secret has this size.
    pub fn hash_len(&self) -> usize {
        self.hash().output_len()
    }

    /// `HKDF-Extract(salt, ikm)`.
    pub fn extract(&self, salt: &[u8], ikm: &[u8]) -> Vec<u8> {
        self.hkdf.extract(salt, ikm)
    }

    /// `HKDF-Expand(prk, info, length)`.
    ///
    /// # Errors
    ///
    /// [`TlsError::Kdf`] for `length == 0` or above `255 * hash_len`.
    pub fn expand(&self, prk: &[u8], info: &[u8], length: usize) -> Result<Vec<u8>, TlsError> {
        Ok(self.hkdf.expand(prk, info, length)?)
    }

    /// `HKDF-Expand-Label(secret, label, context, length)`.
    ///
    /// # Errors
    ///
    /// - [`TlsError::LabelTooLong`] when `"tls13 " + label` exceeds 255 bytes
    /// - [`TlsError::ContextTooLong`] when `context` exceeds 255 bytes
    /// - [`TlsError::InvalidOutputLength`] when `length` does not fit in `u16`
    /// - [`TlsError::Kdf`] for `length == 0` or above `255 * hash_len`
    pub fn expand_label(
        &self,
        secret: &[u8],
        label: &str,
        context: &[u8],
        length: usize,
    ) -> Result<Vec<u8>, TlsError> {
        let info = hkdf_label(label, context, length)?;
        self.expand(secret, &info, length)
    }

    /// `Derive-Secret(secret, label, messages)`; hashes `messages` first.
    ///
    /// # Errors
    ///
    /// See [`expand_label`](Self::expand_label).
    pub fn derive_secret(
        &self,
        secret: &[u8],
        label: &str,
        messages: &[u8],
    ) -> Result<Vec<u8>, TlsError> {
        let transcript_hash = self.hash().hash(messages);
        self.expand_label(secret, label, &transcript_hash, self.hash_len())
    }

    /// Early Secret: `HKDF-Extract(0, psk)`, a zero PSK when `psk` is `None`.
    pub fn derive_early_secret(&self, psk: Option<&[u8]>) -> Vec<u8> {
        let zeros = vec![0u8; self.hash_len()];
        self.extract(&zeros, psk.unwrap_or(zeros.as_slice()))
    }

    /// Handshake Secret:
    /// `HKDF-Extract(Derive-Secret(early, "derived", ""), shared_secret)`.
    ///
    /// # Errors
    ///
    /// See [`expand_label`](Self::expand_label).
    pub fn derive_handshake_secret(
        &self,
        early_secret: &[u8],
        shared_secret: &[u8],
    ) -> Result<Vec<u8>, TlsError> {
        let salt = Zeroizing::new(self.derive_secret(early_secret, DERIVED, &[])?);
        Ok(self.extract(&salt, shared_secret))
    }

    /// Master Secret: `HKDF-Extract(Derive-Secret(handshake, "derived", ""), 0)`.
    ///
    /// # Errors
    ///
    /// See [`expand_label`](Self::expand_label).
    pub fn derive_master_secret(&self, handshake_secret: &[u8]) -> Result<Vec<u8>, TlsError> {
        let salt = Zeroizing::new(self.derive_secret(handshake_secret, DERIVED, &[])?);
        let zeros = vec![0u8; self.hash_len()];
        Ok(self.extract(&salt, &zeros))
    }

    /// `finished_key = HKDF-Expand-Label(base_key, "finished", "", Hash.length)`.
    ///
    /// # Errors
    ///
    /// See [`expand_label`](Self::expand_label).
    pub fn finished_key(&self, base_key: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.expand_label(base_key, FINISHED, &[], self.hash_len())
    }

    /// Record protection key: `HKDF-Expand-Label(secret, "key", "", key_len)`.
    ///
    /// # Errors
    ///
    /// See [`expand_label`](Self::expand_label).
    pub fn traffic_key(&self, traffic_secret: &[u8], key_len: usize) -> Result<Vec<u8>, TlsError> {
        self.expand_label(traffic_secret, TRAFFIC_KEY, &[], key_len)
    }

    /// Record protection IV: `HKDF-Expand-Label(secret, "iv", "", iv_len)`.
    ///
    /// # Errors
    ///
    /// See [`expand_label`](Self::expand_label).
    pub fn traffic_iv(&self, traffic_secret: &[u8], iv_len: usize) -> Result<Vec<u8>, TlsError> {
        self.expand_label(traffic_secret, TRAFFIC_IV, &[], iv_len)
    }

    /// Key update (RFC 8446 Section 7.2):
    /// `HKDF-Expand-Label(secret, "traffic upd", "", Hash.length)`.
    ///
    /// # Errors
    ///
    /// See [`expand_label`](Self::expand_label).
    pub fn next_traffic_secret(&self, traffic_secret: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.expand_label(traffic_secret, TRAFFIC_UPDATE, &[], self.hash_len())
    }
}

/// Serialises `HkdfLabel`.
fn hkdf_label(label: &str, context: &[u8], length: usize) -> Result<Vec<u8>, TlsError> {
    let full_label_len = LABEL_PREFIX.len() + label.len();
    let label_len =
        u8::try_from(full_label_len).map_err(|_| TlsError::LabelTooLong(full_label_len))?;
    let context_len =
        u8::try_from(context.len()).map_err(|_| TlsError::ContextTooLong(context.len()))?;
    let length = u16::try_from(length).map_err(|_| TlsError::InvalidOutputLength {
        requested: length,
        max: usize::from(u16::MAX),
    })?;

    let mut info = Vec::with_capacity(2 + 1 + full_label_len + 1 + context.len());
    info.extend_from_slice(&length.to_be_bytes());
    info.push(label_len);
    info.extend_from_slice(LABEL_PREFIX);
    info.extend_from_slice(label.as_bytes());
    info.push(context_len);
    info.extend_from_slice(context);
    Ok(info)
}
