// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::str::FromStr;

use tlsderive_hash::HashAlgorithm;
use tlsderive_mac::GmacKeySize;

use crate::error::Error;

/// MAC algorithms, named `hmac-<hash>`, `gmac-<bits>` or `poly1305`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacAlgorithm {
    /// HMAC over a digest
    Hmac(HashAlgorithm),
    /// AES-GMAC with the given key size
    Gmac(GmacKeySize),
    /// Poly1305 one-time authenticator
    Poly1305,
}

impl MacAlgorithm {
    /// Every supported MAC.
    pub const ALL: [MacAlgorithm; 9] = [
        MacAlgorithm::Hmac(HashAlgorithm::Sha256),
        MacAlgorithm::Hmac(HashAlgorithm::Sha384),
        MacAlgorithm::Hmac(HashAlgorithm::Sha512),
        MacAlgorithm::Hmac(HashAlgorithm::Sha1),
        MacAlgorithm::Hmac(HashAlgorithm::Md5),
        MacAlgorithm::Gmac(GmacKeySize::Aes128),
        MacAlgorithm::Gmac(GmacKeySize::Aes192),
        MacAlgorithm::Gmac(GmacKeySize::Aes256),
        MacAlgorithm::Poly1305,
    ];

    /// Exact key length the algorithm requires; `None` when any length works.
    pub const fn key_len(self) -> Option<usize> {
        match self {
            MacAlgorithm::Hmac(_) => None,
            MacAlgorithm::Gmac(size) => Some(size.key_len()),
            MacAlgorithm::Poly1305 => Some(tlsderive_mac::Poly1305::KEY_LEN),
        }
    }
}

impl fmt::Display for MacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacAlgorithm::Hmac(hash) => write!(f, "hmac-{hash}"),
            MacAlgorithm::Gmac(size) => write!(f, "gmac-{}", size.bits()),
            MacAlgorithm::Poly1305 => f.write_str("poly1305"),
        }
    }
}

impl FromStr for MacAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || Error::UnsupportedAlgorithm(s.to_owned());

        if s == "poly1305" {
            return Ok(MacAlgorithm::Poly1305);
        }
        if let Some(hash) = s.strip_prefix("hmac-") {
            let hash = hash.parse().map_err(|_| unsupported())?;
            return Ok(MacAlgorithm::Hmac(hash));
        }
        if let Some(bits) = s.strip_prefix("gmac-") {
            let size = GmacKeySize::ALL
                .into_iter()
                .find(|size| size.bits().to_string() == bits)
                .ok_or_else(unsupported)?;
            return Ok(MacAlgorithm::Gmac(size));
        }
        Err(unsupported())
    }
}

/// KDF algorithms, named `hkdf-<hash>` or `pbkdf2-<hash>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KdfAlgorithm {
    /// HKDF over a digest
    Hkdf(HashAlgorithm),
    /// PBKDF2-HMAC over a digest
    Pbkdf2(HashAlgorithm),
}

impl KdfAlgorithm {
    /// Every supported KDF.
    pub const ALL: [KdfAlgorithm; 10] = [
        KdfAlgorithm::Hkdf(HashAlgorithm::Sha256),
        KdfAlgorithm::Hkdf(HashAlgorithm::Sha384),
        KdfAlgorithm::Hkdf(HashAlgorithm::Sha512),
        KdfAlgorithm::Hkdf(HashAlgorithm::Sha1),
        KdfAlgorithm::Hkdf(HashAlgorithm::Md5),
        KdfAlgorithm::Pbkdf2(HashAlgorithm::Sha256),
        KdfAlgorithm::Pbkdf2(HashAlgorithm::Sha384),
        KdfAlgorithm::Pbkdf2(HashAlgorithm::Sha512),
        KdfAlgorithm::Pbkdf2(HashAlgorithm::Sha1),
        KdfAlgorithm::Pbkdf2(HashAlgorithm::Md5),
    ];

    /// Digest the KDF runs on.
    pub const fn hash(self) -> HashAlgorithm {
        match self {
            KdfAlgorithm::Hkdf(hash) | KdfAlgorithm::Pbkdf2(hash) => hash,
        }
    }
}

impl fmt::Display for KdfAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KdfAlgorithm::Hkdf(hash) => write!(f, "hkdf-{hash}"),
            KdfAlgorithm::Pbkdf2(hash) => write!(f, "pbkdf2-{hash}"),
        }
    }
}

impl FromStr for KdfAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || Error::UnsupportedAlgorithm(s.to_owned());

        let (constructor, hash): (fn(HashAlgorithm) -> KdfAlgorithm, &str) =
            if let Some(hash) = s.strip_prefix("hkdf-") {
                (KdfAlgorithm::Hkdf, hash)
            } else if let Some(hash) = s.strip_prefix("pbkdf2-") {
                (KdfAlgorithm::Pbkdf2, hash)
            } else {
                return Err(unsupported());
            };

        let hash = hash.parse().map_err(|_| unsupported())?;
        Ok(constructor(hash))
    }
}
