// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tlsderive_hash::{HashAlgorithm, HashFunction};
use tlsderive_kdf::{Hkdf, Kdf, Pbkdf2};
use tlsderive_mac::{Gmac, Hmac, Mac, Poly1305};

use crate::algorithm::{KdfAlgorithm, MacAlgorithm};
use crate::error::Error;
use crate::options::Options;

/// Boxed digest.
pub type BoxedHash = Box<dyn HashFunction + Send + Sync>;
/// Boxed MAC.
pub type BoxedMac = Box<dyn Mac + Send + Sync>;
/// Boxed KDF.
pub type BoxedKdf = Box<dyn Kdf + Send + Sync>;

/// Digest for `alg`.
pub fn create_hash(alg: HashAlgorithm) -> BoxedHash {
    Box::new(alg)
}

/// MAC for `alg`. Only the Poly1305 backend is read from `options`.
pub fn create_mac(alg: MacAlgorithm, options: &Options) -> BoxedMac {
    tracing::trace!(%alg, "creating MAC");
    match alg {
        MacAlgorithm::Hmac(hash) => Box::new(Hmac::new(hash)),
        MacAlgorithm::Gmac(key_size) => Box::new(Gmac::new(key_size)),
        MacAlgorithm::Poly1305 => Box::new(Poly1305::with_backend(options.poly1305_backend)),
    }
}

/// KDF for `alg`. PBKDF2 takes its iteration count and strategy from `options`.
///
/// # Errors
///
/// [`Error::Kdf`] when `options.pbkdf2_iterations` is below the PBKDF2 minimum.
pub fn create_kdf(alg: KdfAlgorithm, options: &Options) -> Result<BoxedKdf, Error> {
    tracing::trace!(%alg, "creating KDF");
    match alg {
        KdfAlgorithm::Hkdf(hash) => Ok(Box::new(Hkdf::new(hash))),
        KdfAlgorithm::Pbkdf2(hash) => {
            let pbkdf2 = Pbkdf2::new(hash, options.pbkdf2_iterations)?
                .with_strategy(options.pbkdf2_strategy);
            Ok(Box::new(pbkdf2))
        }
    }
}

/// Digest by name (`sha256`, `sha384`, `sha512`, `sha1`, `md5`).
///
/// # Errors
///
/// [`Error::UnsupportedAlgorithm`] for any other name.
pub fn hash_by_name(name: &str) -> Result<BoxedHash, Error> {
    let alg: HashAlgorithm = name
        .parse()
        .map_err(|_| Error::UnsupportedAlgorithm(name.to_owned()))?;
    Ok(create_hash(alg))
}

/// MAC by name.
///
/// # Errors
///
/// [`Error::UnsupportedAlgorithm`] outside the MAC name grammar.
pub fn mac_by_name(name: &str, options: &Options) -> Result<BoxedMac, Error> {
    let alg: MacAlgorithm = name.parse()?;
    Ok(create_mac(alg, options))
}

/// KDF by name.
///
/// # Errors
///
/// [`Error::UnsupportedAlgorithm`] outside the KDF name grammar, or
/// [`Error::Kdf`] from [`create_kdf`].
pub fn kdf_by_name(name: &str, options: &Options) -> Result<BoxedKdf, Error> {
    let alg: KdfAlgorithm = name.parse()?;
    create_kdf(alg, options)
}
