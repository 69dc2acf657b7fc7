// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Hash, MAC, KDF and TLS key schedule primitives for Rust.</em></p>
//!
//! ---
//!
//! tlsderive bundles the keyed primitives a TLS stack derives its secrets
//! with, behind one algorithm-name surface.
//!
//! # Features
//!
//! - 🔑 **Digests**: SHA-256, SHA-384, SHA-512, SHA-1 and MD5 behind one trait
//! - 🔏 **MACs**: HMAC, AES-GMAC and Poly1305 (with two interchangeable backends)
//! - 🧪 **KDFs**: HKDF and PBKDF2 with the same derive contract
//! - 🤝 **TLS**: the TLS 1.2 PRF and the TLS 1.3 key schedule as a stage machine
//! - 🧹 **Zeroization**: intermediate secrets are wiped on drop
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! tlsderive = "0.1.0-rc.1"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tlsderive::{Kdf, Mac, Options, kdf_by_name, mac_by_name};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = Options::default();
//!
//!     let mac = mac_by_name("hmac-sha256", &options)?;
//!     let tag = mac.compute(b"message", b"key")?;
//!     assert!(mac.verify(b"message", &tag, b"key"));
//!
//!     let hkdf = kdf_by_name("hkdf-sha256", &options)?;
//!     let okm = hkdf.derive(b"secret", b"salt", b"info", 42)?;
//!     assert_eq!(okm.len(), 42);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Algorithm names
//!
//! | Family | Names |
//! |--------|-------|
//! | Hash   | `sha256` `sha384` `sha512` `sha1` `md5` |
//! | MAC    | `hmac-<hash>` `gmac-128` `gmac-192` `gmac-256` `poly1305` |
//! | KDF    | `hkdf-<hash>` `pbkdf2-<hash>` |
//!
//! # TLS 1.3 key schedule
//!
//! ```rust
//! use tlsderive::hash::HashAlgorithm;
//! use tlsderive::tls::{KeySchedule, Stage};
//!
//! let mut schedule = KeySchedule::new(HashAlgorithm::Sha256);
//! schedule.input_zero()?;
//! schedule.input_shared_secret(&[0x42; 32])?;
//! assert_eq!(schedule.stage(), Stage::Handshake);
//!
//! let client_hs = schedule.client_handshake_traffic_secret(b"ClientHello...ServerHello")?;
//! assert_eq!(client_hs.len(), 32);
//! # Ok::<(), tlsderive::tls::TlsError>(())
//! ```
//!
//! # Crates
//!
//! | Module | Crate |
//! |--------|-------|
//! | [`hash`] | `tlsderive-hash` |
//! | [`mac`] | `tlsderive-mac` |
//! | [`kdf`] | `tlsderive-kdf` |
//! | [`tls`] | `tlsderive-tls` |

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod error;
mod factory;
mod options;

pub use tlsderive_hash as hash;
pub use tlsderive_kdf as kdf;
pub use tlsderive_mac as mac;
pub use tlsderive_tls as tls;

pub use tlsderive_hash::{HashAlgorithm, HashFunction};
pub use tlsderive_kdf::Kdf;
pub use tlsderive_mac::Mac;

pub use algorithm::{KdfAlgorithm, MacAlgorithm};
pub use error::Error;
pub use factory::{
    BoxedHash, BoxedKdf, BoxedMac, create_hash, create_kdf, create_mac, hash_by_name, kdf_by_name,
    mac_by_name,
};
pub use options::Options;
