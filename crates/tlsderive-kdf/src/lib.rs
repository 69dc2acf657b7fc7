// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Key derivation functions built on [`tlsderive_mac::Hmac`].
//!
//! - [`Hkdf`]: RFC 5869 extract-then-expand
//! - [`Pbkdf2`]: RFC 8018 iterated HMAC chain, with an optimized path and a
//!   from-scratch block loop that produce identical output
//!
//! Both implement [`Kdf::derive`]`(secret, salt, info, length)`. Every
//! successful derivation returns exactly `length` bytes; `length` must be in
//! `1..=255 * hash_len`.
//!
//! ## Example
//!
//! ```rust
//! use tlsderive_hash::HashAlgorithm;
//! use tlsderive_kdf::{Hkdf, Kdf};
//!
//! let hkdf = Hkdf::new(HashAlgorithm::Sha256);
//! let okm = hkdf
//!     .derive(b"input key material", b"salt", b"context", 42)
//!     .expect("Failed to derive(..)");
//! assert_eq!(okm.len(), 42);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod hkdf;
mod length;
mod pbkdf2;
mod traits;

pub use error::KdfError;
pub use hkdf::Hkdf;
pub use pbkdf2::{Pbkdf2, Pbkdf2Strategy};
pub use traits::Kdf;
