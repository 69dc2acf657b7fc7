// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Message authentication codes for the tlsderive stack.
//!
//! Three MACs share the [`Mac`] contract (`compute` / `verify`):
//!
//! - [`Hmac`]: RFC 2104 over any [`HashFunction`](tlsderive_hash::HashFunction)
//! - [`Gmac`]: AES-GCM tag over empty plaintext, output is `nonce || tag`
//! - [`Poly1305`]: RFC 8439 one-time authenticator with two interchangeable
//!   arithmetic backends ([`FixedLimbBackend`], [`BigUintBackend`])
//!
//! `verify` never returns an error: every malformed or mismatching input
//! collapses to `false`.
//!
//! ## Example
//!
//! ```rust
//! use tlsderive_hash::HashAlgorithm;
//! use tlsderive_mac::{Hmac, Mac};
//!
//! let hmac = Hmac::new(HashAlgorithm::Sha256);
//! let tag = hmac.compute(b"data", b"key").expect("Failed to compute(..)");
//! assert_eq!(tag.len(), 32);
//! assert!(hmac.verify(b"data", &tag, b"key"));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod entropy;
mod error;
mod gcm;
mod gmac;
mod hmac;
mod poly1305;
mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod support;

pub use entropy::{EntropySource, SystemEntropySource};
pub use error::{EntropyError, MacError};
pub use gmac::{Gmac, GmacKeySize};
pub use hmac::{Hmac, HmacKey};
pub use poly1305::{
    BigUintBackend, FixedLimbBackend, Poly1305, Poly1305Backend, Poly1305BackendKind,
};
pub use traits::Mac;
