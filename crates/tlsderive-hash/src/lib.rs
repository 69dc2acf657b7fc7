// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash digest capability for the tlsderive stack.
//!
//! Every MAC, KDF and key schedule above this crate depends only on the
//! [`HashFunction`] capability set (name, output length, block length and a
//! streaming context), never on a concrete digest type. The concrete digests
//! (SHA-2 family, SHA-1, MD5) come from the RustCrypto crates and are selected
//! through the closed [`HashAlgorithm`] enumeration.
//!
//! ## Example
//!
//! ```rust
//! use tlsderive_hash::{HashAlgorithm, HashFunction};
//!
//! let sha256: HashAlgorithm = "sha256".parse().expect("Failed to parse hash name");
//! assert_eq!(sha256.output_len(), 32);
//! assert_eq!(sha256.block_len(), 64);
//!
//! let mut ctx = sha256.context();
//! ctx.update(b"ab");
//! ctx.update(b"c");
//! assert_eq!(ctx.finalize(), sha256.hash(b"abc"));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod algorithm;
mod context;
mod descriptor;
mod error;
mod traits;

/// Digest traits accepted by [`HashContext::new`].
pub use digest;

pub use algorithm::HashAlgorithm;
pub use context::HashContext;
pub use descriptor::AlgorithmDescriptor;
pub use error::HashError;
pub use traits::HashFunction;
