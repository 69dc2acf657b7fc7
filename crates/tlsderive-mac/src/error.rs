// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when generating random data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// MAC construction and computation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacError {
    /// Key length does not match what the algorithm requires
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Required key length in bytes
        expected: usize,
        /// Supplied key length in bytes
        actual: usize,
    },

    /// GMAC key size is not one of 128, 192 or 256 bits
    #[error("invalid GMAC key size: {0} bits (expected 128, 192 or 256)")]
    InvalidKeySize(usize),

    /// The underlying AEAD or arithmetic backend failed
    #[error("MAC computation failed: {0}")]
    ComputationFailure(&'static str),

    /// No nonce could be drawn from the entropy source
    #[error("nonce generation failed: {0}")]
    EntropyNotAvailable(#[from] EntropyError),
}
