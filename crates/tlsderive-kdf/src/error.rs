// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Key derivation errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// Requested length is zero or exceeds `255 * hash_len`
    #[error("invalid output length {requested}: must be between 1 and {max}")]
    InvalidOutputLength {
        /// Requested length in bytes
        requested: usize,
        /// Largest length the hash supports
        max: usize,
    },

    /// PBKDF2 called with an empty salt
    #[error("PBKDF2 requires a non-empty salt")]
    EmptySalt,

    /// PBKDF2 constructed with fewer than the minimum iterations
    #[error("invalid PBKDF2 iteration count {0} (minimum {min})", min = crate::Pbkdf2::MIN_ITERATIONS)]
    InvalidIterationCount(u32),
}
