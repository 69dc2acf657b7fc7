// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use tlsderive_kdf::KdfError;

use crate::schedule::Stage;

/// TLS key schedule errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TlsError {
    /// Requested length is zero or above what the construction can produce
    #[error("invalid output length {requested} (limit {max})")]
    InvalidOutputLength {
        /// Requested length in bytes
        requested: usize,
        /// Largest accepted length
        max: usize,
    },

    /// `"tls13 " + label` does not fit its one-byte length prefix
    #[error("HKDF label is {0} bytes, at most 255 allowed")]
    LabelTooLong(usize),

    /// Context does not fit its one-byte length prefix
    #[error("HKDF label context is {0} bytes, at most 255 allowed")]
    ContextTooLong(usize),

    /// Key block shorter than the requested partition
    #[error("key block too short: need {required} bytes, got {actual}")]
    KeyBlockTooShort {
        /// Bytes needed for both directions
        required: usize,
        /// Bytes supplied
        actual: usize,
    },

    /// Key schedule operation called in the wrong stage
    #[error("{operation} is not allowed in stage {stage:?}")]
    OutOfOrder {
        /// Rejected operation
        operation: &'static str,
        /// Stage the schedule was in
        stage: Stage,
    },

    /// Underlying HKDF failure
    #[error(transparent)]
    Kdf(#[from] KdfError),
}
