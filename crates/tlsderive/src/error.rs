// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use tlsderive_hash::HashError;
use tlsderive_kdf::KdfError;
use tlsderive_mac::MacError;
use tlsderive_tls::TlsError;

/// Any error raised through the tlsderive surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Algorithm name outside the supported grammar
    #[error("unsupported algorithm: {0:?}")]
    UnsupportedAlgorithm(String),

    /// Hash layer error
    #[error(transparent)]
    Hash(#[from] HashError),

    /// MAC layer error
    #[error(transparent)]
    Mac(#[from] MacError),

    /// KDF layer error
    #[error(transparent)]
    Kdf(#[from] KdfError),

    /// TLS key schedule error
    #[error(transparent)]
    Tls(#[from] TlsError),
}
