// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Hash selection error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The name does not match any supported digest
    #[error("unsupported hash algorithm: {0:?}")]
    UnsupportedAlgorithm(String),
}
