// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tlsderive_kdf::{Pbkdf2, Pbkdf2Strategy};
use tlsderive_mac::Poly1305BackendKind;

/// Construction options for [`create_mac`](crate::create_mac) and
/// [`create_kdf`](crate::create_kdf).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// PBKDF2 iterations per block (minimum [`Pbkdf2::MIN_ITERATIONS`])
    pub pbkdf2_iterations: u32,
    /// PBKDF2 block strategy
    pub pbkdf2_strategy: Pbkdf2Strategy,
    /// Poly1305 arithmetic backend
    pub poly1305_backend: Poly1305BackendKind,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            pbkdf2_iterations: Pbkdf2::DEFAULT_ITERATIONS,
            pbkdf2_strategy: Pbkdf2Strategy::default(),
            poly1305_backend: Poly1305BackendKind::default(),
        }
    }
}

impl Options {
    /// Sets the PBKDF2 iteration count. Validated when the KDF is created.
    pub fn with_pbkdf2_iterations(mut self, iterations: u32) -> Self {
        self.pbkdf2_iterations = iterations;
        self
    }

    /// Sets the PBKDF2 block strategy.
    pub fn with_pbkdf2_strategy(mut self, strategy: Pbkdf2Strategy) -> Self {
        self.pbkdf2_strategy = strategy;
        self
    }

    /// Sets the Poly1305 backend.
    pub fn with_poly1305_backend(mut self, backend: Poly1305BackendKind) -> Self {
        self.poly1305_backend = backend;
        self
    }
}
