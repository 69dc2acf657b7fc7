// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Installs a test-writer `tracing` subscriber once per process.
///
/// Honours `RUST_LOG`; defaults to `debug`.
pub fn init_tracing() {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        // Another harness may already own the global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_test_writer()
            .try_init();
    });
}
