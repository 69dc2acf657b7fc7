// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test doubles for crates that build on tlsderive-mac.

/// Mock entropy source.
pub mod test_utils;
