// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for tlsderive crates.
//!
//! ## License
//!
//! GPL-3.0-only

// Only linked into test builds; panicking on malformed fixtures is the point.
#![allow(clippy::expect_used)]

mod hex;
mod mutate;
mod tracing_init;

pub use hex::{bytes_to_hex, hex_to_bytes};
pub use mutate::{flip_bit, single_bit_mutations};
pub use tracing_init::init_tracing;
