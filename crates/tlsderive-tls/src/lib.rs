// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! TLS secret derivation.
//!
//! - [`Tls12Prf`]: RFC 5246 Section 5 `P_hash` PRF and the master secret, key
//!   block and Finished derivations built on it ([`KeyBlock`] splits the key
//!   block into connection keys)
//! - [`Tls13Hkdf`]: RFC 8446 Section 7.1 building blocks (`HKDF-Expand-Label`,
//!   `Derive-Secret`) and the Early, Handshake and Master secret chain
//! - [`KeySchedule`]: the same chain as a staged state machine that refuses
//!   out-of-order inputs and zeroizes every secret it drops
//!
//! Record protection, handshake messages and certificates are out of scope;
//! callers pass in transcript bytes and receive secrets.
//!
//! ## Example
//!
//! ```rust
//! use tlsderive_hash::HashAlgorithm;
//! use tlsderive_tls::{KeySchedule, Stage};
//!
//! let mut schedule = KeySchedule::new(HashAlgorithm::Sha256);
//! schedule.input_zero().expect("Failed to input_zero()");
//! schedule
//!     .input_shared_secret(&[0x42; 32])
//!     .expect("Failed to input_shared_secret(..)");
//! assert_eq!(schedule.stage(), Stage::Handshake);
//!
//! let client_hs = schedule
//!     .client_handshake_traffic_secret(b"ClientHello..ServerHello")
//!     .expect("Failed to client_handshake_traffic_secret(..)");
//! assert_eq!(client_hs.len(), 32);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod schedule;
mod tls12;
mod tls13;

pub use error::TlsError;
pub use schedule::{KeySchedule, Stage};
pub use tls12::{
    CLIENT_FINISHED_LABEL, EXTENDED_MASTER_SECRET_LABEL, KEY_EXPANSION_LABEL, KeyBlock,
    MASTER_SECRET_LABEL, MASTER_SECRET_LEN, SERVER_FINISHED_LABEL, Tls12Prf, VERIFY_DATA_LEN,
};
pub use tls13::Tls13Hkdf;
