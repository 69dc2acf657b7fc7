// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroizing;

use tlsderive_hash::{HashAlgorithm, HashFunction};

use crate::error::TlsError;
use crate::tls13::{self, Tls13Hkdf};

/// Position in the TLS 1.3 secret chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    /// No input yet
    #[default]
    Initial,
    /// Early Secret derived
    Early,
    /// Handshake Secret derived
    Handshake,
    /// Master Secret derived
    Master,
}

/// TLS 1.3 key schedule as a linear state machine.
///
/// Inputs advance the chain one step each:
///
/// | From        | Input                                   | To          |
/// |-------------|-----------------------------------------|-------------|
/// | `Initial`   | [`input_psk`] / [`input_zero`]          | `Early`     |
/// | `Early`     | [`input_shared_secret`] / [`input_zero`]| `Handshake` |
/// | `Handshake` | [`input_zero`]                          | `Master`    |
///
/// Anything else fails with [`TlsError::OutOfOrder`] and leaves the schedule
/// untouched. Each secret getter is only available in the stage whose secret
/// it derives from. The current secret is zeroized when replaced and on drop.
///
/// [`input_psk`]: Self::input_psk
/// [`input_zero`]: Self::input_zero
/// [`input_shared_secret`]: Self::input_shared_secret
pub struct KeySchedule<H = HashAlgorithm> {
    hkdf: Tls13Hkdf<H>,
    stage: Stage,
    secret: Zeroizing<Vec<u8>>,
}

impl<H: HashFunction> KeySchedule<H> {
    /// Empty schedule over `hash`.
    pub fn new(hash: H) -> Self {
        Self {
            hkdf: Tls13Hkdf::new(hash),
            stage: Stage::Initial,
            secret: Zeroizing::new(Vec::new()),
        }
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The stateless functions this schedule runs on.
    pub fn hkdf(&self) -> &Tls13Hkdf<H> {
        &self.hkdf
    }

    /// Secret of the current stage; `None` before the first input.
    pub fn secret(&self) -> Option<&[u8]> {
        match self.stage {
            Stage::Initial => None,
            _ => Some(self.secret.as_slice()),
        }
    }

    fn require(&self, stage: Stage, operation: &'static str) -> Result<(), TlsError> {
        if self.stage != stage {
            tracing::debug!(
                operation,
                current = ?self.stage,
                required = ?stage,
                "key schedule out of order"
            );
            return Err(TlsError::OutOfOrder {
                operation,
                stage: self.stage,
            });
        }
        Ok(())
    }

    fn advance(&mut self, next: Vec<u8>, stage: Stage) {
        tracing::debug!(from = ?self.stage, to = ?stage, "key schedule advanced");
        self.secret = Zeroizing::new(next);
        self.stage = stage;
    }

    /// Mixes a pre-shared key into the Early Secret.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Initial`].
    pub fn input_psk(&mut self, psk: &[u8]) -> Result<(), TlsError> {
        self.require(Stage::Initial, "input_psk")?;
        let early = self.hkdf.derive_early_secret(Some(psk));
        self.advance(early, Stage::Early);
        Ok(())
    }

    /// Mixes the (EC)DHE shared secret into the Handshake Secret.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Early`].
    pub fn input_shared_secret(&mut self, shared_secret: &[u8]) -> Result<(), TlsError> {
        self.require(Stage::Early, "input_shared_secret")?;
        let handshake = self
            .hkdf
            .derive_handshake_secret(&self.secret, shared_secret)?;
        self.advance(handshake, Stage::Handshake);
        Ok(())
    }

    /// Mixes a zero input into the next secret: no PSK at
    /// [`Stage::Initial`], no (EC)DHE at [`Stage::Early`] (`psk_ke`), and
    /// the fixed zero input of the Master Secret at [`Stage::Handshake`].
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] at [`Stage::Master`].
    pub fn input_zero(&mut self) -> Result<(), TlsError> {
        match self.stage {
            Stage::Initial => {
                let early = self.hkdf.derive_early_secret(None);
                self.advance(early, Stage::Early);
            }
            Stage::Early => {
                let zeros = Zeroizing::new(vec![0u8; self.hkdf.hash_len()]);
                let handshake = self.hkdf.derive_handshake_secret(&self.secret, &zeros)?;
                self.advance(handshake, Stage::Handshake);
            }
            Stage::Handshake => {
                let master = self.hkdf.derive_master_secret(&self.secret)?;
                self.advance(master, Stage::Master);
            }
            Stage::Master => {
                tracing::debug!(operation = "input_zero", "key schedule already at master secret");
                return Err(TlsError::OutOfOrder {
                    operation: "input_zero",
                    stage: Stage::Master,
                });
            }
        }
        Ok(())
    }

    fn derive_in(
        &self,
        stage: Stage,
        operation: &'static str,
        label: &str,
        messages: &[u8],
    ) -> Result<Vec<u8>, TlsError> {
        self.require(stage, operation)?;
        self.hkdf.derive_secret(&self.secret, label, messages)
    }

    /// PSK binder key, `"ext binder"` or `"res binder"` over an empty transcript.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Early`].
    pub fn binder_key(&self, external: bool) -> Result<Vec<u8>, TlsError> {
        let label = if external {
            tls13::EXTERNAL_BINDER
        } else {
            tls13::RESUMPTION_BINDER
        };
        self.derive_in(Stage::Early, "binder_key", label, &[])
    }

    /// `client_early_traffic_secret` over `ClientHello`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Early`].
    pub fn client_early_traffic_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Early,
            "client_early_traffic_secret",
            tls13::CLIENT_EARLY_TRAFFIC,
            messages,
        )
    }

    /// `early_exporter_master_secret` over `ClientHello`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Early`].
    pub fn early_exporter_master_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Early,
            "early_exporter_master_secret",
            tls13::EARLY_EXPORTER_MASTER,
            messages,
        )
    }

    /// `client_handshake_traffic_secret` over `ClientHello..ServerHello`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Handshake`].
    pub fn client_handshake_traffic_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Handshake,
            "client_handshake_traffic_secret",
            tls13::CLIENT_HANDSHAKE_TRAFFIC,
            messages,
        )
    }

    /// `server_handshake_traffic_secret` over `ClientHello..ServerHello`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Handshake`].
    pub fn server_handshake_traffic_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Handshake,
            "server_handshake_traffic_secret",
            tls13::SERVER_HANDSHAKE_TRAFFIC,
            messages,
        )
    }

    /// `client_application_traffic_secret_0` over `ClientHello..server Finished`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Master`].
    pub fn client_application_traffic_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Master,
            "client_application_traffic_secret",
            tls13::CLIENT_APPLICATION_TRAFFIC,
            messages,
        )
    }

    /// `server_application_traffic_secret_0` over `ClientHello..server Finished`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Master`].
    pub fn server_application_traffic_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Master,
            "server_application_traffic_secret",
            tls13::SERVER_APPLICATION_TRAFFIC,
            messages,
        )
    }

    /// `exporter_master_secret` over `ClientHello..server Finished`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Master`].
    pub fn exporter_master_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Master,
            "exporter_master_secret",
            tls13::EXPORTER_MASTER,
            messages,
        )
    }

    /// `resumption_master_secret` over `ClientHello..client Finished`.
    ///
    /// # Errors
    ///
    /// [`TlsError::OutOfOrder`] unless the stage is [`Stage::Master`].
    pub fn resumption_master_secret(&self, messages: &[u8]) -> Result<Vec<u8>, TlsError> {
        self.derive_in(
            Stage::Master,
            "resumption_master_secret",
            tls13::RESUMPTION_MASTER,
            messages,
        )
    }
}

impl<H> core::fmt::Debug for KeySchedule<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KeySchedule")
            .field("stage", &self.stage)
            .finish_non_exhaustive()
    }
}
