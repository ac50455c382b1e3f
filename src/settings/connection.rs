//! Connection test state machine
//!
//! `begin` is the only way into `Pending` and refuses to start while
//! credentials are missing or another attempt is in flight. The caller
//! runs the returned request and hands the result to `finish`.

use super::notification::Notification;
use super::Configuration;
use crate::client::{ClientError, ConnectionRequest};

/// Transient state of the connection test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionTestState {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Single-flight connection test
#[derive(Debug, Default)]
pub struct ConnectionTest {
    state: ConnectionTestState,
}

impl ConnectionTest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionTestState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == ConnectionTestState::Pending
    }

    /// Whether the "Test Connection" control is enabled
    pub fn can_start(&self, config: &Configuration) -> bool {
        !self.is_pending() && config.credentials_present()
    }

    /// Start an attempt. `None` means the control is disabled and nothing
    /// happened.
    pub fn begin(&mut self, config: &Configuration) -> Option<ConnectionRequest> {
        if !self.can_start(config) {
            tracing::debug!(
                "Connection test ignored (pending: {}, credentials: {})",
                self.is_pending(),
                config.credentials_present()
            );
            return None;
        }

        self.state = ConnectionTestState::Pending;
        tracing::info!(
            "Testing connection to {} (key {})",
            config.api_url,
            config.api_key.fingerprint()
        );

        Some(ConnectionRequest {
            url: config.api_url.clone(),
            key: config.api_key.clone(),
        })
    }

    /// Drop a finished result once the credentials it was run with change
    ///
    /// A pending attempt is left alone; its result still arrives.
    pub fn invalidate(&mut self) {
        if matches!(
            self.state,
            ConnectionTestState::Success | ConnectionTestState::Error
        ) {
            tracing::debug!("Credentials changed, clearing connection result");
            self.state = ConnectionTestState::Idle;
        }
    }

    /// Record the outcome and produce the notification to show
    ///
    /// A result arriving while nothing is pending is ignored.
    pub fn finish(&mut self, result: Result<(), ClientError>) -> Option<Notification> {
        if !self.is_pending() {
            tracing::warn!("Connection result arrived with no test pending");
            return None;
        }

        match result {
            Ok(()) => {
                self.state = ConnectionTestState::Success;
                tracing::info!("Connection test succeeded");
                Some(Notification::info(
                    "Connection Successful",
                    "API connection has been verified.",
                ))
            }
            Err(e) => {
                self.state = ConnectionTestState::Error;
                tracing::warn!("Connection test failed: {}", e);
                Some(Notification::destructive(
                    "Connection Failed",
                    "Unable to connect to the API. Please check your credentials.",
                ))
            }
        }
    }
}
