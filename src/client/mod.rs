//! External collaborators: API endpoint check and feedback submission
//!
//! The editor talks to the outside world through two object-safe traits.
//! Each call is a single request/response with no retry; the editor's
//! state machines guarantee at most one call of each kind is in flight.
//!
//! Two implementations of each trait exist:
//! - Simulated: fixed delay, fixed outcome (default, no network)
//! - Http: a real `reqwest` round trip

mod http;
mod simulated;

pub use http::{HttpEndpoint, HttpFeedback};
pub use simulated::{SimulatedEndpoint, SimulatedFeedback};

use crate::config::{EndpointConfig, EndpointMode};
use crate::settings::feedback::FeedbackSubmission;
use crate::settings::Secret;
use futures::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// Request sent by the connection test
#[derive(Debug, Clone)]
pub struct ConnectionRequest {
    pub url: String,
    pub key: Secret,
}

/// Errors a collaborator call can report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Transport-level failure (DNS, refused, timeout, bad URL)
    Network(String),
    /// Server answered with a non-success status
    Status { status: u16 },
    /// Simulated collaborator configured to fail
    Simulated,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { status } => write!(f, "Server responded with status {}", status),
            Self::Simulated => write!(f, "Simulated failure"),
        }
    }
}

impl std::error::Error for ClientError {}

/// The API endpoint the assist features call
pub trait ApiEndpoint: Send + Sync {
    /// Verify that `request` reaches the endpoint and is accepted
    fn check<'a>(&'a self, request: &'a ConnectionRequest) -> BoxFuture<'a, Result<(), ClientError>>;
}

/// Where feedback goes
pub trait FeedbackSink: Send + Sync {
    fn submit<'a>(
        &'a self,
        submission: &'a FeedbackSubmission,
    ) -> BoxFuture<'a, Result<(), ClientError>>;
}

/// Result of a spawned collaborator call, delivered back to the UI loop
#[derive(Debug, Clone)]
pub enum ClientOutcome {
    Connection(Result<(), ClientError>),
    Feedback(Result<(), ClientError>),
}

/// Collaborators selected by the endpoint config
#[derive(Clone)]
pub struct Collaborators {
    pub endpoint: Arc<dyn ApiEndpoint>,
    pub feedback: Arc<dyn FeedbackSink>,
}

impl Collaborators {
    /// Build collaborators for the configured mode
    ///
    /// Http mode without a feedback URL still simulates feedback, since
    /// there is nowhere to send it.
    pub fn from_config(config: &EndpointConfig) -> anyhow::Result<Self> {
        match config.mode {
            EndpointMode::Simulated => Ok(Self::simulated(config)),
            EndpointMode::Http => {
                let client = http::build_client(config.timeout_secs)?;
                let endpoint: Arc<dyn ApiEndpoint> = Arc::new(HttpEndpoint::new(client.clone()));
                let feedback: Arc<dyn FeedbackSink> = match &config.feedback_url {
                    Some(url) => Arc::new(HttpFeedback::new(client, url.clone())),
                    None => Arc::new(SimulatedFeedback::new(config.feedback_delay_ms, true)),
                };
                Ok(Self { endpoint, feedback })
            }
        }
    }

    pub fn simulated(config: &EndpointConfig) -> Self {
        Self {
            endpoint: Arc::new(SimulatedEndpoint::new(config.connection_delay_ms, true)),
            feedback: Arc::new(SimulatedFeedback::new(config.feedback_delay_ms, true)),
        }
    }
}
