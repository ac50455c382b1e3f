//! Simulated collaborators: sleep, then report a fixed outcome

use super::{ApiEndpoint, ClientError, ConnectionRequest, FeedbackSink};
use crate::settings::feedback::FeedbackSubmission;
use futures::future::BoxFuture;
use futures::FutureExt;
use std::time::Duration;

/// Stand-in endpoint with a fixed delay
pub struct SimulatedEndpoint {
    delay: Duration,
    succeed: bool,
}

impl SimulatedEndpoint {
    pub fn new(delay_ms: u64, succeed: bool) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            succeed,
        }
    }
}

impl ApiEndpoint for SimulatedEndpoint {
    fn check<'a>(&'a self, request: &'a ConnectionRequest) -> BoxFuture<'a, Result<(), ClientError>> {
        async move {
            tracing::debug!(
                "Simulated connection check to {} (key {})",
                request.url,
                request.key.fingerprint()
            );
            tokio::time::sleep(self.delay).await;
            outcome(self.succeed)
        }
        .boxed()
    }
}

/// Stand-in feedback sink with a fixed delay
pub struct SimulatedFeedback {
    delay: Duration,
    succeed: bool,
}

impl SimulatedFeedback {
    pub fn new(delay_ms: u64, succeed: bool) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            succeed,
        }
    }
}

impl FeedbackSink for SimulatedFeedback {
    fn submit<'a>(
        &'a self,
        submission: &'a FeedbackSubmission,
    ) -> BoxFuture<'a, Result<(), ClientError>> {
        async move {
            tracing::debug!(
                "Simulated feedback submit ({}, {} chars)",
                submission.kind.as_str(),
                submission.message.chars().count()
            );
            tokio::time::sleep(self.delay).await;
            outcome(self.succeed)
        }
        .boxed()
    }
}

fn outcome(succeed: bool) -> Result<(), ClientError> {
    if succeed {
        Ok(())
    } else {
        Err(ClientError::Simulated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::feedback::FeedbackKind;
    use crate::settings::Secret;

    #[tokio::test]
    async fn test_simulated_endpoint_outcomes() {
        let request = ConnectionRequest {
            url: "https://redmine.example".to_string(),
            key: Secret::new("k"),
        };

        assert_eq!(SimulatedEndpoint::new(0, true).check(&request).await, Ok(()));
        assert_eq!(
            SimulatedEndpoint::new(0, false).check(&request).await,
            Err(ClientError::Simulated)
        );
    }

    #[tokio::test]
    async fn test_simulated_feedback_outcomes() {
        let submission = FeedbackSubmission {
            kind: FeedbackKind::Bug,
            message: "Button overlaps footer".to_string(),
            contact: None,
        };

        assert_eq!(SimulatedFeedback::new(0, true).submit(&submission).await, Ok(()));
        assert!(SimulatedFeedback::new(0, false).submit(&submission).await.is_err());
    }
}
