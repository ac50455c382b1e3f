//! Real HTTP collaborators backed by `reqwest`

use super::{ApiEndpoint, ClientError, ConnectionRequest, FeedbackSink};
use crate::settings::feedback::FeedbackSubmission;
use anyhow::{Context, Result};
use futures::future::BoxFuture;
use futures::FutureExt;
use std::time::Duration;

/// Build the shared HTTP client
pub(super) fn build_client(timeout_secs: u64) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("Failed to create HTTP client")
}

/// Endpoint check: GET the API URL with a bearer token
pub struct HttpEndpoint {
    client: reqwest::Client,
}

impl HttpEndpoint {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl ApiEndpoint for HttpEndpoint {
    fn check<'a>(&'a self, request: &'a ConnectionRequest) -> BoxFuture<'a, Result<(), ClientError>> {
        async move {
            tracing::debug!(
                "GET {} (key {})",
                request.url,
                request.key.fingerprint()
            );

            let response = self
                .client
                .get(&request.url)
                .bearer_auth(request.key.expose())
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;

            status_to_result(response.status())
        }
        .boxed()
    }
}

/// Feedback sink that POSTs JSON to a fixed URL
pub struct HttpFeedback {
    client: reqwest::Client,
    url: String,
}

impl HttpFeedback {
    pub fn new(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

impl FeedbackSink for HttpFeedback {
    fn submit<'a>(
        &'a self,
        submission: &'a FeedbackSubmission,
    ) -> BoxFuture<'a, Result<(), ClientError>> {
        async move {
            let response = self
                .client
                .post(&self.url)
                .json(submission)
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;

            status_to_result(response.status())
        }
        .boxed()
    }
}

fn status_to_result(status: reqwest::StatusCode) -> Result<(), ClientError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ClientError::Status {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_to_result(reqwest::StatusCode::OK), Ok(()));
        assert_eq!(status_to_result(reqwest::StatusCode::NO_CONTENT), Ok(()));
        assert_eq!(
            status_to_result(reqwest::StatusCode::UNAUTHORIZED),
            Err(ClientError::Status { status: 401 })
        );
    }

    #[tokio::test]
    async fn test_invalid_url_is_network_error() {
        let endpoint = HttpEndpoint::new(build_client(1).unwrap());
        let request = ConnectionRequest {
            url: "not a url".to_string(),
            key: crate::settings::Secret::new("k"),
        };
        let result = endpoint.check(&request).await;
        assert!(matches!(result, Err(ClientError::Network(_))));
    }
}
