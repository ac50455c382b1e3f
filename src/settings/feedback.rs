//! Feedback form state and validation
//!
//! Kind and message are required; contact is optional. Validation runs
//! before any external call, and submission is single-flight like the
//! connection test.

use super::notification::Notification;
use crate::client::ClientError;
use serde::Serialize;
use std::fmt;

/// Category of feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Bug,
    Feature,
    Other,
}

impl FeedbackKind {
    pub const ALL: [FeedbackKind; 3] = [FeedbackKind::Bug, FeedbackKind::Feature, FeedbackKind::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Bug => "bug",
            FeedbackKind::Feature => "feature",
            FeedbackKind::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedbackKind::Bug => "Bug Report",
            FeedbackKind::Feature => "Feature Request",
            FeedbackKind::Other => "Other",
        }
    }
}

/// Payload handed to the feedback collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackSubmission {
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Missing required fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    MissingKind,
    EmptyMessage,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKind => write!(f, "Please select a feedback type"),
            Self::EmptyMessage => write!(f, "Please describe your feedback"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Feedback form fields plus submission state
#[derive(Debug, Default)]
pub struct FeedbackForm {
    pub kind: Option<FeedbackKind>,
    pub message: String,
    pub contact: String,
    submitting: bool,
    /// Inline validation message from the last submit attempt
    error: Option<ValidationError>,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Drop the inline validation message (after the user edits a field)
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Cycle the kind selector: none → bug → feature → other → bug
    pub fn cycle_kind(&mut self) {
        let next = match self.kind {
            Some(kind) => {
                let i = FeedbackKind::ALL.iter().position(|k| *k == kind).unwrap_or(0);
                (i + 1) % FeedbackKind::ALL.len()
            }
            None => 0,
        };
        self.kind = Some(FeedbackKind::ALL[next]);
        self.error = None;
    }

    /// Check required fields without side effects
    pub fn validate(&self) -> Result<FeedbackSubmission, ValidationError> {
        let kind = self.kind.ok_or(ValidationError::MissingKind)?;
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }

        let contact = self.contact.trim();
        Ok(FeedbackSubmission {
            kind,
            message: self.message.clone(),
            contact: (!contact.is_empty()).then(|| contact.to_string()),
        })
    }

    /// Start a submission
    ///
    /// Returns `Ok(None)` while a submission is already in flight, and the
    /// validation error (also kept for inline display) when fields are missing.
    pub fn begin_submit(&mut self) -> Result<Option<FeedbackSubmission>, ValidationError> {
        if self.submitting {
            return Ok(None);
        }

        match self.validate() {
            Ok(submission) => {
                self.error = None;
                self.submitting = true;
                tracing::info!("Submitting {} feedback", submission.kind.as_str());
                Ok(Some(submission))
            }
            Err(e) => {
                tracing::debug!("Feedback validation failed: {}", e);
                self.error = Some(e);
                Err(e)
            }
        }
    }

    /// Record the outcome; success clears the form
    pub fn finish_submit(&mut self, result: Result<(), ClientError>) -> Option<Notification> {
        if !self.submitting {
            return None;
        }
        self.submitting = false;

        match result {
            Ok(()) => {
                *self = Self::default();
                Some(Notification::info(
                    "Feedback Submitted",
                    "Thank you for your feedback!",
                ))
            }
            Err(e) => {
                tracing::warn!("Feedback submission failed: {}", e);
                Some(Notification::destructive(
                    "Error",
                    "Failed to submit feedback. Please try again.",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.kind = Some(FeedbackKind::Feature);
        form.message = "Dark mode for the overlay".to_string();
        form
    }

    #[test]
    fn test_required_fields() {
        let mut form = FeedbackForm::new();
        assert_eq!(form.begin_submit(), Err(ValidationError::MissingKind));
        assert_eq!(form.error(), Some(ValidationError::MissingKind));
        assert!(!form.is_submitting());

        form.cycle_kind();
        assert_eq!(form.kind, Some(FeedbackKind::Bug));
        assert_eq!(form.error(), None);

        form.message = "   ".to_string();
        assert_eq!(form.begin_submit(), Err(ValidationError::EmptyMessage));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_kind_selector_cycles_from_none() {
        let mut form = FeedbackForm::new();
        let kinds: Vec<_> = (0..4)
            .map(|_| {
                form.cycle_kind();
                form.kind
            })
            .collect();
        assert_eq!(
            kinds,
            [
                Some(FeedbackKind::Bug),
                Some(FeedbackKind::Feature),
                Some(FeedbackKind::Other),
                Some(FeedbackKind::Bug)
            ]
        );
    }

    #[test]
    fn test_contact_optional() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap().unwrap();
        assert_eq!(submission.contact, None);

        let mut form = filled();
        form.contact = " me@example.com ".to_string();
        let submission = form.begin_submit().unwrap().unwrap();
        assert_eq!(submission.contact.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn test_single_flight_and_reset() {
        let mut form = filled();
        assert!(form.begin_submit().unwrap().is_some());
        assert!(form.begin_submit().unwrap().is_none());

        let note = form.finish_submit(Ok(())).unwrap();
        assert_eq!(note.title, "Feedback Submitted");
        assert!(form.kind.is_none());
        assert!(form.message.is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let note = form.finish_submit(Err(ClientError::Simulated)).unwrap();
        assert!(note.is_destructive());
        assert_eq!(form.kind, Some(FeedbackKind::Feature));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_submission_json_shape() {
        let submission = filled().validate().unwrap();
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["type"], "feature");
        assert_eq!(json["message"], "Dark mode for the overlay");
        assert!(json.get("contact").is_none());
    }
}
