use serde::Serialize;
use std::time::Duration;

use crate::config::ContactConfig;

pub const SENT_LABEL: &str = "Message Sent! ✓";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_fields(field: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            name: field("name").unwrap_or_default(),
            email: field("email").unwrap_or_default(),
            message: field("message").unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FeedbackPhase {
    Untouched,
    Sent,
    Reverted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitFeedback {
    original_label: String,
    phase: FeedbackPhase,
}

impl SubmitFeedback {
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            original_label: original_label.into(),
            phase: FeedbackPhase::Untouched,
        }
    }

    pub fn is_sent(&self) -> bool {
        self.phase == FeedbackPhase::Sent
    }

    pub fn sent(&self) -> Self {
        Self {
            original_label: self.original_label.clone(),
            phase: FeedbackPhase::Sent,
        }
    }

    // Every submission, including one made while the badge is showing,
    // restarts the full revert window.
    pub fn submit(&self, config: &ContactConfig) -> (Self, Duration) {
        (self.sent(), config.feedback_duration)
    }

    pub fn reverted(&self) -> Self {
        Self {
            original_label: self.original_label.clone(),
            phase: FeedbackPhase::Reverted,
        }
    }

    pub fn label(&self) -> &str {
        if self.is_sent() {
            SENT_LABEL
        } else {
            &self.original_label
        }
    }

    /// Inline style for the button. Empty until the first submission so
    /// the stylesheet's defaults apply.
    pub fn style(&self) -> &'static str {
        match self.phase {
            FeedbackPhase::Untouched => "",
            FeedbackPhase::Sent => "background: var(--gradient-primary); border-color: transparent;",
            FeedbackPhase::Reverted => "background: transparent; border-color: var(--neon-blue);",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_reads_named_fields() {
        let submission = ContactSubmission::from_fields(|name| match name {
            "name" => Some("Ada".to_string()),
            "email" => Some("ada@example.com".to_string()),
            "message" => Some("Hello".to_string()),
            _ => None,
        });

        assert_eq!(
            submission,
            ContactSubmission {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hello".to_string(),
            }
        );
        let logged = serde_json::to_value(&submission).expect("serializes");
        assert_eq!(logged["email"], "ada@example.com");
    }

    #[test]
    fn missing_fields_read_as_empty() {
        let submission = ContactSubmission::from_fields(|_| None);

        assert_eq!(submission, ContactSubmission::default());
    }

    #[test]
    fn feedback_swaps_label_and_restores_original() {
        let idle = SubmitFeedback::new("Send Message");
        assert_eq!(idle.label(), "Send Message");
        assert_eq!(idle.style(), "");

        let sent = idle.sent();
        assert!(sent.is_sent());
        assert_eq!(sent.label(), SENT_LABEL);
        assert!(sent.style().contains("var(--gradient-primary)"));

        let reverted = sent.reverted();
        assert_eq!(reverted.label(), "Send Message");
        assert!(reverted.style().contains("var(--neon-blue)"));
    }

    #[test]
    fn submission_shows_badge_then_reverts_after_three_seconds() {
        let submission = ContactSubmission::from_fields(|name| match name {
            "name" => Some("Ada".to_string()),
            "email" => Some("ada@example.com".to_string()),
            "message" => Some("Hello".to_string()),
            _ => None,
        });
        assert_eq!(submission.name, "Ada");

        let idle = SubmitFeedback::new("Send Message");
        let (sent, revert_after) = idle.submit(&ContactConfig::default());

        assert_eq!(revert_after, Duration::from_secs(3));
        assert_eq!(sent.label(), SENT_LABEL);
        assert_eq!(sent.reverted().label(), "Send Message");
    }

    #[test]
    fn resubmitting_restarts_the_revert_window() {
        let config = ContactConfig {
            feedback_duration: Duration::from_millis(1_500),
        };
        let (sent, first) = SubmitFeedback::new("Send Message").submit(&config);
        let (resent, second) = sent.submit(&config);

        assert_eq!(first, second);
        assert_eq!(second, Duration::from_millis(1_500));
        assert!(resent.is_sent());
        assert_eq!(resent.reverted().label(), "Send Message");
    }
}
