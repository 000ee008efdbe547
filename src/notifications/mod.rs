// ABOUTME: Best-effort email notification collaborator for registration state changes
// ABOUTME: Provides the Notifier seam, an HTTP mail API client, and the message templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Email Notifications
//!
//! Fire-and-forget email delivery for registration state changes. Handlers
//! call [`Notifier::send`], log any failure, and carry on; a delivery error
//! never changes a handler's own outcome. When mail credentials are not
//! configured the server falls back to [`DisabledMailer`], which fails every
//! send without affecting anything else.

use crate::config::MailerConfig;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Upper bound on a single delivery attempt. A hanging mail API must not
/// stall request handling indefinitely.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced by a notification transport
#[derive(Debug, Error)]
pub enum NotificationError {
    /// Mail credentials were not supplied at startup
    #[error("mail transport is not configured")]
    NotConfigured,
    /// The HTTP request to the mail API failed
    #[error("mail transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The mail API answered with a non-success status
    #[error("mail API rejected the message with status {0}")]
    Rejected(http::StatusCode),
}

/// Outbound email sender.
///
/// The trait seam exists so tests can substitute recording or failing
/// implementations for the real transport.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message to one recipient
    ///
    /// # Errors
    ///
    /// Returns an error on any transport, credential, or remote problem.
    async fn send(&self, recipient: &str, subject: &str, body: &str)
        -> Result<(), NotificationError>;
}

/// Notifier backed by an HTTP mail API
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    from_address: String,
    api_key: String,
}

impl HttpMailer {
    /// Build a mailer from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &MailerConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            from_address: config.from_address.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl Notifier for HttpMailer {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), NotificationError> {
        let payload = json!({
            "from": self.from_address,
            "to": recipient,
            "subject": subject,
            "text": body,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::Rejected(status));
        }

        debug!("mail delivered to {recipient}");
        Ok(())
    }
}

/// Notifier used when no mail credentials are configured. Every send fails
/// with [`NotificationError::NotConfigured`].
pub struct DisabledMailer;

#[async_trait]
impl Notifier for DisabledMailer {
    async fn send(
        &self,
        _recipient: &str,
        _subject: &str,
        _body: &str,
    ) -> Result<(), NotificationError> {
        Err(NotificationError::NotConfigured)
    }
}

/// Construct the notifier for the supplied (possibly absent) mail config
///
/// # Errors
///
/// Returns an error if the HTTP mailer cannot be built.
pub fn build_notifier(config: Option<&MailerConfig>) -> anyhow::Result<Arc<dyn Notifier>> {
    match config {
        Some(mailer_config) => Ok(Arc::new(HttpMailer::new(mailer_config)?)),
        None => Ok(Arc::new(DisabledMailer)),
    }
}

/// Welcome message sent after a successful submission
#[must_use]
pub fn welcome_message(full_name: &str, course: &str) -> (String, String) {
    let subject = "Welcome to Course Registration!".to_owned();
    let body = format!(
        "Hello {full_name},\n\n\
         Thank you for registering for the '{course}' course.\n\
         Your application has been received and is currently Pending approval.\n\n\
         We will notify you once your status changes.\n\n\
         Best Regards,\n\
         Admin Team\n"
    );
    (subject, body)
}

/// Acceptance message sent when an admin approves a registration
#[must_use]
pub fn acceptance_message(full_name: &str, course: &str) -> (String, String) {
    let subject = "Congratulations! You have been Accepted".to_owned();
    let body = format!(
        "Dear {full_name},\n\n\
         We are pleased to inform you that your application for the '{course}' \
         course has been ACCEPTED!\n\n\
         Please wait for further instructions regarding the start date.\n\n\
         Welcome aboard!\n"
    );
    (subject, body)
}

/// Rejection message sent when an admin rejects a registration
#[must_use]
pub fn rejection_message(full_name: &str, course: &str) -> (String, String) {
    let subject = "Update regarding your application".to_owned();
    let body = format!(
        "Dear {full_name},\n\n\
         Thank you for your interest in the '{course}' course.\n\n\
         After careful review, we regret to inform you that we cannot move \
         forward with your application at this time.\n\n\
         We wish you the best in your future learning journey.\n"
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_mailer_always_fails() {
        let mailer = DisabledMailer;
        let result = mailer.send("ana@example.com", "subject", "body").await;
        assert!(matches!(result, Err(NotificationError::NotConfigured)));
    }

    #[test]
    fn test_welcome_message_mentions_name_and_course() {
        let (subject, body) = welcome_message("Ana Li", "Algebra");
        assert!(subject.contains("Welcome"));
        assert!(body.contains("Ana Li"));
        assert!(body.contains("'Algebra'"));
        assert!(body.contains("Pending"));
    }

    #[test]
    fn test_review_messages_mention_course() {
        let (_, accepted) = acceptance_message("Ana Li", "Algebra");
        assert!(accepted.contains("ACCEPTED"));

        let (_, rejected) = rejection_message("Ana Li", "Algebra");
        assert!(rejected.contains("cannot move forward"));
    }

    #[tokio::test]
    async fn test_build_notifier_without_config_always_fails_sends() {
        let notifier = build_notifier(None).unwrap();
        let result = notifier.send("ana@example.com", "subject", "body").await;
        assert!(matches!(result, Err(NotificationError::NotConfigured)));
    }
}
