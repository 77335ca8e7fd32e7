//! Outbound email dispatch for the two RSVP notifications.
//!
//! Delivery is best-effort by contract: the caller wraps every dispatch
//! so a failure is logged and swallowed, never retried, and never rolls
//! back the durable append that preceded it.

pub mod mail_client;
pub mod messages;

use async_trait::async_trait;

use crate::core::error::NotifyError;

pub use mail_client::MailClient;

/// A fully rendered notification, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Notification transport seam.
///
/// The production implementation is [`MailClient`]; tests substitute a
/// recording fake.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &EmailMessage) -> Result<(), NotifyError>;
}
