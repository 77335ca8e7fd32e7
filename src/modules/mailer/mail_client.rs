use async_trait::async_trait;
use serde::Serialize;

use crate::core::config::MailConfig;
use crate::core::error::NotifyError;
use crate::modules::mailer::{EmailMessage, Notifier};

/// Wire format of the HTTP mail API (Resend-compatible)
#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Client for the HTTP mail API used to deliver both notifications
pub struct MailClient {
    config: MailConfig,
    http_client: reqwest::Client,
}

impl MailClient {
    pub fn new(config: MailConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Notifier for MailClient {
    async fn notify(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        let request_body = SendMailRequest {
            from: &self.config.sender,
            to: [&message.to],
            subject: &message.subject,
            text: &message.text_body,
            html: &message.html_body,
        };

        tracing::debug!("Sending email to {}: {}", message.to, message.subject);

        let response = self
            .http_client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!("Email sent to: {}", message.to);
        Ok(())
    }
}
