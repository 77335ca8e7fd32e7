use chrono::Utc;

use crate::client::form::RsvpForm;
use crate::core::config::ClientConfig;
use crate::core::error::ClientError;
use crate::features::rsvp::dtos::SubmissionRecord;
use crate::shared::types::{StatusEnvelope, SubmissionStatus};

/// Client for the RSVP ingest endpoint.
///
/// One POST per submission, no retry and no timeout beyond the
/// transport's own. The response envelope is read and branched on,
/// rather than inferring success from the absence of a transport error.
pub struct SubmissionClient {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl SubmissionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Validate and normalize the form, then transmit the record.
    ///
    /// Returns the server's confirmation message. A validation failure
    /// rejects locally without any network activity.
    pub async fn submit(&self, form: RsvpForm) -> Result<String, ClientError> {
        let record = form.into_record(Utc::now())?;
        self.send(&record).await
    }

    /// Transmit an already-built record.
    pub async fn send(&self, record: &SubmissionRecord) -> Result<String, ClientError> {
        tracing::debug!("Submitting RSVP to {}", self.config.endpoint_url);

        let response = self
            .http_client
            .post(&self.config.endpoint_url)
            .json(record)
            .send()
            .await?;

        let envelope = response.json::<StatusEnvelope>().await?;

        match envelope.status {
            SubmissionStatus::Success => Ok(envelope.message),
            SubmissionStatus::Error => Err(ClientError::Rejected(envelope.message)),
        }
    }
}
