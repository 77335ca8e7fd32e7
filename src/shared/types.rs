use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The uniform `{status, message}` shape returned by the ingest handler.
///
/// Every response from `POST /api/rsvp` is one of these, always with
/// HTTP 200; callers branch on `status` rather than the HTTP code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusEnvelope {
    pub status: SubmissionStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Success,
    Error,
}

impl StatusEnvelope {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Error,
            message: message.into(),
        }
    }
}
