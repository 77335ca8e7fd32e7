use axum::{
    body::Body,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::shared::constants::RSVP_ERROR_MESSAGE;
use crate::shared::types::StatusEnvelope;

/// JSON extractor for the ingest endpoint.
///
/// A malformed payload routes to the single error path: the rejection
/// collapses to the generic error envelope, and the parse detail is
/// logged server-side only. The envelope ships with HTTP 200 like every
/// other ingest response; callers branch on the `status` field.
pub struct EnvelopeJson<T>(pub T);

impl<T, S> FromRequest<S> for EnvelopeJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = EnvelopeJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(EnvelopeJsonRejection(rejection)),
        }
    }
}

pub struct EnvelopeJsonRejection(JsonRejection);

impl IntoResponse for EnvelopeJsonRejection {
    fn into_response(self) -> Response {
        let detail = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        tracing::error!("Rejected RSVP payload: {}", detail);

        (
            StatusCode::OK,
            Json(StatusEnvelope::error(RSVP_ERROR_MESSAGE)),
        )
            .into_response()
    }
}
