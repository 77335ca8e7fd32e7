use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::extractor::EnvelopeJson;
use crate::features::rsvp::dtos::SubmissionRecord;
use crate::features::rsvp::services::RsvpService;
use crate::shared::constants::{LIVENESS_MESSAGE, RSVP_ERROR_MESSAGE, RSVP_SUCCESS_MESSAGE};
use crate::shared::types::StatusEnvelope;

/// Submit an RSVP record
///
/// Public endpoint. Appends one row to the store and triggers the two
/// notification emails. The response is always a `{status, message}`
/// envelope with HTTP 200; parse and append faults collapse to the
/// generic error envelope, notification faults are invisible here.
#[utoipa::path(
    post,
    path = "/api/rsvp",
    request_body = SubmissionRecord,
    responses(
        (status = 200, description = "Status envelope; branch on the status field", body = StatusEnvelope)
    ),
    tag = "rsvp"
)]
pub async fn submit_rsvp(
    State(service): State<Arc<RsvpService>>,
    EnvelopeJson(record): EnvelopeJson<SubmissionRecord>,
) -> Json<StatusEnvelope> {
    match service.ingest(record).await {
        Ok(_) => Json(StatusEnvelope::success(RSVP_SUCCESS_MESSAGE)),
        Err(e) => {
            tracing::error!("RSVP ingest failed: {:?}", e);
            Json(StatusEnvelope::error(RSVP_ERROR_MESSAGE))
        }
    }
}

/// Liveness probe
///
/// Fixed confirmation string, used only to verify the endpoint is
/// reachable. Not part of the submission contract.
#[utoipa::path(
    get,
    path = "/api/rsvp",
    responses(
        (status = 200, description = "Fixed confirmation text", body = String)
    ),
    tag = "rsvp"
)]
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum_test::TestServer;
    use serde_json::json;

    use crate::features::rsvp::routes;
    use crate::features::rsvp::services::RsvpService;
    use crate::shared::constants::{LIVENESS_MESSAGE, RSVP_ERROR_MESSAGE, RSVP_SUCCESS_MESSAGE};
    use crate::shared::test_helpers::{InMemoryStore, RecordingNotifier};
    use crate::shared::types::{StatusEnvelope, SubmissionStatus};

    fn test_server(
        store: Arc<InMemoryStore>,
        notifier: Arc<RecordingNotifier>,
    ) -> TestServer {
        let service = Arc::new(RsvpService::new(
            store,
            notifier,
            "couple@wedding.example".to_string(),
        ));
        TestServer::new(routes::routes(service)).unwrap()
    }

    fn valid_payload() -> serde_json::Value {
        json!({
            "timestamp": "23/11/2025, 8:00:00 pm",
            "name": "Asha Rao",
            "email": "asha@example.com",
            "phone": "9876543210",
            "guests": "2",
            "events": "Wedding, Haldi",
            "dietary": "Vegetarian",
            "message": "Can't wait!"
        })
    }

    #[tokio::test]
    async fn test_submit_appends_row_and_returns_success_envelope() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let server = test_server(Arc::clone(&store), notifier);

        let response = server.post("/api/rsvp").json(&valid_payload()).await;

        response.assert_status_ok();
        let envelope: StatusEnvelope = response.json();
        assert_eq!(envelope.status, SubmissionStatus::Success);
        assert_eq!(envelope.message, RSVP_SUCCESS_MESSAGE);

        let rows = store.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].as_row(),
            [
                "23/11/2025, 8:00:00 pm",
                "Asha Rao",
                "asha@example.com",
                "9876543210",
                "2",
                "Wedding, Haldi",
                "Vegetarian",
                "Can't wait!",
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_json_returns_error_envelope_and_appends_nothing() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let server = test_server(Arc::clone(&store), notifier);

        let response = server
            .post("/api/rsvp")
            .content_type("application/json")
            .text("{ this is not json")
            .await;

        response.assert_status_ok();
        let envelope: StatusEnvelope = response.json();
        assert_eq!(envelope.status, SubmissionStatus::Error);
        assert_eq!(envelope.message, RSVP_ERROR_MESSAGE);
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_notifier_failure_still_returns_success_envelope() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::failing());
        let server = test_server(Arc::clone(&store), notifier);

        let response = server.post("/api/rsvp").json(&valid_payload()).await;

        let envelope: StatusEnvelope = response.json();
        assert_eq!(envelope.status, SubmissionStatus::Success);
        assert_eq!(envelope.message, RSVP_SUCCESS_MESSAGE);
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_failure_returns_error_envelope() {
        let store = Arc::new(InMemoryStore::failing());
        let notifier = Arc::new(RecordingNotifier::default());
        let server = test_server(store, notifier);

        let response = server.post("/api/rsvp").json(&valid_payload()).await;

        response.assert_status_ok();
        let envelope: StatusEnvelope = response.json();
        assert_eq!(envelope.status, SubmissionStatus::Error);
        assert_eq!(envelope.message, RSVP_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_liveness_returns_fixed_text() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let server = test_server(store, notifier);

        let response = server.get("/api/rsvp").await;

        response.assert_status_ok();
        assert_eq!(response.text(), LIVENESS_MESSAGE);
    }
}
