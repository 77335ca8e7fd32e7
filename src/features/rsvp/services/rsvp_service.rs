use std::sync::Arc;

use crate::core::error::{NotifyError, StoreError};
use crate::features::rsvp::dtos::SubmissionRecord;
use crate::features::rsvp::services::RsvpStore;
use crate::modules::mailer::{messages, EmailMessage, Notifier};

/// Service for ingesting RSVP submissions.
///
/// Append first, notify second: once the row is durable the request is
/// a success, whatever happens to the two notification dispatches.
pub struct RsvpService {
    store: Arc<dyn RsvpStore>,
    notifier: Arc<dyn Notifier>,
    owner_email: String,
}

impl RsvpService {
    pub fn new(store: Arc<dyn RsvpStore>, notifier: Arc<dyn Notifier>, owner_email: String) -> Self {
        Self {
            store,
            notifier,
            owner_email,
        }
    }

    /// Append the record, then fire both notifications best-effort.
    ///
    /// Returns the appended row id. An append failure propagates; a
    /// notification failure never does.
    pub async fn ingest(&self, record: SubmissionRecord) -> Result<i64, StoreError> {
        let row_id = self.store.append(&record).await.map_err(|e| {
            tracing::error!("Failed to append RSVP row: {:?}", e);
            e
        })?;

        tracing::info!("RSVP appended: row_id={}, guest={}", row_id, record.name);

        self.dispatch_best_effort(
            "owner notification",
            messages::owner_notification(&self.owner_email, &record),
        )
        .await;
        self.dispatch_best_effort("guest confirmation", messages::guest_confirmation(&record))
            .await;

        Ok(row_id)
    }

    /// Uniform catch-and-log wrapper applied to both dispatch calls.
    /// A render or delivery failure is logged and swallowed.
    async fn dispatch_best_effort(
        &self,
        label: &str,
        message: Result<EmailMessage, NotifyError>,
    ) {
        let message = match message {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("{} not sent: {}", label, e);
                return;
            }
        };

        match self.notifier.notify(&message).await {
            Ok(()) => tracing::info!("{} sent to: {}", label, message.to),
            Err(e) => tracing::warn!("{} failed for {}: {}", label, message.to, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_record, InMemoryStore, RecordingNotifier};

    fn service(store: Arc<InMemoryStore>, notifier: Arc<RecordingNotifier>) -> RsvpService {
        RsvpService::new(store, notifier, "couple@wedding.example".to_string())
    }

    #[tokio::test]
    async fn test_ingest_appends_exactly_one_row() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = service(Arc::clone(&store), Arc::clone(&notifier));

        let record = sample_record();
        let row_id = svc.ingest(record.clone()).await.unwrap();

        assert_eq!(row_id, 1);
        let rows = store.rows.lock().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], record);
    }

    #[tokio::test]
    async fn test_ingest_sends_both_notifications() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = service(store, Arc::clone(&notifier));

        svc.ingest(sample_record()).await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "couple@wedding.example");
        assert_eq!(sent[1].to, "asha@example.com");
    }

    #[tokio::test]
    async fn test_notification_failure_never_fails_the_ingest() {
        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::failing());
        let svc = service(Arc::clone(&store), notifier);

        let result = svc.ingest(sample_record()).await;

        assert!(result.is_ok());
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ingest_handles_arbitrary_guests() {
        use fake::faker::internet::en::SafeEmail;
        use fake::faker::name::en::Name;
        use fake::Fake;

        let store = Arc::new(InMemoryStore::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = service(Arc::clone(&store), Arc::clone(&notifier));

        for _ in 0..5 {
            let mut record = sample_record();
            record.name = Name().fake();
            record.email = SafeEmail().fake();
            svc.ingest(record).await.unwrap();
        }

        assert_eq!(store.rows.lock().unwrap().len(), 5);
        // owner + guest per submission
        assert_eq!(notifier.sent.lock().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_append_failure_propagates_and_skips_notifications() {
        let store = Arc::new(InMemoryStore::failing());
        let notifier = Arc::new(RecordingNotifier::default());
        let svc = service(store, Arc::clone(&notifier));

        let result = svc.ingest(sample_record()).await;

        assert!(result.is_err());
        assert!(notifier.sent.lock().unwrap().is_empty());
    }
}
