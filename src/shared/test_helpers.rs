#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use crate::core::error::{NotifyError, StoreError};
#[cfg(test)]
use crate::features::rsvp::dtos::SubmissionRecord;
#[cfg(test)]
use crate::features::rsvp::services::RsvpStore;
#[cfg(test)]
use crate::modules::mailer::{EmailMessage, Notifier};

/// The record from the reference submission scenario
#[cfg(test)]
pub fn sample_record() -> SubmissionRecord {
    SubmissionRecord {
        timestamp: "23/11/2025, 8:00:00 pm".to_string(),
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        guests: "2".to_string(),
        events: "Wedding, Haldi".to_string(),
        dietary: "Vegetarian".to_string(),
        message: "Can't wait!".to_string(),
    }
}

/// In-memory append-only store. `failing()` simulates an append fault.
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryStore {
    pub rows: Mutex<Vec<SubmissionRecord>>,
    fail: bool,
}

#[cfg(test)]
impl InMemoryStore {
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl RsvpStore for InMemoryStore {
    async fn append(&self, record: &SubmissionRecord) -> Result<i64, StoreError> {
        if self.fail {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        let mut rows = self.rows.lock().unwrap();
        rows.push(record.clone());
        Ok(rows.len() as i64)
    }
}

/// Recording notifier. `failing()` simulates a mail API outage.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::Rejected {
                status: 503,
                body: "simulated mail outage".to_string(),
            });
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}
