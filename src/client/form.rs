use chrono::{DateTime, FixedOffset, Utc};
use validator::Validate;

use crate::core::error::ClientError;
use crate::features::rsvp::dtos::SubmissionRecord;
use crate::shared::constants::{
    DIETARY_FALLBACK, EVENT_SEPARATOR, MESSAGE_FALLBACK, PHONE_FALLBACK,
};
use crate::shared::validation::normalize_phone;

/// IST (UTC+05:30) — timestamps use the wedding's local time
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Raw form input, before normalization and defaulting.
#[derive(Debug, Clone, Default, Validate)]
pub struct RsvpForm {
    #[validate(length(min = 1, message = "Please enter your name."))]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,

    pub phone: String,

    #[validate(length(min = 1, message = "Please tell us how many guests are coming."))]
    pub guests: String,

    /// Checked event selections, in display order
    pub events: Vec<String>,

    pub dietary: String,

    pub message: String,
}

impl RsvpForm {
    /// Build the normalized record or reject locally.
    ///
    /// This is the client's validation gate: a failure here means no
    /// network call happens for this attempt.
    pub fn into_record(self, now: DateTime<Utc>) -> Result<SubmissionRecord, ClientError> {
        if self.events.is_empty() {
            return Err(ClientError::Validation(
                "Please select at least one event to attend.".to_string(),
            ));
        }

        self.validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        let phone = normalize_phone(&self.phone);

        Ok(SubmissionRecord {
            timestamp: ist_timestamp(now),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: or_fallback(phone, PHONE_FALLBACK),
            guests: self.guests.trim().to_string(),
            events: self.events.join(EVENT_SEPARATOR),
            dietary: or_fallback(self.dietary, DIETARY_FALLBACK),
            message: or_fallback(self.message, MESSAGE_FALLBACK),
        })
    }
}

/// Submission-time display timestamp, e.g. "23/11/2025, 8:00:00 pm"
pub fn ist_timestamp(now: DateTime<Utc>) -> String {
    let ist = FixedOffset::east_opt(IST_OFFSET_SECS).expect("IST offset is in range");
    now.with_timezone(&ist)
        .format("%-d/%-m/%Y, %-I:%M:%S %P")
        .to_string()
}

fn or_fallback(value: String, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
