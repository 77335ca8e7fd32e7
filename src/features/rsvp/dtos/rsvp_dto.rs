use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The normalized, eight-field representation of one guest's RSVP.
///
/// Built once by the submission client, transmitted once, appended once.
/// Every field is text and always populated: the client applies the
/// documented fallbacks before transmission, and the server trusts the
/// client rather than re-validating field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubmissionRecord {
    /// Generated at submission time, IST display format
    pub timestamp: String,
    pub name: String,
    pub email: String,
    /// Digits only, or "Not provided"
    pub phone: String,
    /// Integer-as-text
    pub guests: String,
    /// Comma-joined event selections, never empty
    pub events: String,
    pub dietary: String,
    pub message: String,
}

impl SubmissionRecord {
    /// The eight fields in the fixed column order of the store:
    /// Timestamp, Name, Email, Phone, Guests, Events, Dietary, Message.
    pub fn as_row(&self) -> [&str; 8] {
        [
            &self.timestamp,
            &self.name,
            &self.email,
            &self.phone,
            &self.guests,
            &self.events,
            &self.dietary,
            &self.message,
        ]
    }
}
