//! Builders for the two notification messages.
//!
//! Each renders a plain-text and an HTML variant of the same content
//! from the submission record, with no conditional logic.

use crate::core::error::NotifyError;
use crate::features::rsvp::dtos::SubmissionRecord;
use crate::modules::mailer::EmailMessage;
use crate::shared::constants::COUPLE_NAMES;
use crate::shared::templates::render_template;

/// Owner-notify: full record details to the fixed operator address
pub fn owner_notification(
    owner_email: &str,
    record: &SubmissionRecord,
) -> Result<EmailMessage, NotifyError> {
    Ok(EmailMessage {
        to: owner_email.to_string(),
        subject: format!("🎉 New Wedding RSVP from {}", record.name),
        text_body: render_template("owner_notify.txt.jinja", record)?,
        html_body: render_template("owner_notify.html.jinja", record)?,
    })
}

/// Guest-confirm: thank-you with RSVP details to the submitter's address
pub fn guest_confirmation(record: &SubmissionRecord) -> Result<EmailMessage, NotifyError> {
    Ok(EmailMessage {
        to: record.email.clone(),
        subject: format!("Thank you for your RSVP! - {}'s Wedding", COUPLE_NAMES),
        text_body: render_template("guest_confirm.txt.jinja", record)?,
        html_body: render_template("guest_confirm.html.jinja", record)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_record;

    #[test]
    fn test_owner_notification_interpolates_every_field() {
        let record = sample_record();
        let message = owner_notification("couple@wedding.example", &record).unwrap();

        assert_eq!(message.to, "couple@wedding.example");
        assert!(message.subject.contains("Asha Rao"));

        for body in [&message.text_body, &message.html_body] {
            assert!(body.contains("Asha Rao"));
            assert!(body.contains("asha@example.com"));
            assert!(body.contains("9876543210"));
            assert!(body.contains("2"));
            assert!(body.contains("Wedding, Haldi"));
            assert!(body.contains("Vegetarian"));
            assert!(body.contains("Can&#x27;t wait!") || body.contains("Can't wait!"));
            assert!(body.contains("23/11/2025, 8:00:00 pm"));
        }
    }

    #[test]
    fn test_guest_confirmation_addresses_the_submitter() {
        let record = sample_record();
        let message = guest_confirmation(&record).unwrap();

        assert_eq!(message.to, "asha@example.com");
        assert!(message.subject.contains(COUPLE_NAMES));
        assert!(message.text_body.contains("Dear Asha Rao"));
        assert!(message.html_body.contains("Asha Rao"));
        // RSVP details echoed back
        assert!(message.text_body.contains("Wedding, Haldi"));
        assert!(message.text_body.contains("Number of Guests: 2"));
    }
}
