//! RSVP submission pipeline, client side.
//!
//! Collects and validates form input, builds the normalized
//! [`SubmissionRecord`](crate::features::rsvp::dtos::SubmissionRecord),
//! and transmits it to the ingest endpoint exactly once per attempt.
//! Validation fails fast and locally, before any network activity;
//! neither transport failures nor server rejections are retried.

pub mod form;
pub mod submit;

pub use form::RsvpForm;
pub use submit::SubmissionClient;
