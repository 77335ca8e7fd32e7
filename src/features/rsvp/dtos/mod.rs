pub mod rsvp_dto;

pub use rsvp_dto::SubmissionRecord;
