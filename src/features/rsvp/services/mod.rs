pub mod rsvp_service;
pub mod store;

pub use rsvp_service::RsvpService;
pub use store::{PgRsvpStore, RsvpStore};
