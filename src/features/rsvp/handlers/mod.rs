pub mod rsvp_handler;

pub use rsvp_handler::{__path_liveness, __path_submit_rsvp, liveness, submit_rsvp};
