//! RSVP submission pipeline, server side.
//!
//! A stateless ingest handler that appends one row to the append-only
//! store and fires two best-effort email notifications.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/rsvp` | No | Submit an RSVP record |
//! | GET | `/api/rsvp` | No | Liveness probe (plain text) |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::RsvpService;
