use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::rsvp::handlers;
use crate::features::rsvp::services::RsvpService;

/// Create routes for the RSVP feature
///
/// Note: this feature is public (no authentication required); guests
/// submit from the invitation site without an account.
pub fn routes(service: Arc<RsvpService>) -> Router {
    Router::new()
        .route(
            "/api/rsvp",
            post(handlers::submit_rsvp).get(handlers::liveness),
        )
        .with_state(service)
}
