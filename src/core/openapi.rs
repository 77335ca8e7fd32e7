use utoipa::OpenApi;

use crate::features::rsvp::{dtos as rsvp_dtos, handlers as rsvp_handlers};
use crate::shared::types::{StatusEnvelope, SubmissionStatus};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RSVP Core API",
        description = "Wedding RSVP submission pipeline: one ingest endpoint, one liveness probe.",
        version = "0.1.0"
    ),
    paths(rsvp_handlers::submit_rsvp, rsvp_handlers::liveness),
    components(schemas(
        rsvp_dtos::SubmissionRecord,
        StatusEnvelope,
        SubmissionStatus
    )),
    tags(
        (name = "rsvp", description = "RSVP submission endpoints (public)")
    )
)]
pub struct ApiDoc;
