use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::StoreError;
use crate::features::rsvp::dtos::SubmissionRecord;

/// Narrow seam over the append-only tabular store.
///
/// The handler's logic is testable against an in-memory fake; the
/// production backend is Postgres. Atomicity of a single append is the
/// store's guarantee, not this trait's.
#[async_trait]
pub trait RsvpStore: Send + Sync {
    /// Append one record as a new row, returning the row id.
    async fn append(&self, record: &SubmissionRecord) -> Result<i64, StoreError>;
}

/// Postgres-backed store. One RSVP per row, eight fixed columns.
pub struct PgRsvpStore {
    pool: PgPool,
}

impl PgRsvpStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RsvpStore for PgRsvpStore {
    async fn append(&self, record: &SubmissionRecord) -> Result<i64, StoreError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO rsvps (submitted_at, name, email, phone, guests, events, dietary, message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&record.timestamp)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.guests)
        .bind(&record.events)
        .bind(&record.dietary)
        .bind(&record.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
