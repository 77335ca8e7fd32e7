use thiserror::Error;

use crate::shared::templates::TemplateError;

/// Append failure from the backing tabular store.
///
/// Collapsed to the generic error envelope at the handler boundary;
/// the detail is logged server-side only.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Per-dispatch notification failure.
///
/// Explicitly non-fatal: the row is already durable when a notification
/// runs, so these are logged and swallowed, never escalated.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Mail request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail API rejected the message: HTTP {status} - {body}")]
    Rejected { status: u16, body: String },
}

/// Client-side submission failure.
///
/// Validation fails fast and locally, before any network activity.
/// Transport and rejection errors are terminal for the attempt; the
/// guest resubmits manually, there is no automatic retry.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("Oops! Something went wrong. Please try again or contact us directly.")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Rejected(String),
}
