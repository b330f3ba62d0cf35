//! Service-level error type.

use resonate_core::error::CoreError;
use resonate_core::types::DbId;

/// Error type for comment service operations.
///
/// Wraps [`CoreError`] for domain failures and `sqlx::Error` for storage
/// failures, so an HTTP layer can map variants onto status codes without
/// inspecting message text.
#[derive(Debug, thiserror::Error)]
pub enum CommentError {
    /// A domain-level error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for service return values.
pub type CommentResult<T> = Result<T, CommentError>;

impl CommentError {
    /// The entity does not exist, or must appear not to exist to this
    /// requester.
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }.into()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into()).into()
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        CoreError::Forbidden(msg.into()).into()
    }
}
