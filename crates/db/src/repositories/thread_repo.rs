//! Repository for the `comment_threads` table.
//!
//! Threads are never created or deleted at a caller's direct request; the
//! service drives both ends of the lifecycle inside its own transactions, so
//! every method here takes a transaction connection.

use resonate_core::types::DbId;
use sqlx::PgConnection;

use crate::models::comment::CommentThread;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, track_id, created_at";

/// Provides lifecycle operations for comment threads.
pub struct ThreadRepo;

impl ThreadRepo {
    /// Insert a new thread for a track, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        track_id: DbId,
    ) -> Result<CommentThread, sqlx::Error> {
        let query = format!(
            "INSERT INTO comment_threads (track_id) \
             VALUES ($1) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommentThread>(&query)
            .bind(track_id)
            .fetch_one(conn)
            .await
    }

    /// Find a thread and hold a row lock on it for the rest of the
    /// transaction.
    ///
    /// The lock serializes comment inserts against the delete-and-cleanup
    /// path: whichever transaction waits sees the winner's committed rows
    /// when it proceeds.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<CommentThread>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comment_threads WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, CommentThread>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Delete a thread. Safe to call when the row is already gone; returns
    /// whether a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comment_threads WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
