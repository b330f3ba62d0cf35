//! Repository for the `comments` table.

use resonate_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, thread_id, writer_id, track_id, content, created_at, commented_at";

/// Provides CRUD operations for comments. There is no update: comments are
/// immutable once posted.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment bound to an existing thread, returning the row.
    ///
    /// Runs on the caller's transaction so the insert commits or rolls back
    /// together with any thread creation that preceded it.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (thread_id, writer_id, track_id, content, commented_at) \
             VALUES ($1, $2, $3, $4, COALESCE($5, TIME '00:00')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.thread_id)
            .bind(input.writer_id)
            .bind(input.track_id)
            .bind(&input.content)
            .bind(input.commented_at)
            .fetch_one(conn)
            .await
    }

    /// Find a comment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete exactly one comment; returns whether a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether any comment still references the thread.
    ///
    /// Must run inside the same transaction as the preceding delete so the
    /// answer reflects that delete rather than a stale snapshot.
    pub async fn thread_has_comments(
        conn: &mut PgConnection,
        thread_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM comments WHERE thread_id = $1)")
                .bind(thread_id)
                .fetch_one(conn)
                .await?;
        Ok(row.0)
    }

    /// All comments on a track: newest threads first, oldest comment first
    /// within each thread. Ids break timestamp ties so the order is total.
    pub async fn list_for_track(pool: &PgPool, track_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = "SELECT c.id, c.thread_id, c.writer_id, c.track_id, c.content, \
                            c.created_at, c.commented_at \
                     FROM comments c \
                     JOIN comment_threads t ON t.id = c.thread_id \
                     WHERE c.track_id = $1 \
                     ORDER BY t.created_at DESC, t.id DESC, c.created_at ASC, c.id ASC";
        sqlx::query_as::<_, Comment>(query)
            .bind(track_id)
            .fetch_all(pool)
            .await
    }
}
