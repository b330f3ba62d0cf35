//! Comment thread and comment entity models and DTOs.
//!
//! Thread existence is derived from membership: a `comment_threads` row lives
//! only while at least one comment references it. The service layer owns that
//! lifecycle; nothing here creates or destroys threads on its own.

use chrono::NaiveTime;
use resonate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `comment_threads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentThread {
    pub id: DbId,
    pub track_id: DbId,
    /// Set when the thread's first comment was posted.
    pub created_at: Timestamp,
}

/// A row from the `comments` table.
///
/// `track_id` is a denormalized copy of the owning thread's track, kept for
/// query convenience; the schema's composite foreign key keeps the two in
/// step.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub thread_id: DbId,
    pub writer_id: DbId,
    pub track_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    /// Position on the track's audio timeline the comment annotates.
    pub commented_at: NaiveTime,
}

/// DTO for inserting a comment bound to an already-resolved thread.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub thread_id: DbId,
    pub writer_id: DbId,
    pub track_id: DbId,
    /// Free text; empty is allowed.
    pub content: String,
    /// Falls back to the schema default (start of track) when `None`.
    pub commented_at: Option<NaiveTime>,
}
