//! Comment lifecycle orchestration.
//!
//! Each operation is one short-lived transaction against the shared store;
//! the thread-existence invariant (a thread lives iff it has comments) is
//! enforced entirely inside those transaction boundaries, so no in-process
//! locking is needed.

use std::sync::Arc;

use chrono::NaiveTime;
use resonate_core::permissions::{self, resources};
use resonate_core::types::DbId;
use resonate_core::visibility::can_view_track;
use resonate_db::models::comment::{Comment, CreateComment};
use resonate_db::models::track::Track;
use resonate_db::repositories::{CommentRepo, PermissionRepo, ThreadRepo, TrackRepo};
use resonate_db::{is_transient, DbPool};
use serde::Deserialize;

use crate::authz::PermissionBackend;
use crate::error::{CommentError, CommentResult};

/// Caller-supplied fields for a new comment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewComment {
    /// Free text; empty is allowed.
    pub content: String,
    /// Audio-timeline position; defaults to the start of the track.
    pub commented_at: Option<NaiveTime>,
    /// Join an existing thread instead of starting a new one.
    pub thread_id: Option<DbId>,
}

/// Orchestrates the comment-thread lifecycle.
///
/// Threads are never exposed as a mutable resource: they appear when the
/// first comment targets a track without a `thread_id`, and disappear inside
/// the transaction that deletes their last comment.
pub struct CommentService {
    pool: DbPool,
    permissions: Arc<dyn PermissionBackend>,
}

impl CommentService {
    pub fn new(pool: DbPool, permissions: Arc<dyn PermissionBackend>) -> Self {
        Self { pool, permissions }
    }

    /// Post a comment on a track.
    ///
    /// Without a `thread_id` a new thread is created for the comment; with
    /// one, the thread must belong to `track_id` or the call fails with a
    /// validation error. Thread creation and comment insertion share one
    /// transaction, so a thread can never persist without at least one
    /// comment, even across a crash boundary. After the commit the writer is
    /// granted modify/delete rights on the new comment.
    pub async fn create_comment(
        &self,
        track_id: DbId,
        writer_id: DbId,
        input: NewComment,
    ) -> CommentResult<Comment> {
        self.resolve_visible_track(track_id, Some(writer_id)).await?;

        let comment = match self.create_comment_tx(track_id, writer_id, &input).await {
            Err(CommentError::Database(ref err)) if is_transient(err) => {
                tracing::debug!(track_id, "retrying comment create after transient failure");
                self.create_comment_tx(track_id, writer_id, &input).await?
            }
            other => other?,
        };

        for permission in permissions::COMMENT_WRITER_GRANTS {
            self.permissions
                .grant(writer_id, resources::COMMENT, comment.id, permission)
                .await?;
        }

        Ok(comment)
    }

    async fn create_comment_tx(
        &self,
        track_id: DbId,
        writer_id: DbId,
        input: &NewComment,
    ) -> CommentResult<Comment> {
        let mut tx = self.pool.begin().await?;

        let thread = match input.thread_id {
            Some(thread_id) => {
                // The row lock serializes this insert against a concurrent
                // delete that may be emptying the same thread.
                match ThreadRepo::find_for_update(&mut tx, thread_id).await? {
                    Some(thread) if thread.track_id == track_id => thread,
                    _ => {
                        return Err(CommentError::validation(format!(
                            "thread {thread_id} does not belong to track {track_id}"
                        )))
                    }
                }
            }
            None => {
                let thread = ThreadRepo::create(&mut tx, track_id).await?;
                tracing::debug!(thread_id = thread.id, track_id, "started new comment thread");
                thread
            }
        };

        let comment = CommentRepo::create(
            &mut tx,
            &CreateComment {
                thread_id: thread.id,
                writer_id,
                track_id,
                content: input.content.clone(),
                commented_at: input.commented_at,
            },
        )
        .await?;

        tx.commit().await?;
        Ok(comment)
    }

    /// Delete a comment, sweeping away its thread when the comment was the
    /// last one in it.
    ///
    /// The requester must hold the `delete_comment` grant on the comment.
    /// `track_id` scopes the lookup: a comment on another track is reported
    /// as missing, never as forbidden.
    pub async fn delete_comment(
        &self,
        track_id: DbId,
        comment_id: DbId,
        requester_id: DbId,
    ) -> CommentResult<()> {
        self.resolve_visible_track(track_id, Some(requester_id))
            .await?;

        let comment = CommentRepo::find_by_id(&self.pool, comment_id)
            .await?
            .filter(|comment| comment.track_id == track_id)
            .ok_or_else(|| CommentError::not_found("comment", comment_id))?;

        let permitted = self
            .permissions
            .has_permission(
                requester_id,
                resources::COMMENT,
                comment.id,
                permissions::DELETE_COMMENT,
            )
            .await?;
        if !permitted {
            return Err(CommentError::forbidden(format!(
                "user {requester_id} may not delete comment {comment_id}"
            )));
        }

        match self.delete_comment_tx(&comment).await {
            Err(CommentError::Database(ref err)) if is_transient(err) => {
                tracing::debug!(comment_id, "retrying comment delete after transient failure");
                self.delete_comment_tx(&comment).await
            }
            other => other,
        }
    }

    async fn delete_comment_tx(&self, comment: &Comment) -> CommentResult<()> {
        let mut tx = self.pool.begin().await?;

        // Lock the thread row so the emptiness re-check below cannot race a
        // concurrent insert into the same thread or a second delete. Two
        // deletes racing for the last two comments serialize here: the loser
        // re-reads after the winner commits and sees what is really left.
        ThreadRepo::find_for_update(&mut tx, comment.thread_id).await?;

        if !CommentRepo::delete(&mut tx, comment.id).await? {
            // A concurrent delete won between the load and this transaction.
            return Err(CommentError::not_found("comment", comment.id));
        }

        PermissionRepo::revoke_resource(&mut tx, resources::COMMENT, comment.id).await?;

        if !CommentRepo::thread_has_comments(&mut tx, comment.thread_id).await? {
            // ThreadRepo::delete tolerates an already-missing row, so losing
            // a cleanup race is absorbed as a no-op.
            if ThreadRepo::delete(&mut tx, comment.thread_id).await? {
                tracing::debug!(thread_id = comment.thread_id, "removed empty comment thread");
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// All comments on a track, newest threads first, chronological within
    /// each thread. May be empty.
    pub async fn list_comments(
        &self,
        track_id: DbId,
        requester: Option<DbId>,
    ) -> CommentResult<Vec<Comment>> {
        self.resolve_visible_track(track_id, requester).await?;
        Ok(CommentRepo::list_for_track(&self.pool, track_id).await?)
    }

    /// Resolve a track as seen by `requester`.
    ///
    /// Private tracks are reported as missing to everyone but their artist,
    /// so the error never confirms that the track exists.
    async fn resolve_visible_track(
        &self,
        track_id: DbId,
        requester: Option<DbId>,
    ) -> CommentResult<Track> {
        let track = TrackRepo::find_by_id(&self.pool, track_id)
            .await?
            .ok_or_else(|| CommentError::not_found("track", track_id))?;

        if !can_view_track(track.is_private, track.artist_id, requester) {
            return Err(CommentError::not_found("track", track_id));
        }

        Ok(track)
    }
}
