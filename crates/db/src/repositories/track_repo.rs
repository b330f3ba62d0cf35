//! Repository for the `tracks` table.
//!
//! Track CRUD proper lives with the surrounding API; the comment engine only
//! needs to create tracks (tests, fixtures) and resolve them for visibility.

use resonate_core::types::DbId;
use sqlx::PgPool;

use crate::models::track::{CreateTrack, Track};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, artist_id, title, permalink, is_private, created_at";

/// Provides the minimal track operations the comment engine needs.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (artist_id, title, permalink, is_private) \
             VALUES ($1, $2, $3, COALESCE($4, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(input.artist_id)
            .bind(&input.title)
            .bind(&input.permalink)
            .bind(input.is_private)
            .fetch_one(pool)
            .await
    }

    /// Find a track by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
