//! Track entity model and DTOs.
//!
//! The engine reads `artist_id` and `is_private` to resolve visibility;
//! everything else about tracks belongs to the surrounding CRUD API.

use resonate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub artist_id: DbId,
    pub title: String,
    pub permalink: String,
    pub is_private: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new track.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrack {
    pub artist_id: DbId,
    pub title: String,
    pub permalink: String,
    pub is_private: Option<bool>,
}
