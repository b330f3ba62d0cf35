//! User entity model and DTOs.
//!
//! Only the slice of the user model the comment engine needs: comments carry
//! a writer and object permissions attach to a user.

use resonate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub permalink: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub display_name: String,
    pub permalink: String,
}
