//! Object-level permission grant model.

use resonate_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `object_permissions` table: one codename granted to one
/// user on one specific resource.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ObjectPermission {
    pub id: DbId,
    pub user_id: DbId,
    pub resource_type: String,
    pub resource_id: DbId,
    pub permission: String,
    pub created_at: Timestamp,
}
