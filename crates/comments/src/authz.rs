//! Object-level authorization.
//!
//! The service never decides on its own who may delete a comment; it asks an
//! injected [`PermissionBackend`]. The default backend stores grants in the
//! `object_permissions` table, but the trait keeps the policy swappable for
//! deployments with an external authorization system.

use async_trait::async_trait;
use resonate_core::types::DbId;
use resonate_db::repositories::PermissionRepo;
use resonate_db::DbPool;

/// Grants and checks per-object permissions.
#[async_trait]
pub trait PermissionBackend: Send + Sync {
    /// Grant `permission` on one resource to one user. Must be idempotent.
    async fn grant(
        &self,
        user_id: DbId,
        resource_type: &str,
        resource_id: DbId,
        permission: &str,
    ) -> Result<(), sqlx::Error>;

    /// Whether the user holds `permission` on the resource.
    async fn has_permission(
        &self,
        user_id: DbId,
        resource_type: &str,
        resource_id: DbId,
        permission: &str,
    ) -> Result<bool, sqlx::Error>;
}

/// Permission backend backed by the `object_permissions` table.
pub struct DbPermissionBackend {
    pool: DbPool,
}

impl DbPermissionBackend {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionBackend for DbPermissionBackend {
    async fn grant(
        &self,
        user_id: DbId,
        resource_type: &str,
        resource_id: DbId,
        permission: &str,
    ) -> Result<(), sqlx::Error> {
        PermissionRepo::grant(&self.pool, user_id, resource_type, resource_id, permission).await
    }

    async fn has_permission(
        &self,
        user_id: DbId,
        resource_type: &str,
        resource_id: DbId,
        permission: &str,
    ) -> Result<bool, sqlx::Error> {
        PermissionRepo::has_permission(&self.pool, user_id, resource_type, resource_id, permission)
            .await
    }
}
