//! Repository for the `object_permissions` table.
//!
//! Object-level grants: one row per (user, resource, codename). Granting is
//! idempotent; revocation targets a whole resource so that deleting the
//! resource leaves no orphaned grants behind.

use resonate_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::permission::ObjectPermission;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, resource_type, resource_id, permission, created_at";

/// Provides grant/check/revoke operations for object-level permissions.
pub struct PermissionRepo;

impl PermissionRepo {
    /// Grant a permission codename on one resource to one user.
    ///
    /// Granting the same permission twice is a no-op.
    pub async fn grant(
        pool: &PgPool,
        user_id: DbId,
        resource_type: &str,
        resource_id: DbId,
        permission: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO object_permissions (user_id, resource_type, resource_id, permission) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT ON CONSTRAINT uq_object_permissions DO NOTHING",
        )
        .bind(user_id)
        .bind(resource_type)
        .bind(resource_id)
        .bind(permission)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Whether the user holds the permission on the resource.
    pub async fn has_permission(
        pool: &PgPool,
        user_id: DbId,
        resource_type: &str,
        resource_id: DbId,
        permission: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM object_permissions \
             WHERE user_id = $1 AND resource_type = $2 \
               AND resource_id = $3 AND permission = $4)",
        )
        .bind(user_id)
        .bind(resource_type)
        .bind(resource_id)
        .bind(permission)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// All grants attached to one resource, oldest first.
    pub async fn list_for_resource(
        pool: &PgPool,
        resource_type: &str,
        resource_id: DbId,
    ) -> Result<Vec<ObjectPermission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM object_permissions \
             WHERE resource_type = $1 AND resource_id = $2 \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, ObjectPermission>(&query)
            .bind(resource_type)
            .bind(resource_id)
            .fetch_all(pool)
            .await
    }

    /// Remove every grant attached to a resource. Runs on the caller's
    /// transaction so grants disappear together with the resource itself.
    pub async fn revoke_resource(
        conn: &mut PgConnection,
        resource_type: &str,
        resource_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM object_permissions WHERE resource_type = $1 AND resource_id = $2",
        )
        .bind(resource_type)
        .bind(resource_id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected())
    }
}
