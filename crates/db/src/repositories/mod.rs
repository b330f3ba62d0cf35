//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods with no
//! business policy. Read-only methods take `&PgPool`; methods that must run
//! inside a caller-owned transaction take `&mut PgConnection` so the service
//! layer controls the transaction boundary.

pub mod comment_repo;
pub mod permission_repo;
pub mod thread_repo;
pub mod track_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use permission_repo::PermissionRepo;
pub use thread_repo::ThreadRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;
