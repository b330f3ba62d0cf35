//! Object-level permission codenames.
//!
//! Grants are per-object rows of `(user, resource, codename)`; these
//! constants keep the codename strings consistent between the layer that
//! grants them and the layer that checks them.

/// Edit the content of one specific comment.
pub const CHANGE_COMMENT: &str = "change_comment";

/// Delete one specific comment.
pub const DELETE_COMMENT: &str = "delete_comment";

/// Everything a comment's writer is granted at creation time.
pub const COMMENT_WRITER_GRANTS: &[&str] = &[CHANGE_COMMENT, DELETE_COMMENT];

/// Resource type discriminators for object-level grants.
pub mod resources {
    pub const COMMENT: &str = "comment";
    pub const TRACK: &str = "track";
}

/// Returns `true` if the codename is one the writer of a comment receives.
pub fn is_writer_grant(codename: &str) -> bool {
    COMMENT_WRITER_GRANTS.contains(&codename)
}
