//! Comment-thread lifecycle engine.
//!
//! Every comment on a track belongs to a thread, and a thread exists only
//! while it has at least one comment: the first comment brings the thread
//! into being, the last one's deletion sweeps it away. [`CommentService`]
//! owns both ends of that lifecycle, the listing contract (newest threads
//! first, chronological within a thread), and private-track visibility
//! masking.

pub mod authz;
pub mod error;
pub mod service;

pub use authz::{DbPermissionBackend, PermissionBackend};
pub use error::{CommentError, CommentResult};
pub use service::{CommentService, NewComment};
