//! Track visibility rules.

use crate::types::DbId;

/// Decide whether `requester` may see a track at all.
///
/// Public tracks are visible to everyone, including anonymous requesters.
/// Private tracks are visible only to their artist. Callers that get `false`
/// here must report the track as missing rather than forbidden, so the
/// response never confirms the track exists.
pub fn can_view_track(is_private: bool, artist_id: DbId, requester: Option<DbId>) -> bool {
    !is_private || requester == Some(artist_id)
}
