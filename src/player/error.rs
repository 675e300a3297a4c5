//! Player command errors.
//!
//! Every failed command maps to exactly one variant here, and the
//! `Display` output of that variant is the exact line reported back to
//! the user. Commands check their error conditions in a fixed order, so
//! only the first applicable variant is ever produced.

use std::fmt;

/// The playlist operation named in a playlist error line.
///
/// The `Display` form is the verb phrase between "Cannot" and the
/// playlist name, e.g. "add video to" or "clear playlist".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistOp {
    Add,
    Remove,
    Clear,
    Delete,
    Show,
}

impl fmt::Display for PlaylistOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            PlaylistOp::Add => "add video to",
            PlaylistOp::Remove => "remove video from",
            PlaylistOp::Clear => "clear playlist",
            PlaylistOp::Delete => "delete playlist",
            PlaylistOp::Show => "show playlist",
        };
        f.write_str(phrase)
    }
}

/// A command that completed without changing state the way the caller
/// asked for. These are ordinary outcomes, never process failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    // Playback
    #[error("Cannot play video: Video does not exist")]
    PlayUnknownVideo,

    #[error("Cannot play video: Video is currently flagged (reason: {reason})")]
    PlayFlaggedVideo { reason: String },

    #[error("Cannot stop video: No video is currently playing")]
    NothingToStop,

    #[error("No videos available")]
    NoVideosAvailable,

    #[error("Cannot pause video: No video is currently playing")]
    NothingToPause,

    #[error("Video already paused: {title}")]
    AlreadyPaused { title: String },

    #[error("Cannot continue video: No video is currently playing")]
    NothingToContinue,

    #[error("Cannot continue video: Video is not paused")]
    NotPaused,

    // Playlists
    #[error("Cannot create playlist: A playlist with the same name already exists")]
    DuplicatePlaylistName,

    #[error("Cannot {op} {name}: Playlist does not exist")]
    UnknownPlaylist { op: PlaylistOp, name: String },

    #[error("Cannot {op} {name}: Video does not exist")]
    UnknownPlaylistVideo { op: PlaylistOp, name: String },

    #[error("Cannot add video to {name}: Video is currently flagged (reason: {reason})")]
    AddFlaggedVideo { name: String, reason: String },

    #[error("Cannot add video to {name}: Video already added")]
    VideoAlreadyAdded { name: String },

    #[error("Cannot remove video from {name}: Video is not in playlist")]
    VideoNotInPlaylist { name: String },

    // Moderation
    #[error("Cannot flag video: Video does not exist")]
    FlagUnknownVideo,

    #[error("Cannot flag video: Video is already flagged")]
    VideoAlreadyFlagged,

    #[error("Cannot remove flag from video: Video does not exist")]
    AllowUnknownVideo,

    #[error("Cannot remove flag from video: Video is not flagged")]
    VideoNotFlagged,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_error_lines_name_the_operation() {
        let err = PlayerError::UnknownPlaylist {
            op: PlaylistOp::Clear,
            name: "roadtrip".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot clear playlist roadtrip: Playlist does not exist"
        );

        let err = PlayerError::UnknownPlaylistVideo {
            op: PlaylistOp::Remove,
            name: "roadtrip".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot remove video from roadtrip: Video does not exist"
        );
    }

    #[test]
    fn flagged_errors_carry_the_reason() {
        let err = PlayerError::PlayFlaggedVideo {
            reason: "Not supplied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot play video: Video is currently flagged (reason: Not supplied)"
        );
    }
}
