//! Player core: state machine, playlists, search, and command errors.

mod error;
mod playlist;
pub mod search;
mod state;

pub use error::{PlayerError, PlaylistOp};
pub use playlist::Playlist;
pub use state::{FlagOutcome, PlayerState, Transition};
