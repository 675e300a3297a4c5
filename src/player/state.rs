//! The player state machine.
//!
//! `PlayerState` owns the catalog, the current-playing pointer, the pause
//! flag, and the playlist map, and every command runs as one synchronous
//! transition against it. Transitions return typed outcomes; rendering
//! them as text is the shell's job.
//!
//! Invariants held across all transitions:
//! - `paused` is never set while nothing is playing.
//! - `now_playing` always refers to an id present in the catalog.
//! - Playlist keys are normalized names; display casing lives inside the
//!   `Playlist`.
//! - A flagged video is never started and never newly added to a playlist.

use std::collections::BTreeMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::catalog::{Video, VideoCatalog};

use super::error::{PlayerError, PlaylistOp};
use super::playlist::{normalize_name, Playlist};

/// A successful `play`/`play_random`: the title now playing, plus the
/// title that had to stop first, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub stopped: Option<String>,
    pub playing: String,
}

/// A successful `flag_video`. `stopped` is set when flagging forced the
/// active video to stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub title: String,
    pub reason: String,
    pub stopped: Option<String>,
}

/// Owns all mutable session state and dispatches every command.
#[derive(Debug)]
pub struct PlayerState {
    catalog: VideoCatalog,
    now_playing: Option<String>,
    paused: bool,
    // Keyed by normalized name; BTreeMap iteration gives the
    // case-insensitive listing order directly.
    playlists: BTreeMap<String, Playlist>,
    rng: SmallRng,
}

impl PlayerState {
    pub fn new(catalog: VideoCatalog) -> Self {
        Self::with_rng(catalog, SmallRng::from_entropy())
    }

    /// Like [`PlayerState::new`] but with a caller-supplied rng, so
    /// `play_random` is reproducible in tests.
    pub fn with_rng(catalog: VideoCatalog, rng: SmallRng) -> Self {
        Self {
            catalog,
            now_playing: None,
            paused: false,
            playlists: BTreeMap::new(),
            rng,
        }
    }

    pub fn catalog(&self) -> &VideoCatalog {
        &self.catalog
    }

    /// The video currently playing, with its paused state, if any.
    pub fn now_playing(&self) -> Option<(&Video, bool)> {
        self.current_video().map(|v| (v, self.paused))
    }

    fn current_video(&self) -> Option<&Video> {
        self.now_playing.as_deref().and_then(|id| self.catalog.get(id))
    }

    // === Playback ===

    /// Starts playing `video_id`, stopping whatever was playing first.
    /// On failure no state changes, including the pause flag.
    pub fn play(&mut self, video_id: &str) -> Result<Transition, PlayerError> {
        let video = self
            .catalog
            .get(video_id)
            .ok_or(PlayerError::PlayUnknownVideo)?;
        if video.is_flagged() {
            return Err(PlayerError::PlayFlaggedVideo {
                reason: video.flag_reason().to_string(),
            });
        }

        let playing = video.title().to_string();
        let stopped = self.current_video().map(|v| v.title().to_string());
        self.now_playing = Some(video_id.to_string());
        self.paused = false;
        debug!("now playing '{}'", playing);
        Ok(Transition { stopped, playing })
    }

    /// Stops the current video, clearing the pause flag with it.
    pub fn stop(&mut self) -> Result<String, PlayerError> {
        let title = self
            .current_video()
            .map(|v| v.title().to_string())
            .ok_or(PlayerError::NothingToStop)?;
        self.now_playing = None;
        self.paused = false;
        debug!("stopped '{}'", title);
        Ok(title)
    }

    /// Plays a uniformly random non-flagged video, with full `play`
    /// semantics (including stop-then-play).
    pub fn play_random(&mut self) -> Result<Transition, PlayerError> {
        let candidates: Vec<String> = self
            .catalog
            .iter()
            .filter(|v| !v.is_flagged())
            .map(|v| v.id().to_string())
            .collect();
        let video_id = candidates
            .choose(&mut self.rng)
            .ok_or(PlayerError::NoVideosAvailable)?
            .clone();
        self.play(&video_id)
    }

    /// Pauses the current video, reporting its title.
    pub fn pause(&mut self) -> Result<String, PlayerError> {
        let title = self
            .current_video()
            .map(|v| v.title().to_string())
            .ok_or(PlayerError::NothingToPause)?;
        if self.paused {
            return Err(PlayerError::AlreadyPaused { title });
        }
        self.paused = true;
        Ok(title)
    }

    /// Resumes a paused video, reporting its title.
    pub fn resume(&mut self) -> Result<String, PlayerError> {
        let title = self
            .current_video()
            .map(|v| v.title().to_string())
            .ok_or(PlayerError::NothingToContinue)?;
        if !self.paused {
            return Err(PlayerError::NotPaused);
        }
        self.paused = false;
        Ok(title)
    }

    // === Playlists ===

    /// Creates an empty playlist. Names are unique case-insensitively.
    pub fn create_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        let key = normalize_name(name);
        if self.playlists.contains_key(&key) {
            return Err(PlayerError::DuplicatePlaylistName);
        }
        self.playlists.insert(key, Playlist::new(name));
        Ok(())
    }

    /// Appends a video to a playlist, reporting the video's title.
    ///
    /// Checks, in order: playlist exists, video exists, video not
    /// flagged, video not already present.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<String, PlayerError> {
        let playlist = self
            .playlists
            .get_mut(&normalize_name(name))
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                op: PlaylistOp::Add,
                name: name.to_string(),
            })?;
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| PlayerError::UnknownPlaylistVideo {
                op: PlaylistOp::Add,
                name: name.to_string(),
            })?;
        if video.is_flagged() {
            return Err(PlayerError::AddFlaggedVideo {
                name: name.to_string(),
                reason: video.flag_reason().to_string(),
            });
        }
        if !playlist.add(video.id().to_string()) {
            return Err(PlayerError::VideoAlreadyAdded {
                name: name.to_string(),
            });
        }
        Ok(video.title().to_string())
    }

    /// Removes a video from a playlist, reporting the video's title.
    ///
    /// Checks, in order: playlist exists, video exists, video present.
    pub fn remove_from_playlist(
        &mut self,
        name: &str,
        video_id: &str,
    ) -> Result<String, PlayerError> {
        let playlist = self
            .playlists
            .get_mut(&normalize_name(name))
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                op: PlaylistOp::Remove,
                name: name.to_string(),
            })?;
        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| PlayerError::UnknownPlaylistVideo {
                op: PlaylistOp::Remove,
                name: name.to_string(),
            })?;
        if !playlist.remove(video.id()) {
            return Err(PlayerError::VideoNotInPlaylist {
                name: name.to_string(),
            });
        }
        Ok(video.title().to_string())
    }

    /// Removes every video from a playlist, keeping the playlist itself.
    pub fn clear_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        self.playlists
            .get_mut(&normalize_name(name))
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                op: PlaylistOp::Clear,
                name: name.to_string(),
            })?
            .clear();
        Ok(())
    }

    /// Deletes a playlist entirely.
    pub fn delete_playlist(&mut self, name: &str) -> Result<(), PlayerError> {
        self.playlists
            .remove(&normalize_name(name))
            .map(|_| ())
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                op: PlaylistOp::Delete,
                name: name.to_string(),
            })
    }

    /// All playlists in case-insensitive name order.
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Looks a playlist up for display, with the show-specific error.
    pub fn show_playlist(&self, name: &str) -> Result<&Playlist, PlayerError> {
        self.playlists
            .get(&normalize_name(name))
            .ok_or_else(|| PlayerError::UnknownPlaylist {
                op: PlaylistOp::Show,
                name: name.to_string(),
            })
    }

    // === Moderation ===

    /// Flags a video, stopping it first if it is the one playing.
    /// A missing reason renders as the default reason constant.
    pub fn flag_video(
        &mut self,
        video_id: &str,
        reason: Option<&str>,
    ) -> Result<FlagOutcome, PlayerError> {
        let video = self
            .catalog
            .get_mut(video_id)
            .ok_or(PlayerError::FlagUnknownVideo)?;
        if video.is_flagged() {
            return Err(PlayerError::VideoAlreadyFlagged);
        }
        video.set_flag(reason.map(String::from));
        let title = video.title().to_string();
        let reason = video.flag_reason().to_string();

        let stopped = if self.now_playing.as_deref() == Some(video_id) {
            self.now_playing = None;
            self.paused = false;
            Some(title.clone())
        } else {
            None
        };

        info!("flagged '{}' (reason: {})", title, reason);
        Ok(FlagOutcome {
            title,
            reason,
            stopped,
        })
    }

    /// Lifts a video's flag. The stored reason is retained for audit.
    pub fn allow_video(&mut self, video_id: &str) -> Result<String, PlayerError> {
        let video = self
            .catalog
            .get_mut(video_id)
            .ok_or(PlayerError::AllowUnknownVideo)?;
        if !video.is_flagged() {
            return Err(PlayerError::VideoNotFlagged);
        }
        video.clear_flag();
        let title = video.title().to_string();
        info!("removed flag from '{}'", title);
        Ok(title)
    }
}
