//! Interactive shell over the player state machine.
//!
//! All command output is line-oriented text written to the injected
//! writer, and the single interactive read (the post-search selection)
//! comes from the injected reader. Scripted sessions therefore behave
//! exactly like live ones, which is how the integration tests drive the
//! whole surface.

mod command;

pub use command::{Command, ParseError, HELP_TEXT};

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::catalog::VideoCatalog;
use crate::player::{search, PlayerState, Transition};

const BANNER: &str =
    "Welcome to vidsh! Type HELP for a list of available commands, or EXIT to leave.";

/// The command surface: one method per shell command, plus the REPL.
///
/// Only the injected reader/writer can fail; every command-level failure
/// is rendered as a single diagnostic line and the session carries on.
pub struct Shell<R, W> {
    state: PlayerState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: VideoCatalog, input: R, output: W) -> Self {
        Self::with_state(PlayerState::new(catalog), input, output)
    }

    /// Builds a shell over a pre-constructed state, e.g. one with a
    /// seeded rng.
    pub fn with_state(state: PlayerState, input: R, output: W) -> Self {
        Self {
            state,
            input,
            output,
        }
    }

    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Runs the read-parse-dispatch loop until EXIT or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{BANNER}")?;
        loop {
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Exit)) => break,
                Ok(Some(command)) => {
                    debug!("dispatching {}", command);
                    self.dispatch(command)?;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
        self.output.flush()
    }

    /// Routes a parsed command to its handler.
    pub fn dispatch(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::NumberOfVideos => self.number_of_videos(),
            Command::ShowAllVideos => self.show_all_videos(),
            Command::Play { video_id } => self.play(&video_id),
            Command::Stop => self.stop(),
            Command::PlayRandom => self.play_random(),
            Command::Pause => self.pause(),
            Command::Continue => self.continue_video(),
            Command::ShowPlaying => self.show_playing(),
            Command::CreatePlaylist { name } => self.create_playlist(&name),
            Command::AddToPlaylist { name, video_id } => self.add_to_playlist(&name, &video_id),
            Command::RemoveFromPlaylist { name, video_id } => {
                self.remove_from_playlist(&name, &video_id)
            }
            Command::ClearPlaylist { name } => self.clear_playlist(&name),
            Command::DeletePlaylist { name } => self.delete_playlist(&name),
            Command::ShowAllPlaylists => self.show_all_playlists(),
            Command::ShowPlaylist { name } => self.show_playlist(&name),
            Command::SearchVideos { term } => self.search_videos(&term),
            Command::SearchVideosWithTag { tag } => self.search_videos_with_tag(&tag),
            Command::FlagVideo { video_id, reason } => {
                self.flag_video(&video_id, reason.as_deref())
            }
            Command::AllowVideo { video_id } => self.allow_video(&video_id),
            Command::Help => self.help(),
            // EXIT is handled by the loop; dispatching it directly is a no-op.
            Command::Exit => Ok(()),
        }
    }

    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.output, "{HELP_TEXT}")
    }

    // === Catalog info ===

    pub fn number_of_videos(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{} videos in the library",
            self.state.catalog().len()
        )
    }

    pub fn show_all_videos(&mut self) -> io::Result<()> {
        writeln!(self.output, "Here's a list of all available videos:")?;
        for video in self.state.catalog().iter() {
            writeln!(self.output, "{video}")?;
        }
        Ok(())
    }

    // === Playback ===

    pub fn play(&mut self, video_id: &str) -> io::Result<()> {
        match self.state.play(video_id) {
            Ok(transition) => self.report_transition(&transition),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn stop(&mut self) -> io::Result<()> {
        match self.state.stop() {
            Ok(title) => writeln!(self.output, "Stopping video: {title}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn play_random(&mut self) -> io::Result<()> {
        match self.state.play_random() {
            Ok(transition) => self.report_transition(&transition),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn pause(&mut self) -> io::Result<()> {
        match self.state.pause() {
            Ok(title) => writeln!(self.output, "Pausing video: {title}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn continue_video(&mut self) -> io::Result<()> {
        match self.state.resume() {
            Ok(title) => writeln!(self.output, "Continuing video: {title}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn show_playing(&mut self) -> io::Result<()> {
        match self.state.now_playing() {
            Some((video, true)) => writeln!(self.output, "Currently playing: {video} - PAUSED"),
            Some((video, false)) => writeln!(self.output, "Currently playing: {video}"),
            None => writeln!(self.output, "No video is currently playing"),
        }
    }

    fn report_transition(&mut self, transition: &Transition) -> io::Result<()> {
        if let Some(stopped) = &transition.stopped {
            writeln!(self.output, "Stopping video: {stopped}")?;
        }
        writeln!(self.output, "Playing video: {}", transition.playing)
    }

    // === Playlists ===

    pub fn create_playlist(&mut self, name: &str) -> io::Result<()> {
        match self.state.create_playlist(name) {
            Ok(()) => writeln!(self.output, "Successfully created new playlist: {name}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> io::Result<()> {
        match self.state.add_to_playlist(name, video_id) {
            Ok(title) => writeln!(self.output, "Added video to {name}: {title}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> io::Result<()> {
        match self.state.remove_from_playlist(name, video_id) {
            Ok(title) => writeln!(self.output, "Removed video from {name}: {title}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn clear_playlist(&mut self, name: &str) -> io::Result<()> {
        match self.state.clear_playlist(name) {
            Ok(()) => writeln!(
                self.output,
                "Successfully removed all videos from {name}"
            ),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn delete_playlist(&mut self, name: &str) -> io::Result<()> {
        match self.state.delete_playlist(name) {
            Ok(()) => writeln!(self.output, "Deleted playlist: {name}"),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn show_all_playlists(&mut self) -> io::Result<()> {
        let names: Vec<String> = self
            .state
            .playlists()
            .map(|p| p.display_name().to_string())
            .collect();
        if names.is_empty() {
            return writeln!(self.output, "No playlists exist yet");
        }
        writeln!(self.output, "Showing all playlists:")?;
        for name in names {
            writeln!(self.output, "{name}")?;
        }
        Ok(())
    }

    pub fn show_playlist(&mut self, name: &str) -> io::Result<()> {
        // Collect the rendered lines first so the playlist borrow ends
        // before we touch the writer.
        let lines = match self.state.show_playlist(name) {
            Ok(playlist) => playlist
                .video_ids()
                .iter()
                .filter_map(|id| self.state.catalog().get(id))
                .map(ToString::to_string)
                .collect::<Vec<String>>(),
            Err(err) => return writeln!(self.output, "{err}"),
        };

        writeln!(self.output, "Showing playlist: {name}")?;
        if lines.is_empty() {
            return writeln!(self.output, "No videos here yet");
        }
        for line in lines {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    // === Search ===

    pub fn search_videos(&mut self, term: &str) -> io::Result<()> {
        let matches: Vec<(String, String)> = search::by_title(self.state.catalog(), term)
            .into_iter()
            .map(|v| (v.id().to_string(), v.to_string()))
            .collect();
        self.offer_results(term, &matches)
    }

    pub fn search_videos_with_tag(&mut self, tag: &str) -> io::Result<()> {
        let matches: Vec<(String, String)> = search::by_tag(self.state.catalog(), tag)
            .into_iter()
            .map(|v| (v.id().to_string(), v.to_string()))
            .collect();
        self.offer_results(tag, &matches)
    }

    /// Prints numbered results and reads one follow-up line: a number in
    /// range plays that video, anything else is silently discarded.
    /// With zero matches no input is read at all.
    fn offer_results(&mut self, query: &str, matches: &[(String, String)]) -> io::Result<()> {
        if matches.is_empty() {
            return writeln!(self.output, "No search results for {query}");
        }

        writeln!(self.output, "Here are the results for {query}:")?;
        for (number, (_, line)) in matches.iter().enumerate() {
            writeln!(self.output, "{}) {}", number + 1, line)?;
        }
        writeln!(
            self.output,
            "Would you like to play any of the above? If yes, specify the number of the video."
        )?;
        writeln!(
            self.output,
            "If your answer is not a valid number, we will assume it's a no."
        )?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        if let Ok(choice) = answer.trim().parse::<usize>() {
            if (1..=matches.len()).contains(&choice) {
                return self.play(&matches[choice - 1].0);
            }
        }
        Ok(())
    }

    // === Moderation ===

    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> io::Result<()> {
        match self.state.flag_video(video_id, reason) {
            Ok(outcome) => {
                if let Some(stopped) = &outcome.stopped {
                    writeln!(self.output, "Stopping video: {stopped}")?;
                }
                writeln!(
                    self.output,
                    "Successfully flagged video: {} (reason: {})",
                    outcome.title, outcome.reason
                )
            }
            Err(err) => writeln!(self.output, "{err}"),
        }
    }

    pub fn allow_video(&mut self, video_id: &str) -> io::Result<()> {
        match self.state.allow_video(video_id) {
            Ok(title) => writeln!(
                self.output,
                "Successfully removed flag from video: {title}"
            ),
            Err(err) => writeln!(self.output, "{err}"),
        }
    }
}
