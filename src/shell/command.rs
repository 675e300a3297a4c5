//! Command line parsing for the interactive shell.
//!
//! One input line maps to at most one [`Command`]. Command words are
//! matched case-insensitively; arguments keep their casing. Anything
//! after the expected arguments is ignored, except for `FLAG_VIDEO` and
//! the search commands, where the tail is part of the reason/query.

use std::fmt;

/// A parsed shell command, one variant per surface operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play { video_id: String },
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist { name: String },
    AddToPlaylist { name: String, video_id: String },
    RemoveFromPlaylist { name: String, video_id: String },
    ClearPlaylist { name: String },
    DeletePlaylist { name: String },
    ShowAllPlaylists,
    ShowPlaylist { name: String },
    SearchVideos { term: String },
    SearchVideosWithTag { tag: String },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo { video_id: String },
    Help,
    Exit,
}

/// A line that did not parse. The `Display` text is the diagnostic
/// printed to the user; the loop carries on afterwards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Unknown command: {word}. Type HELP for a list of available commands.")]
    UnknownCommand { word: String },

    #[error("{command} requires {what} (usage: {usage})")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
        usage: &'static str,
    },
}

/// Help text printed by the HELP command.
pub const HELP_TEXT: &str = "\
Available commands:
  NUMBER_OF_VIDEOS                  Show how many videos are in the library
  SHOW_ALL_VIDEOS                   List every video
  PLAY <video_id>                   Play the given video
  STOP                              Stop the current video
  PLAY_RANDOM                       Play a random video
  PAUSE                             Pause the current video
  CONTINUE                          Resume the paused video
  SHOW_PLAYING                      Show the video currently playing
  CREATE_PLAYLIST <name>            Create a new (empty) playlist
  ADD_TO_PLAYLIST <name> <id>       Add a video to a playlist
  REMOVE_FROM_PLAYLIST <name> <id>  Remove a video from a playlist
  CLEAR_PLAYLIST <name>             Remove all videos from a playlist
  DELETE_PLAYLIST <name>            Delete a playlist
  SHOW_ALL_PLAYLISTS                List all playlists
  SHOW_PLAYLIST <name>              List the videos in a playlist
  SEARCH_VIDEOS <term>              Search video titles
  SEARCH_VIDEOS_WITH_TAG <tag>      Search videos by tag
  FLAG_VIDEO <id> [reason]          Flag a video as unplayable
  ALLOW_VIDEO <id>                  Remove a video's flag
  HELP                              Show this help
  EXIT                              Leave the shell";

impl Command {
    /// Parses one input line. Blank lines parse to `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut tokens = line.split_whitespace();
        let word = match tokens.next() {
            Some(word) => word,
            None => return Ok(None),
        };

        let command = match word.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
            "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
            "PLAY" => Command::Play {
                video_id: require(tokens.next(), "PLAY", "a video id", "PLAY <video_id>")?,
            },
            "STOP" => Command::Stop,
            "PLAY_RANDOM" => Command::PlayRandom,
            "PAUSE" => Command::Pause,
            "CONTINUE" => Command::Continue,
            "SHOW_PLAYING" => Command::ShowPlaying,
            "CREATE_PLAYLIST" => Command::CreatePlaylist {
                name: require(
                    tokens.next(),
                    "CREATE_PLAYLIST",
                    "a playlist name",
                    "CREATE_PLAYLIST <name>",
                )?,
            },
            "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
                name: require(
                    tokens.next(),
                    "ADD_TO_PLAYLIST",
                    "a playlist name and a video id",
                    "ADD_TO_PLAYLIST <name> <video_id>",
                )?,
                video_id: require(
                    tokens.next(),
                    "ADD_TO_PLAYLIST",
                    "a playlist name and a video id",
                    "ADD_TO_PLAYLIST <name> <video_id>",
                )?,
            },
            "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
                name: require(
                    tokens.next(),
                    "REMOVE_FROM_PLAYLIST",
                    "a playlist name and a video id",
                    "REMOVE_FROM_PLAYLIST <name> <video_id>",
                )?,
                video_id: require(
                    tokens.next(),
                    "REMOVE_FROM_PLAYLIST",
                    "a playlist name and a video id",
                    "REMOVE_FROM_PLAYLIST <name> <video_id>",
                )?,
            },
            "CLEAR_PLAYLIST" => Command::ClearPlaylist {
                name: require(
                    tokens.next(),
                    "CLEAR_PLAYLIST",
                    "a playlist name",
                    "CLEAR_PLAYLIST <name>",
                )?,
            },
            "DELETE_PLAYLIST" => Command::DeletePlaylist {
                name: require(
                    tokens.next(),
                    "DELETE_PLAYLIST",
                    "a playlist name",
                    "DELETE_PLAYLIST <name>",
                )?,
            },
            "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
            "SHOW_PLAYLIST" => Command::ShowPlaylist {
                name: require(
                    tokens.next(),
                    "SHOW_PLAYLIST",
                    "a playlist name",
                    "SHOW_PLAYLIST <name>",
                )?,
            },
            "SEARCH_VIDEOS" => Command::SearchVideos {
                term: require_rest(
                    tokens,
                    "SEARCH_VIDEOS",
                    "a search term",
                    "SEARCH_VIDEOS <term>",
                )?,
            },
            "SEARCH_VIDEOS_WITH_TAG" => Command::SearchVideosWithTag {
                tag: require_rest(
                    tokens,
                    "SEARCH_VIDEOS_WITH_TAG",
                    "a tag",
                    "SEARCH_VIDEOS_WITH_TAG <tag>",
                )?,
            },
            "FLAG_VIDEO" => {
                let video_id = require(
                    tokens.next(),
                    "FLAG_VIDEO",
                    "a video id",
                    "FLAG_VIDEO <video_id> [reason]",
                )?;
                let rest: Vec<&str> = tokens.collect();
                let reason = if rest.is_empty() {
                    None
                } else {
                    Some(rest.join(" "))
                };
                Command::FlagVideo { video_id, reason }
            }
            "ALLOW_VIDEO" => Command::AllowVideo {
                video_id: require(
                    tokens.next(),
                    "ALLOW_VIDEO",
                    "a video id",
                    "ALLOW_VIDEO <video_id>",
                )?,
            },
            "HELP" => Command::Help,
            "EXIT" | "QUIT" => Command::Exit,
            _ => {
                return Err(ParseError::UnknownCommand {
                    word: word.to_string(),
                })
            }
        };
        Ok(Some(command))
    }
}

impl fmt::Display for Command {
    /// The canonical (uppercase) command word, used in log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Command::NumberOfVideos => "NUMBER_OF_VIDEOS",
            Command::ShowAllVideos => "SHOW_ALL_VIDEOS",
            Command::Play { .. } => "PLAY",
            Command::Stop => "STOP",
            Command::PlayRandom => "PLAY_RANDOM",
            Command::Pause => "PAUSE",
            Command::Continue => "CONTINUE",
            Command::ShowPlaying => "SHOW_PLAYING",
            Command::CreatePlaylist { .. } => "CREATE_PLAYLIST",
            Command::AddToPlaylist { .. } => "ADD_TO_PLAYLIST",
            Command::RemoveFromPlaylist { .. } => "REMOVE_FROM_PLAYLIST",
            Command::ClearPlaylist { .. } => "CLEAR_PLAYLIST",
            Command::DeletePlaylist { .. } => "DELETE_PLAYLIST",
            Command::ShowAllPlaylists => "SHOW_ALL_PLAYLISTS",
            Command::ShowPlaylist { .. } => "SHOW_PLAYLIST",
            Command::SearchVideos { .. } => "SEARCH_VIDEOS",
            Command::SearchVideosWithTag { .. } => "SEARCH_VIDEOS_WITH_TAG",
            Command::FlagVideo { .. } => "FLAG_VIDEO",
            Command::AllowVideo { .. } => "ALLOW_VIDEO",
            Command::Help => "HELP",
            Command::Exit => "EXIT",
        };
        f.write_str(word)
    }
}

fn require(
    token: Option<&str>,
    command: &'static str,
    what: &'static str,
    usage: &'static str,
) -> Result<String, ParseError> {
    token.map(String::from).ok_or(ParseError::MissingArgument {
        command,
        what,
        usage,
    })
}

/// Joins the remaining tokens into one argument, for commands whose last
/// argument may contain spaces.
fn require_rest<'a>(
    tokens: impl Iterator<Item = &'a str>,
    command: &'static str,
    what: &'static str,
    usage: &'static str,
) -> Result<String, ParseError> {
    let rest: Vec<&str> = tokens.collect();
    if rest.is_empty() {
        return Err(ParseError::MissingArgument {
            command,
            what,
            usage,
        });
    }
    Ok(rest.join(" "))
}
