//! vidsh - an interactive, in-memory video catalog shell.
//!
//! The crate is split into three layers:
//!
//! - [`catalog`] holds the immutable-per-session set of [`Video`] records
//!   and knows how to load them from a JSON file.
//! - [`player`] is the state machine: current-playing pointer, pause flag,
//!   and the playlist map. Every command is a typed transition returning
//!   either an outcome or a [`PlayerError`] whose `Display` text is the
//!   exact line reported to the user.
//! - [`shell`] renders transitions as line-oriented text over an injected
//!   reader/writer pair, so scripted sessions and tests behave exactly like
//!   a live terminal.
//!
//! The binary wires the shell to stdin/stdout; everything else is
//! exercised through the library API.

pub mod catalog;
pub mod cli;
pub mod player;
pub mod shell;

pub use catalog::{Video, VideoCatalog};
pub use player::{PlayerError, PlayerState};
pub use shell::Shell;
