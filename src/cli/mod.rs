//! # CLI Module
//!
//! This module provides the command-line interface layer for Sprofcli, a
//! Spotify API client for browsing your profile, playlists, and listening
//! statistics. It implements all user-facing commands and coordinates
//! between session management, the Spotify client, and terminal output.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Runs the login flow against the companion auth backend and
//!   establishes the persisted session
//! - [`logout`] - Clears the persisted session
//!
//! ### Profile and Playlists
//!
//! - [`profile`] - Shows the current user's profile
//! - [`playlists`] - Lists every playlist, or shows one playlist's tracks,
//!   optionally with their audio features
//!
//! ### Listening Statistics
//!
//! - [`top_artists`] / [`top_tracks`] - Top artists and tracks over a
//!   selectable time range
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Management Layer (Session Store / Token Lifecycle)
//!     ↓
//! API Layer (Spotify Integration)
//!     ↓
//! Network Layer (HTTP Requests)
//! ```
//!
//! Every data command resolves the session first: a stored valid token is
//! reused, an expired one is refreshed through the auth backend, and a
//! missing session terminates the command with a pointer to `sprofcli
//! auth`. Long-running fetches show a spinner; results render as tables.

mod auth;
mod playlists;
mod profile;
mod top;

pub use auth::auth;
pub use auth::logout;
pub use playlists::playlists;
pub use profile::profile;
pub use top::top_artists;
pub use top::top_tracks;

use crate::{
    error,
    management::{FileStore, HttpRefresh, SessionManager},
    types::CallbackParams,
};

/// Resolves the access token for the current invocation or terminates
/// with a pointer to the auth command.
async fn session_token() -> String {
    let mut manager = SessionManager::new(FileStore::new(), HttpRefresh::new());
    match manager.establish(&CallbackParams::default()).await {
        Some(token) => token,
        None => {
            error!("No session available. Please run sprofcli auth");
        }
    }
}
