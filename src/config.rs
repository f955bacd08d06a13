//! Configuration management for the Spotify Profile CLI.
//!
//! Configuration comes from environment variables, optionally seeded from a
//! `.env` file in the platform's local data directory. Three values drive
//! the application: where the local callback server binds, where the
//! companion auth backend lives, and the Spotify Web API base URL.
//!
//! Environment variables already set in the shell take priority over the
//! `.env` file.

use dotenv;
use std::{env, path::PathBuf};

/// Loads the `.env` file from the local data directory into the process
/// environment.
///
/// The file is expected at `sprofcli/.env` inside the platform-specific
/// local data directory, so configuration lives next to the session state
/// rather than in shell profiles:
/// - Linux: `~/.local/share/sprofcli/.env`
/// - macOS: `~/Library/Application Support/sprofcli/.env`
/// - Windows: `%LOCALAPPDATA%/sprofcli/.env`
///
/// The parent directory is created when missing.
///
/// # Errors
///
/// Returns an error when the directory cannot be created or the `.env`
/// file cannot be read or parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sprofcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Address and port the local login callback server binds to, from
/// `SERVER_ADDRESS`. The auth backend redirects the browser here at the
/// end of the login flow.
///
/// # Panics
///
/// Panics if the `SERVER_ADDRESS` environment variable is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").expect("SERVER_ADDRESS must be set")
}

/// Base URL of the companion auth backend, from `AUTH_SERVER_URL`.
///
/// The backend owns the OAuth dance against Spotify: its `/login` endpoint
/// starts the authorization flow and its `/refresh_token` endpoint
/// exchanges a stored refresh token for a fresh access token.
///
/// # Panics
///
/// Panics if the `AUTH_SERVER_URL` environment variable is not set.
pub fn auth_server_url() -> String {
    env::var("AUTH_SERVER_URL").expect("AUTH_SERVER_URL must be set")
}

/// Spotify Web API base URL, from `SPOTIFY_API_URL`. Every API request
/// after authentication is built on top of this.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}
