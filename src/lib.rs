//! Spotify Profile CLI Library
//!
//! Library behind `sprofcli`: a terminal client for a Spotify user's
//! profile, playlists, and listening statistics. Login runs through a
//! companion auth backend that owns the OAuth dance; this side ingests the
//! redirect parameters, keeps the session persisted locally, and refreshes
//! expired access tokens transparently before talking to the Web API.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Session store and token lifecycle management
//! - `server` - Local HTTP server for login callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sprofcli::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> sprofcli::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Result alias used across the application.
///
/// Wraps any error as a boxed trait object so fallible async code can mix
/// error sources freely while staying `Send + Sync`.
///
/// # Example
///
/// ```
/// use sprofcli::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Informational output line, marked with a blue "o" indicator.
///
/// Takes the same arguments as `println!`. Used for status updates and
/// plain facts the user asked for.
///
/// # Example
///
/// ```
/// info!("Resolving session...");
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Success output line, marked with a green "✓" indicator.
///
/// # Example
///
/// ```
/// success!("Authentication successful!");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Fatal error output line, marked with a red "!" indicator.
///
/// Prints the message and terminates the process with exit code 1, so it
/// only belongs on paths where the command cannot continue.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Warning output line, marked with a yellow "!" indicator.
///
/// For recoverable conditions the user should see without the command
/// giving up.
///
/// # Example
///
/// ```
/// warning!("Token refresh failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
