//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API operations the
//! application needs: the current user's profile, their playlists, and their
//! listening statistics. It handles the HTTP communication, JSON decoding,
//! and the retry behavior for transient gateway errors; authentication and
//! token lifecycle live in [`crate::management`].
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! covers one domain of the API:
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Spotify Integration Layer
//!     ├── Profile (current user)
//!     ├── Playlists (listing, pagination, playlist by id)
//!     ├── Personalization (top artists, top tracks)
//!     └── Tracks (audio features)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user's profile
//! - `GET /me/playlists` - User's playlists, paginated through the opaque
//!   `next` URL returned with each page
//! - `GET /me/top/artists`, `GET /me/top/tracks` - Listening statistics over
//!   a selectable time range
//! - `GET /playlists/{id}` - A single playlist with its tracks
//! - `GET /audio-features` - Audio features for comma-joined track ids
//!
//! ## Request Conventions
//!
//! Every request carries an `Authorization: Bearer` header with the current
//! access token and a `Content-Type: application/json` header. Transient
//! 502 responses on the paginated listing are retried after a delay; all
//! other failures propagate as `reqwest::Error` for the CLI layer to
//! present.

pub mod personalization;
pub mod playlists;
pub mod profile;
pub mod tracks;
