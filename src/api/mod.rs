//! # API Module
//!
//! HTTP endpoints for the local web server that backs the login flow.
//!
//! The companion auth backend runs the OAuth dance against Spotify and
//! redirects the browser here afterwards with the issued tokens in the
//! query string. The module provides:
//!
//! - [`callback`] - Receives that redirect and hands the token parameters
//!   to the waiting CLI command through shared state.
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! Built on the [Axum](https://docs.rs/axum) web framework; each endpoint
//! is an async function wired into the router in [`crate::server`].

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
