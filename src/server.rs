use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config, error, types::CallbackParams};

/// Runs the local server the auth backend redirects to after login.
///
/// `/callback` writes the redirect's token parameters into the shared
/// state the auth command is polling on; `/health` answers liveness
/// probes. The server stays up until the process exits with the command
/// that spawned it.
pub async fn start_api_server(state: Arc<Mutex<Option<CallbackParams>>>) {
    let router = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind callback server on {}: {}", addr, e),
    };

    if let Err(e) = axum::serve(listener, router).await {
        error!("Callback server terminated: {}", e);
    }
}
