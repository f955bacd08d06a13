use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config, error,
    management::{FileStore, HttpRefresh, SessionManager},
    server::start_api_server,
    success,
    types::CallbackParams,
    warning,
};

/// Runs the complete login flow against the companion auth backend.
///
/// This function orchestrates the entire authentication process including:
/// 1. Starting a local callback server
/// 2. Opening the backend's `/login` URL in the user's browser
/// 3. Waiting for the backend to redirect back with the issued tokens
/// 4. Establishing and persisting the session from the redirect parameters
///
/// The backend owns the OAuth authorization-code dance with Spotify; this
/// side only consumes the token parameters it appends to the redirect.
///
/// # Arguments
///
/// * `shared_state` - Thread-safe shared state carrying the redirect
///   parameters between the callback handler and this flow
///
/// # Error Handling
///
/// - Browser launch failures result in a warning with manual URL instructions
/// - A redirect carrying an `error` parameter terminates with an error message
/// - Authentication timeouts terminate with an error message
pub async fn auth(shared_state: Arc<Mutex<Option<CallbackParams>>>) {
    // start callback server
    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        start_api_server(server_state).await;
    });

    let login_url = format!("{uri}/login", uri = &config::auth_server_url());

    // Open the login URL in the default browser
    if webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        )
    }

    // wait for callback to be hit
    let params = wait_for_callback(shared_state).await;

    match params {
        Some(params) => {
            if let Some(err) = &params.error {
                error!("Authorization failed: {}", err);
            }

            let mut manager = SessionManager::new(FileStore::new(), HttpRefresh::new());
            match manager.establish(&params).await {
                Some(_) => success!("Authentication successful!"),
                None => error!("Authentication failed: no token received."),
            }
        }
        None => error!("Authentication failed or timed out."),
    }
}

/// Waits for the login redirect to arrive at the callback server.
///
/// Polls the shared state with a 60-second timeout. This function runs
/// concurrently with the callback handler that populates the parameters
/// once the backend redirects the browser.
async fn wait_for_callback(
    shared_state: Arc<Mutex<Option<CallbackParams>>>,
) -> Option<CallbackParams> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(params) = lock.as_ref() {
            return Some(params.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Clears the persisted session.
pub async fn logout() {
    let mut manager = SessionManager::new(FileStore::new(), HttpRefresh::new());
    manager.logout().await;
    success!("Logged out.");
}
