use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::types::CallbackParams;

/// Receives the token redirect from the auth backend.
///
/// The backend appends `access_token`, `refresh_token` and `expires_in`
/// to the redirect on success, or `error` when the user denied the
/// authorization. Either outcome is stored for the waiting auth command;
/// a redirect carrying neither is rejected.
pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(shared_state): Extension<Arc<Mutex<Option<CallbackParams>>>>,
) -> Html<&'static str> {
    if params.error.is_some() {
        let mut state = shared_state.lock().await;
        *state = Some(params);
        return Html("<h4>Authorization was denied.</h4>");
    }

    if params.access_token.is_none() {
        return Html("<h4>Missing access token.</h4>");
    }

    let mut state = shared_state.lock().await;
    *state = Some(params);
    Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
}
