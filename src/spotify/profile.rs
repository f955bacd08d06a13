use reqwest::{Client, header::CONTENT_TYPE};

use crate::{config, types::User};

/// Retrieves the authenticated user's profile.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(User)` - The current user's profile
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
pub async fn get_current_user(token: &str) -> Result<User, reqwest::Error> {
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .error_for_status()?;

    response.json::<User>().await
}
