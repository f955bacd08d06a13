use std::time::Duration;

use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use tokio::time::sleep;

use crate::{
    config,
    types::{Paging, Playlist, PlaylistSummary},
};

/// Retrieves one page of the current user's playlists.
///
/// The first page is requested when `page_url` is `None`; subsequent pages
/// are fetched through the opaque `next` URL returned inside each page.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `page_url` - Optional `next` URL from a previously fetched page
///
/// # Retry Logic
///
/// The function implements automatic retry logic for 502 Bad Gateway
/// errors with a 10-second delay between attempts. Other errors are
/// propagated immediately.
pub async fn get_playlists_page(
    token: &str,
    page_url: Option<String>,
) -> Result<Paging<PlaylistSummary>, reqwest::Error> {
    loop {
        let api_url = match &page_url {
            Some(url) => url.clone(),
            None => format!(
                "{uri}/me/playlists?limit=20",
                uri = &config::spotify_apiurl()
            ),
        };

        let client = Client::new();
        let response = client
            .get(&api_url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
                Ok(valid_response) => valid_response,
                Err(err) => {
                    if let Some(status) = err.status() {
                        if status == StatusCode::BAD_GATEWAY {
                            sleep(Duration::from_secs(10)).await;
                            continue; // retry
                        }
                    }
                    return Err(err); // propagate other errors
                }
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return response.json::<Paging<PlaylistSummary>>().await;
    }
}

/// Follows the pagination chain until every playlist is fetched.
pub async fn get_all_playlists(token: &str) -> Result<Vec<PlaylistSummary>, reqwest::Error> {
    let mut playlists: Vec<PlaylistSummary> = Vec::new();
    let mut page_url: Option<String> = None;

    loop {
        let page = get_playlists_page(token, page_url).await?;
        playlists.extend(page.items);

        match page.next {
            Some(next) => page_url = Some(next),
            None => break,
        }
    }

    Ok(playlists)
}

/// Retrieves a single playlist by id, including its tracks.
pub async fn get_playlist(token: &str, playlist_id: &str) -> Result<Playlist, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .error_for_status()?;

    response.json::<Playlist>().await
}
