use reqwest::{Client, header::CONTENT_TYPE};

use crate::{
    config,
    types::{Artist, Paging, Track},
    utils::TimeRange,
};

/// Retrieves the user's most listened-to artists over the given time
/// range.
pub async fn get_top_artists(
    token: &str,
    range: TimeRange,
) -> Result<Paging<Artist>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/top/artists?time_range={range}&limit=50",
        uri = &config::spotify_apiurl(),
        range = range
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .error_for_status()?;

    response.json::<Paging<Artist>>().await
}

/// Retrieves the user's most listened-to tracks over the given time
/// range.
pub async fn get_top_tracks(
    token: &str,
    range: TimeRange,
) -> Result<Paging<Track>, reqwest::Error> {
    let api_url = format!(
        "{uri}/me/top/tracks?time_range={range}&limit=50",
        uri = &config::spotify_apiurl(),
        range = range
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .error_for_status()?;

    response.json::<Paging<Track>>().await
}
