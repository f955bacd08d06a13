use reqwest::{Client, header::CONTENT_TYPE};

use crate::{
    config,
    types::{AudioFeatures, AudioFeaturesResponse},
};

/// Retrieves audio features for the given track ids.
///
/// Ids are comma-joined into a single request; the endpoint accepts at
/// most 100 per call, so callers batch larger sets. The response carries
/// one entry per requested id, null where the id could not be resolved.
pub async fn get_audio_features(
    token: &str,
    track_ids: &[String],
) -> Result<Vec<Option<AudioFeatures>>, reqwest::Error> {
    let api_url = format!(
        "{uri}/audio-features?ids={ids}",
        uri = &config::spotify_apiurl(),
        ids = track_ids.join(",")
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<AudioFeaturesResponse>().await?;
    Ok(res.audio_features)
}
