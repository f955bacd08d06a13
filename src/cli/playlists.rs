use std::{collections::HashMap, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    info, spotify,
    types::{AudioFeatures, AudioFeaturesTableRow, PlaylistTableRow, Track, TrackTableRow},
    utils, warning,
};

pub async fn playlists(id: Option<String>, features: bool) {
    match id {
        Some(playlist_id) => show_playlist(&playlist_id, features).await,
        None => list_playlists().await,
    }
}

async fn list_playlists() {
    let token = super::session_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlists = spotify::playlists::get_all_playlists(&token).await;
    pb.finish_and_clear();

    match playlists {
        Ok(playlists) => {
            // sort playlists by name
            let mut sorted_playlists = playlists;
            sorted_playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

            let table_rows: Vec<PlaylistTableRow> = sorted_playlists
                .into_iter()
                .map(|p| PlaylistTableRow {
                    name: p.name,
                    tracks: p.tracks.total.to_string(),
                    visibility: match p.public {
                        Some(true) => "public".to_string(),
                        Some(false) => "private".to_string(),
                        None => "unknown".to_string(),
                    },
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load playlists. Err: {}", e),
    }
}

async fn show_playlist(playlist_id: &str, features: bool) {
    let token = super::session_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let playlist = match spotify::playlists::get_playlist(&token, playlist_id).await {
        Ok(playlist) => playlist,
        Err(e) => {
            pb.finish_and_clear();
            warning!("Failed to load playlist {}. Err: {}", playlist_id, e);
            return;
        }
    };
    pb.finish_and_clear();

    info!("Playlist: {}", playlist.name);
    if let Some(description) = playlist.description.as_deref() {
        if !description.is_empty() {
            info!("Description: {}", description);
        }
    }

    let tracks: Vec<Track> = playlist
        .tracks
        .items
        .into_iter()
        .filter_map(|entry| entry.track)
        .collect();

    if features {
        show_track_features(&token, &tracks).await;
        return;
    }

    let table_rows: Vec<TrackTableRow> = tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            artists: utils::join_artist_names(&t.artists),
            album: t
                .album
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            duration: utils::format_duration(t.duration_ms),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}

async fn show_track_features(token: &str, tracks: &[Track]) {
    let ids: Vec<String> = tracks.iter().filter_map(|t| t.id.clone()).collect();

    let mut all_features: Vec<Option<AudioFeatures>> = Vec::new();
    for chunk in ids.chunks(100) {
        match spotify::tracks::get_audio_features(token, chunk).await {
            Ok(features) => all_features.extend(features),
            Err(e) => warning!("Failed to load audio features. Err: {}", e),
        }
    }

    let by_id: HashMap<String, AudioFeatures> = all_features
        .into_iter()
        .flatten()
        .map(|f| (f.id.clone(), f))
        .collect();

    let table_rows: Vec<AudioFeaturesTableRow> = tracks
        .iter()
        .filter_map(|t| {
            let id = t.id.as_ref()?;
            let f = by_id.get(id)?;
            Some(AudioFeaturesTableRow {
                name: t.name.clone(),
                danceability: format!("{:.2}", f.danceability),
                energy: format!("{:.2}", f.energy),
                valence: format!("{:.2}", f.valence),
                tempo: format!("{:.0}", f.tempo),
            })
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
