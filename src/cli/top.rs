use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    spotify,
    types::{ArtistTableRow, TrackTableRow},
    utils::{self, TimeRange},
    warning,
};

pub async fn top_artists(range: TimeRange) {
    let token = super::session_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching top artists ({})...", range));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let page = spotify::personalization::get_top_artists(&token, range).await;
    pb.finish_and_clear();

    match page {
        Ok(page) => {
            let table_rows: Vec<ArtistTableRow> = page
                .items
                .into_iter()
                .map(|a| ArtistTableRow {
                    name: a.name,
                    genres: a
                        .genres
                        .iter()
                        .take(3)
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(","),
                })
                .collect();

            let table = Table::new(table_rows);
            println!("{}", table);
        }
        Err(e) => warning!("Failed to load top artists. Err: {}", e),
    }
}

pub async fn top_tracks(range: TimeRange) {
    let token = super::session_token().await;

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching top tracks ({})...", range));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let page = spotify::personalization::get_top_tracks(&token, range).await;
    pb.finish_and_clear();

    match page {
        Ok(page) => {
            let table_rows: Vec<TrackTableRow> = page
                .items
                .into_iter()
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
        Err(e) => warning!("Failed to load top tracks. Err: {}", e),
    }
}
