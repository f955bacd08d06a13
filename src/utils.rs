use std::fmt;

use crate::types::TrackArtist;

/// Time window the top-artists and top-tracks endpoints aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimeRange {
    Short,
    Medium,
    Long,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeRange::Short => "short_term",
            TimeRange::Medium => "medium_term",
            TimeRange::Long => "long_term",
        };
        write!(f, "{}", s)
    }
}

/// Parses a time range from user input. Accepts the short forms used on
/// the command line as well as the full `*_term` values the API expects.
pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    let normalized = s.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "" => Err("time range cannot be empty".to_string()),
        "short" | "short_term" => Ok(TimeRange::Short),
        "medium" | "medium_term" => Ok(TimeRange::Medium),
        "long" | "long_term" => Ok(TimeRange::Long),
        other => Err(format!(
            "invalid value '{}' (expected short, medium or long)",
            other
        )),
    }
}

/// Formats a millisecond duration as `m:ss`, e.g. 216699 => "3:36".
pub fn format_duration(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

pub fn join_artist_names(artists: &[TrackArtist]) -> String {
    artists
        .iter()
        .map(|a| a.name.clone())
        .collect::<Vec<_>>()
        .join(", ")
}
