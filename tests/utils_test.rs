use sprofcli::types::TrackArtist;
use sprofcli::utils::*;

// Helper function to create a test track artist
fn create_test_artist(name: &str) -> TrackArtist {
    TrackArtist {
        id: Some(format!("{}_id", name)),
        name: name.to_string(),
    }
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(216699), "3:36");
    assert_eq!(format_duration(60000), "1:00");
    assert_eq!(format_duration(5000), "0:05");
}

#[test]
fn test_format_duration_edges() {
    // Zero and sub-second values still render a padded seconds field
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(999), "0:00");

    // Just below and above a full minute
    assert_eq!(format_duration(59999), "0:59");
    assert_eq!(format_duration(60001), "1:00");

    // Durations past an hour keep counting minutes
    assert_eq!(format_duration(3600000), "60:00");
    assert_eq!(format_duration(3723000), "62:03");
}

#[test]
fn test_time_range_display() {
    assert_eq!(TimeRange::Short.to_string(), "short_term");
    assert_eq!(TimeRange::Medium.to_string(), "medium_term");
    assert_eq!(TimeRange::Long.to_string(), "long_term");
}

#[test]
fn test_parse_time_range_valid_inputs() {
    // Test short command-line forms
    assert_eq!(parse_time_range("short").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("medium").unwrap(), TimeRange::Medium);
    assert_eq!(parse_time_range("long").unwrap(), TimeRange::Long);

    // Test full API forms
    assert_eq!(parse_time_range("short_term").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("medium_term").unwrap(), TimeRange::Medium);
    assert_eq!(parse_time_range("long_term").unwrap(), TimeRange::Long);

    // Test case insensitivity and surrounding whitespace
    assert_eq!(parse_time_range("LONG").unwrap(), TimeRange::Long);
    assert_eq!(parse_time_range("  Short  ").unwrap(), TimeRange::Short);
}

#[test]
fn test_parse_time_range_invalid_inputs() {
    // Test empty string
    let result = parse_time_range("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test whitespace only
    let result = parse_time_range("   ");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));

    // Test invalid range
    let result = parse_time_range("forever");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'forever'"));
}

#[test]
fn test_join_artist_names() {
    let artists = vec![create_test_artist("Artist A"), create_test_artist("Artist B")];
    assert_eq!(join_artist_names(&artists), "Artist A, Artist B");

    let single = vec![create_test_artist("Solo")];
    assert_eq!(join_artist_names(&single), "Solo");

    let empty: Vec<TrackArtist> = Vec::new();
    assert_eq!(join_artist_names(&empty), "");
}
