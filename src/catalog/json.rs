//! JSON catalog parser
//!
//! Tracks and playlists are stored as arrays so file order becomes
//! library order.

use crate::model::{Library, Playlist, Track};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk catalog document
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CatalogFile {
    tracks: Vec<Track>,
    playlists: Vec<CatalogPlaylist>,
}

#[derive(Debug, Deserialize)]
struct CatalogPlaylist {
    id: String,
    name: String,
    #[serde(default)]
    tracks: Vec<String>,
}

/// Read a JSON catalog file into a library
pub fn parse_catalog(path: &Path) -> Result<Library> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog: {:?}", path))?;

    parse_catalog_str(&raw).with_context(|| format!("Invalid catalog: {:?}", path))
}

/// Parse a JSON catalog document into a library.
///
/// Duplicate keys are rejected; playlist entries naming unknown tracks
/// are dropped with a warning.
pub fn parse_catalog_str(raw: &str) -> Result<Library> {
    let catalog: CatalogFile = serde_json::from_str(raw).context("Malformed catalog JSON")?;

    let mut library = Library::new();

    for track in catalog.tracks {
        library.insert_track(track)?;
    }

    for entry in catalog.playlists {
        let mut playlist = Playlist::new(entry.id, entry.name);
        for track_id in entry.tracks {
            if library.get_track(&track_id).is_some() {
                playlist.add_track(track_id);
            } else {
                log::warn!(
                    "Dropping unknown track {} from playlist {}",
                    track_id,
                    playlist.id
                );
            }
        }
        library.insert_playlist(playlist)?;
    }

    Ok(library)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_file_order() {
        let lib = parse_catalog_str(
            r#"{
                "tracks": [
                    { "id": "t09", "name": "Last", "artist": "A", "album": "B" },
                    { "id": "t01", "name": "First", "artist": "A", "album": "B" }
                ],
                "playlists": [ { "id": "p01", "name": "Mix", "tracks": ["t01", "t09"] } ]
            }"#,
        )
        .unwrap();

        let ids: Vec<&str> = lib.tracks().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["t09", "t01"]);
        let p01 = lib.get_playlist("p01").unwrap();
        assert_eq!(p01.track_ids().collect::<Vec<_>>(), ["t01", "t09"]);
    }

    #[test]
    fn test_unknown_tracks_are_dropped() {
        let lib = parse_catalog_str(
            r#"{ "playlists": [ { "id": "p01", "name": "Ghosts", "tracks": ["t01"] } ] }"#,
        )
        .unwrap();

        assert_eq!(lib.track_count(), 0);
        assert!(lib.get_playlist("p01").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_track_is_error() {
        let err = parse_catalog_str(
            r#"{ "tracks": [
                { "id": "t01", "name": "a", "artist": "b", "album": "c" },
                { "id": "t01", "name": "d", "artist": "e", "album": "f" }
            ] }"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("Track t01 already exists"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(parse_catalog_str("{ not json").is_err());
    }
}
