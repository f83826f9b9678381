use serde::Serialize;
use std::fmt;

/// Represents a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    /// Library key (e.g. "p01")
    pub id: String,

    /// Playlist name
    pub name: String,

    /// Track IDs in playlist order (references Track::id)
    pub tracks: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track to the end of this playlist. Duplicates are kept.
    pub fn add_track(&mut self, track_id: impl Into<String>) {
        self.tracks.push(track_id.into());
    }

    /// Track IDs in playlist order
    pub fn track_ids(&self) -> impl Iterator<Item = &str> {
        self.tracks.iter().map(String::as_str)
    }

    /// Number of tracks in this playlist
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Summary line: `p01: Coding Music - 2 tracks`
impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {} tracks", self.id, self.name, self.len())
    }
}
