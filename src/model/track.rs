use serde::{Deserialize, Serialize};
use std::fmt;

/// A single song entry in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Library key (e.g. "t01")
    pub id: String,

    /// Track title
    pub name: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,
}

impl Track {
    /// Create a new track
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            artist: artist.into(),
            album: album.into(),
        }
    }

    /// Check whether name, artist or album contains `needle`.
    ///
    /// `needle` must already be lower-cased; each field is lower-cased
    /// before comparison.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.artist, &self.album]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Listing line: `t01: Code Monkey by Jonathan Coulton (Thing a Week Three)`
impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} by {} ({})",
            self.id, self.name, self.artist, self.album
        )
    }
}
