//! Library operation outcomes
//!
//! Every variant's `Display` text is the exact message shown to the user.

use thiserror::Error;

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Failure outcomes of library operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("Track {0} was not found!")]
    TrackNotFound(String),

    #[error("Playlist {0} was not found!")]
    PlaylistNotFound(String),

    #[error("Please provide a name")]
    MissingTrackName,

    #[error("Please provide an artist")]
    MissingArtist,

    #[error("Please provide an album")]
    MissingAlbum,

    #[error("Please provide a name for the playlist")]
    MissingPlaylistName,

    #[error("Please add a search term and try again.")]
    MissingQuery,

    /// A prebuilt track reused a key already in the library
    #[error("Track {0} already exists")]
    DuplicateTrack(String),

    /// A prebuilt playlist reused a key already in the library
    #[error("Playlist {0} already exists")]
    DuplicatePlaylist(String),
}

impl LibraryError {
    /// True for "referenced entity not found" outcomes
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LibraryError::TrackNotFound(_) | LibraryError::PlaylistNotFound(_)
        )
    }
}
