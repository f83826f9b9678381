use super::id::{next_key, PLAYLIST_PREFIX, TRACK_PREFIX};
use super::{Playlist, Track};
use crate::error::{LibraryError, Result};
use crate::search::SearchResults;
use serde::Serialize;

/// Complete music library containing tracks and playlists.
///
/// Both collections iterate in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Library {
    /// All tracks, in insertion order
    tracks: Vec<Track>,

    /// All playlists, in insertion order
    playlists: Vec<Playlist>,
}

impl Library {
    /// Create a new empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a library from collections whose keys are known to be distinct
    pub(crate) fn from_parts(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Self {
        Self { tracks, playlists }
    }

    /// Library seeded with the built-in sample tracks and playlists
    pub fn sample() -> Self {
        crate::catalog::sample_library()
    }

    /// Insert a prebuilt track under its own id
    pub fn insert_track(&mut self, track: Track) -> Result<()> {
        if self.get_track(&track.id).is_some() {
            return Err(LibraryError::DuplicateTrack(track.id));
        }
        self.tracks.push(track);
        Ok(())
    }

    /// Insert a prebuilt playlist under its own id
    pub fn insert_playlist(&mut self, playlist: Playlist) -> Result<()> {
        if self.get_playlist(&playlist.id).is_some() {
            return Err(LibraryError::DuplicatePlaylist(playlist.id));
        }
        self.playlists.push(playlist);
        Ok(())
    }

    /// Get a track by ID
    pub fn get_track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Get a playlist by ID
    pub fn get_playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    /// Get all tracks
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Get all playlists
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Total number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of playlists
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }

    /// Create a track from its three required fields.
    ///
    /// Fields are checked in order (name, artist, album); the first empty
    /// one aborts without touching the library.
    pub fn add_track(&mut self, name: &str, artist: &str, album: &str) -> Result<&Track> {
        if name.is_empty() {
            return Err(LibraryError::MissingTrackName);
        }
        if artist.is_empty() {
            return Err(LibraryError::MissingArtist);
        }
        if album.is_empty() {
            return Err(LibraryError::MissingAlbum);
        }

        let id = next_key(TRACK_PREFIX, self.track_count(), |key| {
            self.get_track(key).is_some()
        });
        log::debug!("Adding track {}: {} by {} ({})", id, name, artist, album);

        self.tracks.push(Track::new(id, name, artist, album));
        Ok(&self.tracks[self.tracks.len() - 1])
    }

    /// Create an empty playlist
    pub fn add_playlist(&mut self, name: &str) -> Result<&Playlist> {
        if name.is_empty() {
            return Err(LibraryError::MissingPlaylistName);
        }

        let id = next_key(PLAYLIST_PREFIX, self.playlist_count(), |key| {
            self.get_playlist(key).is_some()
        });
        log::debug!("Adding playlist {}: {}", id, name);

        self.playlists.push(Playlist::new(id, name));
        Ok(&self.playlists[self.playlists.len() - 1])
    }

    /// Append an existing track to an existing playlist.
    ///
    /// The track is checked before the playlist.
    pub fn add_track_to_playlist(&mut self, track_id: &str, playlist_id: &str) -> Result<&Playlist> {
        if self.get_track(track_id).is_none() {
            return Err(LibraryError::TrackNotFound(track_id.to_string()));
        }

        let playlist = self
            .playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(playlist_id.to_string()))?;

        playlist.add_track(track_id);
        log::debug!(
            "Added {} to {} ({} tracks)",
            track_id,
            playlist.id,
            playlist.len()
        );
        Ok(&*playlist)
    }

    /// Tracks of a playlist in stored order.
    ///
    /// Entries whose track is missing are skipped.
    pub fn playlist_tracks(&self, playlist_id: &str) -> Result<(&Playlist, Vec<&Track>)> {
        let playlist = self
            .get_playlist(playlist_id)
            .ok_or_else(|| LibraryError::PlaylistNotFound(playlist_id.to_string()))?;

        let tracks = playlist
            .track_ids()
            .filter_map(|id| {
                let track = self.get_track(id);
                if track.is_none() {
                    log::warn!("Playlist {} references unknown track {}", playlist.id, id);
                }
                track
            })
            .collect();

        Ok((playlist, tracks))
    }

    /// Case-insensitive substring search over name, artist and album
    pub fn search(&self, query: &str) -> Result<SearchResults<'_>> {
        SearchResults::collect(self, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_creation() {
        let lib = Library::new();
        assert_eq!(lib.track_count(), 0);
        assert_eq!(lib.playlist_count(), 0);
    }

    #[test]
    fn test_add_track() {
        let mut lib = Library::new();

        let track = lib.add_track("Test Song", "Test Artist", "Test Album").unwrap();
        assert_eq!(track.id, "t01");

        assert_eq!(lib.track_count(), 1);
        assert_eq!(lib.get_track("t01").unwrap().name, "Test Song");
    }

    #[test]
    fn test_add_track_missing_fields_in_order() {
        let mut lib = Library::new();

        assert_eq!(lib.add_track("", "", ""), Err(LibraryError::MissingTrackName));
        assert_eq!(lib.add_track("n", "", ""), Err(LibraryError::MissingArtist));
        assert_eq!(lib.add_track("n", "a", ""), Err(LibraryError::MissingAlbum));
        assert_eq!(lib.track_count(), 0);
    }

    #[test]
    fn test_whitespace_counts_as_provided() {
        let mut lib = Library::new();
        assert!(lib.add_track(" ", "0", "a").is_ok());
    }

    #[test]
    fn test_key_padding_past_nine() {
        let mut lib = Library::new();
        for i in 0..10 {
            lib.add_playlist(&format!("List {}", i)).unwrap();
        }
        let ids: Vec<&str> = lib.playlists().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids[8], "p09");
        assert_eq!(ids[9], "p10");
    }

    #[test]
    fn test_add_playlist() {
        let mut lib = Library::new();

        let playlist = lib.add_playlist("My Playlist").unwrap();
        assert!(playlist.is_empty());

        assert_eq!(lib.playlist_count(), 1);
        assert_eq!(lib.playlists()[0].name, "My Playlist");
    }

    #[test]
    fn test_insert_rejects_duplicate_keys() {
        let mut lib = Library::new();
        lib.insert_track(Track::new("t01", "a", "b", "c")).unwrap();

        let err = lib.insert_track(Track::new("t01", "x", "y", "z")).unwrap_err();
        assert_eq!(err, LibraryError::DuplicateTrack("t01".to_string()));

        lib.insert_playlist(Playlist::new("p01", "One")).unwrap();
        assert!(lib.insert_playlist(Playlist::new("p01", "Two")).is_err());
    }

    #[test]
    fn test_generated_key_avoids_inserted_key() {
        let mut lib = Library::new();
        lib.insert_track(Track::new("t01", "a", "b", "c")).unwrap();
        lib.insert_track(Track::new("t03", "a", "b", "c")).unwrap();

        // count is 2, so t03 would be next; it is taken
        let track = lib.add_track("n", "a", "b").unwrap();
        assert_eq!(track.id, "t04");
    }

    #[test]
    fn test_add_track_to_playlist_checks_track_first() {
        let mut lib = Library::new();
        let err = lib.add_track_to_playlist("t09", "p09").unwrap_err();
        assert_eq!(err, LibraryError::TrackNotFound("t09".to_string()));
    }

    #[test]
    fn test_playlist_tracks_skips_dangling() {
        let mut lib = Library::new();
        lib.insert_track(Track::new("t01", "a", "b", "c")).unwrap();
        let mut playlist = Playlist::new("p01", "Mixed");
        playlist.add_track("t01");
        playlist.add_track("t77");
        lib.insert_playlist(playlist).unwrap();

        let (playlist, tracks) = lib.playlist_tracks("p01").unwrap();
        assert_eq!(playlist.len(), 2);
        assert_eq!(tracks.len(), 1);
    }
}
