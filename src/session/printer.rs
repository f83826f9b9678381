//! Human-readable output
//!
//! Library operations return outcomes; the printer turns them into the
//! text lines users see, including the failure messages.

use super::config::SearchFormat;
use crate::error::LibraryError;
use crate::model::Library;
use anyhow::{Context, Result};
use std::io::Write;

/// Writes library listings and operation outcomes to `W`
pub struct Printer<W: Write> {
    out: W,
    search_format: SearchFormat,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            search_format: SearchFormat::default(),
        }
    }

    pub fn with_search_format(mut self, format: SearchFormat) -> Self {
        self.search_format = format;
        self
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// `p01: Coding Music - 2 tracks`, one line per playlist
    pub fn print_playlists(&mut self, library: &Library) -> Result<()> {
        for playlist in library.playlists() {
            self.line(playlist)?;
        }
        Ok(())
    }

    /// `t01: Code Monkey by Jonathan Coulton (Thing a Week Three)`, one line per track
    pub fn print_tracks(&mut self, library: &Library) -> Result<()> {
        for track in library.tracks() {
            self.line(track)?;
        }
        Ok(())
    }

    /// Playlist header followed by its tracks, written as one block
    pub fn print_playlist(&mut self, library: &Library, playlist_id: &str) -> Result<()> {
        let Some((playlist, tracks)) = self.report(library.playlist_tracks(playlist_id))? else {
            return Ok(());
        };

        let mut block = playlist.to_string();
        for track in tracks {
            block.push('\n');
            block.push_str(&track.to_string());
        }
        self.line(block)
    }

    /// Search and dump the matches in the configured format
    pub fn print_search_results(&mut self, library: &Library, query: &str) -> Result<()> {
        let Some(results) = self.report(library.search(query))? else {
            return Ok(());
        };

        match self.search_format {
            SearchFormat::Json => {
                let dump = results.to_json().context("Failed to serialize search results")?;
                self.line(dump)
            }
            SearchFormat::Lines => {
                for track in results.tracks() {
                    self.line(track)?;
                }
                Ok(())
            }
        }
    }

    /// Track ids of each playlist as JSON arrays on one line.
    ///
    /// Unknown playlists are reported and left out of the line.
    pub fn print_playlist_track_ids(&mut self, library: &Library, playlist_ids: &[&str]) -> Result<()> {
        let mut parts = Vec::with_capacity(playlist_ids.len());
        for id in playlist_ids {
            let lookup = library
                .get_playlist(id)
                .ok_or_else(|| LibraryError::PlaylistNotFound(id.to_string()));
            if let Some(playlist) = self.report(lookup)? {
                parts.push(serde_json::to_string(&playlist.tracks)?);
            }
        }

        if parts.is_empty() {
            return Ok(());
        }
        self.line(parts.join(" "))
    }

    /// Pretty JSON dump of the whole library
    pub fn print_library(&mut self, library: &Library) -> Result<()> {
        let dump = serde_json::to_string_pretty(library).context("Failed to serialize library")?;
        self.line(dump)
    }

    /// Write the message of a failed outcome and pass a success through
    pub fn report<T>(&mut self, outcome: Result<T, LibraryError>) -> Result<Option<T>> {
        match outcome {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                log::debug!("Operation failed: {:?}", err);
                self.line(err)?;
                Ok(None)
            }
        }
    }

    fn line(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.out, "{}", text).context("Failed to write output")
    }
}
