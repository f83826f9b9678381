//! Interactive session: a library plus the printer its outcomes go to

pub mod config;
mod demo;
mod printer;

pub use config::{SearchFormat, SessionConfig};
pub use demo::run_demo;
pub use printer::Printer;

use crate::catalog::load_library;
use crate::model::Library;
use anyhow::Result;
use std::io::Write;

/// A library bound to an output stream.
///
/// Mutations print their failure message and report whether they applied.
pub struct Session<W: Write> {
    library: Library,
    printer: Printer<W>,
}

impl<W: Write> Session<W> {
    /// Seed a library according to `config` and attach it to `out`
    pub fn open(config: &SessionConfig, out: W) -> Result<Self> {
        let library = load_library(config.catalog.as_deref())?;
        let printer = Printer::new(out).with_search_format(config.search_format);
        Ok(Self::new(library, printer))
    }

    pub fn new(library: Library, printer: Printer<W>) -> Self {
        Self { library, printer }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Unwrap the library and the underlying writer
    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.printer.into_inner())
    }

    pub fn print_playlists(&mut self) -> Result<()> {
        self.printer.print_playlists(&self.library)
    }

    pub fn print_tracks(&mut self) -> Result<()> {
        self.printer.print_tracks(&self.library)
    }

    pub fn print_playlist(&mut self, playlist_id: &str) -> Result<()> {
        self.printer.print_playlist(&self.library, playlist_id)
    }

    pub fn print_search_results(&mut self, query: &str) -> Result<()> {
        self.printer.print_search_results(&self.library, query)
    }

    pub fn print_playlist_track_ids(&mut self, playlist_ids: &[&str]) -> Result<()> {
        self.printer.print_playlist_track_ids(&self.library, playlist_ids)
    }

    pub fn print_library(&mut self) -> Result<()> {
        self.printer.print_library(&self.library)
    }

    /// Add a track; returns its key when created
    pub fn add_track(&mut self, name: &str, artist: &str, album: &str) -> Result<Option<String>> {
        let outcome = self
            .library
            .add_track(name, artist, album)
            .map(|track| track.id.clone());
        self.printer.report(outcome)
    }

    /// Add a playlist; returns its key when created
    pub fn add_playlist(&mut self, name: &str) -> Result<Option<String>> {
        let outcome = self
            .library
            .add_playlist(name)
            .map(|playlist| playlist.id.clone());
        self.printer.report(outcome)
    }

    /// Append a track to a playlist; returns whether it was appended
    pub fn add_track_to_playlist(&mut self, track_id: &str, playlist_id: &str) -> Result<bool> {
        let outcome = self
            .library
            .add_track_to_playlist(track_id, playlist_id)
            .map(|_| ());
        Ok(self.printer.report(outcome)?.is_some())
    }
}
