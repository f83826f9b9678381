//! Library seeding
//!
//! A library starts either from the built-in sample catalog or from a
//! read-only JSON catalog file.

mod json;
mod sample;

pub use json::{parse_catalog, parse_catalog_str};
pub use sample::sample_library;

use crate::model::Library;
use anyhow::Result;
use std::path::Path;

/// Load the initial library
///
/// # Arguments
/// * `catalog` - Optional JSON catalog path; `None` uses the sample catalog
pub fn load_library(catalog: Option<&Path>) -> Result<Library> {
    let library = match catalog {
        Some(path) => {
            log::info!("Loading catalog from {:?}", path);
            parse_catalog(path)?
        }
        None => {
            log::debug!("Using built-in sample catalog");
            sample_library()
        }
    };

    log::info!(
        "Loaded library: {} tracks, {} playlists",
        library.track_count(),
        library.playlist_count()
    );

    Ok(library)
}
