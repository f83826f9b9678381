//! Session configuration

use std::path::PathBuf;

/// Configuration for a library session
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// JSON catalog to seed from (None = built-in sample)
    pub catalog: Option<PathBuf>,

    /// How search results are written
    pub search_format: SearchFormat,
}

/// Output shape for search results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchFormat {
    /// One pretty JSON object keyed by track key
    #[default]
    Json,

    /// One track listing line per match
    Lines,
}

impl SessionConfig {
    /// Create a configuration using the sample catalog and JSON search output
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a catalog file
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog = Some(path);
        self
    }

    /// Set the search output format
    pub fn with_search_format(mut self, format: SearchFormat) -> Self {
        self.search_format = format;
        self
    }
}
