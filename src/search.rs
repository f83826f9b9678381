//! Track search
//!
//! Results stay addressed by track key: they serialize as a JSON object
//! `{ "t02": { ...track... } }` whose entries follow library order.

use crate::error::{LibraryError, Result};
use crate::model::{Library, Track};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Tracks matching a search query, keyed by track key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
    query: String,
    hits: Vec<(&'a str, &'a Track)>,
}

impl<'a> SearchResults<'a> {
    /// Run `query` against every track in `library`.
    ///
    /// The query is a literal substring; both sides are lower-cased first.
    pub fn collect(library: &'a Library, query: &str) -> Result<Self> {
        if query.is_empty() {
            return Err(LibraryError::MissingQuery);
        }

        let needle = query.to_lowercase();
        let hits: Vec<(&str, &Track)> = library
            .tracks()
            .iter()
            .filter(|track| track.matches_lowercase(&needle))
            .map(|track| (track.id.as_str(), track))
            .collect();

        log::debug!("Search {:?} matched {} tracks", query, hits.len());

        Ok(Self {
            query: query.to_string(),
            hits,
        })
    }

    /// The query as given
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matched track keys in library order
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.hits.iter().map(|(key, _)| *key)
    }

    /// Matched tracks in library order
    pub fn tracks(&self) -> impl Iterator<Item = &'a Track> + '_ {
        self.hits.iter().map(|(_, track)| *track)
    }

    /// Look up a hit by track key
    pub fn get(&self, key: &str) -> Option<&'a Track> {
        self.hits
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, track)| *track)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Pretty JSON dump of the results
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for SearchResults<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.hits.len()))?;
        for (key, track) in &self.hits {
            map.serialize_entry(key, track)?;
        }
        map.end()
    }
}
