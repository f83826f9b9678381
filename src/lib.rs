//! Music Library - in-memory catalog of tracks and playlists
//!
//! Tracks and playlists live in insertion-ordered collections; operations
//! look them up, mutate them, and print human-readable listings.

pub mod catalog;
pub mod error;
pub mod model;
pub mod search;
pub mod session;

pub use error::LibraryError;
pub use model::{Library, Playlist, Track};
pub use search::SearchResults;
pub use session::{Session, SessionConfig};
