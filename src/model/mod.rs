//! In-memory data model for the music library
//!
//! Tracks and playlists are addressed by sequential keys (`t01`, `p01`);
//! the key is the entity's only identity.

pub mod id;
mod library;
mod playlist;
mod track;

pub use id::generate_uid;
pub use library::Library;
pub use playlist::Playlist;
pub use track::Track;
