//! Built-in sample catalog

use crate::model::{Library, Playlist, Track};

/// Three tracks and two playlists used by the demo and tests
pub fn sample_library() -> Library {
    let tracks = vec![
        Track::new("t01", "Code Monkey", "Jonathan Coulton", "Thing a Week Three"),
        Track::new("t02", "Model View Controller", "James Dempsey", "WWDC 2003"),
        Track::new("t03", "Four Thirty-Three", "John Cage", "Woodstock 1952"),
    ];

    let mut coding = Playlist::new("p01", "Coding Music");
    coding.add_track("t01");
    coding.add_track("t02");

    let mut other = Playlist::new("p02", "Other Playlist");
    other.add_track("t03");

    Library::from_parts(tracks, vec![coding, other])
}
