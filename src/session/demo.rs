//! Fixed demonstration sequence over a freshly seeded library

use super::Session;
use anyhow::Result;
use std::io::Write;

/// Exercise every library operation, including each failure message
pub fn run_demo<W: Write>(session: &mut Session<W>) -> Result<()> {
    log::info!("Running demonstration sequence");

    session.print_playlists()?;
    session.print_tracks()?;

    session.print_playlist("p01")?;
    session.print_playlist("p02")?;

    session.print_playlist_track_ids(&["p01", "p02"])?;
    session.add_track_to_playlist("t02", "p02")?;
    session.add_track_to_playlist("t04", "p02")?;
    session.add_track_to_playlist("t02", "p04")?;
    session.print_playlist_track_ids(&["p01", "p02"])?;

    session.print_library()?;
    session.add_track("testname", "testartist", "testalbum")?;
    session.add_track("", "testartist", "testalbum")?;
    session.add_track("testname", "", "testalbum")?;
    session.add_track("testname", "testartist", "")?;
    session.print_library()?;

    session.add_playlist("testnewplaylist")?;
    session.print_library()?;

    session.print_search_results("james")?;
    session.print_search_results("W")?;
    session.print_search_results("")?;
    session.print_search_results("four")?;

    Ok(())
}
