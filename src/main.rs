use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use music_library::session::{run_demo, SearchFormat};
use music_library::{Session, SessionConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "music-library")]
#[command(about = "Browse and edit an in-memory music library", long_about = None)]
struct Args {
    /// JSON catalog to seed the library from (defaults to the built-in sample)
    #[arg(short = 'c', long, global = true)]
    catalog: Option<String>,

    /// Search result format
    #[arg(long, value_enum, default_value_t = FormatArg::Json, global = true)]
    format: FormatArg,

    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the demonstration sequence (default)
    Demo,

    /// List all tracks
    Tracks,

    /// List all playlists
    Playlists,

    /// Show one playlist with its tracks
    Playlist {
        /// Playlist key (e.g. p01)
        id: String,
    },

    /// Search track names, artists and albums
    Search {
        /// Case-insensitive substring
        #[arg(default_value = "")]
        query: String,
    },

    /// Add a track, then list all tracks
    AddTrack {
        #[arg(default_value = "")]
        name: String,
        #[arg(default_value = "")]
        artist: String,
        #[arg(default_value = "")]
        album: String,
    },

    /// Add a playlist, then list all playlists
    AddPlaylist {
        #[arg(default_value = "")]
        name: String,
    },

    /// Append a track to a playlist, then show the playlist
    AddToPlaylist {
        /// Track key (e.g. t02)
        track: String,

        /// Playlist key (e.g. p02)
        playlist: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FormatArg {
    Json,
    Lines,
}

impl From<FormatArg> for SearchFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => SearchFormat::Json,
            FormatArg::Lines => SearchFormat::Lines,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = SessionConfig::new().with_search_format(args.format.into());

    // Expand ~ in paths
    if let Some(catalog) = &args.catalog {
        let expanded = shellexpand::tilde(catalog);
        config = config.with_catalog(PathBuf::from(expanded.as_ref()));
    }

    let stdout = std::io::stdout().lock();
    let mut session = Session::open(&config, stdout)?;

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => run_demo(&mut session)?,
        Command::Tracks => session.print_tracks()?,
        Command::Playlists => session.print_playlists()?,
        Command::Playlist { id } => session.print_playlist(&id)?,
        Command::Search { query } => session.print_search_results(&query)?,
        Command::AddTrack {
            name,
            artist,
            album,
        } => {
            if session.add_track(&name, &artist, &album)?.is_some() {
                session.print_tracks()?;
            }
        }
        Command::AddPlaylist { name } => {
            if session.add_playlist(&name)?.is_some() {
                session.print_playlists()?;
            }
        }
        Command::AddToPlaylist { track, playlist } => {
            if session.add_track_to_playlist(&track, &playlist)? {
                session.print_playlist(&playlist)?;
            }
        }
    }

    Ok(())
}
