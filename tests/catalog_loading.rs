use music_library::catalog::{load_library, parse_catalog, parse_catalog_str};
use music_library::model::Library;
use music_library::session::Printer;
use music_library::{Session, SessionConfig};
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"{
    "tracks": [
        { "id": "t01", "name": "Blue in Green", "artist": "Miles Davis", "album": "Kind of Blue" },
        { "id": "t02", "name": "So What", "artist": "Miles Davis", "album": "Kind of Blue" }
    ],
    "playlists": [
        { "id": "p01", "name": "Jazz", "tracks": ["t02", "t01", "t99"] }
    ]
}"#;

#[test]
fn test_load_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, CATALOG).unwrap();

    let lib = parse_catalog(&path).unwrap();

    assert_eq!(lib.track_count(), 2);
    let jazz = lib.get_playlist("p01").unwrap();
    assert_eq!(jazz.track_ids().collect::<Vec<_>>(), ["t02", "t01"]);
}

#[test]
fn test_missing_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = parse_catalog(&temp_dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read catalog"));
}

#[test]
fn test_default_is_sample_library() {
    let lib = load_library(None).unwrap();
    assert_eq!(lib.track_count(), 3);
    assert_eq!(lib.playlist_count(), 2);
}

#[test]
fn test_session_from_catalog_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("catalog.json");
    fs::write(&path, CATALOG).unwrap();

    let config = SessionConfig::new().with_catalog(path);
    let mut session = Session::open(&config, Vec::new()).unwrap();

    assert_eq!(session.add_track("Freddie Freeloader", "Miles Davis", "Kind of Blue").unwrap().as_deref(), Some("t03"));
    session.print_playlist("p01").unwrap();

    let (_, out) = session.into_parts();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "p01: Jazz - 2 tracks\n\
         t02: So What by Miles Davis (Kind of Blue)\n\
         t01: Blue in Green by Miles Davis (Kind of Blue)\n"
    );
}

#[test]
fn test_library_dump_reloads_as_catalog() {
    let mut lib = Library::sample();
    lib.add_track_to_playlist("t02", "p02").unwrap();
    lib.add_playlist("Empty").unwrap();

    let mut printer = Printer::new(Vec::new());
    printer.print_library(&lib).unwrap();
    let dump = String::from_utf8(printer.into_inner()).unwrap();

    let reloaded = parse_catalog_str(&dump).unwrap();

    assert_eq!(reloaded, lib);
    let p02 = reloaded.get_playlist("p02").unwrap();
    assert_eq!(p02.track_ids().collect::<Vec<_>>(), ["t03", "t02"]);
}
