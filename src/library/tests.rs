use super::*;
use crate::config::TrackField;
use crate::error::LibraryError;

fn track(name: &str, artist: &str, rating: u8) -> Track {
    Track::new(name, artist, rating).unwrap()
}

fn library_with(entries: &[(&str, &str, &str, u8, u32)]) -> Library {
    let mut lib = Library::new();
    for (key, name, artist, rating, plays) in entries {
        lib.insert(*key, track(name, artist, *rating).with_play_count(*plays));
    }
    lib
}

#[test]
fn track_initial_values() {
    let t = track("Song A", "Artist A", 3);
    assert_eq!(t.name(), "Song A");
    assert_eq!(t.artist(), "Artist A");
    assert_eq!(t.rating(), 3);
    assert_eq!(t.play_count(), 0);
}

#[test]
fn stars_has_one_asterisk_per_rating_point() {
    for r in 0..=MAX_RATING {
        let s = track("Song", "Artist", r).stars();
        assert_eq!(s.len(), r as usize);
        assert!(s.chars().all(|c| c == '*'));
    }
    assert_eq!(track("Song", "Artist", 0).stars(), "");
}

#[test]
fn stars_follow_rating_changes() {
    let mut t = track("Song B", "Artist B", 4);
    assert_eq!(t.stars(), "****");
    t.set_rating(1);
    assert_eq!(t.stars(), "*");
    t.set_rating(0);
    assert_eq!(t.stars(), "");
}

#[test]
fn info_is_name_dash_artist_space_stars() {
    assert_eq!(track("Song C", "Artist C", 2).info(), "Song C - Artist C **");
    // The separating space stays even for unrated tracks.
    assert_eq!(track("Song D", "Artist D", 0).info(), "Song D - Artist D ");
}

#[test]
fn track_new_rejects_bad_arguments() {
    assert!(matches!(
        Track::new("Song", "Artist", 6),
        Err(LibraryError::InvalidArgument(_))
    ));
    assert!(matches!(
        Track::new("  ", "Artist", 3),
        Err(LibraryError::InvalidArgument(_))
    ));
    assert!(matches!(
        Track::new("Song", "", 3),
        Err(LibraryError::InvalidArgument(_))
    ));
}

#[test]
fn increment_play_count_counts_each_call() {
    let mut lib = library_with(&[("1", "Song A", "Artist A", 3, 0)]);
    for _ in 0..7 {
        lib.increment_play_count("1").unwrap();
    }
    assert_eq!(lib.get_play_count("1"), Some(7));
}

#[test]
fn accessors_return_none_for_unknown_keys() {
    let lib = Library::with_seed();
    assert_eq!(lib.get_name("nonexistent"), None);
    assert_eq!(lib.get_artist("nonexistent"), None);
    assert_eq!(lib.get_rating("nonexistent"), None);
    assert_eq!(lib.get_play_count("nonexistent"), None);
}

#[test]
fn keys_are_opaque_strings() {
    let lib = Library::with_seed();
    assert_eq!(lib.get_name("01"), Some("Another Brick in the Wall"));
    assert_eq!(lib.get_name("1"), None);
}

#[test]
fn set_rating_accepts_one_through_five() {
    let mut lib = library_with(&[("1", "Song A", "Artist A", 3, 0)]);
    lib.set_rating("1", 5).unwrap();
    assert_eq!(lib.get_rating("1"), Some(5));
    lib.set_rating("1", 1).unwrap();
    assert_eq!(lib.get_rating("1"), Some(1));
}

#[test]
fn set_rating_zero_is_rejected_although_tracks_may_start_unrated() {
    let mut lib = library_with(&[("1", "Song A", "Artist A", 0, 0)]);
    assert_eq!(lib.get_rating("1"), Some(0));

    lib.set_rating("1", 2).unwrap();
    assert!(matches!(
        lib.set_rating("1", 0),
        Err(LibraryError::InvalidRating(0))
    ));
    assert_eq!(lib.get_rating("1"), Some(2));
}

#[test]
fn set_rating_unknown_key_is_not_found() {
    let mut lib = Library::new();
    assert!(matches!(
        lib.set_rating("9", 3),
        Err(LibraryError::NotFound(k)) if k == "9"
    ));
}

#[test]
fn increment_unknown_key_is_not_found() {
    let mut lib = Library::new();
    assert!(matches!(
        lib.increment_play_count("9"),
        Err(LibraryError::NotFound(_))
    ));
}

#[test]
fn play_and_rate_scenario() {
    let mut lib = library_with(&[("1", "Song A", "Artist A", 3, 0)]);
    lib.increment_play_count("1").unwrap();
    lib.increment_play_count("1").unwrap();
    assert_eq!(lib.get_play_count("1"), Some(2));

    assert!(matches!(
        lib.set_rating("1", 6),
        Err(LibraryError::InvalidRating(6))
    ));
    assert_eq!(lib.get_rating("1"), Some(3));
}

#[test]
fn list_all_on_empty_library_is_the_empty_marker() {
    let lib = Library::new();
    let listing = lib.list_all();
    assert!(listing.is_empty());
    assert_eq!(listing.lines().count(), 0);
    assert_eq!(listing.to_string(), "");
    assert_eq!(listing.render_or("Library is empty."), "Library is empty.");
}

#[test]
fn list_all_yields_info_per_track_and_restarts() {
    let lib = library_with(&[
        ("1", "Song A", "Artist A", 3, 0),
        ("2", "Song B", "Artist B", 0, 4),
    ]);
    let listing = lib.list_all();

    let first: Vec<String> = listing.lines().collect();
    assert_eq!(first, vec!["Song A - Artist A ***", "Song B - Artist B "]);

    let again: Vec<String> = listing.into_iter().collect();
    assert_eq!(first, again);

    assert_eq!(
        listing.render_or("Library is empty."),
        "Song A - Artist A ***\nSong B - Artist B \n"
    );
}

#[test]
fn seed_library_holds_builtin_tracks_in_key_order() {
    let lib = Library::with_seed();
    assert_eq!(lib.len(), SEED_TRACKS.len());

    let keys: Vec<&str> = lib.keys().collect();
    let expected: Vec<&str> = SEED_TRACKS.iter().map(|s| s.key).collect();
    assert_eq!(keys, expected);
}

#[test]
fn load_from_records_adds_new_keys_with_play_count() {
    let mut lib = library_with(&[("01", "Song A", "Artist A", 3, 0)]);
    let added = lib
        .load_from_records(vec![
            TrackRecord::new("06", "Bohemian Rhapsody", "Queen", 5, 12),
            TrackRecord::new("07", "Hey Jude", "The Beatles", 4, 0),
        ])
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(lib.get_name("06"), Some("Bohemian Rhapsody"));
    assert_eq!(lib.get_play_count("06"), Some(12));
    assert_eq!(lib.get_rating("07"), Some(4));
}

#[test]
fn load_from_records_never_overwrites_existing_tracks() {
    let mut lib = library_with(&[("01", "Song A", "Artist A", 3, 9)]);
    let added = lib
        .load_from_records(vec![TrackRecord::new("01", "Other", "Someone", 1, 0)])
        .unwrap();

    assert_eq!(added, 0);
    assert_eq!(lib.get_name("01"), Some("Song A"));
    assert_eq!(lib.get_play_count("01"), Some(9));
}

#[test]
fn load_from_records_keeps_first_of_duplicate_keys_in_batch() {
    let mut lib = Library::new();
    let added = lib
        .load_from_records(vec![
            TrackRecord::new("06", "First", "A", 1, 0),
            TrackRecord::new("06", "Second", "B", 2, 0),
        ])
        .unwrap();
    assert_eq!(added, 1);
    assert_eq!(lib.get_name("06"), Some("First"));
}

#[test]
fn load_from_records_is_idempotent() {
    let records = vec![
        TrackRecord::new("06", "Bohemian Rhapsody", "Queen", 5, 12),
        TrackRecord::new("07", "Hey Jude", "The Beatles", 4, 0),
    ];

    let mut once = Library::with_seed();
    once.load_from_records(records.clone()).unwrap();

    let mut twice = Library::with_seed();
    twice.load_from_records(records.clone()).unwrap();
    let added = twice.load_from_records(records).unwrap();

    assert_eq!(added, 0);
    assert_eq!(once.list_all().to_string(), twice.list_all().to_string());
    for key in once.keys() {
        assert_eq!(once.get_play_count(key), twice.get_play_count(key));
    }
}

#[test]
fn load_from_records_aborts_without_partial_apply() {
    let mut lib = Library::new();
    let err = lib
        .load_from_records(vec![
            TrackRecord::new("06", "Good", "Artist", 3, 0),
            TrackRecord::new("07", "Bad", "Artist", 8, 0),
        ])
        .unwrap_err();

    assert!(matches!(err, LibraryError::MalformedRecord { line: 2, .. }));
    assert!(lib.is_empty());
}

#[test]
fn import_csv_merges_file_into_library() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new_tracks.csv");
    std::fs::write(
        &path,
        "key,name,artist,rating,play_count\n01,Dup,Dup,1,1\n06,Bohemian Rhapsody,Queen,5,12\n",
    )
    .unwrap();

    let mut lib = Library::with_seed();
    assert_eq!(lib.import_csv(&path).unwrap(), 1);
    assert_eq!(lib.import_csv(&path).unwrap(), 0);
    assert_eq!(lib.get_name("01"), Some("Another Brick in the Wall"));
    assert_eq!(lib.get_play_count("06"), Some(12));
}

#[test]
fn import_csv_with_bad_row_leaves_library_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new_tracks.csv");
    std::fs::write(
        &path,
        "key,name,artist,rating,play_count\n06,A,B,3,0\n07,C,D,x,0\n",
    )
    .unwrap();

    let mut lib = Library::with_seed();
    let before = lib.len();
    assert!(matches!(
        lib.import_csv(&path),
        Err(LibraryError::MalformedRecord { line: 3, .. })
    ));
    assert_eq!(lib.len(), before);
}

#[test]
fn details_default_fields_match_track_view() {
    let lib = library_with(&[("1", "Song A", "Artist A", 3, 2)]);
    let fields = [
        TrackField::Name,
        TrackField::Artist,
        TrackField::Rating,
        TrackField::Plays,
    ];
    assert_eq!(
        lib.details("1", &fields, "\n").unwrap(),
        "Song A\nArtist A\nrating: 3\nplays: 2"
    );
    assert_eq!(lib.details("2", &fields, "\n"), None);
}

#[test]
fn details_without_fields_falls_back_to_info() {
    let t = track("Song A", "Artist A", 1);
    assert_eq!(details_from_fields(&t, &[], " | "), "Song A - Artist A *");
    assert_eq!(
        details_from_fields(&t, &[TrackField::Stars, TrackField::Name], " | "),
        "* | Song A"
    );
}
