use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::TrackField;
use crate::error::LibraryError;

use super::display::details_from_fields;
use super::import::{TrackRecord, read_records_from_path};
use super::model::{MAX_RATING, Track};
use super::seed::SEED_TRACKS;

/// The track library: every track keyed by its (opaque) track key.
///
/// Lookups hand back plain values or `None`; mutation goes through keyed
/// methods so no caller holds on to a `Track` between calls.
#[derive(Debug, Clone, Default)]
pub struct Library {
    tracks: BTreeMap<String, Track>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// A library holding the built-in tracks.
    pub fn with_seed() -> Self {
        let mut library = Self::new();
        for seed in SEED_TRACKS {
            match Track::new(seed.name, seed.artist, seed.rating) {
                Ok(track) => {
                    library.insert(seed.key, track.with_play_count(seed.play_count));
                }
                Err(e) => warn!(key = seed.key, "skipping seed track: {e}"),
            }
        }
        library
    }

    /// Insert or replace the track stored under `key`.
    pub fn insert(&mut self, key: impl Into<String>, track: Track) -> Option<Track> {
        self.tracks.insert(key.into(), track)
    }

    pub fn get(&self, key: &str) -> Option<&Track> {
        self.tracks.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tracks.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.tracks.keys().map(String::as_str)
    }

    pub fn get_name(&self, key: &str) -> Option<&str> {
        self.get(key).map(Track::name)
    }

    pub fn get_artist(&self, key: &str) -> Option<&str> {
        self.get(key).map(Track::artist)
    }

    pub fn get_rating(&self, key: &str) -> Option<u8> {
        self.get(key).map(Track::rating)
    }

    pub fn get_play_count(&self, key: &str) -> Option<u32> {
        self.get(key).map(Track::play_count)
    }

    /// Update a track's rating. Only 1..=5 is accepted; a track can be
    /// created unrated (0) but never reset to 0 through here.
    pub fn set_rating(&mut self, key: &str, rating: u8) -> Result<(), LibraryError> {
        let track = self
            .tracks
            .get_mut(key)
            .ok_or_else(|| LibraryError::NotFound(key.to_string()))?;

        if !(1..=MAX_RATING).contains(&rating) {
            return Err(LibraryError::InvalidRating(rating));
        }

        track.set_rating(rating);
        Ok(())
    }

    /// Record one play of the track under `key`.
    pub fn increment_play_count(&mut self, key: &str) -> Result<(), LibraryError> {
        let track = self
            .tracks
            .get_mut(key)
            .ok_or_else(|| LibraryError::NotFound(key.to_string()))?;
        track.increment_play_count();
        Ok(())
    }

    /// Every track's `info()` line, in key order.
    pub fn list_all(&self) -> Listing<'_> {
        Listing {
            tracks: &self.tracks,
        }
    }

    /// Multi-line details for one track, or `None` when the key is unknown.
    pub fn details(&self, key: &str, fields: &[TrackField], sep: &str) -> Option<String> {
        self.get(key).map(|t| details_from_fields(t, fields, sep))
    }

    /// Merge `records` into the library, skipping keys that already exist.
    ///
    /// The whole batch is validated first: a single bad record aborts the
    /// load and leaves the library untouched. Returns how many tracks were
    /// added.
    pub fn load_from_records<I>(&mut self, records: I) -> Result<usize, LibraryError>
    where
        I: IntoIterator<Item = TrackRecord>,
    {
        let mut staged: BTreeMap<String, Track> = BTreeMap::new();

        for (idx, record) in records.into_iter().enumerate() {
            let line = if record.line > 0 {
                record.line
            } else {
                idx as u64 + 1
            };

            if self.tracks.contains_key(&record.key) || staged.contains_key(&record.key) {
                debug!(key = %record.key, "track already in library, skipping");
                continue;
            }

            let track = Track::new(record.name, record.artist, record.rating)
                .map_err(|e| LibraryError::MalformedRecord {
                    line,
                    reason: e.to_string(),
                })?
                .with_play_count(record.play_count);
            staged.insert(record.key, track);
        }

        let added = staged.len();
        self.tracks.extend(staged);
        Ok(added)
    }

    /// Read `path` as CSV and merge its rows via [`Library::load_from_records`].
    pub fn import_csv(&mut self, path: &Path) -> Result<usize, LibraryError> {
        let records = read_records_from_path(path)?;
        let total = records.len();
        let added = self.load_from_records(records)?;
        info!(path = %path.display(), total, added, "imported tracks");
        Ok(added)
    }
}

/// Restartable view over the library's `info()` lines.
///
/// An empty listing is the "library is empty" marker: it renders as the
/// empty string and [`Listing::render_or`] swaps in the caller's message.
#[derive(Clone, Copy)]
pub struct Listing<'a> {
    tracks: &'a BTreeMap<String, Track>,
}

impl<'a> Listing<'a> {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Lazily format each track. Each call starts from the first track.
    pub fn lines(&self) -> Lines<'a> {
        Lines {
            inner: self.tracks.values(),
        }
    }

    pub fn render_or(&self, empty_text: &str) -> String {
        if self.is_empty() {
            empty_text.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for Listing<'a> {
    type Item = String;
    type IntoIter = Lines<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

/// Iterator returned by [`Listing::lines`].
#[derive(Clone)]
pub struct Lines<'a> {
    inner: btree_map::Values<'a, String, Track>,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Track::info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Lines<'_> {}
