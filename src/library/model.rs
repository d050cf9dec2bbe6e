use crate::error::LibraryError;

/// Highest rating a track can carry.
pub const MAX_RATING: u8 = 5;

/// A single library entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    name: String,
    artist: String,
    rating: u8,
    play_count: u32,
}

impl Track {
    /// Create a track with a play count of zero.
    ///
    /// A rating of 0 means "unrated" and is accepted here, even though
    /// [`Library::set_rating`](super::Library::set_rating) only accepts 1..=5.
    pub fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        rating: u8,
    ) -> Result<Self, LibraryError> {
        let name = name.into();
        let artist = artist.into();

        if name.trim().is_empty() {
            return Err(LibraryError::InvalidArgument("name must not be empty".into()));
        }
        if artist.trim().is_empty() {
            return Err(LibraryError::InvalidArgument("artist must not be empty".into()));
        }
        if rating > MAX_RATING {
            return Err(LibraryError::InvalidArgument(format!(
                "rating must be between 0 and {MAX_RATING}, got {rating}"
            )));
        }

        Ok(Self {
            name,
            artist,
            rating,
            play_count: 0,
        })
    }

    /// Override the initial play count (used when importing existing data).
    pub fn with_play_count(mut self, play_count: u32) -> Self {
        self.play_count = play_count;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// One `*` per rating point; empty for an unrated track.
    pub fn stars(&self) -> String {
        "*".repeat(self.rating as usize)
    }

    /// `"{name} - {artist} {stars}"`. The space before the stars is kept
    /// even when there are none.
    pub fn info(&self) -> String {
        format!("{} - {} {}", self.name, self.artist, self.stars())
    }

    /// Range checks belong to the caller.
    pub(crate) fn set_rating(&mut self, rating: u8) {
        self.rating = rating;
    }

    pub(crate) fn increment_play_count(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }
}
