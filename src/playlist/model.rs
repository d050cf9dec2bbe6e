//! Playlist model types: `Playlist` and `PlaylistError`.
//!
//! The `Playlist` struct holds the queued track keys and the cursor used by
//! the front end to step through them and play the current one.

use thiserror::Error;
use tracing::debug;

use crate::library::Library;

/// Why a playlist action was refused. The messages are meant for the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("Please enter a track number.")]
    EmptyKey,
    #[error("Track {0} not found in the library.")]
    NotFound(String),
    #[error("Track {0} is already in the playlist.")]
    AlreadyQueued(String),
    #[error("Playlist is empty. Add tracks first.")]
    Empty,
    #[error("Already at the last track.")]
    AtEnd,
    #[error("Already at the first track.")]
    AtStart,
}

/// An ordered list of unique track keys with a cursor.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    keys: Vec<String>,
    current: usize,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Index of the current track.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Key of the current track, if anything is queued.
    pub fn current_key(&self) -> Option<&str> {
        self.keys.get(self.current).map(String::as_str)
    }

    /// Queue `key` after checking it exists in `library` and isn't queued yet.
    /// Surrounding whitespace in `key` is ignored.
    pub fn add(&mut self, library: &Library, key: &str) -> Result<(), PlaylistError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(PlaylistError::EmptyKey);
        }
        if !library.contains(key) {
            return Err(PlaylistError::NotFound(key.to_string()));
        }
        if self.keys.iter().any(|k| k == key) {
            return Err(PlaylistError::AlreadyQueued(key.to_string()));
        }

        self.keys.push(key.to_string());
        Ok(())
    }

    /// Play the current track: bumps its play count and returns its key.
    pub fn play_current(&self, library: &mut Library) -> Result<&str, PlaylistError> {
        let key = self.current_key().ok_or(PlaylistError::Empty)?;
        library
            .increment_play_count(key)
            .map_err(|_| PlaylistError::NotFound(key.to_string()))?;
        debug!(key, plays = ?library.get_play_count(key), "played track");
        Ok(key)
    }

    /// Move the cursor forward and return the new current key.
    /// Stops at the last track instead of wrapping.
    pub fn advance(&mut self) -> Result<&str, PlaylistError> {
        if self.keys.is_empty() {
            return Err(PlaylistError::Empty);
        }
        if self.current + 1 >= self.keys.len() {
            return Err(PlaylistError::AtEnd);
        }
        self.current += 1;
        Ok(self.keys[self.current].as_str())
    }

    /// Move the cursor back and return the new current key.
    pub fn back(&mut self) -> Result<&str, PlaylistError> {
        if self.keys.is_empty() {
            return Err(PlaylistError::Empty);
        }
        if self.current == 0 {
            return Err(PlaylistError::AtStart);
        }
        self.current -= 1;
        Ok(self.keys[self.current].as_str())
    }

    /// Drop every queued key and rewind the cursor.
    pub fn reset(&mut self) {
        self.keys.clear();
        self.current = 0;
    }

    /// `"{key}: {name} - {artist}"` for each queued track still in `library`.
    pub fn lines(&self, library: &Library) -> Vec<String> {
        self.keys
            .iter()
            .filter_map(|key| {
                let name = library.get_name(key)?;
                let artist = library.get_artist(key)?;
                Some(format!("{key}: {name} - {artist}"))
            })
            .collect()
    }

    /// Playlist lines joined by newlines, or `empty_text` when nothing shows.
    pub fn render_or(&self, library: &Library, empty_text: &str) -> String {
        let lines = self.lines(library);
        if lines.is_empty() {
            empty_text.to_string()
        } else {
            lines.join("\n")
        }
    }
}
