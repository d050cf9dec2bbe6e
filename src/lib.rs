//! Core of a jukebox: a keyed library of tracks with ratings and play
//! counts, CSV bulk import, and a playlist queue.

pub mod config;
pub mod error;
pub mod library;
pub mod playlist;
pub mod runtime;

pub use error::LibraryError;
pub use library::{Library, Track, TrackRecord};
pub use playlist::{Playlist, PlaylistError};
