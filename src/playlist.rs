//! Playlist module: a queue of library keys the front end steps through.

mod model;

pub use model::*;
