//! Track library: the `Track` entity, the keyed `Library` store and the
//! CSV bulk importer that feeds it.

mod display;
mod import;
mod model;
mod seed;
mod store;

pub use display::details_from_fields;
pub use import::{TrackRecord, read_records, read_records_from_path};
pub use model::{MAX_RATING, Track};
pub use seed::{SEED_TRACKS, SeedTrack};
pub use store::{Library, Lines, Listing};

#[cfg(test)]
mod tests;
