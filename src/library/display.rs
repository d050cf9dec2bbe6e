use crate::config::TrackField;

use super::model::Track;

/// Build a details string for a track according to the provided `fields` and separator.
///
/// Name and artist are shown as-is; the numeric fields carry a label
/// (`rating: 3`, `plays: 7`) so they stay readable on their own line.
/// Falls back to `info()` when no fields were given.
pub fn details_from_fields(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let parts: Vec<String> = fields
        .iter()
        .map(|f| match f {
            TrackField::Name => track.name().to_string(),
            TrackField::Artist => track.artist().to_string(),
            TrackField::Rating => format!("rating: {}", track.rating()),
            TrackField::Plays => format!("plays: {}", track.play_count()),
            TrackField::Stars => track.stars(),
            TrackField::Info => track.info(),
        })
        .collect();

    if parts.is_empty() {
        track.info()
    } else {
        parts.join(sep)
    }
}
