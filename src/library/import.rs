use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::LibraryError;

use super::model::MAX_RATING;

/// Number of columns in an import row: `key,name,artist,rating,play_count`.
const COLUMNS: usize = 5;

/// One row of bulk-import data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackRecord {
    pub key: String,
    pub name: String,
    pub artist: String,
    pub rating: u8,
    pub play_count: u32,
    /// Source line, or 0 when the record did not come from a file.
    pub line: u64,
}

impl TrackRecord {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        artist: impl Into<String>,
        rating: u8,
        play_count: u32,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            artist: artist.into(),
            rating,
            play_count,
            line: 0,
        }
    }
}

/// Open `path` and read every record from it.
pub fn read_records_from_path(path: &Path) -> Result<Vec<TrackRecord>, LibraryError> {
    let file = File::open(path)?;
    debug!(path = %path.display(), "reading track records");
    read_records(file)
}

/// Parse CSV track records. The first row is a header and is ignored.
///
/// Reading stops at the first bad row.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<TrackRecord>, LibraryError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() != COLUMNS {
            return Err(LibraryError::MalformedRecord {
                line,
                reason: format!("expected {COLUMNS} columns, found {}", row.len()),
            });
        }

        let rating: u8 = parse_int(&row[3], "rating", line)?;
        if rating > MAX_RATING {
            return Err(LibraryError::MalformedRecord {
                line,
                reason: format!("rating must be between 0 and {MAX_RATING}, got {rating}"),
            });
        }
        let play_count: u32 = parse_int(&row[4], "play_count", line)?;

        records.push(TrackRecord {
            key: row[0].to_string(),
            name: row[1].to_string(),
            artist: row[2].to_string(),
            rating,
            play_count,
            line,
        });
    }

    Ok(records)
}

fn parse_int<T: FromStr>(raw: &str, column: &str, line: u64) -> Result<T, LibraryError> {
    raw.trim()
        .parse()
        .map_err(|_| LibraryError::MalformedRecord {
            line,
            reason: format!("{column} is not a valid number: {raw:?}"),
        })
}

fn csv_error(err: csv::Error) -> LibraryError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    if err.is_io_error() {
        return LibraryError::Io(err.into());
    }
    LibraryError::MalformedRecord {
        line,
        reason: err.to_string(),
    }
}
