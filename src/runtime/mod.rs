use std::io::{self, Write};

use crate::config::DisplaySettings;
use crate::library::Library;

mod settings;
mod startup;

pub use settings::load_settings;
pub use startup::build_library;

/// Build the library from configuration and print the startup report.
///
/// Interactive front ends drive [`Library`] and
/// [`Playlist`](crate::playlist::Playlist) directly; this entry point only
/// shows what a session would start with.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings();
    let library = build_library(&settings.library);

    let mut stdout = io::stdout().lock();
    render(&settings.display, &library, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write the `info()` listing followed by one details block per track.
///
/// An empty library prints `empty_library_text` and nothing else.
pub fn render<W: Write>(
    display: &DisplaySettings,
    library: &Library,
    out: &mut W,
) -> io::Result<()> {
    let listing = library.list_all();
    if listing.is_empty() {
        return writeln!(out, "{}", display.empty_library_text);
    }

    write!(out, "{listing}")?;
    for key in library.keys() {
        if let Some(details) =
            library.details(key, &display.detail_fields, &display.detail_separator)
        {
            write!(out, "\n{details}\n")?;
        }
    }
    Ok(())
}
