use tracing::{info, warn};

use crate::config::LibrarySettings;
use crate::library::Library;

/// Build the library the session starts with: the built-in tracks (if
/// enabled) plus the configured CSV when `import_on_startup` is set.
///
/// A failed import is logged and the library is used as it stood before it.
pub fn build_library(settings: &LibrarySettings) -> Library {
    let mut library = if settings.seed {
        Library::with_seed()
    } else {
        Library::new()
    };
    info!(tracks = library.len(), seeded = settings.seed, "library ready");

    if settings.import_on_startup {
        if let Some(path) = settings.import_path.as_deref() {
            if let Err(e) = library.import_csv(path) {
                warn!(path = %path.display(), "startup import failed: {e}");
            }
        }
    }

    library
}
