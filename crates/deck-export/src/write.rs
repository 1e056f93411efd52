//! Atomic deck file writing.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use deck_geometry::Session;

use crate::deck::{export_deck, ExportOptions};
use crate::errors::ExportError;

/// Render the deck and write it to `{stem}_PhitsDeck.inp` under `dir`.
///
/// The text lands in a temporary file first and is renamed into place, so
/// a crash mid-write never leaves a truncated deck behind. Returns the
/// final path.
pub fn write_deck(
    session: &Session,
    options: &ExportOptions,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf, ExportError> {
    let text = export_deck(session, options)?;

    let path = dir.join(format!("{stem}_PhitsDeck.inp"));
    let tmp = dir.join(format!(".{stem}_PhitsDeck.inp.tmp"));

    fs::write(&tmp, &text)?;
    fs::rename(&tmp, &path)?;

    info!(path = %path.display(), bytes = text.len(), "wrote deck file");
    Ok(path)
}
