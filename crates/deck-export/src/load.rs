use serde::Deserialize;

use deck_geometry::Session;

use crate::errors::LoadError;
use crate::metadata::ProjectMetadata;
use crate::save::FORMAT_VERSION;

/// The top-level file structure for deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckFileRaw {
    pub format: String,
    pub version: u32,
    pub project: ProjectMetadata,
    pub session: Session,
}

/// Deserialize a session from a JSON string.
///
/// Validates the format identifier and version. Returns the session and
/// project metadata.
pub fn load_session(json: &str) -> Result<(Session, ProjectMetadata), LoadError> {
    let raw: DeckFileRaw =
        serde_json::from_str(json).map_err(|e| LoadError::ParseError(e.to_string()))?;

    if raw.format != "phits-deck" {
        return Err(LoadError::UnknownFormat(raw.format));
    }

    if raw.version > FORMAT_VERSION {
        return Err(LoadError::FutureVersion {
            file_version: raw.version,
            supported_version: FORMAT_VERSION,
        });
    }

    Ok((raw.session, raw.project))
}
