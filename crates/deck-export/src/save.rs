use serde::Serialize;

use deck_geometry::Session;

use crate::metadata::ProjectMetadata;

/// Current project file format version.
pub const FORMAT_VERSION: u32 = 1;

/// The top-level project file structure.
#[derive(Debug, Clone, Serialize)]
pub struct DeckFile {
    /// Format identifier.
    pub format: String,
    /// Format version number.
    pub version: u32,
    /// Project metadata.
    pub project: ProjectMetadata,
    /// The modeling session: registries and counters.
    pub session: Session,
}

/// Serialize a session to a pretty-printed JSON string.
pub fn save_session(session: &Session, metadata: &ProjectMetadata) -> String {
    let file = DeckFile {
        format: "phits-deck".to_string(),
        version: FORMAT_VERSION,
        project: metadata.clone(),
        session: session.clone(),
    };
    serde_json::to_string_pretty(&file).expect("Session serialization should never fail")
}
