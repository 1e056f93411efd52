use deck_geometry::FormatError;
use deck_materials::LookupError;

/// Errors during deck export. Each formatting failure names the entity by
/// number and name so the offending construction call can be located.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("material {matn} '{name}' failed to format: {source}")]
    Material {
        matn: i32,
        name: String,
        source: LookupError,
    },

    #[error("cell {cn} '{name}' failed to format: {source}")]
    Cell {
        cn: u32,
        name: String,
        source: FormatError,
    },

    #[error("cell {cn} references material {matn}, which is not registered")]
    UnknownMaterial { cn: u32, matn: i32 },

    #[error("failed to write deck file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors during project file loading.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("failed to parse file: {0}")]
    ParseError(String),

    #[error("unknown file format: {0}")]
    UnknownFormat(String),

    #[error("file version {file_version} is newer than supported version {supported_version}")]
    FutureVersion {
        file_version: u32,
        supported_version: u32,
    },
}
