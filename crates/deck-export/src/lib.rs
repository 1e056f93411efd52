//! Deck serialization: render a session into PHITS input-deck text, write
//! it to disk, and save/load sessions as versioned JSON project files.

pub mod deck;
pub mod errors;
pub mod load;
pub mod metadata;
pub mod save;
pub mod write;

pub use deck::{export_deck, ExportOptions};
pub use errors::{ExportError, LoadError};
pub use load::load_session;
pub use metadata::ProjectMetadata;
pub use save::{save_session, FORMAT_VERSION};
pub use write::write_deck;
