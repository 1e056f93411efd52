pub mod catalog;
pub mod material;
pub mod ptable;

pub use catalog::{CatalogEntry, MaterialCatalog, NotFoundError};
pub use material::{ElementRatio, Material, MaterialSpec};
pub use ptable::{element_symbol, LookupError};
