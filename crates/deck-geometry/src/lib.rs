//! Geometry core: surface primitives, Boolean cells, and the session
//! registries that assign stable PHITS numbering.

pub mod cell;
pub mod draw;
pub mod math;
pub mod session;
pub mod surface;

pub use cell::{BoolOp, Cell, CellToken, FormatError, Sign, SurfaceRef};
pub use draw::{Canvas, DrawCommand, DrawError, DrawOptions, RecordingCanvas, SceneOptions, Shape};
pub use session::{Session, CELL_NUMBER_BASE, OUTER_MATN, VOID_MATN};
pub use surface::{Surface, SurfaceInit, SurfaceKind};
