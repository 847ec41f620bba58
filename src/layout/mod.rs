//! Layout engine: pure geometry and membership logic, no egui context required

pub mod bento;
pub mod column;
pub mod grid;
pub mod overlap;
pub mod placement;
pub mod session;

pub use bento::Bento;
pub use column::{column_items, RowHandle, ROW_GAP};
pub use grid::{GridGeometry, ResizeSession};
pub use overlap::resolve_lanes;
