pub mod batch;
pub mod table;

pub use batch::{resolve_batch, BatchResults};
pub use table::ResultTable;
