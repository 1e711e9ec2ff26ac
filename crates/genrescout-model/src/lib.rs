pub mod error;
pub mod query;
pub mod source;

pub use error::*;
pub use query::*;
pub use source::*;
