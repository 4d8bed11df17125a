pub mod cs;
pub mod error;

pub use cs::sort;
pub use error::{Result, SelectionError};
