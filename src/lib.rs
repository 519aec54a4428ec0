pub mod cs;

pub use cs::dynamic;
pub use cs::error::{Error, Result};
