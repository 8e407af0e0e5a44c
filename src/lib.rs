pub mod error;
pub mod geometry;
pub mod math;
pub mod query;

pub use error::{MeshsnapError, Result};
