pub mod mesh;
pub mod ray;
pub mod triangle;

pub use mesh::MeshData;
pub use ray::Ray;
pub use triangle::{Triangle, TriangleKind};
