use thiserror::Error;

/// Top-level error type for the meshsnap crate.
#[derive(Debug, Error)]
pub enum MeshsnapError {
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors related to mesh extraction.
///
/// These all signal invalid caller input. A ray that misses every triangle
/// is not an error; queries report that as an empty result instead, and
/// degenerate geometry (zero-area triangles, parallel rays) folds into the
/// same miss outcome.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("mesh source has no triangle geometry")]
    EmptyMesh,

    #[error("index count {0} is not a multiple of 3")]
    IndexCountNotTriangles(usize),

    #[error("index {index} is out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}

/// Convenience type alias for results using [`MeshsnapError`].
pub type Result<T> = std::result::Result<T, MeshsnapError>;
