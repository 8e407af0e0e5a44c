use crate::error::{MeshError, Result};
use crate::math::{Isometry3, Point3};

use super::Triangle;

/// A flat triangle-soup extraction of a renderable mesh.
///
/// Built once from a host-supplied vertex/index buffer and immutable
/// afterwards: `triangles[i]` is always consistent with `vertices` and
/// `indices[i]`. When the source mesh changes, the caller rebuilds.
///
/// Supplying a transform at construction bakes every vertex into world space
/// before the triangles are derived; without one, geometry stays in the
/// source's local space. There is no later re-basing.
#[derive(Debug, Clone)]
pub struct MeshData {
    vertices: Vec<Point3>,
    indices: Vec<[u32; 3]>,
    triangles: Vec<Triangle>,
}

impl MeshData {
    /// Extracts mesh data from flat vertex and index buffers.
    ///
    /// `indices` names triangles as consecutive triples into `vertices`.
    /// The host resource backing the slices is assumed stable for the
    /// duration of the call.
    ///
    /// # Errors
    ///
    /// Returns an error if either buffer is empty, the index count is not a
    /// multiple of 3, or an index is out of bounds. Invalid input is never
    /// papered over with defaults.
    pub fn new(
        vertices: &[Point3],
        indices: &[u32],
        transform: Option<&Isometry3>,
    ) -> Result<Self> {
        if vertices.is_empty() || indices.is_empty() {
            return Err(MeshError::EmptyMesh.into());
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotTriangles(indices.len()).into());
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(MeshError::IndexOutOfBounds {
                index,
                vertex_count: vertices.len(),
            }
            .into());
        }

        let vertices: Vec<Point3> = match transform {
            Some(iso) => vertices.iter().map(|v| iso * v).collect(),
            None => vertices.to_vec(),
        };

        let indices: Vec<[u32; 3]> = indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();

        let triangles = indices
            .iter()
            .map(|&[i, j, k]| {
                Triangle::new(
                    vertices[i as usize],
                    vertices[j as usize],
                    vertices[k as usize],
                )
            })
            .collect();

        Ok(Self {
            vertices,
            indices,
            triangles,
        })
    }

    /// Returns the extracted vertex positions.
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the triangle index triples.
    #[must_use]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Returns the derived triangles, one per index triple.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeshsnapError;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn quad() -> (Vec<Point3>, Vec<u32>) {
        let vertices = vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(1.0, 1.0, 0.0),
            p(0.0, 1.0, 0.0),
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        (vertices, indices)
    }

    #[test]
    fn triangles_follow_index_triples() {
        let (vertices, indices) = quad();
        let mesh = MeshData::new(&vertices, &indices, None).unwrap();

        assert_eq!(mesh.triangles().len(), 2);
        let tri = &mesh.triangles()[1];
        assert!((tri.a - p(0.0, 0.0, 0.0)).norm() < TOLERANCE);
        assert!((tri.b - p(1.0, 1.0, 0.0)).norm() < TOLERANCE);
        assert!((tri.c - p(0.0, 1.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn transform_is_baked_into_triangles() {
        let (vertices, indices) = quad();
        let iso = Isometry3::translation(0.0, 0.0, 5.0);
        let mesh = MeshData::new(&vertices, &indices, Some(&iso)).unwrap();

        for tri in mesh.triangles() {
            assert!((tri.a.z - 5.0).abs() < TOLERANCE);
            assert!((tri.b.z - 5.0).abs() < TOLERANCE);
            assert!((tri.c.z - 5.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn identity_transform_matches_untransformed() {
        let (vertices, indices) = quad();
        let plain = MeshData::new(&vertices, &indices, None).unwrap();
        let identity = Isometry3::identity();
        let mapped = MeshData::new(&vertices, &indices, Some(&identity)).unwrap();

        for (a, b) in plain.triangles().iter().zip(mapped.triangles()) {
            assert!((a.a - b.a).norm() < TOLERANCE);
            assert!((a.b - b.b).norm() < TOLERANCE);
            assert!((a.c - b.c).norm() < TOLERANCE);
        }
    }

    // ── invalid input ──

    #[test]
    fn empty_source_is_rejected() {
        let err = MeshData::new(&[], &[], None).unwrap_err();
        assert!(matches!(
            err,
            MeshsnapError::Mesh(MeshError::EmptyMesh)
        ));
    }

    #[test]
    fn index_count_must_be_triples() {
        let (vertices, _) = quad();
        let err = MeshData::new(&vertices, &[0, 1], None).unwrap_err();
        assert!(matches!(
            err,
            MeshsnapError::Mesh(MeshError::IndexCountNotTriangles(2))
        ));
    }

    #[test]
    fn out_of_bounds_index_is_rejected() {
        let (vertices, _) = quad();
        let err = MeshData::new(&vertices, &[0, 1, 9], None).unwrap_err();
        assert!(matches!(
            err,
            MeshsnapError::Mesh(MeshError::IndexOutOfBounds { index: 9, .. })
        ));
    }
}
