use crate::geometry::{MeshData, Ray, Triangle};
use crate::math::intersect_3d::{ray_triangle_intersect, RayHit};

/// Result of a triangle location query.
#[derive(Debug, Clone, Copy)]
pub struct LocatedTriangle {
    /// Index of the triangle within the mesh's triangle list.
    pub index: usize,
    /// The located triangle.
    pub triangle: Triangle,
    /// The intersection computed during the scan. `None` on the fast path,
    /// where the caller's broad-phase hit already stands.
    pub hit: Option<RayHit>,
}

/// Finds the exact triangle of a mesh struck by a ray.
///
/// A broad-phase raycast has already narrowed the candidate set to one mesh.
/// When it also reported a triangle index, that index resolves the query
/// directly; otherwise every triangle is scanned.
pub struct LocateTriangle {
    ray: Ray,
    broad_phase_index: Option<usize>,
}

impl LocateTriangle {
    /// Creates a new `LocateTriangle` query.
    ///
    /// `broad_phase_index` is the triangle index reported by the host's
    /// broad-phase raycast, if it supplied one.
    #[must_use]
    pub fn new(ray: Ray, broad_phase_index: Option<usize>) -> Self {
        Self {
            ray,
            broad_phase_index,
        }
    }

    /// Executes the query, returning the struck triangle or `None` when the
    /// ray misses every triangle. A miss is a normal outcome, not an error.
    ///
    /// With a valid broad-phase index the triangle is returned directly and
    /// no intersection is computed. Without one (or with an out-of-range
    /// one), every triangle is tested bidirectionally and the winner is the
    /// hit triangle whose centroid lies closest to the ray origin — an
    /// approximation of "closest hit" that ignores where inside each
    /// triangle the ray lands. Ties keep the first triangle in index order.
    #[must_use]
    pub fn execute(&self, mesh: &MeshData) -> Option<LocatedTriangle> {
        let triangles = mesh.triangles();

        if let Some(index) = self.broad_phase_index {
            if let Some(&triangle) = triangles.get(index) {
                return Some(LocatedTriangle {
                    index,
                    triangle,
                    hit: None,
                });
            }
            // Invalid index from the broad phase: fall through to the scan.
        }

        let mut best: Option<LocatedTriangle> = None;
        let mut best_dist_sq = f64::INFINITY;

        for (index, triangle) in triangles.iter().enumerate() {
            let Some(hit) = ray_triangle_intersect(
                &self.ray,
                &triangle.a,
                &triangle.b,
                &triangle.c,
                true,
            ) else {
                continue;
            };

            let dist_sq = (triangle.centroid() - self.ray.origin).norm_squared();
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = Some(LocatedTriangle {
                    index,
                    triangle: *triangle,
                    hit: Some(hit),
                });
            }
        }

        best
    }
}
