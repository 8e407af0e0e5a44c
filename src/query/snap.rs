use crate::geometry::Triangle;
use crate::math::intersect_3d::RayHit;
use crate::math::{Point3, Vector3};

/// Returns the triangle feature nearest to a reference point.
///
/// Candidates are exactly the three corners and the centroid, evaluated in
/// the fixed order `{a, b, c, centroid}`; the first candidate at minimum
/// squared distance wins ties. Applying the selection to its own output
/// returns the same point.
#[must_use]
pub fn nearest_feature(triangle: &Triangle, reference: &Point3) -> Point3 {
    let candidates = [
        triangle.a,
        triangle.b,
        triangle.c,
        triangle.centroid(),
    ];

    let mut best = candidates[0];
    let mut best_dist_sq = (candidates[0] - reference).norm_squared();

    for candidate in &candidates[1..] {
        let dist_sq = (candidate - reference).norm_squared();
        if dist_sq < best_dist_sq {
            best_dist_sq = dist_sq;
            best = *candidate;
        }
    }

    best
}

/// A resolved placement on a mesh surface.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    /// Where to place.
    pub point: Point3,
    /// Orientation normal: always the struck face's normal, never
    /// recomputed from the snapped point.
    pub normal: Vector3,
}

/// Resolves a surface hit into a placement point and orientation.
///
/// With `snap` set, the hit point moves to the nearest triangle feature;
/// otherwise it is used as-is. The snapping toggle is an explicit per-call
/// value owned by the caller's editing session, never ambient state.
#[must_use]
pub fn resolve_placement(triangle: &Triangle, hit: &RayHit, snap: bool) -> Placement {
    let point = if snap {
        nearest_feature(triangle, &hit.point)
    } else {
        hit.point
    };

    Placement {
        point,
        normal: hit.normal,
    }
}
