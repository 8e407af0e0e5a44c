use crate::geometry::Ray;

use super::{Point3, Vector3};

/// A successful ray–triangle intersection.
///
/// Mirrors a conventional raycast-hit record so it can be handed back to a
/// host engine unchanged.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// The intersection point.
    pub point: Point3,
    /// Parametric distance along the ray, in units of the ray direction's
    /// magnitude. Negative for hits behind the origin (bidirectional mode).
    pub distance: f64,
    /// Unit normal of the struck face, oriented by the triangle's winding.
    pub normal: Vector3,
    /// Barycentric weights of the corners `(a, b, c)` at the hit point.
    /// They sum to 1 by construction.
    pub barycentric: [f64; 3],
}

/// Intersects a ray with the triangle `(a, b, c)`.
///
/// The test is single-sided with respect to facing: a ray approaching from
/// behind the winding (or parallel to the plane, or aimed at a zero-area
/// triangle) never hits, regardless of `bidirectional`. The flag only widens
/// the test along the ray itself: when set, intersections behind the ray
/// origin (negative distance) are accepted.
#[must_use]
pub fn ray_triangle_intersect(
    ray: &Ray,
    a: &Point3,
    b: &Point3,
    c: &Point3,
    bidirectional: bool,
) -> Option<RayHit> {
    let ba = b - a;
    let ca = c - a;
    let normal = ba.cross(&ca);

    // Back-facing, parallel, and zero-area triangles all reject here.
    let denom = (-ray.direction).dot(&normal);
    if denom <= 0.0 {
        return None;
    }

    let origin_to_a = ray.origin - a;
    let t_num = origin_to_a.dot(&normal);
    if !bidirectional && t_num < 0.0 {
        return None;
    }

    let cross_term = (-ray.direction).cross(&origin_to_a);

    let u_num = ca.dot(&cross_term);
    if u_num < 0.0 || u_num > denom {
        return None;
    }
    let v_num = -ba.dot(&cross_term);
    if v_num < 0.0 || u_num + v_num > denom {
        return None;
    }

    let inv_denom = 1.0 / denom;
    let distance = t_num * inv_denom;
    let u = u_num * inv_denom;
    let v = v_num * inv_denom;
    let w = 1.0 - u - v;

    Some(RayHit {
        point: ray.origin + ray.direction * distance,
        distance,
        normal: normal.normalize(),
        barycentric: [w, u, v],
    })
}
