use crate::math::{Point3, Vector3};

/// A ray defined by an origin point and a direction vector.
///
/// The parametric form is: `P(t) = origin + t * direction`.
///
/// The direction is stored as supplied and is never normalized: parametric
/// distances produced by intersection queries are in units of its magnitude.
/// Normalize the direction first when a metric distance is wanted.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// The origin point of the ray.
    pub origin: Point3,
    /// The direction vector of the ray (not required to be unit length).
    pub direction: Vector3,
}

impl Ray {
    /// Creates a new ray from an origin and direction.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Evaluates the point `origin + t * direction`.
    #[must_use]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }
}
