use crate::math::{Isometry3, Point3, Vector3};

/// Shape classification of a triangle.
///
/// Informational only; intersection and snapping never consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleKind {
    /// Zero area: collinear or coincident corners.
    Degenerate,
    /// All three edges have equal length.
    Equilateral,
    /// Exactly two edges have equal length.
    Isosceles,
    /// All three edge lengths are distinct.
    Scalene,
}

/// A triangle in 3D space, defined by three ordered corners.
///
/// Corner order fixes the winding and therefore the front face: the face
/// normal is `(b - a) × (c - a)`. Derived quantities ([`centroid`],
/// [`kind`]) are computed on read, so they can never go stale; transforms
/// return new triangles instead of mutating in place.
///
/// [`centroid`]: Triangle::centroid
/// [`kind`]: Triangle::kind
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First corner.
    pub a: Point3,
    /// Second corner.
    pub b: Point3,
    /// Third corner.
    pub c: Point3,
}

impl Triangle {
    /// Creates a triangle from three corners.
    ///
    /// Degenerate corner sets are accepted; they classify as
    /// [`TriangleKind::Degenerate`] and are naturally rejected by the
    /// intersection test.
    #[must_use]
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Returns the centroid `(a + b + c) / 3`.
    #[must_use]
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Classifies the triangle by its squared edge lengths.
    ///
    /// Edge lengths are compared with exact `==`, not a tolerance: two edges
    /// count as equal only when their squared lengths are bit-identical.
    /// A nominally equilateral triangle whose coordinates round unevenly
    /// therefore classifies as isosceles or scalene.
    #[must_use]
    pub fn kind(&self) -> TriangleKind {
        let ab = (self.b - self.a).norm_squared();
        let bc = (self.b - self.c).norm_squared();
        let ca = (self.c - self.a).norm_squared();

        if (self.b - self.a).cross(&(self.c - self.a)).norm_squared() == 0.0 {
            return TriangleKind::Degenerate;
        }

        if ab == bc && bc == ca {
            TriangleKind::Equilateral
        } else if ab == bc || bc == ca || ab == ca {
            TriangleKind::Isosceles
        } else {
            TriangleKind::Scalene
        }
    }

    /// Returns this triangle translated by a displacement vector.
    #[must_use]
    pub fn translated(&self, displacement: &Vector3) -> Self {
        Self {
            a: self.a + displacement,
            b: self.b + displacement,
            c: self.c + displacement,
        }
    }

    /// Returns this triangle mapped through a rigid transform.
    #[must_use]
    pub fn transformed(&self, transform: &Isometry3) -> Self {
        Self {
            a: transform * self.a,
            b: transform * self.b,
            c: transform * self.c,
        }
    }
}
