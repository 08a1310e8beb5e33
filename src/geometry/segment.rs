use crate::math::{lerp_clamped, transform_point, Matrix4, Point3};

use super::Endpoint;

/// A finite segment from `a` to `b`, closed at both ends.
///
/// Rates along a segment live in `[0, 1]`. This is also the result type of
/// shortest-segment queries, running from the first line to the second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    a: Point3,
    b: Point3,
}

impl LineSegment {
    /// Creates a segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub fn a(&self) -> &Point3 {
        &self.a
    }

    #[must_use]
    pub fn b(&self) -> &Point3 {
        &self.b
    }

    /// Distance between the two endpoints.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point3 {
        nalgebra::center(&self.a, &self.b)
    }

    /// Evaluates the segment at rate `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        lerp_clamped(&self.a, &self.b, t)
    }

    /// The same segment running from `b` to `a`.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.b, self.a)
    }

    #[must_use]
    pub fn handles(&self) -> [Point3; 2] {
        [self.a, self.b]
    }

    /// Returns a copy of the segment with one endpoint replaced.
    #[must_use]
    pub fn with_handle(&self, endpoint: Endpoint, point: Point3) -> Self {
        match endpoint {
            Endpoint::A => Self::new(point, self.b),
            Endpoint::B => Self::new(self.a, point),
        }
    }

    /// Applies an affine transformation to both endpoints.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self::new(
            transform_point(matrix, &self.a),
            transform_point(matrix, &self.b),
        )
    }
}
