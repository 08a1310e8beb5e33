use crate::error::{GeometryError, Result};
use crate::math::closest_3d;
use crate::math::{lerp_unclamped, transform_point, Matrix4, Point3, Vector3, EPSILON, TOLERANCE};

use super::{ClosingFlags, Endpoint, LineSegment};

/// A ray starting at `origin` and extending along `direction`.
///
/// The direction is not normalized; its length only matters as the spacing
/// of rates along a [`Line`] built from the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub direction: Vector3,
}

impl Ray {
    /// Creates a new ray.
    #[must_use]
    pub fn new(origin: Point3, direction: Vector3) -> Self {
        Self { origin, direction }
    }
}

/// An infinite line through two points.
///
/// The parametric form is `P(t) = a + t * (b - a)`, so `t = 0` at `a` and
/// `t = 1` at `b`. A line whose points coincide is degenerate; it can be
/// built, but every shortest-segment query involving it fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: Point3,
    b: Point3,
}

impl Line {
    /// Creates a line through `a` and `b`.
    #[must_use]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }

    /// Creates the infinite line carrying `segment`.
    #[must_use]
    pub fn from_segment(segment: &LineSegment) -> Self {
        Self::new(*segment.a(), *segment.b())
    }

    /// Creates the line carrying `ray`, with `b = origin + direction`.
    #[must_use]
    pub fn from_ray(ray: &Ray) -> Self {
        Self::new(ray.origin, ray.origin + ray.direction)
    }

    #[must_use]
    pub fn a(&self) -> &Point3 {
        &self.a
    }

    #[must_use]
    pub fn b(&self) -> &Point3 {
        &self.b
    }

    /// Returns `b - a`.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        self.b - self.a
    }

    /// Returns the unit direction of the line.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the line is degenerate.
    pub fn direction_normal(&self) -> Result<Vector3> {
        let dir = self.direction();
        let len = dir.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(dir / len)
    }

    /// Returns a line keeping `a` with `b` moved to `a + direction`.
    #[must_use]
    pub fn with_direction(&self, direction: Vector3) -> Self {
        Self::new(self.a, self.a + direction)
    }

    /// Returns `true` if `a` and `b` are too close to define a direction.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.direction().norm_squared() < EPSILON
    }

    /// Evaluates the line at rate `t` without clamping.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        lerp_unclamped(&self.a, &self.b, t)
    }

    /// The two editable points of the line, `[a, b]`.
    #[must_use]
    pub fn handles(&self) -> [Point3; 2] {
        [self.a, self.b]
    }

    /// Returns a copy of the line with one endpoint replaced.
    #[must_use]
    pub fn with_handle(&self, endpoint: Endpoint, point: Point3) -> Self {
        match endpoint {
            Endpoint::A => Self::new(point, self.b),
            Endpoint::B => Self::new(self.a, point),
        }
    }

    /// Applies an affine transformation to both points.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        Self::new(
            transform_point(matrix, &self.a),
            transform_point(matrix, &self.b),
        )
    }

    /// Rate of the point on this line closest to `point`.
    ///
    /// Non-finite for a degenerate line.
    #[must_use]
    pub fn closest_rate(&self, point: &Point3) -> f64 {
        closest_3d::closest_rate(&self.a, &self.b, point)
    }

    /// Point on this line closest to `point`, possibly outside `[a, b]`.
    #[must_use]
    pub fn closest_point(&self, point: &Point3) -> Point3 {
        closest_3d::closest_point(&self.a, &self.b, point)
    }

    /// Shortest segment between this line and `other`, both infinite.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`](GeometryError::NoSolution) if either line is
    /// degenerate or the lines are parallel.
    pub fn shortest_segment_to_line(&self, other: &Line) -> Result<LineSegment> {
        closest_3d::shortest_segment(self, other, ClosingFlags::OPEN)
    }

    /// Shortest segment between this infinite line and a finite segment.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`](GeometryError::NoSolution) if either input is
    /// degenerate or they are parallel.
    pub fn shortest_segment_to_segment(&self, segment: &LineSegment) -> Result<LineSegment> {
        closest_3d::shortest_segment(self, &Line::from_segment(segment), ClosingFlags::SEGMENT)
    }
}

impl From<LineSegment> for Line {
    fn from(segment: LineSegment) -> Self {
        Self::from_segment(&segment)
    }
}

impl From<Ray> for Line {
    fn from(ray: Ray) -> Self {
        Self::from_ray(&ray)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn from_ray_synthesizes_b() {
        let ray = Ray::new(p(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, 2.0));
        let line = Line::from(ray);
        assert_eq!(*line.a(), p(1.0, 2.0, 3.0));
        assert_eq!(*line.b(), p(1.0, 2.0, 5.0));
    }

    #[test]
    fn from_segment_keeps_points() {
        let seg = LineSegment::new(p(0.0, 1.0, 0.0), p(4.0, 1.0, 0.0));
        let line = Line::from_segment(&seg);
        assert_eq!(line.handles(), seg.handles());
    }

    #[test]
    fn direction_normal_is_unit() {
        let line = Line::new(p(1.0, 1.0, 1.0), p(1.0, 4.0, 5.0));
        let n = line.direction_normal().unwrap();
        assert_relative_eq!(n, Vector3::new(0.0, 0.6, 0.8));
    }

    #[test]
    fn direction_normal_of_degenerate_line_fails() {
        let line = Line::new(p(1.0, 1.0, 1.0), p(1.0, 1.0, 1.0));
        assert!(line.is_degenerate());
        assert!(line.direction_normal().is_err());
    }

    #[test]
    fn with_direction_moves_b() {
        let line = Line::new(p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        let turned = line.with_direction(Vector3::new(0.0, 3.0, 0.0));
        assert_eq!(*turned.a(), p(1.0, 0.0, 0.0));
        assert_eq!(*turned.b(), p(1.0, 3.0, 0.0));
    }

    #[test]
    fn with_handle_replaces_one_point() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let moved = line.with_handle(Endpoint::A, p(-1.0, 0.0, 0.0));
        assert_eq!(moved.handles(), [p(-1.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]);
        let moved = line.with_handle(Endpoint::B, p(0.0, 2.0, 0.0));
        assert_eq!(moved.handles(), [p(0.0, 0.0, 0.0), p(0.0, 2.0, 0.0)]);
    }

    #[test]
    fn point_at_extrapolates() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 2.0));
        assert_relative_eq!(line.point_at(-1.0), p(0.0, 0.0, -2.0));
    }

    #[test]
    fn closest_point_may_lie_beyond_b() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let q = line.closest_point(&p(3.0, 2.0, -1.0));
        assert_relative_eq!(q, p(3.0, 0.0, 0.0));
        assert_relative_eq!(line.closest_rate(&p(3.0, 2.0, -1.0)), 3.0);
    }

    #[test]
    fn transformed_moves_both_points() {
        let line = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let m = Matrix4::new_translation(&Vector3::new(0.0, 0.0, 5.0));
        let moved = line.transformed(&m);
        assert_relative_eq!(*moved.a(), p(0.0, 0.0, 5.0));
        assert_relative_eq!(*moved.b(), p(1.0, 0.0, 5.0));
    }

    #[test]
    fn shortest_segment_to_segment_clamps_segment_end() {
        // The infinite line through the segment would meet the X axis at y = 0,
        // below the segment's first point.
        let line = Line::new(p(-5.0, 0.0, 0.0), p(5.0, 0.0, 0.0));
        let seg = LineSegment::new(p(2.0, 1.0, 1.0), p(2.0, 3.0, 1.0));
        let shortest = line.shortest_segment_to_segment(&seg).unwrap();
        assert_relative_eq!(*shortest.a(), p(2.0, 0.0, 0.0));
        assert_relative_eq!(*shortest.b(), p(2.0, 1.0, 1.0));
    }
}
