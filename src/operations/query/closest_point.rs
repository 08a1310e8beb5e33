use crate::error::{LineRole, NoSolutionReason, Result};
use crate::geometry::Line;
use crate::math::closest_3d::closest_rate;
use crate::math::Point3;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the line.
    pub point: Point3,
    /// The rate of the closest point along the line.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the closest point on an infinite line to a given point.
pub struct ClosestPointOnLine {
    line: Line,
    point: Point3,
}

impl ClosestPointOnLine {
    /// Creates a new `ClosestPointOnLine` query.
    #[must_use]
    pub fn new(line: Line, point: Point3) -> Self {
        Self { line, point }
    }

    /// Executes the query by projecting the point onto the line.
    ///
    /// The rate is not clamped, so the result may lie outside `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`](crate::error::GeometryError::NoSolution) if the
    /// line is degenerate.
    pub fn execute(&self) -> Result<ClosestPointResult> {
        if self.line.is_degenerate() {
            return Err(NoSolutionReason::DegenerateLine(LineRole::First).into());
        }

        let t = closest_rate(self.line.a(), self.line.b(), &self.point);
        let point = self.line.point_at(t);
        let distance = (self.point - point).norm();

        Ok(ClosestPointResult {
            point,
            parameter: t,
            distance,
        })
    }
}
