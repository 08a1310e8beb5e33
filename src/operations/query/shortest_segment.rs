use crate::error::Result;
use crate::geometry::{ClosingFlags, Line, LineSegment};
use crate::math::closest_3d::shortest_segment_rates_closed;
use crate::math::Point3;

/// Result of a shortest segment query.
#[derive(Debug, Clone, Copy)]
pub struct ShortestSegmentResult {
    /// Rate of `start` along the first line.
    pub rate1: f64,
    /// Rate of `end` along the second line.
    pub rate2: f64,
    /// Endpoint on the first line.
    pub start: Point3,
    /// Endpoint on the second line.
    pub end: Point3,
    /// Length of the connecting segment.
    pub distance: f64,
}

impl ShortestSegmentResult {
    /// The connecting segment from `start` to `end`.
    #[must_use]
    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.start, self.end)
    }
}

/// Finds the shortest segment connecting two lines.
///
/// Each end of both lines is open unless closed with
/// [`with_closing`](Self::with_closing). See
/// [`shortest_segment_rates_closed`] for how closed ends are handled.
pub struct ShortestSegment {
    l1: Line,
    l2: Line,
    closing: ClosingFlags,
}

impl ShortestSegment {
    /// Creates a new `ShortestSegment` query between two infinite lines.
    #[must_use]
    pub fn new(l1: Line, l2: Line) -> Self {
        Self {
            l1,
            l2,
            closing: ClosingFlags::OPEN,
        }
    }

    /// Creates a query from an infinite line to a finite segment.
    #[must_use]
    pub fn line_to_segment(line: Line, segment: &LineSegment) -> Self {
        Self::new(line, Line::from_segment(segment)).with_closing(ClosingFlags::SEGMENT)
    }

    /// Sets which line ends are closed.
    #[must_use]
    pub fn with_closing(mut self, closing: ClosingFlags) -> Self {
        self.closing = closing;
        self
    }

    /// Executes the query.
    ///
    /// Endpoints are evaluated at the final rates without clamping, so for
    /// open ends they are the exact closest points on the infinite lines.
    ///
    /// # Errors
    ///
    /// Returns [`NoSolution`](crate::error::GeometryError::NoSolution) if
    /// either line is degenerate or the lines are parallel.
    pub fn execute(&self) -> Result<ShortestSegmentResult> {
        let (rate1, rate2) = shortest_segment_rates_closed(&self.l1, &self.l2, self.closing)?;
        let start = self.l1.point_at(rate1);
        let end = self.l2.point_at(rate2);

        Ok(ShortestSegmentResult {
            rate1,
            rate2,
            start,
            end,
            distance: (end - start).norm(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::NoSolutionReason;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn skew_lines_distance() {
        let l1 = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let l2 = Line::new(p(0.0, 1.0, 0.0), p(0.0, 1.0, 1.0));

        let result = ShortestSegment::new(l1, l2).execute().unwrap();
        assert_relative_eq!(result.distance, 1.0);
        assert_relative_eq!(result.start, p(0.0, 0.0, 0.0));
        assert_relative_eq!(result.end, p(0.0, 1.0, 0.0));
    }

    #[test]
    fn open_lines_report_unclamped_points() {
        // Closest approach lies at x = 3, beyond l1.b.
        let l1 = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let l2 = Line::new(p(3.0, 2.0, -1.0), p(3.0, 2.0, 1.0));

        let result = ShortestSegment::new(l1, l2).execute().unwrap();
        assert_relative_eq!(result.rate1, 3.0);
        assert_relative_eq!(result.rate2, 0.5);
        assert_relative_eq!(result.start, p(3.0, 0.0, 0.0));
        assert_relative_eq!(result.end, p(3.0, 2.0, 0.0));
        assert_relative_eq!(result.distance, 2.0);
    }

    #[test]
    fn closed_end_pins_start() {
        let l1 = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let l2 = Line::new(p(3.0, 2.0, -1.0), p(3.0, 2.0, 1.0));

        let result = ShortestSegment::new(l1, l2)
            .with_closing(ClosingFlags::new(true, true, false, false))
            .execute()
            .unwrap();
        assert_relative_eq!(result.rate1, 1.0);
        assert_relative_eq!(result.start, p(1.0, 0.0, 0.0));
        assert_relative_eq!(result.end, p(3.0, 2.0, 0.0));
        assert_relative_eq!(result.distance, 8.0_f64.sqrt());
    }

    #[test]
    fn line_to_segment_clamps_segment() {
        let line = Line::new(p(-5.0, 0.0, 0.0), p(5.0, 0.0, 0.0));
        let segment = LineSegment::new(p(2.0, 1.0, 1.0), p(2.0, 3.0, 1.0));

        let result = ShortestSegment::line_to_segment(line, &segment)
            .execute()
            .unwrap();
        assert_relative_eq!(result.rate2, 0.0);
        assert_relative_eq!(result.segment().length(), 2.0_f64.sqrt());
    }

    #[test]
    fn parallel_lines_fail() {
        let l1 = Line::new(p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0));
        let l2 = Line::new(p(0.0, 1.0, 0.0), p(2.0, 1.0, 0.0));

        let err = ShortestSegment::new(l1, l2).execute().unwrap_err();
        assert_eq!(err.no_solution(), Some(NoSolutionReason::Parallel));
    }

    #[test]
    fn swapped_query_has_same_length() {
        let l1 = Line::new(p(0.3, -1.7, 2.2), p(1.1, 0.4, -0.9));
        let l2 = Line::new(p(-2.5, 0.8, 1.3), p(0.6, 2.9, 3.7));
        let closing = ClosingFlags::new(true, false, false, false);

        let forward = ShortestSegment::new(l1, l2)
            .with_closing(closing)
            .execute()
            .unwrap();
        let backward = ShortestSegment::new(l2, l1)
            .with_closing(closing.swapped())
            .execute()
            .unwrap();

        assert_relative_eq!(forward.distance, backward.distance, epsilon = 1e-9);
        assert_relative_eq!(forward.start, backward.end, epsilon = 1e-9);
        assert_relative_eq!(forward.end, backward.start, epsilon = 1e-9);
    }
}
