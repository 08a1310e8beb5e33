//! Closest-approach queries between points and lines in 3D.
//!
//! Lines are parameterized by rate: `P(t) = a + t * (b - a)`. The solvers
//! here work on rates and never allocate; the point-valued forms are thin
//! wrappers that evaluate the rates at the end.

use tracing::{debug, trace};

use crate::error::{LineRole, NoSolutionReason, Result};
use crate::geometry::{ClosingFlags, Line, LineSegment};

use super::{lerp_clamped, lerp_unclamped, Point3, EPSILON};

/// Rate `t` of the point on the infinite line through `line_a` and `line_b`
/// that is closest to `point`.
///
/// `t` is not clamped. The line must not be degenerate: if `line_a == line_b`
/// the result is not finite.
#[must_use]
pub fn closest_rate(line_a: &Point3, line_b: &Point3, point: &Point3) -> f64 {
    let u = line_b - line_a;
    let v = point - line_a;
    v.dot(&u) / u.norm_squared()
}

/// Point on the infinite line through `line_a` and `line_b` closest to
/// `point`. May lie outside the `[line_a, line_b]` span.
#[must_use]
pub fn closest_point(line_a: &Point3, line_b: &Point3, point: &Point3) -> Point3 {
    lerp_unclamped(line_a, line_b, closest_rate(line_a, line_b, point))
}

/// Rates `(rate1, rate2)` of the endpoints of the shortest segment joining
/// the infinite lines `l1` and `l2`.
///
/// Solves the 2x2 system built from the dot products of
/// `v1 = l1.a - l2.a`, `v2 = l2.b - l2.a` and `v3 = l1.b - l1.a` in closed
/// form.
///
/// # Errors
///
/// Returns [`NoSolution`](crate::error::GeometryError::NoSolution) when `l2`
/// or `l1` is degenerate (checked in that order), or when their directions
/// are parallel so the Gram determinant vanishes.
pub fn shortest_segment_rates(l1: &Line, l2: &Line) -> Result<(f64, f64)> {
    let v1 = l1.a() - l2.a();
    let v2 = l2.b() - l2.a();
    if v2.norm_squared() < EPSILON {
        debug!(line = %LineRole::Second, "degenerate line in shortest segment query");
        return Err(NoSolutionReason::DegenerateLine(LineRole::Second).into());
    }

    let v3 = l1.b() - l1.a();
    if v3.norm_squared() < EPSILON {
        debug!(line = %LineRole::First, "degenerate line in shortest segment query");
        return Err(NoSolutionReason::DegenerateLine(LineRole::First).into());
    }

    let d12 = v1.dot(&v2);
    let d23 = v2.dot(&v3);
    let d13 = v1.dot(&v3);
    let d22 = v2.dot(&v2);
    let d33 = v3.dot(&v3);

    // Gram determinant of the two directions, |v2|^2 |v3|^2 sin^2(angle).
    let denominator = d33 * d22 - d23 * d23;
    if denominator.abs() < EPSILON {
        debug!(denominator, "parallel lines in shortest segment query");
        return Err(NoSolutionReason::Parallel.into());
    }

    let rate1 = (d12 * d23 - d13 * d22) / denominator;
    let rate2 = (d12 + d23 * rate1) / d22;
    Ok((rate1, rate2))
}

/// Like [`shortest_segment_rates`], but keeps each closed end's rate inside
/// `[0, 1]`.
///
/// After the unconstrained solve the ends are checked in the order
/// `l1` A, `l1` B, `l2` A, `l2` B. The first closed end whose rate is out of
/// bounds is pinned to its bound and the other line's rate is re-solved as
/// the closest point to that fixed end. Only that first violation is
/// corrected; the re-solved rate is not checked again. When both lines are
/// finite and each overshoots, the result can still leave one rate out of
/// range, so this is not a general segment-to-segment solver.
///
/// # Errors
///
/// Same as [`shortest_segment_rates`].
pub fn shortest_segment_rates_closed(
    l1: &Line,
    l2: &Line,
    closing: ClosingFlags,
) -> Result<(f64, f64)> {
    let (rate1, rate2) = shortest_segment_rates(l1, l2)?;
    if closing.is_open() {
        return Ok((rate1, rate2));
    }

    if closing.l1_a && rate1 < 0.0 {
        trace!(rate1, "clamping first line at its A end");
        return Ok((0.0, closest_rate(l2.a(), l2.b(), l1.a())));
    }

    if closing.l1_b && rate1 > 1.0 {
        trace!(rate1, "clamping first line at its B end");
        return Ok((1.0, closest_rate(l2.a(), l2.b(), l1.b())));
    }

    if closing.l2_a && rate2 < 0.0 {
        trace!(rate2, "clamping second line at its A end");
        return Ok((closest_rate(l1.a(), l1.b(), l2.a()), 0.0));
    }

    if closing.l2_b && rate2 > 1.0 {
        trace!(rate2, "clamping second line at its B end");
        return Ok((closest_rate(l1.a(), l1.b(), l2.b()), 1.0));
    }

    Ok((rate1, rate2))
}

/// Shortest segment from `l1` to `l2` honoring `closing`.
///
/// The endpoints are evaluated with rates clamped to `[0, 1]`, so an open
/// line whose solved rate lies outside that range contributes the nearer of
/// its two defining points. Use [`shortest_segment_rates_closed`] or
/// [`ShortestSegment`](crate::operations::query::ShortestSegment) for exact
/// points on infinite lines.
///
/// # Errors
///
/// Same as [`shortest_segment_rates`].
pub fn shortest_segment(l1: &Line, l2: &Line, closing: ClosingFlags) -> Result<LineSegment> {
    let (rate1, rate2) = shortest_segment_rates_closed(l1, l2, closing)?;
    Ok(LineSegment::new(
        lerp_clamped(l1.a(), l1.b(), rate1),
        lerp_clamped(l2.a(), l2.b(), rate2),
    ))
}
