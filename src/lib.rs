//! Closest-approach queries for lines, rays and segments in 3D.
//!
//! The core is [`math::closest_3d`]: the rate of the closest point on a line
//! to a point, and the shortest segment between two lines whose ends may
//! each be open or closed. [`geometry`] holds the value types and
//! [`operations::query`] wraps the solver in query objects.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{LineaError, Result};
pub use geometry::{ClosingFlags, Endpoint, Line, LineSegment, Ray};
pub use math::closest_3d::{
    closest_point, closest_rate, shortest_segment, shortest_segment_rates,
    shortest_segment_rates_closed,
};
