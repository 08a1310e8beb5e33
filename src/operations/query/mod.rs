mod closest_point;
mod shortest_segment;

pub use closest_point::{ClosestPointOnLine, ClosestPointResult};
pub use shortest_segment::{ShortestSegment, ShortestSegmentResult};
