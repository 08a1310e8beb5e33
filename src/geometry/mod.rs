mod closing;
mod line;
mod segment;

pub use closing::{ClosingFlags, Endpoint};
pub use line::{Line, Ray};
pub use segment::LineSegment;
