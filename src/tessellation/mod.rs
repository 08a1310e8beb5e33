mod tessellate_line;

pub use tessellate_line::{TessellateLine, DEFAULT_LINE_LENGTH};

use crate::error::Result;
use crate::math::Point3;

/// A polyline approximation of a shape, ready to hand to a renderer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

/// Shapes that can be turned into a polyline for drawing.
pub trait Drawable {
    /// Produces the polyline with default drawing parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the shape cannot be drawn (e.g. it is degenerate).
    fn to_polyline(&self) -> Result<Polyline>;
}
