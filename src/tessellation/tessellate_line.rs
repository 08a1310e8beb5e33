use crate::error::{Result, TessellationError};
use crate::geometry::{Line, LineSegment};

use super::{Drawable, Polyline};

/// Drawn length of an infinite line when none is given.
pub const DEFAULT_LINE_LENGTH: f64 = 100.0;

/// Tessellates an infinite line into a two-point polyline.
///
/// The polyline is centered on the midpoint of the line's two defining
/// points and spans the drawn length along its unit direction.
#[derive(Debug)]
pub struct TessellateLine {
    line: Line,
    length: f64,
}

impl TessellateLine {
    /// Creates a new `TessellateLine` operation drawing
    /// [`DEFAULT_LINE_LENGTH`] units of the line.
    #[must_use]
    pub fn new(line: Line) -> Self {
        Self {
            line,
            length: DEFAULT_LINE_LENGTH,
        }
    }

    /// Sets the total drawn length.
    #[must_use]
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length;
        self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidParameters`](TessellationError::InvalidParameters) if
    /// the drawn length is not positive and finite, or
    /// [`ZeroVector`](crate::error::GeometryError::ZeroVector) if the line is
    /// degenerate.
    pub fn execute(&self) -> Result<Polyline> {
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(TessellationError::InvalidParameters(format!(
                "drawn line length {} is not a positive finite number",
                self.length
            ))
            .into());
        }

        let half = self.line.direction_normal()? * (self.length * 0.5);
        let center = nalgebra::center(self.line.a(), self.line.b());
        Ok(Polyline {
            points: vec![center - half, center + half],
        })
    }
}

impl Drawable for Line {
    fn to_polyline(&self) -> Result<Polyline> {
        TessellateLine::new(*self).execute()
    }
}

impl Drawable for LineSegment {
    fn to_polyline(&self) -> Result<Polyline> {
        Ok(Polyline {
            points: self.handles().to_vec(),
        })
    }
}
