pub mod closest_3d;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Threshold below which squared lengths and the Gram determinant of two
/// line directions are treated as zero by the closest-approach solver.
pub const EPSILON: f64 = f64::EPSILON;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Linear interpolation from `a` to `b`. `t` is not clamped, so values
/// outside `[0, 1]` extrapolate along the line.
#[must_use]
pub fn lerp_unclamped(a: &Point3, b: &Point3, t: f64) -> Point3 {
    a + (b - a) * t
}

/// Linear interpolation from `a` to `b` with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp_clamped(a: &Point3, b: &Point3, t: f64) -> Point3 {
    lerp_unclamped(a, b, t.clamp(0.0, 1.0))
}

/// Transforms a point by an affine 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}
