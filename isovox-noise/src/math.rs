//! Scalar helpers shared by the noise samplers.

/// Split a coordinate into its lattice cell and the offset inside that cell.
///
/// The offset is `x - x.floor()`, which is exact in `f32`, lies in `[0, 1]`
/// and is `0` once `|x| >= 2^24`. The cell index wraps around the `i32`
/// range, so far-away coordinates still land on a valid cell instead of a
/// clamped one. NaN gives cell `0` and a NaN offset, which propagates.
#[inline]
#[must_use]
pub fn split_cell(x: f32) -> (i32, f32) {
    let floor = x.floor();
    (floor as i64 as i32, x - floor)
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
#[inline]
#[must_use]
pub fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Cubic ease curve `t² (3 - 2t)`.
///
/// Zero slope at both ends of the cell, which is what keeps lattice noise
/// continuous across integer boundaries.
#[inline]
#[must_use]
pub fn cubic_ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}
