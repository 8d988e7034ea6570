//! Curved-path evaluation for weapon flight.

use glam::Vec3;

/// Evaluate a quadratic Bézier curve at parameter `t`:
/// `(1-t)²·start + 2(1-t)t·control + t²·end`.
///
/// Pure and stateless - safe to call from anywhere. `t` is deliberately
/// not clamped; values outside [0,1] extrapolate the same polynomial.
pub fn quadratic_bezier(t: f32, start: Vec3, control: Vec3, end: Vec3) -> Vec3 {
    let u = 1.0 - t;
    u * u * start + 2.0 * u * t * control + t * t * end
}
