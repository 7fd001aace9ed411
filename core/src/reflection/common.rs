//! Common reflection helpers. Directions are expressed in the local shading
//! coordinate system where the surface normal is the +z axis.

use crate::base::*;
use crate::geometry::*;

/// Returns the cosine of the angle θ measured from the given direction to the
/// z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

/// Returns the absolute value of the cosine of the angle θ measured from the
/// given direction to the z-axis.
///
/// * `w` - The direction vector.
#[inline]
pub fn abs_cos_theta(w: &Vector3f) -> Float {
    abs(w.z)
}

/// Returns true if two directions lie in the same hemisphere about the
/// z-axis.
///
/// * `w`  - First direction.
/// * `wp` - Second direction.
#[inline]
pub fn same_hemisphere(w: &Vector3f, wp: &Vector3f) -> bool {
    w.z * wp.z > 0.0
}

/// Computes the refracted direction, or `None` in the case of total internal
/// reflection.
///
/// * `wi`  - Incident direction.
/// * `n`   - Surface normal lying in the same hemisphere as `wi`.
/// * `eta` - Ratio of indices of refraction on the incident and transmitted
///           sides.
pub fn refract(wi: &Vector3f, n: &Normal3f, eta: Float) -> Option<Vector3f> {
    // Compute cos θt using Snell's law.
    let cos_theta_i = n.dot(wi);
    let sin_2_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i);
    let sin_2_theta_t = eta * eta * sin_2_theta_i;

    // Handle total internal reflection for transmission.
    if sin_2_theta_t >= 1.0 {
        return None;
    }

    let cos_theta_t = (1.0 - sin_2_theta_t).sqrt();
    Some(-*wi * eta + Vector3f::from(*n) * (eta * cos_theta_i - cos_theta_t))
}
