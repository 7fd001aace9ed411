//! Fresnel Dielectrics

use crate::base::*;
use crate::spectrum::Spectrum;
use std::mem::swap;

/// Computes the Fresnel reflectance at a dielectric interface.
///
/// * `cos_theta_i` - Cosine of the incident angle measured from the surface
///                   normal.
/// * `eta_i`       - Index of refraction for the exterior side of the surface.
/// * `eta_t`       - Index of refraction for the interior side of the surface.
pub fn fr_dielectric(cos_theta_i: Float, eta_i: Float, eta_t: Float) -> Float {
    let mut cos_theta_i = clamp(cos_theta_i, -1.0, 1.0);
    let mut eta_i = eta_i;
    let mut eta_t = eta_t;

    // Potentially swap indices of refraction.
    let entering = cos_theta_i > 0.0;
    if !entering {
        swap(&mut eta_i, &mut eta_t);
        cos_theta_i = abs(cos_theta_i);
    }

    // Compute cos θt using Snell's law.
    let sin_theta_i = max(0.0, 1.0 - cos_theta_i * cos_theta_i).sqrt();
    let sin_theta_t = eta_i / eta_t * sin_theta_i;

    // Handle total internal reflection.
    if sin_theta_t >= 1.0 {
        return 1.0;
    }

    let cos_theta_t = max(0.0, 1.0 - sin_theta_t * sin_theta_t).sqrt();
    let r_parl = ((eta_t * cos_theta_i) - (eta_i * cos_theta_t))
        / ((eta_t * cos_theta_i) + (eta_i * cos_theta_t));
    let r_perp = ((eta_i * cos_theta_i) - (eta_t * cos_theta_t))
        / ((eta_i * cos_theta_i) + (eta_t * cos_theta_t));
    (r_parl * r_parl + r_perp * r_perp) / 2.0
}

/// Interface for computing Fresnel reflection coefficients.
#[derive(Clone)]
pub enum Fresnel {
    /// Returns full reflectance for all incoming directions.
    NoOp,

    /// Fresnel reflectance for a dielectric interface. The fields are the
    /// indices of refraction for the exterior and interior sides.
    Dielectric { eta_i: Float, eta_t: Float },
}

impl Fresnel {
    /// Returns the amount of light reflected by the surface.
    ///
    /// * `cos_theta_i` - Cosine of the angle made by the incident direction
    ///                   and the surface normal.
    pub fn evaluate(&self, cos_theta_i: Float) -> Spectrum {
        match self {
            Self::NoOp => Spectrum::new(1.0),
            Self::Dielectric { eta_i, eta_t } => {
                Spectrum::new(fr_dielectric(cos_theta_i, *eta_i, *eta_t))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn normal_incidence_glass() {
        // R0 = ((n1 - n2) / (n1 + n2))^2 = 0.04 for air/glass.
        let f = fr_dielectric(1.0, 1.0, 1.5);
        assert!(approx_eq!(f32, f, 0.04, epsilon = 1e-4));
    }

    #[test]
    fn grazing_incidence_is_fully_reflective() {
        let f = fr_dielectric(1e-4, 1.0, 1.5);
        assert!(f > 0.99);
    }

    #[test]
    fn symmetric_on_exit_side() {
        // Leaving the medium below the critical angle.
        let f = fr_dielectric(-1.0, 1.0, 1.5);
        assert!(approx_eq!(f32, f, 0.04, epsilon = 1e-4));
    }
}
