//! Material

use crate::interaction::SurfaceInteraction;
use crate::reflection::BSDF;
use std::sync::Arc;

/// Indicates whether the quantity carried along a path is radiance (camera
/// paths) or importance (paths starting at a light source). The distinction
/// matters for non-symmetric scattering such as refraction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TransportMode {
    /// Path starting at the camera.
    Radiance,

    /// Path starting at a light source.
    Importance,
}

/// Material interface. Implementations describe the light-scattering
/// properties of a surface by producing a `BSDF` at an interaction point.
pub trait Material: Send + Sync {
    /// Returns the BSDF describing scattering at the intersection point on the
    /// surface.
    ///
    /// * `si`   - The surface interaction at the intersection.
    /// * `mode` - Indicates whether the path carries radiance or importance.
    fn compute_scattering_functions(&self, si: &SurfaceInteraction, mode: TransportMode) -> BSDF;
}

/// Atomic reference counted `Material`.
pub type ArcMaterial = Arc<dyn Material>;
