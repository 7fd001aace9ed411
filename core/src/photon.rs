//! Photon

use crate::geometry::*;
use crate::spectrum::Spectrum;

/// A discrete unit of radiant power deposited at a diffuse surface
/// interaction during emission tracing. Immutable once created; owned by the
/// photon index after insertion.
#[derive(Clone)]
pub struct Photon {
    /// The deposit position.
    pub p: Point3f,

    /// Unit direction toward the source the photon arrived from (the reversed
    /// ray direction).
    pub wi: Vector3f,

    /// The radiant power carried, already divided by the emission pdf.
    pub power: Spectrum,
}

impl Photon {
    /// Create a new `Photon`.
    ///
    /// * `p`     - The deposit position.
    /// * `wi`    - Unit direction toward the source the photon arrived from.
    /// * `power` - The radiant power carried.
    pub fn new(p: Point3f, wi: Vector3f, power: Spectrum) -> Self {
        Self { p, wi, power }
    }
}
