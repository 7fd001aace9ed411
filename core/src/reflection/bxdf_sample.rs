//! BxDF Sample

use super::BxDFType;
use crate::base::*;
use crate::geometry::Vector3f;
use crate::spectrum::Spectrum;

/// Stores the evaluation of a BxDF sample.
#[derive(Copy, Clone, Default)]
pub struct BxDFSample {
    /// The sample value.
    pub f: Spectrum,

    /// The value of the PDF.
    pub pdf: Float,

    /// The sampled incident direction.
    pub wi: Vector3f,

    /// The type of the sampled lobe.
    pub sampled_type: BxDFType,
}

impl BxDFSample {
    /// Create a new `BxDFSample`.
    ///
    /// * `f`            - The sample value.
    /// * `pdf`          - The value of the PDF.
    /// * `wi`           - The sampled incident direction.
    /// * `sampled_type` - The type of the sampled lobe.
    pub fn new(f: Spectrum, pdf: Float, wi: Vector3f, sampled_type: BxDFType) -> Self {
        Self {
            f,
            pdf,
            wi,
            sampled_type,
        }
    }
}

impl From<BxDFType> for BxDFSample {
    /// Create a failed `BxDFSample` carrying just the lobe type, with the
    /// other fields zeroed.
    ///
    /// * `sampled_type` - The type of the sampled lobe.
    fn from(sampled_type: BxDFType) -> Self {
        Self::new(Spectrum::ZERO, 0.0, Vector3f::ZERO, sampled_type)
    }
}
