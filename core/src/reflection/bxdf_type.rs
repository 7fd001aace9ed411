//! BxDF Type

use bitflags::bitflags;

bitflags! {
    /// Stores combinations of reflection model flags.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct BxDFType: u8 {
        const BSDF_REFLECTION = 1 << 0;
        const BSDF_TRANSMISSION = 1 << 1;
        const BSDF_DIFFUSE = 1 << 2;
        const BSDF_SPECULAR = 1 << 3;
    }
}

impl BxDFType {
    /// Returns true if the diffuse flag is set.
    pub fn is_diffuse(&self) -> bool {
        self.contains(BxDFType::BSDF_DIFFUSE)
    }

    /// Returns true if the specular flag is set.
    pub fn is_specular(&self) -> bool {
        self.contains(BxDFType::BSDF_SPECULAR)
    }
}
