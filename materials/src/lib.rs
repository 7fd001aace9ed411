//! Materials

mod glass;
mod matte;
mod mirror;

// Re-export.
pub use glass::*;
pub use matte::*;
pub use mirror::*;
