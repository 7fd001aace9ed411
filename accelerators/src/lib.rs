//! Accelerators

#[macro_use]
extern crate log;

mod linear;
mod photon_tree;

// Re-export.
pub use linear::*;
pub use photon_tree::*;
