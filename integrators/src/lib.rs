//! Integrators

#[macro_use]
extern crate log;

mod common;
mod photon_map;

// Re-export.
pub use common::*;
pub use photon_map::*;
