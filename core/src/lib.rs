//! Core

#[macro_use]
extern crate hexf;
#[macro_use]
extern crate log;

// Re-export.
pub mod base;
pub mod camera;
pub mod film;
pub mod geometry;
pub mod image_io;
pub mod integrator;
pub mod interaction;
pub mod light;
pub mod material;
pub mod photon;
pub mod primitive;
pub mod reflection;
pub mod rng;
pub mod sampler;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod spectrum;
