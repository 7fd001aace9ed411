//! Scene

use crate::geometry::*;
use crate::interaction::SurfaceInteraction;
use crate::light::ArcLight;
use crate::primitive::ArcPrimitive;
use std::sync::Arc;

/// Scene.
#[derive(Clone)]
pub struct Scene {
    /// An aggregate of all primitives in the scene.
    pub aggregate: ArcPrimitive,

    /// All light sources in the scene.
    pub lights: Vec<ArcLight>,

    /// The bounding box of the scene geometry.
    pub world_bound: Bounds3f,
}

impl Scene {
    /// Creates a new `Scene`.
    ///
    /// * `aggregate` - An aggregate of all primitives in the scene.
    /// * `lights`    - All light sources in the scene.
    pub fn new(aggregate: ArcPrimitive, lights: Vec<ArcLight>) -> Self {
        Self {
            world_bound: aggregate.world_bound(),
            aggregate: Arc::clone(&aggregate),
            lights,
        }
    }

    /// Traces the ray into the scene and returns the `SurfaceInteraction` if
    /// an intersection occurred.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect(&self, ray: &mut Ray) -> Option<SurfaceInteraction> {
        self.aggregate.intersect(ray)
    }

    /// Traces the ray into the scene and returns whether or not an
    /// intersection occurred.
    ///
    /// * `ray` - The ray to trace.
    pub fn intersect_p(&self, ray: &Ray) -> bool {
        self.aggregate.intersect_p(ray)
    }
}
