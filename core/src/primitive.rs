//! Primitives

use crate::geometry::*;
use crate::interaction::*;
use crate::light::ArcLight;
use crate::material::ArcMaterial;
use crate::shape::ArcShape;
use std::sync::Arc;

/// Primitive interface bridges the geometry processing and shading
/// subsystems.
pub trait Primitive: Send + Sync {
    /// Returns a bounding box in world space.
    fn world_bound(&self) -> Bounds3f;

    /// Returns the `SurfaceInteraction` if the ray intersects the primitive.
    /// The ray's `t_max` is updated to the hit distance so subsequent
    /// intersection tests only return closer hits.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &mut Ray) -> Option<SurfaceInteraction>;

    /// Returns `true` if the ray intersects the primitive.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool;
}

/// Atomic reference counted `Primitive`.
pub type ArcPrimitive = Arc<dyn Primitive>;

/// A single shape with its material and, for emissive surfaces, the area
/// light describing its emission.
pub struct GeometricPrimitive {
    /// The shape.
    pub shape: ArcShape,

    /// The material.
    pub material: ArcMaterial,

    /// The area light if the shape is emissive.
    pub area_light: Option<ArcLight>,
}

impl GeometricPrimitive {
    /// Create a new `GeometricPrimitive`.
    ///
    /// * `shape`      - The shape.
    /// * `material`   - The material.
    /// * `area_light` - The area light if the shape is emissive.
    pub fn new(shape: ArcShape, material: ArcMaterial, area_light: Option<ArcLight>) -> Self {
        Self {
            shape,
            material,
            area_light,
        }
    }
}

impl Primitive for GeometricPrimitive {
    /// Returns a bounding box in world space.
    fn world_bound(&self) -> Bounds3f {
        self.shape.world_bound()
    }

    /// Returns the `SurfaceInteraction` if the ray intersects the primitive.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &mut Ray) -> Option<SurfaceInteraction> {
        self.shape.intersect(r).map(|isect| {
            r.t_max = isect.t;
            let hit = Hit::new(isect.p, -r.d, isect.n);
            SurfaceInteraction::new(
                hit,
                Some(Arc::clone(&self.material)),
                self.area_light.as_ref().map(Arc::clone),
            )
        })
    }

    /// Returns `true` if the ray intersects the primitive.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.shape.intersect_p(r)
    }
}
