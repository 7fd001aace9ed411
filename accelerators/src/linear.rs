//! Linear Aggregate

use rt_core::geometry::*;
use rt_core::interaction::SurfaceInteraction;
use rt_core::primitive::*;
use std::sync::Arc;

/// An aggregate that tests every primitive in turn. Intersection cost grows
/// linearly with the primitive count, which is acceptable at the scale of
/// programmatically built scenes.
pub struct LinearAggregate {
    /// The primitives.
    primitives: Vec<ArcPrimitive>,

    /// World-space bounds over all primitives.
    bounds: Bounds3f,
}

impl LinearAggregate {
    /// Create a new `LinearAggregate`.
    ///
    /// * `primitives` - The primitives.
    pub fn new(primitives: Vec<ArcPrimitive>) -> Self {
        let bounds = primitives
            .iter()
            .fold(Bounds3f::empty(), |b, p| b.union(&p.world_bound()));
        Self { primitives, bounds }
    }
}

impl Primitive for LinearAggregate {
    /// Returns a bounding box in world space.
    fn world_bound(&self) -> Bounds3f {
        self.bounds
    }

    /// Returns the `SurfaceInteraction` of the closest intersection, if any.
    /// Each primitive hit shortens the ray's `t_max`, so the last recorded
    /// interaction is the closest one.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &mut Ray) -> Option<SurfaceInteraction> {
        let mut closest: Option<SurfaceInteraction> = None;
        for primitive in self.primitives.iter() {
            if let Some(si) = primitive.intersect(r) {
                closest = Some(si);
            }
        }
        closest
    }

    /// Returns `true` if the ray intersects any primitive.
    ///
    /// * `r` - The ray.
    fn intersect_p(&self, r: &Ray) -> bool {
        self.primitives.iter().any(|p| p.intersect_p(r))
    }
}

/// Convenience constructor returning an `ArcPrimitive`.
///
/// * `primitives` - The primitives.
pub fn linear_aggregate(primitives: Vec<ArcPrimitive>) -> ArcPrimitive {
    Arc::new(LinearAggregate::new(primitives))
}
