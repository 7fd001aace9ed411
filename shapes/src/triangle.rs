//! Triangle Meshes

use core::base::*;
use core::geometry::*;
use core::sampling::{uniform_sample_triangle, Distribution1D};
use core::shape::*;

/// An indexed triangle mesh defined directly in world space. The mesh samples
/// its surface uniformly by area across all of its triangles.
pub struct TriangleMesh {
    /// The vertex positions.
    vertices: Vec<Point3f>,

    /// Vertex indices, three per triangle.
    indices: Vec<[usize; 3]>,

    /// Distribution over triangles proportional to their areas.
    area_distribution: Distribution1D,

    /// Total surface area of the mesh.
    area: Float,

    /// World-space bounds of the mesh.
    bounds: Bounds3f,
}

impl TriangleMesh {
    /// Create a new `TriangleMesh`.
    ///
    /// * `vertices` - The vertex positions.
    /// * `indices`  - Vertex indices, three per triangle.
    pub fn new(vertices: Vec<Point3f>, indices: Vec<[usize; 3]>) -> Self {
        let areas: Vec<Float> = indices
            .iter()
            .map(|tri| {
                let (p0, p1, p2) = (vertices[tri[0]], vertices[tri[1]], vertices[tri[2]]);
                0.5 * (p1 - p0).cross(&(p2 - p0)).length()
            })
            .collect();
        let area = areas.iter().sum();

        let bounds = vertices
            .iter()
            .fold(Bounds3f::empty(), |b, p| b.union_point(p));

        Self {
            vertices,
            indices,
            area_distribution: Distribution1D::new(areas),
            area,
            bounds,
        }
    }

    /// Create a quadrilateral from 4 corners in counter-clockwise winding
    /// order. The geometric normal follows the winding by the right-hand
    /// rule.
    ///
    /// * `p0` - First corner.
    /// * `p1` - Second corner.
    /// * `p2` - Third corner.
    /// * `p3` - Fourth corner.
    pub fn quad(p0: Point3f, p1: Point3f, p2: Point3f, p3: Point3f) -> Self {
        Self::new(vec![p0, p1, p2, p3], vec![[0, 1, 2], [0, 2, 3]])
    }

    /// Returns the corner positions of a triangle.
    ///
    /// * `i` - The triangle index.
    fn triangle(&self, i: usize) -> (Point3f, Point3f, Point3f) {
        let tri = self.indices[i];
        (
            self.vertices[tri[0]],
            self.vertices[tri[1]],
            self.vertices[tri[2]],
        )
    }

    /// Returns the geometric normal of a triangle, following the winding
    /// order by the right-hand rule.
    ///
    /// * `i` - The triangle index.
    fn normal(&self, i: usize) -> Normal3f {
        let (p0, p1, p2) = self.triangle(i);
        Normal3f::from((p1 - p0).cross(&(p2 - p0)).normalize())
    }
}

impl Shape for TriangleMesh {
    /// Returns a bounding box in world space.
    fn world_bound(&self) -> Bounds3f {
        self.bounds
    }

    /// Returns geometric details of the closest triangle intersection, if
    /// any.
    ///
    /// * `r` - The ray.
    fn intersect(&self, r: &Ray) -> Option<ShapeIntersection> {
        let mut closest: Option<ShapeIntersection> = None;
        let mut t_max = r.t_max;

        for i in 0..self.indices.len() {
            let (p0, p1, p2) = self.triangle(i);
            if let Some(t) = intersect_triangle(&p0, &p1, &p2, r, t_max) {
                t_max = t;
                closest = Some(ShapeIntersection {
                    t,
                    p: r.at(t),
                    n: self.normal(i),
                });
            }
        }

        closest
    }

    /// Returns the total surface area of the mesh.
    fn area(&self) -> Float {
        self.area
    }

    /// Sample a point on the mesh uniformly by area: choose a triangle
    /// proportionally to its area, then sample uniform barycentric
    /// coordinates within it.
    ///
    /// * `u` - Sample value to use.
    fn sample_area(&self, u: &Point2f) -> ShapeSample {
        let (i, tri_pdf, du) = self.area_distribution.sample_discrete(u[0]);
        let (p0, p1, p2) = self.triangle(i);

        let b = uniform_sample_triangle(&Point2f::new(du, u[1]));
        let p = p0 + (p1 - p0) * b.x + (p2 - p0) * b.y;

        let tri_area = 0.5 * (p1 - p0).cross(&(p2 - p0)).length();
        ShapeSample {
            p,
            n: self.normal(i),
            pdf: tri_pdf / tri_area,
        }
    }
}

/// Möller–Trumbore ray-triangle intersection. Returns the hit distance if the
/// ray intersects the triangle in `(0, t_max)`.
///
/// * `p0`    - First corner.
/// * `p1`    - Second corner.
/// * `p2`    - Third corner.
/// * `r`     - The ray.
/// * `t_max` - Maximum hit distance.
fn intersect_triangle(
    p0: &Point3f,
    p1: &Point3f,
    p2: &Point3f,
    r: &Ray,
    t_max: Float,
) -> Option<Float> {
    let e1 = *p1 - *p0;
    let e2 = *p2 - *p0;

    let pvec = r.d.cross(&e2);
    let det = e1.dot(&pvec);
    if abs(det) < 1e-8 {
        return None;
    }
    let inv_det = 1.0 / det;

    let tvec = r.o - *p0;
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&e1);
    let v = r.d.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = e2.dot(&qvec) * inv_det;
    if t > 0.0 && t < t_max {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn unit_quad() -> TriangleMesh {
        // A unit quad in the z=0 plane with +z normal.
        TriangleMesh::quad(
            Point3f::new(0.0, 0.0, 0.0),
            Point3f::new(1.0, 0.0, 0.0),
            Point3f::new(1.0, 1.0, 0.0),
            Point3f::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn quad_area_and_normal() {
        let quad = unit_quad();
        assert!(approx_eq!(f32, quad.area(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, quad.normal(0).z, 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, quad.normal(1).z, 1.0, epsilon = 1e-6));
    }

    #[test]
    fn intersect_inside_and_outside() {
        let quad = unit_quad();
        let hit_ray = Ray::new(
            Point3f::new(0.5, 0.5, 1.0),
            Vector3f::new(0.0, 0.0, -1.0),
            INFINITY,
        );
        let isect = quad.intersect(&hit_ray).unwrap();
        assert!(approx_eq!(f32, isect.t, 1.0, epsilon = 1e-5));
        assert!(approx_eq!(f32, isect.p.x, 0.5, epsilon = 1e-5));

        let miss_ray = Ray::new(
            Point3f::new(2.0, 2.0, 1.0),
            Vector3f::new(0.0, 0.0, -1.0),
            INFINITY,
        );
        assert!(quad.intersect(&miss_ray).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let quad = unit_quad();
        let ray = Ray::new(
            Point3f::new(-1.0, 0.5, 0.0),
            Vector3f::new(1.0, 0.0, 0.0),
            INFINITY,
        );
        assert!(quad.intersect(&ray).is_none());
    }

    #[test]
    fn samples_lie_on_surface_with_area_pdf() {
        let quad = unit_quad();
        for u in [
            Point2f::new(0.1, 0.3),
            Point2f::new(0.6, 0.9),
            Point2f::new(0.99, 0.01),
        ] {
            let s = quad.sample_area(&u);
            assert!(approx_eq!(f32, s.p.z, 0.0, epsilon = 1e-6));
            assert!((0.0..=1.0).contains(&s.p.x) && (0.0..=1.0).contains(&s.p.y));
            // Uniform area sampling over the whole mesh: pdf = 1/area.
            assert!(approx_eq!(f32, s.pdf, 1.0, epsilon = 1e-5));
        }
    }
}
