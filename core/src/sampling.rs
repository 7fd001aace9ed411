//! Common sampling functions.

use crate::base::*;
use crate::geometry::*;

/// Sample a point on a unit disk by mapping from a unit square to the unit
/// circle. The concentric mapping takes points in [-1, 1]^2 to the unit disk
/// by uniformly mapping concentric squares to concentric circles.
///
/// * `u` - The random sample point.
pub fn concentric_sample_disk(u: &Point2f) -> Point2f {
    // Map uniform random numbers to [-1, 1]^2.
    let u_offset = Point2f::new(2.0 * u[0] - 1.0, 2.0 * u[1] - 1.0);

    // Handle degeneracy at the origin.
    if u_offset.x == 0.0 && u_offset.y == 0.0 {
        return Point2f::new(0.0, 0.0);
    }

    // Apply concentric mapping to point.
    let (r, theta) = if abs(u_offset.x) > abs(u_offset.y) {
        (u_offset.x, (PI / 4.0) * (u_offset.y / u_offset.x))
    } else {
        (
            u_offset.y,
            PI_OVER_TWO - (PI / 4.0) * (u_offset.x / u_offset.y),
        )
    };
    Point2f::new(r * theta.cos(), r * theta.sin())
}

/// Sample a direction on the hemisphere about the +z axis with a
/// cosine-weighted distribution.
///
/// * `u` - The random sample point.
pub fn cosine_sample_hemisphere(u: &Point2f) -> Vector3f {
    let d = concentric_sample_disk(u);
    let z = max(0.0, 1.0 - d.x * d.x - d.y * d.y).sqrt();
    Vector3f::new(d.x, d.y, z)
}

/// Returns the PDF for cosine-weighted hemisphere sampling.
///
/// * `cos_theta` - Cosine of the angle between direction and +z axis.
#[inline]
pub fn cosine_hemisphere_pdf(cos_theta: Float) -> Float {
    cos_theta * INV_PI
}

/// Uniformly sample a direction from a sphere.
///
/// * `u` - The random sample point.
pub fn uniform_sample_sphere(u: &Point2f) -> Vector3f {
    let z = 1.0 - 2.0 * u[0];
    let r = max(0.0, 1.0 - z * z).sqrt();
    let phi = TWO_PI * u[1];
    Vector3f::new(r * phi.cos(), r * phi.sin(), z)
}

/// Returns the PDF for uniformly sampling a direction from a sphere.
#[inline]
pub fn uniform_sphere_pdf() -> Float {
    INV_FOUR_PI
}

/// Uniformly sample barycentric coordinates of a triangle.
///
/// * `u` - The random sample point.
pub fn uniform_sample_triangle(u: &Point2f) -> Point2f {
    let su0 = u[0].sqrt();
    Point2f::new(1.0 - su0, u[1] * su0)
}

/// Represents a piecewise-constant 1D function's distribution for sampling
/// proportionally to its values.
#[derive(Clone)]
pub struct Distribution1D {
    /// The function values.
    pub func: Vec<Float>,

    /// The cumulative distribution function.
    pub cdf: Vec<Float>,

    /// The integral of the function.
    pub func_int: Float,
}

impl Distribution1D {
    /// Creates a new `Distribution1D` from the given function values.
    ///
    /// * `f` - The function values.
    pub fn new(f: Vec<Float>) -> Self {
        let n = f.len();

        // Compute integral of step function at x_i.
        let mut cdf = Vec::with_capacity(n + 1);
        cdf.push(0.0);
        for i in 1..=n {
            cdf.push(cdf[i - 1] + f[i - 1] / n as Float);
        }

        // Transform step function integral into CDF.
        let func_int = cdf[n];
        if func_int == 0.0 {
            for (i, v) in cdf.iter_mut().enumerate().skip(1) {
                *v = i as Float / n as Float;
            }
        } else {
            for v in cdf.iter_mut().skip(1) {
                *v /= func_int;
            }
        }

        Self {
            func: f,
            cdf,
            func_int,
        }
    }

    /// Returns the number of function values.
    pub fn count(&self) -> usize {
        self.func.len()
    }

    /// Samples a discrete index proportionally to the function values and
    /// returns the index, its probability and the random sample remapped to
    /// [0, 1) within the chosen interval so it can be reused.
    ///
    /// * `u` - The random sample.
    pub fn sample_discrete(&self, u: Float) -> (usize, Float, Float) {
        let offset = self.find_interval(u);
        let mut du = u - self.cdf[offset];
        if self.cdf[offset + 1] - self.cdf[offset] > 0.0 {
            du /= self.cdf[offset + 1] - self.cdf[offset];
        }
        (offset, self.discrete_pdf(offset), du)
    }

    /// Returns the probability of sampling the given discrete index.
    ///
    /// * `index` - The index.
    pub fn discrete_pdf(&self, index: usize) -> Float {
        if self.func_int > 0.0 {
            self.func[index] / (self.func_int * self.count() as Float)
        } else {
            1.0 / self.count() as Float
        }
    }

    /// Returns the largest index whose CDF value is <= `u`.
    ///
    /// * `u` - The random sample.
    fn find_interval(&self, u: Float) -> usize {
        let mut first = 0;
        let mut len = self.cdf.len();
        while len > 1 {
            let half = len / 2;
            let middle = first + half;
            if self.cdf[middle] <= u {
                first = middle;
                len -= half;
            } else {
                len = half;
            }
        }
        clamp(first as isize, 0, self.count() as isize - 1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RNG;
    use float_cmp::approx_eq;

    #[test]
    fn cosine_hemisphere_upper() {
        let mut rng = RNG::new(1);
        for _ in 0..1000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let w = cosine_sample_hemisphere(&u);
            assert!(w.z >= 0.0);
            assert!(approx_eq!(f32, w.length(), 1.0, epsilon = 1e-4));
        }
    }

    #[test]
    fn triangle_barycentrics_valid() {
        let mut rng = RNG::new(2);
        for _ in 0..1000 {
            let u = Point2f::new(rng.uniform_float(), rng.uniform_float());
            let b = uniform_sample_triangle(&u);
            assert!(b.x >= 0.0 && b.y >= 0.0 && b.x + b.y <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn distribution_proportional_sampling() {
        let d = Distribution1D::new(vec![1.0, 3.0]);
        assert!(approx_eq!(f32, d.discrete_pdf(0), 0.25, epsilon = 1e-6));
        assert!(approx_eq!(f32, d.discrete_pdf(1), 0.75, epsilon = 1e-6));

        let (i, pdf, du) = d.sample_discrete(0.1);
        assert_eq!(i, 0);
        assert!(approx_eq!(f32, pdf, 0.25, epsilon = 1e-6));
        assert!(approx_eq!(f32, du, 0.4, epsilon = 1e-6));
        let (i, _, _) = d.sample_discrete(0.9);
        assert_eq!(i, 1);
    }

    #[test]
    fn zero_distribution_is_uniform() {
        let d = Distribution1D::new(vec![0.0, 0.0, 0.0, 0.0]);
        let (i, pdf, _) = d.sample_discrete(0.6);
        assert_eq!(i, 2);
        assert!(approx_eq!(f32, pdf, 0.25, epsilon = 1e-6));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn discrete_pdfs_sum_to_one(f in prop::collection::vec(0.0f32..10.0, 1..32)) {
                let d = Distribution1D::new(f);
                let total: Float = (0..d.count()).map(|i| d.discrete_pdf(i)).sum();
                prop_assert!((total - 1.0).abs() < 1e-3);
            }

            #[test]
            fn concentric_disk_stays_in_unit_circle(x in 0.0f32..1.0, y in 0.0f32..1.0) {
                let p = concentric_sample_disk(&Point2f::new(x, y));
                prop_assert!(p.x * p.x + p.y * p.y <= 1.0 + 1e-5);
            }
        }
    }
}
