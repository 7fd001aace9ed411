//! Camera

use crate::base::*;
use crate::geometry::*;

/// A sample position on the film plane, in raster coordinates.
#[derive(Copy, Clone, Debug)]
pub struct CameraSample {
    /// The point on the film in raster space.
    pub p_film: Point2f,
}

impl CameraSample {
    /// Create a new `CameraSample`.
    ///
    /// * `p_film` - The point on the film in raster space.
    pub fn new(p_film: Point2f) -> Self {
        Self { p_film }
    }
}

/// Camera interface.
pub trait Camera: Send + Sync {
    /// Returns the image resolution in pixels.
    fn resolution(&self) -> Point2i;

    /// Returns a world-space ray corresponding to a sample position on the
    /// film plane.
    ///
    /// * `sample` - The camera sample.
    fn generate_ray(&self, sample: &CameraSample) -> Ray;
}

/// A pinhole perspective camera positioned with a look-at transformation.
pub struct PerspectiveCamera {
    /// Position of the camera.
    eye: Point3f,

    /// Orthonormal camera basis: right, up and forward (viewing direction).
    right: Vector3f,
    up: Vector3f,
    forward: Vector3f,

    /// Image resolution in pixels.
    resolution: Point2i,

    /// Half extents of the image plane at unit distance.
    half_width: Float,
    half_height: Float,
}

impl PerspectiveCamera {
    /// Create a new `PerspectiveCamera`.
    ///
    /// * `eye`        - Position of the camera.
    /// * `look_at`    - Point the camera looks at.
    /// * `up`         - The up vector used to orient the camera.
    /// * `fov_y`      - Full vertical field of view in degrees.
    /// * `resolution` - Image resolution in pixels.
    pub fn new(
        eye: Point3f,
        look_at: Point3f,
        up: Vector3f,
        fov_y: Float,
        resolution: Point2i,
    ) -> Self {
        let forward = (look_at - eye).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward);

        let aspect = resolution.x as Float / resolution.y as Float;
        let half_height = (fov_y.to_radians() * 0.5).tan();
        let half_width = aspect * half_height;

        Self {
            eye,
            right,
            up,
            forward,
            resolution,
            half_width,
            half_height,
        }
    }
}

impl Camera for PerspectiveCamera {
    /// Returns the image resolution in pixels.
    fn resolution(&self) -> Point2i {
        self.resolution
    }

    /// Returns a world-space ray through the given film sample.
    ///
    /// * `sample` - The camera sample.
    fn generate_ray(&self, sample: &CameraSample) -> Ray {
        // Map raster coordinates to [-1, 1]^2 on the image plane with y
        // growing upward.
        let sx = 2.0 * (sample.p_film.x / self.resolution.x as Float) - 1.0;
        let sy = 1.0 - 2.0 * (sample.p_film.y / self.resolution.y as Float);

        let d = (self.forward
            + self.right * (sx * self.half_width)
            + self.up * (sy * self.half_height))
            .normalize();
        Ray::new(self.eye, d, INFINITY)
    }
}
