//! Built-in demo scenes, constructed programmatically.

use accelerators::linear_aggregate;
use rt_core::camera::PerspectiveCamera;
use rt_core::geometry::*;
use rt_core::light::ArcLight;
use rt_core::material::ArcMaterial;
use rt_core::primitive::{ArcPrimitive, GeometricPrimitive};
use rt_core::scene::Scene;
use rt_core::shape::ArcShape;
use rt_core::spectrum::Spectrum;
use lights::DiffuseAreaLight;
use materials::{GlassMaterial, MatteMaterial, MirrorMaterial};
use shapes::{Sphere, TriangleMesh};
use std::sync::Arc;

/// Build a named scene and a camera for the given image resolution.
///
/// * `name`       - Name of the scene.
/// * `resolution` - Image resolution in pixels.
pub fn build(name: &str, resolution: Point2i) -> Result<(Scene, PerspectiveCamera), String> {
    match name {
        "cornell" => Ok(cornell_box(resolution)),
        "quadlight" => Ok(quad_light(resolution)),
        _ => Err(format!(
            "Unknown scene '{name}'. Available scenes: cornell, quadlight."
        )),
    }
}

/// Adds a non-emissive shape to the primitive list.
///
/// * `primitives` - The primitive list.
/// * `shape`      - The shape.
/// * `material`   - The material.
fn add_shape(primitives: &mut Vec<ArcPrimitive>, shape: ArcShape, material: ArcMaterial) {
    primitives.push(Arc::new(GeometricPrimitive::new(shape, material, None)));
}

/// A Cornell-box variant: diffuse walls, one mirror and one glass sphere,
/// and a quad area light below the ceiling.
///
/// * `resolution` - Image resolution in pixels.
fn cornell_box(resolution: Point2i) -> (Scene, PerspectiveCamera) {
    let mut primitives: Vec<ArcPrimitive> = Vec::new();

    let white: ArcMaterial = Arc::new(MatteMaterial::new(Spectrum::new(0.73)));
    let red: ArcMaterial = Arc::new(MatteMaterial::new(Spectrum::from_rgb(0.63, 0.065, 0.05)));
    let green: ArcMaterial = Arc::new(MatteMaterial::new(Spectrum::from_rgb(0.14, 0.45, 0.09)));

    // Floor (y = -1, normal +y).
    add_shape(
        &mut primitives,
        Arc::new(TriangleMesh::quad(
            Point3f::new(-1.0, -1.0, 1.0),
            Point3f::new(1.0, -1.0, 1.0),
            Point3f::new(1.0, -1.0, -1.0),
            Point3f::new(-1.0, -1.0, -1.0),
        )),
        Arc::clone(&white),
    );

    // Ceiling (y = 1, normal -y).
    add_shape(
        &mut primitives,
        Arc::new(TriangleMesh::quad(
            Point3f::new(-1.0, 1.0, 1.0),
            Point3f::new(-1.0, 1.0, -1.0),
            Point3f::new(1.0, 1.0, -1.0),
            Point3f::new(1.0, 1.0, 1.0),
        )),
        Arc::clone(&white),
    );

    // Back wall (z = -1, normal +z).
    add_shape(
        &mut primitives,
        Arc::new(TriangleMesh::quad(
            Point3f::new(-1.0, -1.0, -1.0),
            Point3f::new(1.0, -1.0, -1.0),
            Point3f::new(1.0, 1.0, -1.0),
            Point3f::new(-1.0, 1.0, -1.0),
        )),
        Arc::clone(&white),
    );

    // Left wall (x = -1, normal +x).
    add_shape(
        &mut primitives,
        Arc::new(TriangleMesh::quad(
            Point3f::new(-1.0, -1.0, 1.0),
            Point3f::new(-1.0, -1.0, -1.0),
            Point3f::new(-1.0, 1.0, -1.0),
            Point3f::new(-1.0, 1.0, 1.0),
        )),
        red,
    );

    // Right wall (x = 1, normal -x).
    add_shape(
        &mut primitives,
        Arc::new(TriangleMesh::quad(
            Point3f::new(1.0, -1.0, -1.0),
            Point3f::new(1.0, -1.0, 1.0),
            Point3f::new(1.0, 1.0, 1.0),
            Point3f::new(1.0, 1.0, -1.0),
        )),
        green,
    );

    // Mirror and glass spheres.
    add_shape(
        &mut primitives,
        Arc::new(Sphere::new(Point3f::new(-0.45, -0.65, -0.35), 0.35)),
        Arc::new(MirrorMaterial::new(Spectrum::new(0.95))),
    );
    add_shape(
        &mut primitives,
        Arc::new(Sphere::new(Point3f::new(0.45, -0.65, 0.25), 0.35)),
        Arc::new(GlassMaterial::new(
            Spectrum::new(1.0),
            Spectrum::new(1.0),
            1.5,
        )),
    );

    // Quad area light below the ceiling (normal -y).
    let h = 0.45;
    let light_shape: ArcShape = Arc::new(TriangleMesh::quad(
        Point3f::new(-h, 0.99, h),
        Point3f::new(-h, 0.99, -h),
        Point3f::new(h, 0.99, -h),
        Point3f::new(h, 0.99, h),
    ));
    let light: ArcLight = Arc::new(DiffuseAreaLight::new(
        Spectrum::new(20.0),
        Arc::clone(&light_shape),
    ));
    primitives.push(Arc::new(GeometricPrimitive::new(
        light_shape,
        Arc::new(MatteMaterial::new(Spectrum::new(0.0))),
        Some(Arc::clone(&light)),
    )));

    let scene = Scene::new(linear_aggregate(primitives), vec![light]);
    let camera = PerspectiveCamera::new(
        Point3f::new(0.0, 0.0, 3.8),
        Point3f::zero(),
        Vector3f::new(0.0, 1.0, 0.0),
        40.0,
        resolution,
    );
    (scene, camera)
}

/// A single diffuse quad lit by one area light of known constant radiance;
/// useful for validating the estimator's direct term.
///
/// * `resolution` - Image resolution in pixels.
fn quad_light(resolution: Point2i) -> (Scene, PerspectiveCamera) {
    let mut primitives: Vec<ArcPrimitive> = Vec::new();

    // Diffuse floor (y = 0, normal +y).
    add_shape(
        &mut primitives,
        Arc::new(TriangleMesh::quad(
            Point3f::new(-4.0, 0.0, 4.0),
            Point3f::new(4.0, 0.0, 4.0),
            Point3f::new(4.0, 0.0, -4.0),
            Point3f::new(-4.0, 0.0, -4.0),
        )),
        Arc::new(MatteMaterial::new(Spectrum::new(0.73))),
    );

    // Quad area light above the floor (normal -y).
    let light_shape: ArcShape = Arc::new(TriangleMesh::quad(
        Point3f::new(-1.0, 3.0, 1.0),
        Point3f::new(-1.0, 3.0, -1.0),
        Point3f::new(1.0, 3.0, -1.0),
        Point3f::new(1.0, 3.0, 1.0),
    ));
    let light: ArcLight = Arc::new(DiffuseAreaLight::new(
        Spectrum::new(10.0),
        Arc::clone(&light_shape),
    ));
    primitives.push(Arc::new(GeometricPrimitive::new(
        light_shape,
        Arc::new(MatteMaterial::new(Spectrum::new(0.0))),
        Some(Arc::clone(&light)),
    )));

    let scene = Scene::new(linear_aggregate(primitives), vec![light]);
    let camera = PerspectiveCamera::new(
        Point3f::new(0.0, 2.0, 8.0),
        Point3f::new(0.0, 1.0, 0.0),
        Vector3f::new(0.0, 1.0, 0.0),
        50.0,
        resolution,
    );
    (scene, camera)
}
