//! Photon Mapping Integrator

use accelerators::PhotonTree;
use core::base::*;
use core::geometry::*;
use core::integrator::Integrator;
use core::interaction::SurfaceInteraction;
use core::light::ArcLight;
use core::material::TransportMode;
use core::photon::Photon;
use core::sampler::Sampler;
use core::scene::Scene;
use core::spectrum::Spectrum;
use samplers::RandomSampler;
use std::sync::Arc;

use crate::create_progress_bar;

/// Default target number of photon deposits.
pub const DEFAULT_PHOTON_COUNT: usize = 1_000_000;

/// Minimum number of bounces before Russian roulette may terminate a path.
const LEAST_DEPTH: usize = 5;

/// The scene bounding-box diagonal is divided by this factor to obtain the
/// automatic gather radius.
const AUTO_RADIUS_FRACTION: Float = 500.0;

/// Emission attempts are abandoned once they exceed this multiple of the
/// deposit target without filling the map, so scenes whose photons can never
/// reach a diffuse surface fail instead of looping forever.
const MAX_EMISSION_FACTOR: u64 = 1000;

/// Counters describing one photon emission pass. `emitted` strictly counts
/// emission events (one per traced path from a light), independent of how
/// many diffuse deposits that path produced; it is the denominator of the
/// final estimator.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmissionStats {
    /// Number of photon paths emitted from light sources.
    pub emitted: u64,

    /// Number of photons deposited at diffuse interactions.
    pub stored: u64,
}

/// The result of the photon emission pass: the finalized photon map, the
/// gather radius and the emission counters. The render pass reads it
/// concurrently without further mutation.
pub struct PhotonMapContext {
    /// The finalized photon map.
    pub photons: PhotonTree,

    /// The gather radius for density estimation.
    pub radius: Float,

    /// Counters from the emission pass.
    pub stats: EmissionStats,
}

/// Implements two-pass photon mapping: a preprocessing pass scatters
/// energy-carrying photons from the scene's area lights and deposits them at
/// diffuse interactions; the radiance estimator then combines direct emission
/// hits with a local density estimate over the deposited photons.
pub struct PhotonMapIntegrator {
    /// Target number of photon deposits.
    photon_count: usize,

    /// Configured gather radius; 0 selects the automatic scene-relative
    /// default.
    photon_radius: Float,

    /// The emission pass result; populated by `preprocess()`.
    context: Option<PhotonMapContext>,
}

impl PhotonMapIntegrator {
    /// Create a new `PhotonMapIntegrator`.
    ///
    /// * `photon_count`  - Target number of photon deposits.
    /// * `photon_radius` - Gather radius; 0 selects the automatic
    ///                     scene-relative default.
    pub fn new(photon_count: usize, photon_radius: Float) -> Self {
        Self {
            photon_count,
            photon_radius,
            context: None,
        }
    }

    /// Returns the emission pass result, if `preprocess()` has run.
    pub fn context(&self) -> Option<&PhotonMapContext> {
        self.context.as_ref()
    }

    /// Performs the density-estimation gather at a diffuse interaction: every
    /// photon within the gather radius contributes its power weighted by the
    /// BSDF for its incoming direction, divided by the area of the gather
    /// disk. The sum is normalized by the total number of emitted photons.
    ///
    /// * `ctx`  - The emission pass result.
    /// * `si`   - The diffuse surface interaction.
    /// * `bsdf` - The BSDF at the interaction.
    /// * `wo`   - Outgoing direction (toward the previous path vertex).
    /// * `beta` - Path throughput up to the interaction.
    fn gather(
        ctx: &PhotonMapContext,
        si: &SurfaceInteraction,
        bsdf: &core::reflection::BSDF,
        wo: &Vector3f,
        beta: Spectrum,
    ) -> Spectrum {
        let nearby = ctx.photons.query(&si.hit.p, ctx.radius);
        if nearby.is_empty() {
            return Spectrum::ZERO;
        }

        let inv_disk_area = 1.0 / (PI * ctx.radius * ctx.radius);
        let mut local_power = Spectrum::ZERO;
        for i in nearby {
            let photon = &ctx.photons[i as usize];
            let fr = bsdf.f(wo, &photon.wi);
            local_power += beta * fr * photon.power * inv_disk_area;
        }

        if local_power.max_component_value() > 0.0 {
            local_power / ctx.stats.emitted as Float
        } else {
            Spectrum::ZERO
        }
    }
}

impl Integrator for PhotonMapIntegrator {
    /// Runs the photon emission pass and builds the photon map. Fails if the
    /// scene has no emissive surfaces, since no valid estimator can be built
    /// without them.
    ///
    /// * `scene` - The scene.
    fn preprocess(&mut self, scene: &Scene) -> Result<(), String> {
        // Create a sample generator for the preprocess step.
        let mut sampler = RandomSampler::new(None);

        // Estimate a default photon radius from the scene extents.
        let radius = if self.photon_radius > 0.0 {
            self.photon_radius
        } else {
            scene.world_bound.diagonal().length() / AUTO_RADIUS_FRACTION
        };

        let (photons, stats) = trace_photons(scene, &mut sampler, self.photon_count, radius)?;
        info!(
            "Photon emission pass done: {} stored / {} emitted, gather radius {}",
            stats.stored, stats.emitted, radius
        );

        self.context = Some(PhotonMapContext {
            photons,
            radius,
            stats,
        });
        Ok(())
    }

    /// Returns the incident radiance at the origin of a given camera ray. The
    /// estimator walks specular bounces until it reaches an emissive surface
    /// (direct term) or a diffuse surface (indirect term via photon density
    /// estimation).
    ///
    /// * `scene`   - The scene.
    /// * `sampler` - The sampler.
    /// * `ray`     - The ray.
    fn li(&self, scene: &Scene, sampler: &mut dyn Sampler, ray: &Ray) -> Spectrum {
        let ctx = match &self.context {
            Some(ctx) => ctx,
            None => return Spectrum::ZERO,
        };

        let mut result = Spectrum::ZERO;
        let mut ray = ray.clone();

        // Check if the ray intersects the scene at all.
        let mut si = match scene.intersect(&mut ray) {
            Some(si) => si,
            None => return result,
        };

        let mut beta = Spectrum::new(1.0);
        let mut depth = 0;

        loop {
            let wo = -ray.d;

            // Account for emitted radiance of directly visible or specularly
            // reflected light sources.
            if si.is_emissive() {
                result += beta * si.le(&wo);
            }

            let bsdf = match si.bsdf(TransportMode::Radiance) {
                Some(bsdf) => bsdf,
                None => break,
            };

            // Diffuse surfaces end primary-ray tracing; the photon map query
            // supplies the remaining incident illumination.
            if bsdf.is_diffuse() {
                result += Self::gather(ctx, &si, &bsdf, &wo, beta);
                break;
            }

            // Mirror or dielectric: sample the reflectance model to continue.
            let sample = bsdf.sample_f(&wo, &sampler.get_2d());
            let weight = bsdf.sample_weight(&sample);
            if weight.is_black() {
                break;
            }
            beta *= weight;

            ray = si.hit.spawn_ray(&sample.wi);
            si = match scene.intersect(&mut ray) {
                Some(next_si) => next_si,
                None => break,
            };

            if depth < LEAST_DEPTH {
                depth += 1;
            } else {
                // Terminate the path probabilistically with Russian roulette.
                let q = min(0.99, beta.max_component_value());
                match russian_roulette(beta, sampler.get_1d(), q) {
                    Some(b) => beta = b,
                    None => break,
                }
            }
        }

        result
    }
}

/// Traces photon paths from the scene's lights until the target number of
/// deposits is stored, and returns the built photon map with the emission
/// counters. Lights are selected uniformly at random; each emission samples a
/// surface point and a cosine-weighted direction, and the path is followed
/// through BSDF sampling with Russian roulette termination past the minimum
/// depth. A photon is deposited at every diffuse interaction along the path.
///
/// * `scene`        - The scene.
/// * `sampler`      - The sampler.
/// * `photon_count` - Target number of photon deposits.
/// * `radius`       - The gather radius (used only for reporting).
pub fn trace_photons(
    scene: &Scene,
    sampler: &mut dyn Sampler,
    photon_count: usize,
    radius: Float,
) -> Result<(PhotonTree, EmissionStats), String> {
    let lights: Vec<ArcLight> = scene.lights.iter().map(Arc::clone).collect();
    if lights.is_empty() {
        return Err("Photon emission requested but the scene has no emissive surfaces".to_string());
    }
    let n_lights = lights.len();

    debug!(
        "Emitting photons from {} light(s); target {} deposits, gather radius {}",
        n_lights, photon_count, radius
    );
    let progress = create_progress_bar(photon_count as u64);
    progress.set_message("Tracing photons");

    let mut photons = PhotonTree::with_capacity(photon_count);
    let mut stats = EmissionStats::default();
    let max_emissions = MAX_EMISSION_FACTOR * photon_count as u64;

    while (stats.stored as usize) < photon_count {
        if stats.emitted >= max_emissions {
            return Err(format!(
                "Gave up after emitting {} photons with only {} deposits; \
                 the scene's diffuse surfaces are unreachable from its lights",
                stats.emitted, stats.stored
            ));
        }

        // Select a light uniformly at random and emit one photon from it.
        let light_index = min(
            (sampler.get_1d() * n_lights as Float) as usize,
            n_lights - 1,
        );
        let emission = lights[light_index].sample_photon(sampler, n_lights);
        stats.emitted += 1;
        if emission.power.is_black() {
            continue;
        }

        let mut ray = emission.ray;
        let mut beta = Spectrum::new(1.0);
        let mut depth = 0;

        let mut si = match scene.intersect(&mut ray) {
            Some(si) => si,
            None => continue,
        };

        loop {
            let wo = -ray.d;
            let bsdf = match si.bsdf(TransportMode::Importance) {
                Some(bsdf) => bsdf,
                None => break,
            };

            // Deposit a photon at every diffuse interaction. The stored
            // direction points back toward where the photon came from.
            if bsdf.is_diffuse() {
                photons.push(Photon::new(si.hit.p, wo, emission.power * beta));
                stats.stored += 1;
                progress.inc(1);
            }

            // Sample the reflectance model to continue the path; a zero
            // weight is an absorption event.
            let sample = bsdf.sample_f(&wo, &sampler.get_2d());
            let weight = bsdf.sample_weight(&sample);
            if weight.is_black() {
                break;
            }
            beta *= weight;

            ray = si.hit.spawn_ray(&sample.wi);
            si = match scene.intersect(&mut ray) {
                Some(next_si) => next_si,
                None => break,
            };

            if depth < LEAST_DEPTH {
                depth += 1;
            } else {
                let q = beta.max_component_value();
                match russian_roulette(beta, sampler.get_1d(), q) {
                    Some(b) => beta = b,
                    None => break,
                }
            }
        }
    }
    progress.finish();

    // Build the photon map; no further insertions are permitted afterwards.
    photons.build();
    Ok((photons, stats))
}

/// Applies Russian roulette to a path throughput: the path survives with
/// probability `q` and its throughput is divided by `q` so the estimator's
/// expectation is unchanged. Returns `None` when the path is terminated.
/// Degenerate survival probabilities terminate the path.
///
/// * `beta` - The path throughput.
/// * `u`    - A uniform random sample.
/// * `q`    - The survival probability.
fn russian_roulette(beta: Spectrum, u: Float, q: Float) -> Option<Spectrum> {
    if !(q > 0.0) || u > q {
        None
    } else {
        Some(beta / q)
    }
}
