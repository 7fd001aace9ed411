//! Common integrator utilities: the tile-parallel render driver.

use core::base::*;
use core::camera::{Camera, CameraSample};
use core::film::Film;
use core::geometry::*;
use core::integrator::Integrator;
use core::sampler::Sampler;
use core::scene::Scene;
use core::spectrum::Spectrum;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::iproduct;
use std::thread;

/// Size in pixels of the square tiles rendered per worker.
pub const TILE_SIZE: usize = 16;

/// Create a progress bar for a pass with the given number of steps.
///
/// * `len` - Number of steps.
pub fn create_progress_bar(len: u64) -> ProgressBar {
    let progress = ProgressBar::new(len);
    progress.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
            .expect("invalid progress bar template")
            .progress_chars("=> "),
    );
    progress
}

/// Render the scene and return the film. The image is decomposed into square
/// tiles which worker threads consume from a channel; each tile gets its own
/// reseeded sampler so results do not depend on the tile schedule. The
/// integrator is only read, so workers share it by reference.
///
/// * `scene`             - The scene.
/// * `camera`            - The camera.
/// * `integrator`        - The integrator; `preprocess()` must have run.
/// * `sampler`           - Prototype sampler, cloned and reseeded per tile.
/// * `samples_per_pixel` - Number of radiance samples per pixel.
/// * `n_threads`         - Number of worker threads.
pub fn render(
    scene: &Scene,
    camera: &dyn Camera,
    integrator: &dyn Integrator,
    sampler: &dyn Sampler,
    samples_per_pixel: usize,
    n_threads: usize,
) -> Film {
    let resolution = camera.resolution();
    let n_tiles_x = (resolution.x as usize + TILE_SIZE - 1) / TILE_SIZE;
    let n_tiles_y = (resolution.y as usize + TILE_SIZE - 1) / TILE_SIZE;
    let tile_count = n_tiles_x * n_tiles_y;

    let mut film = Film::new(resolution);

    info!(
        "Rendering {}x{} image with {} samples/pixel on {} threads",
        resolution.x, resolution.y, samples_per_pixel, n_threads
    );
    let progress = create_progress_bar(tile_count as u64);
    progress.set_message("Rendering scene");

    thread::scope(|scope| {
        let (tx_collector, rx_collector) =
            crossbeam_channel::bounded::<Vec<(Point2i, Spectrum)>>(n_threads);
        let (tx_worker, rx_worker) = crossbeam_channel::bounded::<usize>(n_threads);

        // Spawn the collector thread owning the film.
        let film = &mut film;
        let progress = &progress;
        scope.spawn(move || {
            for tile_samples in rx_collector.iter() {
                for (p_raster, l) in tile_samples {
                    film.add_sample(&p_raster, l);
                }
                progress.inc(1);
            }
        });

        // Spawn worker threads.
        for _ in 0..n_threads {
            let rx_worker = rx_worker.clone();
            let tx_collector = tx_collector.clone();
            scope.spawn(move || {
                for tile_idx in rx_worker.iter() {
                    let tile_samples = render_tile(
                        tile_idx,
                        n_tiles_x,
                        scene,
                        camera,
                        integrator,
                        sampler,
                        samples_per_pixel,
                    );
                    tx_collector.send(tile_samples).unwrap();
                }
            });
        }
        drop(rx_worker); // Drop extras; we've cloned one for each worker.
        drop(tx_collector);

        // Send work.
        for tile_idx in 0..tile_count {
            tx_worker.send(tile_idx).unwrap();
        }
        drop(tx_worker);
    });

    progress.finish();
    film
}

/// Render a single tile and return its radiance samples.
///
/// * `tile_idx`          - Index of the tile.
/// * `n_tiles_x`         - Number of tiles across the image.
/// * `scene`             - The scene.
/// * `camera`            - The camera.
/// * `integrator`        - The integrator.
/// * `sampler`           - Prototype sampler.
/// * `samples_per_pixel` - Number of radiance samples per pixel.
fn render_tile(
    tile_idx: usize,
    n_tiles_x: usize,
    scene: &Scene,
    camera: &dyn Camera,
    integrator: &dyn Integrator,
    sampler: &dyn Sampler,
    samples_per_pixel: usize,
) -> Vec<(Point2i, Spectrum)> {
    let resolution = camera.resolution();
    let tile_x = tile_idx % n_tiles_x;
    let tile_y = tile_idx / n_tiles_x;

    // Compute this tile's pixel bounds.
    let x0 = tile_x * TILE_SIZE;
    let x1 = min(x0 + TILE_SIZE, resolution.x as usize);
    let y0 = tile_y * TILE_SIZE;
    let y1 = min(y0 + TILE_SIZE, resolution.y as usize);

    // Get a sampler instance for the tile.
    let mut tile_sampler = sampler.clone_sampler(tile_idx as u64);

    let mut tile_samples = Vec::with_capacity((x1 - x0) * (y1 - y0) * samples_per_pixel);
    for (y, x) in iproduct!(y0..y1, x0..x1) {
        let p_raster = Point2i::new(x as Int, y as Int);
        for _ in 0..samples_per_pixel {
            // Jitter the sample position within the pixel.
            let jitter = tile_sampler.get_2d();
            let p_film = Point2f::new(x as Float + jitter.x, y as Float + jitter.y);
            let ray = camera.generate_ray(&CameraSample::new(p_film));

            let mut l = integrator.li(scene, tile_sampler.as_mut(), &ray);
            if l.has_nans() {
                warn!("NaN radiance value returned for pixel ({x}, {y}); discarding sample");
                l = Spectrum::ZERO;
            }
            tile_samples.push((p_raster, l));
        }
    }

    tile_samples
}
