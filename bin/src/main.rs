#[macro_use]
extern crate log;

use clap::Parser;
use rt_core::base::*;
use rt_core::geometry::Point2i;
use rt_core::integrator::Integrator;
use integrators::PhotonMapIntegrator;
use samplers::RandomSampler;

mod scenes;

/// Command line options.
#[derive(Parser)]
#[command(author, version, about = "Photon mapping renderer", long_about = None)]
struct Options {
    /// Number of threads to use for rendering; 0 selects the number of
    /// logical CPUs.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 0,
        help = "Use specified number of threads for rendering (0 = all CPUs)."
    )]
    n_threads: usize,

    /// Image width in pixels.
    #[arg(long, value_name = "NUM", default_value_t = 768)]
    width: usize,

    /// Image height in pixels.
    #[arg(long, value_name = "NUM", default_value_t = 768)]
    height: usize,

    /// Number of radiance samples per pixel.
    #[arg(long = "spp", value_name = "NUM", default_value_t = 32)]
    samples_per_pixel: usize,

    /// Target number of photon deposits.
    #[arg(
        long = "photons",
        value_name = "NUM",
        default_value_t = integrators::DEFAULT_PHOTON_COUNT
    )]
    photon_count: usize,

    /// Gather radius for photon density estimation; 0 selects an automatic
    /// scene-relative default.
    #[arg(long = "radius", value_name = "FLOAT", default_value_t = 0.0)]
    photon_radius: Float,

    /// Path to the output image (.png or .exr).
    #[arg(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        default_value = "render.png",
        help = "Write the final image to the given filename."
    )]
    image_file: String,

    /// Name of the built-in scene to render.
    #[arg(value_name = "SCENE", default_value = "cornell")]
    scene: String,
}

impl Options {
    /// Returns the number of worker threads to use.
    fn threads(&self) -> usize {
        if self.n_threads == 0 {
            num_cpus::get()
        } else {
            self.n_threads
        }
    }
}

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = render(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}

/// Build the scene, run the photon emission pass, render and write the
/// image.
///
/// * `options` - The command line options.
fn render(options: &Options) -> Result<(), String> {
    let resolution = Point2i::new(options.width as Int, options.height as Int);
    let (scene, camera) = scenes::build(&options.scene, resolution)?;

    let mut integrator = PhotonMapIntegrator::new(options.photon_count, options.photon_radius);
    integrator.preprocess(&scene)?;

    let sampler = RandomSampler::new(None);
    let film = integrators::render(
        &scene,
        &camera,
        &integrator,
        &sampler,
        options.samples_per_pixel,
        options.threads(),
    );

    film.write(&options.image_file)
}
