//! Film

use crate::base::*;
use crate::geometry::*;
use crate::image_io::write_image;
use crate::spectrum::Spectrum;

/// A single film pixel accumulating radiance samples.
#[derive(Copy, Clone, Default)]
struct Pixel {
    /// Sum of radiance samples.
    sum: Spectrum,

    /// Number of samples accumulated.
    n_samples: Float,
}

/// Film models the sensing device in the simulated camera. It accumulates
/// radiance samples per pixel and resolves them into the final image.
pub struct Film {
    /// The overall image resolution in pixels.
    pub full_resolution: Point2i,

    /// The pixels, in row-major order.
    pixels: Vec<Pixel>,
}

impl Film {
    /// Create a new `Film`.
    ///
    /// * `full_resolution` - The overall image resolution in pixels.
    pub fn new(full_resolution: Point2i) -> Self {
        let n = (full_resolution.x * full_resolution.y) as usize;
        Self {
            full_resolution,
            pixels: vec![Pixel::default(); n],
        }
    }

    /// Add a radiance sample for a pixel.
    ///
    /// * `p` - The pixel in raster coordinates.
    /// * `l` - The radiance sample.
    pub fn add_sample(&mut self, p: &Point2i, l: Spectrum) {
        let offset = (p.y * self.full_resolution.x + p.x) as usize;
        let pixel = &mut self.pixels[offset];
        pixel.sum += l;
        pixel.n_samples += 1.0;
    }

    /// Resolve the accumulated samples into per-pixel radiance values in
    /// row-major order.
    pub fn to_rgb(&self) -> Vec<Spectrum> {
        self.pixels
            .iter()
            .map(|pixel| {
                if pixel.n_samples > 0.0 {
                    pixel.sum / pixel.n_samples
                } else {
                    Spectrum::ZERO
                }
            })
            .collect()
    }

    /// Write the resolved image to the given file. The format is selected
    /// from the file extension.
    ///
    /// * `path` - Output file path.
    pub fn write(&self, path: &str) -> Result<(), String> {
        write_image(
            path,
            &self.to_rgb(),
            self.full_resolution.x as usize,
            self.full_resolution.y as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_samples() {
        let mut film = Film::new(Point2i::new(2, 1));
        let p = Point2i::new(1, 0);
        film.add_sample(&p, Spectrum::new(1.0));
        film.add_sample(&p, Spectrum::new(3.0));

        let rgb = film.to_rgb();
        assert!(rgb[0].is_black());
        assert_eq!(rgb[1], Spectrum::new(2.0));
    }
}
