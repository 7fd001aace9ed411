//! Image I/O

use crate::base::*;
use crate::spectrum::Spectrum;

/// Write an image. The output format is selected from the file extension:
/// OpenEXR for `.exr`, and gamma-corrected 8-bit output for the formats the
/// `image` crate supports (e.g. `.png`).
///
/// * `path`   - Output file path.
/// * `pixels` - Per-pixel radiance values in row-major order.
/// * `width`  - Width of the image.
/// * `height` - Height of the image.
pub fn write_image(
    path: &str,
    pixels: &[Spectrum],
    width: usize,
    height: usize,
) -> Result<(), String> {
    assert_eq!(width * height, pixels.len());
    match get_extension_from_filename(path) {
        Some("exr") => write_exr(path, pixels, width, height),
        Some(_extension) => write_8_bit(path, pixels, width, height),
        None => Err(format!(
            "Can't determine file type from suffix of filename {path}."
        )),
    }
}

/// Write a single layer OpenEXR file.
///
/// * `path`   - Output file path.
/// * `pixels` - Per-pixel radiance values in row-major order.
/// * `width`  - Width of the image.
/// * `height` - Height of the image.
fn write_exr(path: &str, pixels: &[Spectrum], width: usize, height: usize) -> Result<(), String> {
    exr::prelude::write_rgb_file(path, width, height, |x, y| {
        let rgb = pixels[y * width + x].to_rgb();
        (rgb[0], rgb[1], rgb[2])
    })
    .map_err(|e| format!("Error writing EXR image {path}. {e}."))?;

    info!("Wrote EXR image {path} ({width} x {height})");
    Ok(())
}

/// Write a gamma-corrected 8-bit image.
///
/// * `path`   - Output file path.
/// * `pixels` - Per-pixel radiance values in row-major order.
/// * `width`  - Width of the image.
/// * `height` - Height of the image.
fn write_8_bit(path: &str, pixels: &[Spectrum], width: usize, height: usize) -> Result<(), String> {
    let img = image::RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let rgb = pixels[y as usize * width + x as usize].to_rgb();
        image::Rgb([to_byte(rgb[0]), to_byte(rgb[1]), to_byte(rgb[2])])
    });
    img.save(path)
        .map_err(|e| format!("Error writing image {path}. {e}."))?;

    info!("Wrote image {path} ({width} x {height})");
    Ok(())
}

/// Converts a linear radiance value to a gamma-corrected 8-bit value.
///
/// * `v` - The linear value.
fn to_byte(v: Float) -> u8 {
    (clamp(255.0 * gamma_correct(v), 0.0, 255.0) + 0.5) as u8
}

/// Returns the lowercased extension of a filename.
///
/// * `path` - The file path.
fn get_extension_from_filename(path: &str) -> Option<&str> {
    std::path::Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_detection() {
        assert_eq!(get_extension_from_filename("render.exr"), Some("exr"));
        assert_eq!(get_extension_from_filename("out/render.png"), Some("png"));
        assert_eq!(get_extension_from_filename("render"), None);
    }

    #[test]
    fn byte_conversion_clamps() {
        assert_eq!(to_byte(0.0), 0);
        assert_eq!(to_byte(1.0), 255);
        assert_eq!(to_byte(2.0), 255);
        assert_eq!(to_byte(-1.0), 0);
    }
}
