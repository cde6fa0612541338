//! Encoded image bytes -> bounded RGBA buffer -> palette.

use image::{GenericImageView, RgbaImage, imageops::FilterType};
use tracing::debug;

use crate::error::ImageSourceError;
use crate::extract::extract_colors_from_image;

/// Images wider than this are downscaled before clustering.
pub const MAX_IMAGE_WIDTH: u32 = 500;

/// Palette size requested for a whole image.
pub const DEFAULT_IMAGE_COLOR_COUNT: usize = 12;

/// Target dimensions: width capped at [`MAX_IMAGE_WIDTH`], aspect ratio kept,
/// height truncated and never below 1.
fn bounded_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width <= MAX_IMAGE_WIDTH {
        return (width, height);
    }
    let h = u64::from(height) * u64::from(MAX_IMAGE_WIDTH) / u64::from(width);
    (MAX_IMAGE_WIDTH, u32::try_from(h).unwrap_or(u32::MAX).max(1))
}

/// Decode `input` and downscale it to at most [`MAX_IMAGE_WIDTH`] pixels wide.
pub fn decode_rgba(input: &[u8]) -> Result<RgbaImage, ImageSourceError> {
    let img = image::load_from_memory(input)?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(ImageSourceError::Empty);
    }

    let (out_w, out_h) = bounded_dimensions(w, h);
    debug!(w, h, out_w, out_h, "decoded image");

    if (out_w, out_h) == (w, h) {
        return Ok(img.to_rgba8());
    }
    Ok(image::imageops::resize(&img, out_w, out_h, FilterType::Triangle))
}

/// Decode `input` and extract `n_colors` representative colors from it.
pub fn extract_palette_bytes(
    input: &[u8],
    n_colors: usize,
) -> Result<Vec<String>, ImageSourceError> {
    let rgba = decode_rgba(input)?;
    Ok(extract_colors_from_image(rgba.as_raw(), n_colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    fn png(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(px));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn narrow_images_keep_their_size() {
        assert_eq!(bounded_dimensions(320, 200), (320, 200));
        assert_eq!(bounded_dimensions(500, 900), (500, 900));
    }

    #[test]
    fn wide_images_are_capped() {
        assert_eq!(bounded_dimensions(1000, 600), (500, 300));
        assert_eq!(bounded_dimensions(1920, 1080), (500, 281));
        assert_eq!(bounded_dimensions(5000, 3), (500, 1));
    }

    #[test]
    fn decode_downscales() {
        let rgba = decode_rgba(&png(800, 400, [1, 2, 3, 255])).unwrap();
        assert_eq!(rgba.dimensions(), (500, 250));
    }

    #[test]
    fn palette_of_solid_png() {
        let palette = extract_palette_bytes(&png(64, 64, [10, 20, 30, 255]), 4).unwrap();
        assert_eq!(palette, vec!["#0a141e".to_owned(); 4]);
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            decode_rgba(b"definitely not an image"),
            Err(ImageSourceError::Decode(_))
        ));
    }
}
