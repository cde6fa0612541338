//! Light-or-dark text recommendation for a background color.

use std::fmt;

use crate::convert::{Rgb, hex_to_rgb};

/// Brightness above which a background takes dark text.
pub const BRIGHTNESS_THRESHOLD: f64 = 128.0;

/// Text color to place on top of a background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextColor {
    Light,
    Dark,
}

impl TextColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Luma-weighted brightness, `0.0..=255.0` for in-range input.
pub fn perceived_brightness(rgb: Rgb) -> f64 {
    (rgb.r * 299.0 + rgb.g * 587.0 + rgb.b * 114.0) / 1000.0
}

/// Recommend text color for a `hex` background. Unparseable input gets
/// [`TextColor::Light`].
pub fn text_color_for_background(hex: &str) -> TextColor {
    match hex_to_rgb(hex) {
        Ok(rgb) if perceived_brightness(rgb) > BRIGHTNESS_THRESHOLD => TextColor::Dark,
        _ => TextColor::Light,
    }
}
