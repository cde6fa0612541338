//! Conversions between hex strings, RGB triples and normalized HSL triples.
//!
//! RGB channels are kept as `f64` in `0.0..=255.0` so that HSL round trips do
//! not round until a hex string is produced.

use crate::error::ParseColorError;

/// RGB triple, channels nominally in `0.0..=255.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }
}

impl From<palette::Srgb<u8>> for Rgb {
    fn from(c: palette::Srgb<u8>) -> Self {
        Self::from([c.red, c.green, c.blue])
    }
}

/// HSL triple with every component in `0.0..=1.0`. Hue is a fraction of a
/// full turn, not degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Parse `#rrggbb` or `rrggbb` (any case). Shorthand and any other shape is
/// rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ParseColorError> {
    let body = hex.strip_prefix('#').unwrap_or(hex);

    if let Some(ch) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit { ch });
    }
    if body.len() != 6 {
        return Err(ParseColorError::WrongLength { len: body.len() });
    }

    // All six bytes are ASCII hex digits, so neither slicing nor parsing can fail.
    let channel = |i: usize| u8::from_str_radix(&body[i..i + 2], 16).unwrap_or_default();
    Ok(Rgb::from([channel(0), channel(2), channel(4)]))
}

/// Format as lowercase `#rrggbb`, rounding each channel to the nearest
/// integer. Out-of-range channels saturate to `00`/`ff`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb.r),
        to_byte(rgb.g),
        to_byte(rgb.b)
    )
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    // float -> int `as` casts saturate and map NaN to 0
    channel.round() as u8
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0, s, l)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;

    if s == 0.0 {
        let v = l * 255.0;
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
        hue_to_channel(p, q, h) * 255.0,
        hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
    )
}

/// Piecewise-linear hue interpolation between `p` and `q`.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ParseColorError> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}
