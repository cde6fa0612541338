//! Color entry as typed by a user: hex, `r, g, b` or `h, s, l` notation.
//!
//! Each parser produces the hex string the rest of the engine consumes. The
//! `format_*` helpers go the other way for display.

use std::fmt;
use std::str::FromStr;

use crate::convert::{Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex};
use crate::error::ParseColorError;

/// Notation the user typed a color in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Hsl,
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        })
    }
}

impl FromStr for ColorFormat {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "hsl" => Ok(Self::Hsl),
            _ => Err(ParseColorError::UnknownFormat { name: s.to_owned() }),
        }
    }
}

/// Parse `value` written in `format` into a hex color.
///
/// Hex entry is checked more loosely than [`hex_to_rgb`]: `#abc` passes here
/// and is returned as is.
pub fn parse_color_entry(format: ColorFormat, value: &str) -> Result<String, ParseColorError> {
    match format {
        ColorFormat::Hex => parse_hex_entry(value),
        ColorFormat::Rgb => {
            let [r, g, b] = parse_components(value)?;
            for v in [r, g, b] {
                check_range(v, 0, 255)?;
            }
            Ok(rgb_to_hex(Rgb::new(r as f64, g as f64, b as f64)))
        }
        ColorFormat::Hsl => {
            let [h, s, l] = parse_components(value)?;
            check_range(h, 0, 360)?;
            check_range(s, 0, 100)?;
            check_range(l, 0, 100)?;
            Ok(hsl_to_hex(Hsl::new(
                h as f64 / 360.0,
                s as f64 / 100.0,
                l as f64 / 100.0,
            )))
        }
    }
}

fn parse_hex_entry(value: &str) -> Result<String, ParseColorError> {
    let body = value.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
    if let Some(ch) = body.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidDigit { ch });
    }
    match body.len() {
        3 | 6 => Ok(value.to_owned()),
        len => Err(ParseColorError::WrongLength { len }),
    }
}

fn parse_components(value: &str) -> Result<[i64; 3], ParseColorError> {
    let parts: Vec<&str> = value.split(',').collect();
    let &[a, b, c] = parts.as_slice() else {
        return Err(ParseColorError::ComponentCount { found: parts.len() });
    };
    Ok([leading_int(a)?, leading_int(b)?, leading_int(c)?])
}

/// Integer prefix of a trimmed field: `" 12px"` reads as 12, `"px"` fails.
fn leading_int(field: &str) -> Result<i64, ParseColorError> {
    let field = field.trim();
    let sign_len = usize::from(field.starts_with(['+', '-']));
    let digits_end = field[sign_len..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(field.len(), |i| i + sign_len);

    field[..digits_end]
        .parse()
        .map_err(|_| ParseColorError::NotAnInteger {
            value: field.to_owned(),
        })
}

fn check_range(value: i64, min: i64, max: i64) -> Result<(), ParseColorError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ParseColorError::OutOfRange { value, min, max })
    }
}

/// `"r, g, b"` for a hex color, or `"0, 0, 0"` when it does not parse.
pub fn format_rgb(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Ok(Rgb { r, g, b }) => format!("{}, {}, {}", r.round(), g.round(), b.round()),
        Err(_) => "0, 0, 0".to_owned(),
    }
}

/// `"h, s, l"` in degrees and percent, or `"0, 0, 0"` when it does not parse.
pub fn format_hsl(hex: &str) -> String {
    match hex_to_hsl(hex) {
        Ok(Hsl { h, s, l }) => format!(
            "{}, {}, {}",
            (h * 360.0).round(),
            (s * 100.0).round(),
            (l * 100.0).round()
        ),
        Err(_) => "0, 0, 0".to_owned(),
    }
}
