//! Color scales, contrast picks and image palettes.
//!
//! The Rust API lives in the submodules and is re-exported here. The
//! `#[wasm_bindgen]` functions at the bottom of this file expose the same
//! operations to JavaScript under camelCase names.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

pub mod contrast;
pub mod convert;
pub mod error;
pub mod extract;
pub mod image_source;
pub mod input;
pub mod scale;

pub use contrast::{TextColor, perceived_brightness, text_color_for_background};
pub use convert::{Hsl, Rgb, hex_to_hsl, hex_to_rgb, hsl_to_hex, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use error::{ImageSourceError, ParseColorError};
pub use extract::{DEFAULT_COLOR_COUNT, extract_colors_from_image};
pub use image_source::{DEFAULT_IMAGE_COLOR_COUNT, decode_rgba, extract_palette_bytes};
pub use input::{ColorFormat, format_hsl, format_rgb, parse_color_entry};
pub use scale::generate_color_scale;

// ------------------------------------------------------------
// JS helpers
// ------------------------------------------------------------

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn triple_object(keys: [&str; 3], values: [f64; 3]) -> Result<Object, JsValue> {
    let obj = Object::new();
    for (key, value) in keys.into_iter().zip(values) {
        Reflect::set(&obj, &JsValue::from_str(key), &JsValue::from_f64(value))?;
    }
    Ok(obj)
}

fn rgb_object(rgb: Rgb) -> Result<Object, JsValue> {
    triple_object(["r", "g", "b"], [rgb.r, rgb.g, rgb.b])
}

fn hsl_object(hsl: Hsl) -> Result<Object, JsValue> {
    triple_object(["h", "s", "l"], [hsl.h, hsl.s, hsl.l])
}

fn string_array(items: &[String]) -> Array {
    let arr = Array::new();
    for item in items {
        arr.push(&JsValue::from_str(item));
    }
    arr
}

// ------------------------------------------------------------
// Conversions
// ------------------------------------------------------------

/// `{ r, g, b }` for a 6-digit hex color. Throws on anything else.
#[wasm_bindgen(js_name = hexToRgb)]
pub fn js_hex_to_rgb(hex: &str) -> Result<Object, JsValue> {
    rgb_object(hex_to_rgb(hex).map_err(js_err)?)
}

#[wasm_bindgen(js_name = rgbToHex)]
pub fn js_rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    rgb_to_hex(Rgb::new(r, g, b))
}

#[wasm_bindgen(js_name = rgbToHsl)]
pub fn js_rgb_to_hsl(r: f64, g: f64, b: f64) -> Result<Object, JsValue> {
    hsl_object(rgb_to_hsl(Rgb::new(r, g, b)))
}

#[wasm_bindgen(js_name = hslToRgb)]
pub fn js_hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<Object, JsValue> {
    rgb_object(hsl_to_rgb(Hsl::new(h, s, l)))
}

#[wasm_bindgen(js_name = hexToHsl)]
pub fn js_hex_to_hsl(hex: &str) -> Result<Object, JsValue> {
    hsl_object(hex_to_hsl(hex).map_err(js_err)?)
}

#[wasm_bindgen(js_name = hslToHex)]
pub fn js_hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_hex(Hsl::new(h, s, l))
}

// ------------------------------------------------------------
// Scale / contrast
// ------------------------------------------------------------

#[wasm_bindgen(js_name = generateColorScale)]
pub fn js_generate_color_scale(base_hex: &str) -> Array {
    string_array(&generate_color_scale(base_hex))
}

/// `"light"` or `"dark"`.
#[wasm_bindgen(js_name = getTextColorForBackground)]
pub fn js_text_color_for_background(hex: &str) -> String {
    text_color_for_background(hex).as_str().to_owned()
}

// ------------------------------------------------------------
// Palette extraction
// ------------------------------------------------------------

/// Cluster an RGBA buffer (e.g. `ImageData.data`) into `count` colors.
#[wasm_bindgen(js_name = extractColorsFromImage)]
pub fn js_extract_colors_from_image(data: &[u8], count: Option<usize>) -> Array {
    string_array(&extract_colors_from_image(
        data,
        count.unwrap_or(DEFAULT_COLOR_COUNT),
    ))
}

/// Decode an encoded image (PNG, JPEG, ...), bound its width and extract a
/// palette from it.
#[wasm_bindgen(js_name = extractPalette)]
pub fn js_extract_palette(input: Vec<u8>, count: Option<usize>) -> Result<Array, JsValue> {
    let palette = extract_palette_bytes(&input, count.unwrap_or(DEFAULT_IMAGE_COLOR_COUNT))
        .map_err(js_err)?;
    Ok(string_array(&palette))
}

// ------------------------------------------------------------
// User entry
// ------------------------------------------------------------

/// Parse a color typed in `format` (`"hex"`, `"rgb"` or `"hsl"`).
#[wasm_bindgen(js_name = parseColorEntry)]
pub fn js_parse_color_entry(format: &str, value: &str) -> Result<String, JsValue> {
    let format: ColorFormat = format.parse().map_err(js_err)?;
    parse_color_entry(format, value).map_err(js_err)
}

#[wasm_bindgen(js_name = formatRgb)]
pub fn js_format_rgb(hex: &str) -> String {
    format_rgb(hex)
}

#[wasm_bindgen(js_name = formatHsl)]
pub fn js_format_hsl(hex: &str) -> String {
    format_hsl(hex)
}
