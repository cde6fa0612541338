//! Ten-step lightness ramps anchored on a base color.
//!
//! Hue and saturation of the base color are held fixed; only lightness moves.
//! Steps `0..=BASE_INDEX` interpolate from [`MAX_LIGHTNESS`] down to the base
//! lightness, the remaining steps continue down to [`MIN_LIGHTNESS`]. The
//! step at `BASE_INDEX` is the base color itself.

use tracing::{trace, warn};

use crate::convert::{Hsl, hex_to_hsl, hsl_to_hex};

pub const SCALE_STEPS: usize = 10;
pub const BASE_INDEX: usize = 4;
pub const MAX_LIGHTNESS: f64 = 0.98;
pub const MIN_LIGHTNESS: f64 = 0.05;

const FALLBACK_HEX: &str = "#000000";

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Lightness of ramp step `index` for a base color of lightness `base`.
fn step_lightness(index: usize, base: f64) -> f64 {
    let l = if index <= BASE_INDEX {
        let t = index as f64 / BASE_INDEX as f64;
        lerp(MAX_LIGHTNESS, base, t)
    } else {
        let t = (index - BASE_INDEX) as f64 / (SCALE_STEPS - 1 - BASE_INDEX) as f64;
        lerp(base, MIN_LIGHTNESS, t)
    };
    l.clamp(0.0, 1.0)
}

/// Build the ramp for `base_hex`, lightest first.
///
/// An unparseable base yields ten copies of `#000000` rather than an error.
pub fn generate_color_scale(base_hex: &str) -> Vec<String> {
    let base = match hex_to_hsl(base_hex) {
        Ok(hsl) => hsl,
        Err(err) => {
            warn!(base_hex, %err, "invalid base color, using black scale");
            return vec![FALLBACK_HEX.to_owned(); SCALE_STEPS];
        }
    };

    (0..SCALE_STEPS)
        .map(|i| {
            let l = step_lightness(i, base.l);
            trace!(step = i, lightness = l);
            hsl_to_hex(Hsl { l, ..base })
        })
        .collect()
}
