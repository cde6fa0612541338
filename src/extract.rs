//! Representative colors from raw RGBA pixel data.
//!
//! A bounded k-means style refinement in plain RGB space:
//!
//! 1. Subsample the buffer at a fixed pixel stride (at most ~[`MAX_SAMPLES`]).
//! 2. Seed one centroid per requested color from the first samples, in order.
//! 3. Run exactly [`CLUSTER_ITERATIONS`] assign/update rounds. A centroid that
//!    attracts no samples in a round keeps its previous value.
//! 4. Emit centroids as hex strings in seed order.
//!
//! There is no randomness anywhere, so identical input gives identical output.

use palette::Srgb;
use tracing::{debug, warn};

use crate::convert::{Rgb, rgb_to_hex};

pub const MAX_SAMPLES: usize = 5000;
pub const CLUSTER_ITERATIONS: usize = 5;
pub const DEFAULT_COLOR_COUNT: usize = 8;

const BYTES_PER_PIXEL: usize = 4;

// ------------------------------------------------------------
// Sampling
// ------------------------------------------------------------

/// Walk `pixels` (interleaved RGBA) at a fixed stride, dropping alpha.
fn sample_pixels(pixels: &[u8]) -> Vec<Srgb<u8>> {
    let pixel_count = pixels.len() / BYTES_PER_PIXEL;
    let sample_size = pixel_count.min(MAX_SAMPLES);
    let step = if sample_size == 0 {
        1
    } else {
        (pixel_count / sample_size).max(1)
    };

    pixels
        .chunks_exact(BYTES_PER_PIXEL)
        .step_by(step)
        .map(|px| Srgb::new(px[0], px[1], px[2]))
        .collect()
}

// ------------------------------------------------------------
// Clustering
// ------------------------------------------------------------

#[inline]
fn distance(px: Srgb<u8>, c: Rgb) -> f64 {
    let dr = f64::from(px.red) - c.r;
    let dg = f64::from(px.green) - c.g;
    let db = f64::from(px.blue) - c.b;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Index of the nearest centroid; the lowest index wins ties.
/// `centroids` must not be empty.
fn nearest(sample: Srgb<u8>, centroids: &[Rgb]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, &c) in centroids.iter().enumerate() {
        let d = distance(sample, c);
        if d < best_dist {
            best_dist = d;
            best_idx = idx;
        }
    }
    best_idx
}

/// Per-cluster running sums for one round.
#[derive(Clone, Copy, Default)]
struct Accumulator {
    r: f64,
    g: f64,
    b: f64,
    len: usize,
}

impl Accumulator {
    fn push(&mut self, px: Srgb<u8>) {
        self.r += f64::from(px.red);
        self.g += f64::from(px.green);
        self.b += f64::from(px.blue);
        self.len += 1;
    }

    fn mean(&self) -> Option<Rgb> {
        if self.len == 0 {
            return None;
        }
        let n = self.len as f64;
        Some(Rgb::new(self.r / n, self.g / n, self.b / n))
    }
}

fn refine(samples: &[Srgb<u8>], centroids: &mut [Rgb]) {
    if centroids.is_empty() {
        return;
    }
    let mut clusters = vec![Accumulator::default(); centroids.len()];

    for iter in 0..CLUSTER_ITERATIONS {
        clusters.fill(Accumulator::default());

        for &px in samples {
            clusters[nearest(px, centroids)].push(px);
        }

        for (centroid, cluster) in centroids.iter_mut().zip(&clusters) {
            if let Some(mean) = cluster.mean() {
                *centroid = mean;
            }
        }

        let empty = clusters.iter().filter(|c| c.len == 0).count();
        debug!(iter, empty, "cluster round complete");
    }
}

/// Extract `count` representative colors from an RGBA buffer.
///
/// Output order is seed order, not frequency. When the buffer holds fewer
/// sampled pixels than `count`, only that many colors are returned.
pub fn extract_colors_from_image(pixels: &[u8], count: usize) -> Vec<String> {
    let samples = sample_pixels(pixels);

    if samples.len() < count {
        warn!(
            samples = samples.len(),
            count, "fewer sampled pixels than requested colors"
        );
    }
    debug!(
        bytes = pixels.len(),
        samples = samples.len(),
        count,
        "extracting colors"
    );

    let mut centroids: Vec<Rgb> = samples.iter().take(count).map(|&px| Rgb::from(px)).collect();
    refine(&samples, &mut centroids);

    centroids.into_iter().map(rgb_to_hex).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(rgba: [u8; 4], pixels: usize) -> Vec<u8> {
        rgba.iter().copied().cycle().take(pixels * 4).collect()
    }

    /// Deterministic pseudo-image: a few color bands with some variation.
    fn banded(pixels: usize) -> Vec<u8> {
        let bands = [[220u8, 40, 40], [40, 200, 60], [30, 60, 210], [240, 240, 240]];
        (0..pixels)
            .flat_map(|i| {
                let [r, g, b] = bands[(i / 97) % bands.len()];
                let jitter = (i % 7) as u8;
                [r.saturating_sub(jitter), g.saturating_add(jitter), b, 255]
            })
            .collect()
    }

    #[test]
    fn small_buffer_samples_every_pixel() {
        let buf = uniform([1, 2, 3, 4], 10);
        assert_eq!(sample_pixels(&buf).len(), 10);
    }

    #[test]
    fn large_buffer_uses_stride() {
        // 12_000 pixels -> stride 2 -> 6_000 samples
        let buf = uniform([0, 0, 0, 255], 12_000);
        assert_eq!(sample_pixels(&buf).len(), 6_000);

        // 250_000 pixels -> stride 50 -> exactly 5_000 samples
        let buf = uniform([0, 0, 0, 255], 250_000);
        assert_eq!(sample_pixels(&buf).len(), MAX_SAMPLES);
    }

    #[test]
    fn sampling_discards_alpha_and_trailing_bytes() {
        let buf = [9, 8, 7, 0, 6, 5, 4, 128, 1, 2];
        assert_eq!(
            sample_pixels(&buf),
            vec![Srgb::new(9, 8, 7), Srgb::new(6, 5, 4)]
        );
    }

    #[test]
    fn uniform_image_yields_uniform_palette() {
        let buf = uniform([10, 20, 30, 255], 800);
        for k in [1, 3, DEFAULT_COLOR_COUNT, 12] {
            assert_eq!(extract_colors_from_image(&buf, k), vec!["#0a141e".to_owned(); k]);
        }
    }

    #[test]
    fn output_length_matches_count() {
        let buf = banded(40_000);
        for k in 1..=16 {
            assert_eq!(extract_colors_from_image(&buf, k).len(), k);
        }
    }

    #[test]
    fn deterministic() {
        let buf = banded(30_000);
        assert_eq!(
            extract_colors_from_image(&buf, 8),
            extract_colors_from_image(&buf, 8)
        );
    }

    #[test]
    fn duplicate_seeds_still_separate() {
        let mut buf = uniform([255, 0, 0, 255], 50);
        buf.extend(uniform([0, 0, 255, 255], 50));
        // Both seeds are red. Round one hands every sample to seed 0 (ties),
        // pulling it to purple; from round two it owns blue and seed 1 red.
        assert_eq!(
            extract_colors_from_image(&buf, 2),
            vec!["#0000ff".to_owned(), "#ff0000".to_owned()]
        );
    }

    #[test]
    fn distinct_seeds_find_both_colors() {
        let mut buf = Vec::new();
        for i in 0..100 {
            let px = if i % 2 == 0 { [255, 0, 0, 255] } else { [0, 0, 255, 255] };
            buf.extend_from_slice(&px);
        }
        assert_eq!(
            extract_colors_from_image(&buf, 2),
            vec!["#ff0000".to_owned(), "#0000ff".to_owned()]
        );
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let centroids = [Rgb::new(0.0, 0.0, 0.0), Rgb::new(20.0, 0.0, 0.0)];
        assert_eq!(nearest(Srgb::new(10, 0, 0), &centroids), 0);
        assert_eq!(nearest(Srgb::new(11, 0, 0), &centroids), 1);
    }

    #[test]
    fn empty_cluster_keeps_centroid() {
        let samples = [Srgb::new(0, 0, 0), Srgb::new(2, 2, 2)];
        let mut centroids = [Rgb::new(1.0, 1.0, 1.0), Rgb::new(200.0, 200.0, 200.0)];
        refine(&samples, &mut centroids);
        assert_eq!(centroids[0], Rgb::new(1.0, 1.0, 1.0));
        assert_eq!(centroids[1], Rgb::new(200.0, 200.0, 200.0));
    }

    #[test]
    fn zero_count_on_nonempty_buffer_is_empty() {
        assert!(extract_colors_from_image(&[10, 20, 30, 255], 0).is_empty());
        assert!(extract_colors_from_image(&banded(20_000), 0).is_empty());
    }

    #[test]
    fn refine_without_centroids_is_a_no_op() {
        let samples = [Srgb::new(1, 2, 3), Srgb::new(4, 5, 6)];
        let mut centroids: [Rgb; 0] = [];
        refine(&samples, &mut centroids);
    }

    #[test]
    fn degenerate_inputs_do_not_panic() {
        assert!(extract_colors_from_image(&[], 8).is_empty());
        assert!(extract_colors_from_image(&[1, 2, 3], 8).is_empty());
        assert_eq!(extract_colors_from_image(&uniform([5, 5, 5, 0], 3), 8).len(), 3);
        assert!(extract_colors_from_image(&uniform([5, 5, 5, 0], 3), 0).is_empty());
    }
}
