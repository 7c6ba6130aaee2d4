//! Decorative star field generation.
//!
//! Stars are generated once, in pixel space, by the screen that owns them.
//! Nothing here keeps state between calls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Default number of stars on a screen
pub const DEFAULT_STAR_COUNT: usize = 150;

/// Smallest star diameter (inclusive)
pub const MIN_STAR_SIZE: f64 = 1.0;
/// Largest star diameter (exclusive)
pub const MAX_STAR_SIZE: f64 = 4.0;
/// Dimmest star opacity (inclusive)
pub const MIN_STAR_OPACITY: f64 = 0.2;
/// Brightest star opacity (inclusive)
pub const MAX_STAR_OPACITY: f64 = 1.0;
/// Upper bound (exclusive) of the twinkle phase delay, in seconds
pub const MAX_TWINKLE_DELAY: f64 = 3.0;

/// A single decorative point in the background
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Unique within one generated batch, in `0..count`
    pub id: usize,
    /// Horizontal position in pixels, `0 <= x < width`
    pub x: f64,
    /// Vertical position in pixels, `0 <= y < height`
    pub y: f64,
    /// Diameter in pixels, `1 <= size < 4`
    pub size: f64,
    /// Base opacity, `0.2 <= opacity <= 1.0`
    pub opacity: f64,
    /// Phase offset of the twinkle effect in seconds
    pub twinkle_delay: f64,
}

impl Star {
    /// Opacity at `elapsed` seconds when twinkling is enabled.
    ///
    /// Oscillates between 60% and 100% of the base opacity and never leaves
    /// the valid opacity range.
    pub fn twinkle_opacity(&self, elapsed: f64) -> f64 {
        let phase = (elapsed + self.twinkle_delay) * std::f64::consts::PI * 2.0 / MAX_TWINKLE_DELAY;
        let factor = 0.8 + 0.2 * phase.sin();
        (self.opacity * factor).clamp(MIN_STAR_OPACITY, MAX_STAR_OPACITY)
    }
}

/// Draw a uniform value from `[0, bound)`, or 0 for an empty or unbounded range
fn coordinate<R: Rng + ?Sized>(rng: &mut R, bound: f64) -> f64 {
    if bound.is_finite() && bound > 0.0 {
        rng.gen_range(0.0..bound)
    } else {
        0.0
    }
}

/// Generate `count` randomly placed stars inside a `width` x `height` rectangle.
pub fn generate_stars<R: Rng + ?Sized>(count: usize, width: f64, height: f64, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|id| Star {
            id,
            x: coordinate(rng, width),
            y: coordinate(rng, height),
            size: rng.gen_range(MIN_STAR_SIZE..MAX_STAR_SIZE),
            opacity: rng.gen_range(MIN_STAR_OPACITY..=MAX_STAR_OPACITY),
            twinkle_delay: rng.gen_range(0.0..MAX_TWINKLE_DELAY),
        })
        .collect()
}

/// An immutable batch of stars together with the rectangle they were placed in
#[derive(Debug, Clone, PartialEq)]
pub struct StarField {
    stars: Vec<Star>,
    width: f64,
    height: f64,
}

impl StarField {
    /// Generate a field; a seed makes the layout reproducible
    pub fn generate(count: usize, width: f64, height: f64, seed: Option<u64>) -> Self {
        let stars = match seed {
            Some(seed) => generate_stars(count, width, height, &mut StdRng::seed_from_u64(seed)),
            None => generate_stars(count, width, height, &mut rand::thread_rng()),
        };
        tracing::debug!(count, width, height, ?seed, "Generated star field");
        Self { stars, width, height }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Width of the rectangle the stars were generated in
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height of the rectangle the stars were generated in
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map a star onto a target rectangle of `target_width` x `target_height`.
    ///
    /// Positions are scaled proportionally, so the field always covers the
    /// target even after the terminal has been resized.
    pub fn project(&self, star: &Star, target_width: f64, target_height: f64) -> (f64, f64) {
        let sx = if self.width > 0.0 { target_width / self.width } else { 0.0 };
        let sy = if self.height > 0.0 { target_height / self.height } else { 0.0 };
        (star.x * sx, star.y * sy)
    }
}
