//! Terrain classification
//!
//! Thresholds on the mask field pick a band for each pixel, and the coarse
//! terrain field supplies a brightness offset shared by each 16x16 block.

/// Mask values above this are rock
pub const ROCK_THRESHOLD: f64 = 0.3;
/// Mask values above this (and up to the rock threshold) form the outline
pub const EDGE_THRESHOLD: f64 = 0.2;
/// Side length in pixels of the block sharing one terrain sample
pub const TERRAIN_CELL: usize = 16;
/// Largest brightness offset, reached at terrain value 1.0
pub const MAX_BRIGHTNESS: u8 = 20;

/// Terrain band chosen for a pixel from its mask value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Rock,
    Edge,
    Sand,
}

impl Band {
    /// Classify a mask value; values equal to a threshold fall into the lower band
    pub fn classify(mask: f64) -> Self {
        if mask > ROCK_THRESHOLD {
            Band::Rock
        } else if mask > EDGE_THRESHOLD {
            Band::Edge
        } else {
            Band::Sand
        }
    }
}

/// Whether a pixel is drawn black in the binary image
pub fn is_solid(mask: f64) -> bool {
    mask > EDGE_THRESHOLD
}

/// Map a terrain value in [-1, 1] to an integer offset in [0, 20]
///
/// The scaled value is truncated toward zero, so only exactly 1.0 reaches 20.
pub fn brightness_offset(terrain: f64) -> u8 {
    let scaled = ((terrain + 1.0) / 2.0) * MAX_BRIGHTNESS as f64;
    (scaled as i64).clamp(0, MAX_BRIGHTNESS as i64) as u8
}

/// Terrain field coordinates for pixel (x, y)
pub fn terrain_cell(x: usize, y: usize) -> (usize, usize) {
    (x / TERRAIN_CELL, y / TERRAIN_CELL)
}
