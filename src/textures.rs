//! Map rendering: turns the mask and terrain noise fields into pixel grids
//!
//! Two images come out of a single pass over the mask field: a binary image
//! (black where the mask is solid) and a colored texture with rock, outline and
//! sand bands whose brightness follows the coarse terrain field.

use image::{Rgb, RgbImage};
use tracing::debug;

use crate::grid::Grid;
use crate::terrain::{Band, brightness_offset, is_solid, terrain_cell};

// ============================================================================
// Palette
// ============================================================================

/// Background of both images before any pixel is drawn
pub const BACKGROUND: [u8; 3] = [255, 255, 255];
/// Solid pixels of the binary image
pub const SOLID: [u8; 3] = [0, 0, 0];

const ROCK_BASE: [u8; 3] = [50, 50, 50];
const EDGE_COLOR: [u8; 3] = [0, 0, 0];
const SAND_BASE: [u8; 3] = [215, 199, 160];

/// Color of a texture pixel
///
/// # Arguments
/// * `band` - Terrain band of the pixel
/// * `v` - Brightness offset in [0, 20], added to every channel of rock and sand
///
/// # Returns
/// * `Rgb<u8>` - The pixel color; the brightest sand channel is 235
pub fn band_color(band: Band, v: u8) -> Rgb<u8> {
    match band {
        Band::Rock => Rgb(ROCK_BASE.map(|c| c + v)),
        Band::Edge => Rgb(EDGE_COLOR),
        Band::Sand => Rgb(SAND_BASE.map(|c| c + v)),
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Number of texture pixels in each band
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandCounts {
    pub rock: usize,
    pub edge: usize,
    pub sand: usize,
}

impl BandCounts {
    fn record(&mut self, band: Band) {
        match band {
            Band::Rock => self.rock += 1,
            Band::Edge => self.edge += 1,
            Band::Sand => self.sand += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.rock + self.edge + self.sand
    }
}

/// The binary image and the colored texture of one map
#[derive(Debug, Clone)]
pub struct MapImages {
    pub image: RgbImage,
    pub texture: RgbImage,
    pub counts: BandCounts,
}

/// Render both images of a map
///
/// The output matches the mask field in size. Every pixel reads the terrain
/// sample of its 16x16 block.
///
/// # Panics
/// If the terrain field has fewer samples than the mask has 16x16 blocks.
///
/// # Arguments
/// * `mask` - Full-resolution mask noise
/// * `terrain` - Coarse terrain noise, one sample per 16x16 block
///
/// # Returns
/// * `MapImages` - Binary image, colored texture and band coverage
pub fn render_map(mask: &Grid<f64>, terrain: &Grid<f64>) -> MapImages {
    let width = mask.width() as u32;
    let height = mask.height() as u32;

    let mut image = RgbImage::from_pixel(width, height, Rgb(BACKGROUND));
    let mut texture = RgbImage::from_pixel(width, height, Rgb(BACKGROUND));
    let mut counts = BandCounts::default();

    if width > 0 && height > 0 {
        let (last_x, last_y) = terrain_cell(mask.width() - 1, mask.height() - 1);
        assert!(
            last_x < terrain.width() && last_y < terrain.height(),
            "{}x{} terrain field does not cover a {}x{} mask",
            terrain.width(),
            terrain.height(),
            width,
            height
        );
    }

    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let m = mask[(x, y)];
            let t = terrain[terrain_cell(x, y)];

            let band = Band::classify(m);
            counts.record(band);
            texture.put_pixel(x as u32, y as u32, band_color(band, brightness_offset(t)));

            if is_solid(m) {
                image.put_pixel(x as u32, y as u32, Rgb(SOLID));
            }
        }
    }

    debug!(?counts, "rendered {}x{} map", width, height);

    MapImages { image, texture, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{EDGE_THRESHOLD, ROCK_THRESHOLD};

    #[test]
    fn test_band_color() {
        assert_eq!(band_color(Band::Rock, 0), Rgb([50, 50, 50]));
        assert_eq!(band_color(Band::Rock, 20), Rgb([70, 70, 70]));
        assert_eq!(band_color(Band::Edge, 13), Rgb([0, 0, 0]));
        assert_eq!(band_color(Band::Sand, 0), Rgb([215, 199, 160]));
        assert_eq!(band_color(Band::Sand, 20), Rgb([235, 219, 180]));
    }

    #[test]
    fn test_render_thresholds_exactly() {
        // One row of mask values straddling both thresholds, flat terrain
        let values = [
            -1.0,
            EDGE_THRESHOLD,
            f64::from_bits(EDGE_THRESHOLD.to_bits() + 1),
            ROCK_THRESHOLD,
            f64::from_bits(ROCK_THRESHOLD.to_bits() + 1),
            1.0,
        ];
        let mask = Grid::from_fn(values.len(), 1, |x, _| values[x]);
        let terrain = Grid::new(1, 1, 0.0);

        let map = render_map(&mask, &terrain);

        let sand = Rgb([225, 209, 170]);
        let edge = Rgb([0, 0, 0]);
        let rock = Rgb([60, 60, 60]);
        let expected_texture = [sand, sand, edge, edge, rock, rock];
        let expected_image = [BACKGROUND, BACKGROUND, SOLID, SOLID, SOLID, SOLID];

        for x in 0..values.len() {
            assert_eq!(*map.texture.get_pixel(x as u32, 0), expected_texture[x], "texture at {}", x);
            assert_eq!(*map.image.get_pixel(x as u32, 0), Rgb(expected_image[x]), "image at {}", x);
        }
        assert_eq!(map.counts, BandCounts { rock: 2, edge: 2, sand: 2 });
    }

    #[test]
    fn test_terrain_shared_per_block() {
        // Two terrain blocks side by side, all sand
        let mask = Grid::new(32, 16, -1.0);
        let terrain = Grid::from_fn(2, 1, |x, _| if x == 0 { -1.0 } else { 1.0 });

        let map = render_map(&mask, &terrain);

        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(*map.texture.get_pixel(x, y), Rgb([215, 199, 160]));
                assert_eq!(*map.texture.get_pixel(x + 16, y), Rgb([235, 219, 180]));
            }
        }
        assert!(map.image.pixels().all(|p| *p == Rgb(BACKGROUND)));
    }

    #[test]
    #[should_panic(expected = "does not cover")]
    fn test_short_terrain_field_panics() {
        // 32 px wide needs two terrain columns
        let mask = Grid::new(32, 16, 0.0);
        let terrain = Grid::new(1, 1, 0.0);
        render_map(&mask, &terrain);
    }

    #[test]
    fn test_dimensions_follow_mask() {
        let mask = Grid::new(48, 32, 0.5);
        let terrain = Grid::new(3, 2, 0.0);
        let map = render_map(&mask, &terrain);

        assert_eq!(map.image.dimensions(), (48, 32));
        assert_eq!(map.texture.dimensions(), (48, 32));
        assert_eq!(map.counts.total(), 48 * 32);
        assert!(map.image.pixels().all(|p| *p == Rgb(SOLID)));
    }
}
