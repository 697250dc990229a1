//! Map generation pipeline: parameters, noise fields, rendering and saving

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{debug, info};

use crate::error::MapgenError;
use crate::export::write_png;
use crate::grid::Grid;
use crate::perlin::generate_perlin_noise_2d;
use crate::terrain::TERRAIN_CELL;
use crate::textures::{MapImages, render_map};

/// Lattice cells across the full-resolution mask field
pub const MASK_SCALE: (usize, usize) = (8, 8);
/// Lattice cells across the coarse terrain field
pub const TERRAIN_SCALE: (usize, usize) = (64, 64);

pub const IMAGE_FILE: &str = "map_image.png";
pub const TEXTURE_FILE: &str = "map_texture.png";

/// Parameters controlling map generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapgenParams {
    /// Side length of the square output images in pixels
    pub size: usize,
    /// Seed for the gradient lattices of both noise fields
    pub seed: u64,
}

impl Default for MapgenParams {
    fn default() -> Self {
        MapgenParams {
            size: 2048,
            seed: 0,
        }
    }
}

impl MapgenParams {
    /// Check that the size splits evenly into terrain blocks
    pub fn validate(&self) -> Result<(), MapgenError> {
        if self.size == 0 || self.size % TERRAIN_CELL != 0 {
            return Err(MapgenError::InvalidSize {
                size: self.size,
                cell: TERRAIN_CELL,
            });
        }
        Ok(())
    }

    /// Side length of the terrain field
    pub fn terrain_size(&self) -> usize {
        self.size / TERRAIN_CELL
    }
}

/// The two noise fields a map is rendered from
#[derive(Debug, Clone)]
pub struct NoiseFields {
    pub mask: Grid<f64>,
    pub terrain: Grid<f64>,
}

/// Generate the mask and terrain fields
///
/// Both fields draw their gradients from one RNG seeded with `params.seed`,
/// mask first, so a seed fixes the whole map.
pub fn generate_fields(params: &MapgenParams) -> Result<NoiseFields, MapgenError> {
    params.validate()?;

    let mut rng = Pcg64Mcg::seed_from_u64(params.seed);
    let size = params.size;
    let terrain_size = params.terrain_size();

    let mask = generate_perlin_noise_2d((size, size), MASK_SCALE, (false, false), &mut rng)?;
    debug!(
        "mask field {}x{}, scale {:?}, range {:?}",
        mask.width(),
        mask.height(),
        MASK_SCALE,
        mask.range()
    );

    let terrain = generate_perlin_noise_2d(
        (terrain_size, terrain_size),
        TERRAIN_SCALE,
        (false, false),
        &mut rng,
    )?;
    debug!(
        "terrain field {}x{}, scale {:?}, range {:?}",
        terrain.width(),
        terrain.height(),
        TERRAIN_SCALE,
        terrain.range()
    );

    Ok(NoiseFields { mask, terrain })
}

/// Generate both images of a map
pub fn generate(params: &MapgenParams) -> Result<MapImages, MapgenError> {
    info!("Generating {0}x{0} map with seed {1}", params.size, params.seed);

    let fields = generate_fields(params)?;
    let map = render_map(&fields.mask, &fields.terrain);

    let total = map.counts.total().max(1) as f64;
    info!(
        "Coverage: rock {:.1}%, edge {:.1}%, sand {:.1}%",
        100.0 * map.counts.rock as f64 / total,
        100.0 * map.counts.edge as f64 / total,
        100.0 * map.counts.sand as f64 / total,
    );

    Ok(map)
}

impl MapImages {
    /// Write `map_image.png` and `map_texture.png` into `dir`
    ///
    /// # Returns
    /// * `(PathBuf, PathBuf)` - Paths of the image and the texture
    pub fn save(&self, dir: &Path) -> Result<(PathBuf, PathBuf), MapgenError> {
        let image_path = dir.join(IMAGE_FILE);
        let texture_path = dir.join(TEXTURE_FILE);

        write_png(&self.image, &image_path)?;
        info!("Wrote {}", image_path.display());
        write_png(&self.texture, &texture_path)?;
        info!("Wrote {}", texture_path.display());

        Ok((image_path, texture_path))
    }
}
