//! Gradient (Perlin) noise sampled on a regular grid
//!
//! A lattice of `scale.0 + 1` by `scale.1 + 1` random unit gradients is laid over the
//! field, so `scale` controls how many noise cells span each axis. Gradients are drawn
//! from the caller's RNG, which keeps generation reproducible for a given seed and
//! lets several fields share one stream.

use std::f64::consts::{PI, SQRT_2};

use glam::DVec2;
use rand::Rng;
use thiserror::Error;

use crate::grid::Grid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoiseError {
    #[error("noise field shape {rows}x{cols} has a zero dimension")]
    EmptyShape { rows: usize, cols: usize },
    #[error("feature scale {rows}x{cols} has a zero dimension")]
    EmptyScale { rows: usize, cols: usize },
}

/// Quintic fade curve 6t^5 - 15t^4 + 10t^3
fn interpolant(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Map sample `i` onto the lattice: returns the cell index and the offset inside it
fn lattice(i: usize, delta: f64, cells: usize) -> (usize, f64) {
    let u = i as f64 * delta;
    let cell = (u.floor() as usize).min(cells - 1);
    (cell, u - cell as f64)
}

/// Generate a `shape.0` rows by `shape.1` columns field of Perlin noise
///
/// # Arguments
/// * `shape` - Field size as (rows, columns)
/// * `scale` - Number of lattice cells along (rows, columns)
/// * `tileable` - Wrap the gradient lattice along (rows, columns)
/// * `rng` - Source of gradient angles; exactly `(scale.0 + 1) * (scale.1 + 1)` values are drawn
///
/// # Returns
/// * `Grid<f64>` - `shape.1` wide, `shape.0` high, values in [-1, 1]
pub fn generate_perlin_noise_2d<R: Rng + ?Sized>(
    shape: (usize, usize),
    scale: (usize, usize),
    tileable: (bool, bool),
    rng: &mut R,
) -> Result<Grid<f64>, NoiseError> {
    if shape.0 == 0 || shape.1 == 0 {
        return Err(NoiseError::EmptyShape { rows: shape.0, cols: shape.1 });
    }
    if scale.0 == 0 || scale.1 == 0 {
        return Err(NoiseError::EmptyScale { rows: scale.0, cols: scale.1 });
    }

    let mut gradients = Grid::from_fn(scale.1 + 1, scale.0 + 1, |_, _| {
        let angle = 2.0 * PI * rng.r#gen::<f64>();
        DVec2::new(angle.cos(), angle.sin())
    });

    if tileable.0 {
        for col in 0..=scale.1 {
            if let Some(&g) = gradients.get(col, 0) {
                gradients.set(col, scale.0, g);
            }
        }
    }
    if tileable.1 {
        for row in 0..=scale.0 {
            if let Some(&g) = gradients.get(0, row) {
                gradients.set(scale.1, row, g);
            }
        }
    }

    let delta = (scale.0 as f64 / shape.0 as f64, scale.1 as f64 / shape.1 as f64);

    let field = Grid::from_fn(shape.1, shape.0, |j, i| {
        let (row, fr) = lattice(i, delta.0, scale.0);
        let (col, fc) = lattice(j, delta.1, scale.1);
        let corner = |dr: usize, dc: usize| {
            gradients.get(col + dc, row + dr).copied().unwrap_or(DVec2::ZERO)
        };

        // Ramps from each corner
        let n00 = DVec2::new(fr, fc).dot(corner(0, 0));
        let n10 = DVec2::new(fr - 1.0, fc).dot(corner(1, 0));
        let n01 = DVec2::new(fr, fc - 1.0).dot(corner(0, 1));
        let n11 = DVec2::new(fr - 1.0, fc - 1.0).dot(corner(1, 1));

        let tr = interpolant(fr);
        let tc = interpolant(fc);
        let n0 = n00 * (1.0 - tr) + tr * n10;
        let n1 = n01 * (1.0 - tr) + tr * n11;
        SQRT_2 * ((1.0 - tc) * n0 + tc * n1)
    });

    Ok(field)
}
