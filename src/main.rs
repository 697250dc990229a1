//! Command line entry point for the map generator

mod error;
mod export;
mod grid;
mod mapgen;
mod perlin;
mod terrain;
mod textures;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use mapgen::MapgenParams;

/// Generate a binary map mask and a colored terrain texture from Perlin noise
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image size in pixels (width and height)
    #[arg(short, long, default_value_t = 2048)]
    size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let params = MapgenParams {
        size: args.size,
        ..MapgenParams::default()
    };

    let map = mapgen::generate(&params)
        .with_context(|| format!("Failed to generate a {0}x{0} map", params.size))?;
    map.save(Path::new("."))
        .context("Failed to save map images")?;

    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_defaults_to_2048() {
        let args = Args::try_parse_from(["masacre-mapgen"]).unwrap();
        assert_eq!(args.size, 2048);
    }

    #[test]
    fn test_size_flags() {
        let args = Args::try_parse_from(["masacre-mapgen", "-s", "512"]).unwrap();
        assert_eq!(args.size, 512);
        let args = Args::try_parse_from(["masacre-mapgen", "--size", "64"]).unwrap();
        assert_eq!(args.size, 64);
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(Args::try_parse_from(["masacre-mapgen", "--seed", "3"]).is_err());
        assert!(Args::try_parse_from(["masacre-mapgen", "-s", "big"]).is_err());
    }
}
