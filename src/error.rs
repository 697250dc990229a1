//! Errors raised while generating or writing a map

use std::path::PathBuf;

use thiserror::Error;

use crate::perlin::NoiseError;

#[derive(Debug, Error)]
pub enum MapgenError {
    #[error("map size {size} must be a positive multiple of {cell}")]
    InvalidSize { size: usize, cell: usize },

    #[error(transparent)]
    Noise(#[from] NoiseError),

    #[error("failed to encode {width}x{height} PNG")]
    Encode {
        width: u32,
        height: u32,
        #[source]
        source: png::EncodingError,
    },

    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
