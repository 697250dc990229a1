//! PNG export for rendered maps

use std::path::Path;

use image::RgbImage;

use crate::error::MapgenError;

/// Encodes an RGB image as an 8-bit, three-channel PNG
///
/// Encoding happens in memory with fixed settings, so the same pixels always
/// produce the same bytes.
///
/// # Arguments
/// * `image` - Pixels to encode
///
/// # Returns
/// * `Result<Vec<u8>, MapgenError>` - The complete PNG file
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, MapgenError> {
    let (width, height) = image.dimensions();
    let encode_err = |source: png::EncodingError| MapgenError::Encode { width, height, source };

    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);

        let mut writer = encoder.write_header().map_err(encode_err)?;
        writer.write_image_data(image.as_raw()).map_err(encode_err)?;
        writer.finish().map_err(encode_err)?;
    }

    Ok(bytes)
}

/// Writes the given image to `path` as a PNG file
///
/// # Arguments
/// * `image` - Pixels to write
/// * `path` - Destination; an existing file is replaced
///
/// # Returns
/// * `Result<(), MapgenError>` - Fails if encoding fails or the path is not writable
pub fn write_png(image: &RgbImage, path: &Path) -> Result<(), MapgenError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes).map_err(|source| MapgenError::Io {
        path: path.to_path_buf(),
        source,
    })
}
