//! PNG encoding and data URI assembly.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

use crate::{Result, ThermalImageError};

/// Media-type prefix of the returned data URI.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Encode an RGBA image as a lossless PNG byte stream.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(ThermalImageError::Encode)?;
    debug!(png_bytes = out.len(), "Encoded PNG");
    Ok(out)
}

/// Wrap PNG bytes in a `data:image/png;base64,` URI.
pub fn to_data_uri(png: &[u8]) -> String {
    format!("{DATA_URI_PREFIX}{}", STANDARD.encode(png))
}
