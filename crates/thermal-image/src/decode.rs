//! Raster image decoding into RGBA pixel grids.

use image::RgbaImage;
use tracing::debug;

use crate::{Result, ThermalImageError};

/// Decode raw encoded image bytes (PNG, JPEG, GIF, ...) into an RGBA8 grid.
///
/// The format is sniffed from the byte stream. Formats without an alpha
/// channel are expanded to fully opaque alpha. Zero-width or zero-height
/// surfaces are rejected here rather than propagated downstream.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(ThermalImageError::Decode)?;
    guard_dimensions(img.width(), img.height())?;
    debug!(
        width = img.width(),
        height = img.height(),
        input_bytes = bytes.len(),
        "Decoded image"
    );
    Ok(img.to_rgba8())
}

fn guard_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ThermalImageError::EmptyImage { width, height });
    }
    Ok(())
}
