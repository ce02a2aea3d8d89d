//! Thermal printer image conversion library.
//!
//! Fetches a raster image over HTTP, binarizes it against a luminance
//! threshold, and re-encodes it as a `data:image/png;base64,` URI that can be
//! handed directly to a printing API's image-print operation.
//!
//! The pipeline has four stages, composed by [`to_thermal_data_uri`]:
//! fetch, decode, threshold, encode. Every output pixel is either pure
//! white or pure black, which is what a thermal print head can render.

pub mod decode;
pub mod encode;
pub mod fetch;
pub mod threshold;

// Re-exports for convenience
pub use decode::decode_rgba;
pub use encode::{DATA_URI_PREFIX, encode_png, to_data_uri};
pub use fetch::{fetch_image, fetch_image_with_cancel};
pub use threshold::binarize_inverted;

use reqwest::Client;
use tokio_util::sync::CancellationToken;

/// Default luminance cut point for binarization.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Errors that can occur during image conversion.
#[derive(Debug, thiserror::Error)]
pub enum ThermalImageError {
    #[error("image transfer failed: {0}")]
    Transfer(#[from] reqwest::Error),

    #[error("image fetch returned status {status} for {url}")]
    TransferStatus { status: u16, url: String },

    #[error("image fetch cancelled")]
    Cancelled,

    #[error("unsupported or corrupt image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("degenerate image dimensions: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[source] image::ImageError),
}

/// Result type alias for thermal-image operations.
pub type Result<T> = std::result::Result<T, ThermalImageError>;

/// Convert an image URL into a black/white PNG data URI.
///
/// Fetches the image (single attempt, no retries), binarizes every pixel
/// against `threshold` with inverted polarity (dark source pixels become
/// white, light ones black; see [`binarize_inverted`]), and returns
/// `data:image/png;base64,<payload>`.
///
/// The only suspension point is the network fetch; once the bytes have
/// arrived the conversion is synchronous CPU work.
pub async fn to_thermal_data_uri(client: &Client, url: &str, threshold: u8) -> Result<String> {
    let bytes = fetch::fetch_image(client, url).await?;
    convert_bytes(&bytes, threshold)
}

/// Like [`to_thermal_data_uri`], but the in-flight fetch can be aborted
/// through `cancel`. Once the bytes have arrived the conversion runs to
/// completion; partial pixel buffers are not meaningful.
pub async fn to_thermal_data_uri_with_cancel(
    client: &Client,
    url: &str,
    threshold: u8,
    cancel: &CancellationToken,
) -> Result<String> {
    let bytes = fetch::fetch_image_with_cancel(client, url, cancel).await?;
    convert_bytes(&bytes, threshold)
}

/// Convert already-fetched encoded image bytes into a black/white PNG data
/// URI. This is the synchronous, CPU-bound tail of the pipeline.
pub fn convert_bytes(bytes: &[u8], threshold: u8) -> Result<String> {
    let rgba = decode::decode_rgba(bytes)?;
    let mono = threshold::binarize_inverted(&rgba, threshold);
    let png = encode::encode_png(&mono)?;
    Ok(encode::to_data_uri(&png))
}
