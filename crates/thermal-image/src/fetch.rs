//! HTTP image fetching.

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::{Result, ThermalImageError};

/// Fetch the raw encoded bytes of an image.
///
/// Single attempt, no retries; a non-2xx response is a transfer error. The
/// body is returned uninspected, since corruption detection is the decoder's
/// job. Timeouts, if wanted, belong on the caller's `Client`.
pub async fn fetch_image(client: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ThermalImageError::TransferStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = resp.bytes().await?;
    debug!(url, bytes = bytes.len(), "Fetched image");
    Ok(bytes.to_vec())
}

/// Fetch with cancellation support.
///
/// A fired token resolves to [`ThermalImageError::Cancelled`] and drops the
/// in-flight request.
pub async fn fetch_image_with_cancel(
    client: &Client,
    url: &str,
    cancel: &CancellationToken,
) -> Result<Vec<u8>> {
    tokio::select! {
        _ = cancel.cancelled() => {
            debug!(url, "Image fetch cancelled");
            Err(ThermalImageError::Cancelled)
        }
        res = fetch_image(client, url) => res,
    }
}
