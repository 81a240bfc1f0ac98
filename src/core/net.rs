// src/core/net.rs

// Blocking HTTPS GET. The standings sources and the forwarding endpoints
// are all https, so this rides reqwest + rustls instead of a raw TcpStream.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;

use crate::config::consts::{ACCEPT_HEADER, REQUEST_TIMEOUT_SECS};

/// Per-candidate fetch failures. All of these are recoverable: the retrieval
/// cascade logs them and advances to the next (endpoint, source) pair.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),
    #[error("bad status: {0}")]
    BadStatus(u16),
    #[error("implausibly short body ({0} bytes), likely an error page")]
    ImplausibleBody(usize),
}

/// GET `url` with the standard Accept header and a bounded timeout.
/// Returns the body of a 2xx response; anything else is a `FetchError`.
pub fn http_get(url: &str) -> Result<String, FetchError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).header("Accept", ACCEPT_HEADER).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::BadStatus(status.as_u16()));
    }
    Ok(resp.text()?)
}
