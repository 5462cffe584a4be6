//! HTTP fetching with a browser-like header profile.
//!
//! A `FetchClient` performs exactly one GET per call with a bounded timeout
//! and no internal retry; retry policy, if any, belongs to the caller.
//! Non-2xx responses fail with the status and a short body snippet so
//! blocked requests are diagnosable from the log.

pub mod decompress;
pub mod profile;

use profile::ProfileKind;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use std::time::Duration;
use thiserror::Error;

/// How much of an error response body to keep for diagnostics.
const STATUS_SNIPPET_BYTES: usize = 200;

/// A fetch attempt that did not produce usable bytes.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS failure, connection refused, timeout, TLS error.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered outside the 2xx range.
    #[error("http status {status}: {snippet}")]
    Status { status: u16, snippet: String },
}

/// HTTP client configured with a header profile and request timeout.
pub struct FetchClient {
    client: reqwest::Client,
}

impl FetchClient {
    /// Build a client sending the given profile's headers on every request.
    pub fn new(profile: ProfileKind, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .default_headers(profile.headers())
            .timeout(timeout)
            .redirect(Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a sitemap document, returning its (decompressed) bytes.
    ///
    /// Single attempt, no retry. Gzip payloads signaled by a `.gz` path
    /// suffix or a gzip content type are decoded; a signaled body that is
    /// not actually gzip is returned raw rather than failing the call.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await?;

        if !status.is_success() {
            let end = body.len().min(STATUS_SNIPPET_BYTES);
            return Err(FetchError::Status {
                status: status.as_u16(),
                snippet: String::from_utf8_lossy(&body[..end]).into_owned(),
            });
        }

        Ok(decompress::maybe_decompress(
            url,
            content_type.as_deref(),
            body.to_vec(),
        ))
    }
}
