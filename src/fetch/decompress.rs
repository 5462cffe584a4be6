//! Gzip classification and soft-fallback decoding.
//!
//! Sitemaps are often served as `.xml.gz`, and some servers declare a gzip
//! content type while sending plain XML. Classification happens first (URL
//! suffix or declared content type); a failed decode of a signaled payload
//! falls back to the raw bytes instead of failing the fetch.

use flate2::read::GzDecoder;
use std::io::Read;
use tracing::debug;
use url::Url;

/// Whether the payload is signaled as gzip by the URL path or content type.
pub fn gzip_signaled(url: &str, content_type: Option<&str>) -> bool {
    let path_gz = Url::parse(url)
        .map(|u| u.path().ends_with(".gz"))
        .unwrap_or_else(|_| url.ends_with(".gz"));

    let ct_gz = content_type
        .map(|ct| ct.contains("gzip"))
        .unwrap_or(false);

    path_gz || ct_gz
}

/// Decode the body if it is signaled as gzip, falling back to the raw
/// bytes when the content turns out not to be gzip after all.
pub fn maybe_decompress(url: &str, content_type: Option<&str>, body: Vec<u8>) -> Vec<u8> {
    if !gzip_signaled(url, content_type) {
        return body;
    }

    let mut decoded = Vec::new();
    match GzDecoder::new(body.as_slice()).read_to_end(&mut decoded) {
        Ok(_) => decoded,
        Err(e) => {
            debug!(url, error = %e, "gzip signaled but decode failed, using raw body");
            body
        }
    }
}
