//! Sitesweep — harvest URLs from XML sitemaps into dated CSV reports.
//!
//! Reads a newline-delimited list of sitemap URLs, fetches each one with a
//! browser-like header profile (gzip payloads decoded transparently),
//! extracts every `<loc>` entry, and writes `(source_sitemap, url)` rows to
//! `sitemap_urls_<date>.csv`. Failures are isolated per sitemap: a blocked
//! or malformed reference logs a warning and contributes zero rows.

pub mod cli;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod harvest;
pub mod report;
