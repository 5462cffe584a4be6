//! `<loc>` extraction from sitemap XML.
//!
//! Sitemaps in the wild are not always well-formed, so this is a lenient
//! event-driven scan rather than a strict parse: end-tag name checking is
//! off, the input is lossily decoded, and a reader error after useful
//! content has been seen ends the scan with what was collected.

use quick_xml::events::Event;
use thiserror::Error;

/// The body could not be read as markup at all.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("content not parseable as markup: {0}")]
    Unparseable(String),
}

/// Collect the trimmed text of every `<loc>` element in document order.
///
/// Whitespace-only values are skipped. Returns `Unparseable` only when the
/// reader fails before any location was found; partial documents yield the
/// locations seen up to the error.
pub fn extract_locations(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let text = String::from_utf8_lossy(bytes);
    let mut reader = quick_xml::Reader::from_str(&text);
    reader.config_mut().trim_text(true);
    reader.config_mut().check_end_names = false;

    let mut locations = Vec::new();
    let mut in_loc = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                in_loc = e.local_name().as_ref() == b"loc";
            }
            Ok(Event::Text(ref e)) if in_loc => {
                let value = e.unescape().unwrap_or_default();
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    locations.push(trimmed.to_string());
                }
            }
            Ok(Event::CData(ref e)) if in_loc => {
                let value = String::from_utf8_lossy(e);
                let trimmed = value.trim();
                if !trimmed.is_empty() {
                    locations.push(trimmed.to_string());
                }
            }
            Ok(Event::End(_)) => {
                in_loc = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                if locations.is_empty() {
                    return Err(ExtractError::Unparseable(e.to_string()));
                }
                break;
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(locations)
}
