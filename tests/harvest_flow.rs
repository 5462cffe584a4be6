//! End-to-end harvest flow against a mock HTTP server.

use sitesweep::config::Config;
use sitesweep::fetch::profile::ProfileKind;
use sitesweep::harvest;
use sitesweep::report;
use chrono::NaiveDate;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const THREE_URL_SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://example.com/a</loc></url>
  <url><loc>https://example.com/b</loc></url>
  <url><loc>https://example.com/c</loc></url>
</urlset>"#;

fn write_input(lines: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sitemaps.txt");
    std::fs::write(&input, lines.join("\n")).unwrap();
    (dir, input)
}

fn test_config(input: PathBuf) -> Config {
    Config {
        input,
        output_dir: PathBuf::from("unused"),
        delay: Duration::ZERO,
        timeout: Duration::from_secs(5),
        profile: ProfileKind::Basic,
    }
}

#[tokio::test]
async fn transport_failure_does_not_abort_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/good.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THREE_URL_SITEMAP))
        .mount(&server)
        .await;

    // Port 1 refuses connections; the first reference fails transport.
    let bad = "http://127.0.0.1:1/bad.xml".to_string();
    let good = format!("{}/good.xml", server.uri());
    let (_dir, input) = write_input(&[&bad, &good]);

    let report = harvest::run(&test_config(input)).await.unwrap();

    assert_eq!(report.rows.len(), 3);
    assert!(report.rows.iter().all(|r| r.source_sitemap == good));
    assert_eq!(report.rows[0].url, "https://example.com/a");
    assert_eq!(report.rows[2].url, "https://example.com/c");

    assert_eq!(report.outcomes.len(), 2);
    assert!(report.outcomes[0].error.is_some());
    assert_eq!(report.outcomes[0].urls, 0);
    assert!(report.outcomes[1].error.is_none());
    assert_eq!(report.outcomes[1].urls, 3);
}

#[tokio::test]
async fn blocked_response_records_zero_urls_and_continues() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blocked.xml"))
        .respond_with(ResponseTemplate::new(403).set_body_string("<html>Access denied</html>"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/open.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THREE_URL_SITEMAP))
        .mount(&server)
        .await;

    let blocked = format!("{}/blocked.xml", server.uri());
    let open = format!("{}/open.xml", server.uri());
    let (_dir, input) = write_input(&[&blocked, &open]);

    let report = harvest::run(&test_config(input)).await.unwrap();

    assert_eq!(report.rows.len(), 3);
    let failure = report.outcomes[0].error.as_deref().unwrap();
    assert!(failure.contains("403"), "snippet missing status: {failure}");
    assert!(failure.contains("Access denied"));
}

#[tokio::test]
async fn gz_suffix_body_is_decompressed() {
    let server = MockServer::start().await;
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(THREE_URL_SITEMAP.as_bytes()).unwrap();
    let gz_body = encoder.finish().unwrap();

    Mock::given(method("GET"))
        .and(path("/sitemap.xml.gz"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(gz_body))
        .mount(&server)
        .await;

    let reference = format!("{}/sitemap.xml.gz", server.uri());
    let (_dir, input) = write_input(&[&reference]);

    let report = harvest::run(&test_config(input)).await.unwrap();
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.rows[0].source_sitemap, reference);
}

#[tokio::test]
async fn gzip_content_type_with_plain_body_falls_back_to_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(THREE_URL_SITEMAP.as_bytes())
                .insert_header("content-type", "application/x-gzip"),
        )
        .mount(&server)
        .await;

    let reference = format!("{}/sitemap.xml", server.uri());
    let (_dir, input) = write_input(&[&reference]);

    let report = harvest::run(&test_config(input)).await.unwrap();
    assert_eq!(report.rows.len(), 3);
    assert!(report.outcomes[0].error.is_none());
}

#[tokio::test]
async fn all_blank_input_produces_no_report_file() {
    let (dir, input) = write_input(&["", "   ", ""]);
    let report = harvest::run(&test_config(input)).await.unwrap();
    assert!(report.rows.is_empty());

    let out = dir.path().join("csv");
    let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    let written = report::write_report(&report.rows, &out, date).unwrap();
    assert!(written.is_none());
    assert!(!out.exists());
}

#[tokio::test]
async fn written_rows_attribute_source_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(THREE_URL_SITEMAP))
        .mount(&server)
        .await;

    let reference = format!("{}/s.xml", server.uri());
    let (dir, input) = write_input(&[&reference]);

    let report = harvest::run(&test_config(input)).await.unwrap();
    let out = dir.path().join("csv");
    let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();
    let written = report::write_report(&report.rows, &out, date)
        .unwrap()
        .unwrap();

    let mut reader = csv::Reader::from_path(&written).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "source_sitemap");
    assert_eq!(&headers[1], "url");

    for record in reader.records() {
        let record = record.unwrap();
        // Source column is the input line, byte for byte.
        assert_eq!(&record[0], reference.as_str());
    }
}
