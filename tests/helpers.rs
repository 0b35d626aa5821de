// Shared test helpers for feed fixtures and enrichment options.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use domain_rank::EnrichOptions;

pub const FEED_HEADER: &str =
    "#harmonicc_pos\t#harmonicc_val\t#pr_pos\t#pr_val\t#host_rev\t#n_hosts";

pub const TEST_USER_AGENT: &str = "domain_rank-test/1.0";

/// Builds a gzip-compressed feed with a header and one line per reversed host.
#[allow(dead_code)] // Used by other test files
pub fn gzip_feed(hosts_rev: &[&str]) -> Vec<u8> {
    let mut text = format!("{FEED_HEADER}\n");
    for (i, host) in hosts_rev.iter().enumerate() {
        text.push_str(&format!("{}\t3.0E7\t{}\t0.005\t{}\t7\n", i + 1, i + 1, host));
    }
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .expect("Failed to compress feed");
    encoder.finish().expect("Failed to finish gzip stream")
}

/// Writes an override table with one removal and one alias group.
#[allow(dead_code)]
pub fn write_overrides(path: &Path) {
    std::fs::write(
        path,
        r#"{
            "removals": [{ "main": "googleapis.com" }],
            "duplicates": [{ "main": "bbc.co.uk", "alt": ["bbc.com"] }],
            "titles": {}
        }"#,
    )
    .expect("Failed to write override table");
}

/// Enrichment options pointing at `dir` and a mock page server.
#[allow(dead_code)]
pub fn enrich_options(dir: &Path, page_url_template: String) -> EnrichOptions {
    EnrichOptions {
        domains: dir.join("domains.txt"),
        results: dir.join("domain-info.json"),
        overrides: Some(dir.join("overrides.json")),
        timeout_seconds: 2,
        delay_ms: 0,
        user_agent: TEST_USER_AGENT.to_string(),
        page_url_template,
        ..Default::default()
    }
}
