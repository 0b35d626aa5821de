//! Pure per-line parsing of the ranking feed.
//!
//! Each feed line is tab-separated with the reversed host name in a fixed
//! column. Parsing never fails: a line is either the header, a record, or a
//! skip with a reason.

use crate::config::{DOMAIN_FIELD_INDEX, HEADER_SENTINEL};

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Not valid UTF-8
    InvalidEncoding,
    /// Fewer fields than the domain column requires
    TooFewFields,
    /// The domain column is present but empty
    EmptyField,
    /// The domain column holds the header sentinel (a repeated header)
    SentinelValue,
}

/// Result of parsing one feed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Header,
    Skip(SkipReason),
    Record(String),
}

/// Parses a single feed line.
///
/// The header is recognized by its sentinel token only while `header_seen` is
/// false, so it is skipped once. Lines that still carry the sentinel in the
/// domain column afterwards are skipped as malformed.
pub fn parse_line(line: &str, header_seen: bool, reverse: bool) -> LineOutcome {
    if !header_seen && line.contains(HEADER_SENTINEL) {
        return LineOutcome::Header;
    }

    let Some(field) = line.split('\t').nth(DOMAIN_FIELD_INDEX) else {
        return LineOutcome::Skip(SkipReason::TooFewFields);
    };
    let field = field.trim();
    if field.is_empty() {
        return LineOutcome::Skip(SkipReason::EmptyField);
    }
    if field == HEADER_SENTINEL {
        return LineOutcome::Skip(SkipReason::SentinelValue);
    }

    if reverse {
        LineOutcome::Record(reverse_labels(field))
    } else {
        LineOutcome::Record(field.to_string())
    }
}

/// Parses a raw line as read from the stream (trailing `\n`/`\r\n` allowed).
pub fn parse_raw_line(raw: &[u8], header_seen: bool, reverse: bool) -> LineOutcome {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    match std::str::from_utf8(raw) {
        Ok(line) => parse_line(line, header_seen, reverse),
        Err(_) => LineOutcome::Skip(SkipReason::InvalidEncoding),
    }
}

/// Reverses the order of dot-separated labels: `com.example.www` becomes
/// `www.example.com` and vice versa.
pub fn reverse_labels(host: &str) -> String {
    host.rsplit('.').collect::<Vec<_>>().join(".")
}
