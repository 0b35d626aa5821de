//! Lookup target normalization.
//!
//! `lookup` accepts either a full URL or a bare host. Both are reduced to a
//! lower-case host name before the result store is consulted.

use log::warn;

/// Maximum accepted input length, matching common browser URL limits.
const MAX_TARGET_LENGTH: usize = 2048;

/// Reduces a URL or bare host to its lower-case host name.
///
/// Adds an `https://` prefix when no scheme is present, parses with `url`, and
/// keeps only the host. Logs a warning and returns `None` for inputs that are
/// too long, unparsable, host-less, or use a scheme other than http/https.
pub fn normalize_lookup_target(input: &str) -> Option<String> {
    let input = input.trim();
    if input.len() > MAX_TARGET_LENGTH {
        warn!(
            "Ignoring lookup target exceeding maximum length ({} > {})",
            input.len(),
            MAX_TARGET_LENGTH
        );
        return None;
    }

    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };

    match url::Url::parse(&with_scheme) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {
            let host = parsed.host_str()?.trim_end_matches('.').to_lowercase();
            if host.is_empty() {
                warn!("Lookup target has no host: {input}");
                None
            } else {
                Some(host)
            }
        }
        Ok(_) => {
            warn!("Unsupported scheme for lookup target: {input}");
            None
        }
        Err(_) => {
            warn!("Invalid lookup target: {input}");
            None
        }
    }
}

/// Returns the registrable domain of `host` (`news.bbc.co.uk` gives
/// `bbc.co.uk`), or `None` for IP addresses and bare public suffixes.
pub fn registrable_domain(host: &str) -> Option<String> {
    if host.parse::<std::net::IpAddr>().is_ok() || host.starts_with('[') {
        return None;
    }
    psl::domain_str(host).map(str::to_lowercase)
}
