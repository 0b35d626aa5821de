//! Cleaning of scraped page titles.
//!
//! Raw titles are often breadcrumbs (`Section | Site Name`) or carry
//! boilerplate suffixes. Cleaning keeps the most descriptive segment and
//! strips the noise; it never fetches anything.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{MAX_TITLE_LENGTH, MIN_BREADCRUMB_SEGMENT_LENGTH};
use crate::utils::{collapse_whitespace, compile_regex_unsafe, truncate_chars};

static BREADCRUMB_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"( [|\-/:»] )|( - )|(\|)", "BREADCRUMB_SEPARATOR")
});

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"</?[^>]+(>|$)", "HTML_TAG"));

static HOME_REMNANT: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)\bhome(page)?\b", "HOME_REMNANT"));

/// Checked in order; each is removed at most once.
const BOILERPLATE_SUFFIXES: &[&str] = &[
    " - Home",
    " | Home",
    " - Official Site",
    " | Official Site",
    " - Official Website",
    " | Official Website",
    " - Official",
    " | Official",
    " - Welcome",
    " | Welcome",
    " - Homepage",
    " | Homepage",
];

/// Cleans a raw scraped title. Returns `None` if nothing usable remains.
pub fn clean_scraped_title(raw: &str) -> Option<String> {
    let mut cleaned = raw.trim();

    if BREADCRUMB_SEPARATOR.is_match(cleaned) {
        let longest = BREADCRUMB_SEPARATOR
            .split(cleaned)
            .fold("", |acc, part| {
                if part.chars().count() > acc.chars().count() {
                    part
                } else {
                    acc
                }
            });
        if longest.chars().count() > MIN_BREADCRUMB_SEGMENT_LENGTH {
            cleaned = longest;
        }
    }

    for suffix in BOILERPLATE_SUFFIXES {
        if let Some(stripped) = cleaned.strip_suffix(suffix) {
            cleaned = stripped;
        }
    }

    let untagged = HTML_TAG.replace_all(cleaned, "");
    let collapsed = collapse_whitespace(&untagged);
    let truncated = truncate_chars(&collapsed, MAX_TITLE_LENGTH);

    let result = strip_home_remnants(truncated);
    (!result.is_empty()).then_some(result)
}

/// Removes standalone "home"/"homepage" words and the first ".com", then
/// re-collapses whitespace.
pub fn strip_home_remnants(title: &str) -> String {
    let without_home = HOME_REMNANT.replace_all(title, "");
    let without_com = without_home.replacen(".com", "", 1);
    collapse_whitespace(&without_com)
}
