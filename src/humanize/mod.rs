//! Heuristic humanization of domain names.
//!
//! Turns a bare registrable label such as `washingtonpost` into a title guess
//! (`Washington Post`). The word-splitting chain lives in [`rules`]; casing is
//! a separate pure step applied afterwards.

pub mod rules;

use crate::config::SHORT_ACRONYM_THRESHOLD;

pub use rules::{split_words, Rule, RULES};

const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "were", "will", "with",
];

/// The registrable label of `domain`: the organization-owned part without
/// subdomains or public suffix (`news.bbc.co.uk` gives `bbc`).
///
/// Returns `None` when the name has no registrable part, e.g. a bare suffix.
pub fn registrable_label(domain: &str) -> Option<String> {
    let domain = domain.trim().trim_end_matches('.').to_lowercase();
    let registrable = psl::domain_str(&domain)?;
    let suffix = psl::suffix_str(registrable)?;
    let label = registrable
        .strip_suffix(suffix)
        .map(|l| l.trim_end_matches('.'))
        .filter(|l| !l.is_empty())?;
    Some(label.to_string())
}

/// Applies word splitting and casing to a label.
pub fn humanize_label(label: &str) -> String {
    let label = rules::DOMAIN_ENDING.replace(label, "");
    let words = split_words(&label);

    let cased = words
        .split_whitespace()
        .map(case_word)
        .collect::<Vec<_>>()
        .join(" ");

    let letters = cased.chars().filter(|c| !c.is_whitespace()).count();
    if letters < SHORT_ACRONYM_THRESHOLD {
        cased.to_uppercase()
    } else {
        cased
    }
}

/// Heuristic title for a full domain name, or `None` if it has no
/// registrable label or the label humanizes to nothing.
pub fn title_from_domain(domain: &str) -> Option<String> {
    let title = humanize_label(&registrable_label(domain)?);
    (!title.is_empty()).then_some(title)
}

/// Short non-stop-words become acronyms; everything else is title-cased.
fn case_word(word: &str) -> String {
    let lower = word.to_lowercase();
    if word.chars().count() <= 3 && !STOP_WORDS.contains(&lower.as_str()) {
        return word.to_uppercase();
    }
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
