//! Ordered rewrite rules that split a compound domain label into words.
//!
//! Each rule is a pure regex replacement. The chain is applied left to right
//! with `fold`, so every rule can be tested in isolation.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile_regex_unsafe;

/// Publisher and brand words that usually start or end a word inside a label.
const BRAND_VOCABULARY: &str = "post|the|insider|news|times|daily|weekly|herald|tribune|journal|gazette|press|star|sun|mail|today|now|live|tv|radio|web|net|tech|blog|online|digital|media|corp|inc|ltd|llc";

/// One step of the humanization chain.
pub struct Rule {
    pub name: &'static str,
    pub pattern: LazyLock<Regex>,
    pub replacement: &'static str,
    /// Maximum replacements; 0 replaces every match.
    pub limit: usize,
}

impl Rule {
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replacen(text, self.limit, self.replacement)
    }
}

/// Registrable-suffix endings stripped before the chain runs, in case the
/// label still carries one.
pub static DOMAIN_ENDING: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)\.(com|net|org|io|gov|edu|co\.uk)$", "DOMAIN_ENDING")
});

pub static RULES: [Rule; 10] = [
    Rule {
        name: "camel_case",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"([a-z])([A-Z])", "camel_case")),
        replacement: "${1} ${2}",
        limit: 0,
    },
    Rule {
        name: "letter_digit",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"([a-zA-Z])(\d)", "letter_digit")),
        replacement: "${1} ${2}",
        limit: 0,
    },
    Rule {
        name: "digit_letter",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"(\d)([a-zA-Z])", "digit_letter")),
        replacement: "${1} ${2}",
        limit: 0,
    },
    Rule {
        name: "capitalized_word",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"([a-z])([A-Z][a-z])", "capitalized_word")),
        replacement: "${1} ${2}",
        limit: 0,
    },
    Rule {
        name: "brand_word_prefix",
        pattern: LazyLock::new(|| {
            compile_regex_unsafe(
                &format!("(?i)({BRAND_VOCABULARY})([a-z])"),
                "brand_word_prefix",
            )
        }),
        replacement: "${1} ${2}",
        limit: 0,
    },
    Rule {
        name: "brand_word_suffix",
        pattern: LazyLock::new(|| {
            compile_regex_unsafe(
                &format!("(?i)([a-z])({BRAND_VOCABULARY})"),
                "brand_word_suffix",
            )
        }),
        replacement: "${1} ${2}",
        limit: 0,
    },
    Rule {
        name: "collapse_whitespace",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"\s+", "collapse_whitespace")),
        replacement: " ",
        limit: 0,
    },
    Rule {
        name: "dot_com",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"\.com", "dot_com")),
        replacement: "",
        limit: 1,
    },
    Rule {
        name: "home",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"(?i)\bhome\b", "home")),
        replacement: "",
        limit: 0,
    },
    Rule {
        name: "trim",
        pattern: LazyLock::new(|| compile_regex_unsafe(r"^\s+|\s+$", "trim")),
        replacement: "",
        limit: 0,
    },
];

/// Runs the whole chain over `label`.
pub fn split_words(label: &str) -> String {
    RULES
        .iter()
        .fold(label.to_string(), |text, rule| rule.apply(&text).into_owned())
}

/// Looks up a rule by name.
pub fn rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.name == name)
}
