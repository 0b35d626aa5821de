// Humanization tests.

use super::*;

#[test]
fn test_registrable_label_strips_subdomains_and_suffix() {
    assert_eq!(registrable_label("www.example.com").as_deref(), Some("example"));
    assert_eq!(registrable_label("news.bbc.co.uk").as_deref(), Some("bbc"));
    assert_eq!(registrable_label("bbc.co.uk").as_deref(), Some("bbc"));
    assert_eq!(registrable_label("NYTimes.com.").as_deref(), Some("nytimes"));
}

#[test]
fn test_registrable_label_of_bare_suffix_is_none() {
    assert_eq!(registrable_label("com"), None);
    assert_eq!(registrable_label("co.uk"), None);
}

#[test]
fn test_short_names_become_acronyms() {
    assert_eq!(humanize_label("cnn"), "CNN");
    assert_eq!(humanize_label("bbc"), "BBC");
    assert_eq!(humanize_label("espn"), "ESPN");
}

#[test]
fn test_brand_vocabulary_splits_words() {
    assert_eq!(humanize_label("nytimes"), "NY Times");
    assert_eq!(humanize_label("washingtonpost"), "Washington Post");
    assert_eq!(humanize_label("huffpost"), "Huff Post");
    assert_eq!(humanize_label("usatoday"), "USA Today");
}

#[test]
fn test_stop_words_are_title_cased_not_upper_cased() {
    assert_eq!(humanize_label("theguardian"), "The Guardian");
    assert_eq!(humanize_label("theinsider"), "The Insider");
}

#[test]
fn test_letter_digit_boundaries() {
    assert_eq!(humanize_label("9gag"), "9 GAG");
    assert_eq!(humanize_label("abc123"), "ABC 123");
}

#[test]
fn test_camel_case_boundaries() {
    assert_eq!(humanize_label("BlogSpot"), "Blog Spot");
}

#[test]
fn test_plain_word_is_title_cased() {
    assert_eq!(humanize_label("github"), "Github");
}

#[test]
fn test_humanization_is_idempotent() {
    for label in ["cnn", "nytimes", "theguardian", "washingtonpost", "usatoday", "espn"] {
        let once = humanize_label(label);
        assert_eq!(humanize_label(&once), once, "label {label}");
    }
    assert_eq!(humanize_label("CNN"), "CNN");
    assert_eq!(humanize_label("NY Times"), "NY Times");
}

#[test]
fn test_domain_ending_is_stripped_from_label() {
    assert_eq!(humanize_label("example.com"), "Example");
    assert_eq!(humanize_label("example.co.uk"), "Example");
}

#[test]
fn test_title_from_domain() {
    assert_eq!(title_from_domain("bbc.co.uk").as_deref(), Some("BBC"));
    assert_eq!(title_from_domain("www.nytimes.com").as_deref(), Some("NY Times"));
    assert_eq!(title_from_domain("theguardian.com").as_deref(), Some("The Guardian"));
}

#[test]
fn test_title_from_domain_none_when_nothing_remains() {
    assert_eq!(title_from_domain("home.com"), None);
    assert_eq!(title_from_domain("com"), None);
}

#[test]
fn test_dot_com_rule_removes_first_occurrence_only() {
    let rule = rules::rule("dot_com").unwrap();
    assert_eq!(rule.apply("foo.com.bar.com"), "foo.bar.com");
}

#[test]
fn test_home_rule_only_strips_standalone_word() {
    let rule = rules::rule("home").unwrap();
    assert_eq!(rule.apply("my Home page"), "my  page");
    assert_eq!(rule.apply("homepage"), "homepage");
}

#[test]
fn test_rule_names_are_unique() {
    let mut names: Vec<_> = RULES.iter().map(|r| r.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), RULES.len());
}
