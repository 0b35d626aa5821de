// Title engine tests.

use super::*;
use httptest::{matchers::*, responders::*, Expectation, Server};

const TABLE: &str = r#"{
    "removals": [{ "main": "parked.example" }],
    "duplicates": [{ "main": "nytimes.com", "alt": ["nyti.ms"] }],
    "titles": { "github.com": "GitHub" }
}"#;

fn page(title: &str) -> String {
    format!("<html><head><title>{title}</title></head><body></body></html>")
}

fn engine_for(server: &Server, timeout: Duration) -> TitleEngine {
    let template = format!("{}{{domain}}", server.url_str("/"));
    let fetcher = PageTitleFetcher::new(reqwest::Client::new(), template, timeout);
    TitleEngine::new(
        OverrideTable::from_json(TABLE).unwrap(),
        fetcher,
        Duration::ZERO,
    )
}

#[test]
fn test_reconcile_prefers_short_scraped_title() {
    assert_eq!(
        reconcile(Some("NY Times".into()), Some("Gray Lady".into())).as_deref(),
        Some("Gray Lady")
    );
    assert_eq!(
        reconcile(Some("NY Times".into()), Some("Reuters".into())).as_deref(),
        Some("Reuters")
    );
}

#[test]
fn test_reconcile_keeps_heuristic_for_long_scraped_title() {
    assert_eq!(
        reconcile(Some("NY Times".into()), Some("All the news".into())).as_deref(),
        Some("NY Times")
    );
}

#[test]
fn test_reconcile_without_scrape() {
    assert_eq!(
        reconcile(Some("NY Times".into()), None).as_deref(),
        Some("NY Times")
    );
    assert_eq!(reconcile(None, None), None);
    // A short scraped title fills in when there is no heuristic
    assert_eq!(
        reconcile(None, Some("Acme".into())).as_deref(),
        Some("Acme")
    );
}

#[tokio::test]
async fn test_two_word_scraped_title_wins() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/washingtonpost.com"))
            .respond_with(status_code(200).body(page("Democracy Dies"))),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));
    let decision = engine.decide("washingtonpost.com", 1).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 1,
            title: "Democracy Dies".to_string()
        }
    );
    assert_eq!(engine.stats().count(Outcome::TitleScraped), 1);
}

#[tokio::test]
async fn test_three_word_scraped_title_loses_to_heuristic() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/washingtonpost.com"))
            .respond_with(status_code(200).body(page("Democracy Dies in Darkness"))),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));
    let decision = engine.decide("washingtonpost.com", 7).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 7,
            title: "Washington Post".to_string()
        }
    );
    let stats = engine.stats();
    assert_eq!(stats.count(Outcome::TitleHeuristic), 1);
    assert_eq!(stats.count(Outcome::ScrapeRejectedLong), 1);
}

#[tokio::test]
async fn test_bbc_keeps_acronym_over_long_breadcrumb() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/bbc.co.uk"))
            .respond_with(status_code(200).body(page("BBC - Home of News, Sport and more"))),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));
    let decision = engine.decide("bbc.co.uk", 3).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 3,
            title: "BBC".to_string()
        }
    );
}

#[tokio::test]
async fn test_slow_page_falls_back_to_heuristic() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/nytimes.org")).respond_with(
            delay_and_then(Duration::from_secs(3), status_code(200).body(page("Slow"))),
        ),
    );

    let mut engine = engine_for(&server, Duration::from_millis(300));
    let decision = engine.decide("nytimes.org", 1).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 1,
            title: "NY Times".to_string()
        }
    );
    assert_eq!(engine.stats().count(Outcome::ScrapeTimeout), 1);
}

#[tokio::test]
async fn test_server_error_falls_back_to_heuristic() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/theguardian.com"))
            .respond_with(status_code(500)),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));
    let decision = engine.decide("theguardian.com", 2).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 2,
            title: "The Guardian".to_string()
        }
    );
    assert_eq!(engine.stats().count(Outcome::ScrapeFailed), 1);
}

#[tokio::test]
async fn test_oversized_page_is_a_failed_scrape() {
    let server = Server::run();
    let huge = format!(
        "<html><head><title>Big</title></head><body>{}</body></html>",
        "x".repeat(crate::config::MAX_RESPONSE_BODY_SIZE + 1)
    );
    server.expect(
        Expectation::matching(request::method_path("GET", "/cnn.com"))
            .respond_with(status_code(200).body(huge)),
    );

    let mut engine = engine_for(&server, Duration::from_secs(10));
    let decision = engine.decide("cnn.com", 1).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 1,
            title: "CNN".to_string()
        }
    );
    assert_eq!(engine.stats().count(Outcome::ScrapeFailed), 1);
}

#[tokio::test]
async fn test_untitled_page_counts_as_empty() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/espn.com"))
            .respond_with(status_code(200).body("<html><body>no title</body></html>")),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));
    let decision = engine.decide("espn.com", 4).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 4,
            title: "ESPN".to_string()
        }
    );
    assert_eq!(engine.stats().count(Outcome::ScrapeEmpty), 1);
}

#[tokio::test]
async fn test_domain_is_final_fallback() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/home.com"))
            .respond_with(status_code(404)),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));
    let decision = engine.decide("home.com", 1).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 1,
            title: "home.com".to_string()
        }
    );
    assert_eq!(engine.stats().count(Outcome::TitleFallback), 1);
}

#[tokio::test]
async fn test_override_skips_fetch() {
    let server = Server::run();
    server.expect(
        Expectation::matching(any())
            .times(0)
            .respond_with(status_code(200)),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));
    let decision = engine.decide("github.com", 9).await;

    assert_eq!(
        decision,
        Decision::Ranked {
            rank: 9,
            title: "GitHub".to_string()
        }
    );
    assert_eq!(engine.stats().count(Outcome::TitleOverride), 1);
}

#[tokio::test]
async fn test_removed_and_aliased_domains_consume_nothing() {
    let server = Server::run();
    server.expect(
        Expectation::matching(any())
            .times(0)
            .respond_with(status_code(200)),
    );

    let mut engine = engine_for(&server, Duration::from_secs(5));

    assert_eq!(engine.decide("parked.example", 1).await, Decision::Excluded);
    assert_eq!(
        engine.decide("nyti.ms", 1).await,
        Decision::Merged {
            into: "nytimes.com".to_string()
        }
    );

    let stats = engine.into_stats();
    assert_eq!(stats.count(Outcome::Excluded), 1);
    assert_eq!(stats.count(Outcome::Merged), 1);
    assert_eq!(stats.count(Outcome::Ranked), 0);
    assert_eq!(stats.total_domains(), 2);
}

#[tokio::test]
async fn test_delay_between_scrapes() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method("GET"))
            .times(2)
            .respond_with(status_code(404)),
    );

    let template = format!("{}{{domain}}", server.url_str("/"));
    let fetcher = PageTitleFetcher::new(reqwest::Client::new(), template, Duration::from_secs(5));
    let mut engine = TitleEngine::new(
        OverrideTable::default(),
        fetcher,
        Duration::from_millis(200),
    );

    let start = std::time::Instant::now();
    engine.decide("first.com", 1).await;
    engine.decide("second.com", 2).await;
    assert!(start.elapsed() >= Duration::from_millis(200));
}
