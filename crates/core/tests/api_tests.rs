//! Library API integration tests
use newscan_core::*;
use rstest::rstest;
use url::Url;

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).expect("fixture should exist")
}

fn page(url: &str) -> Url {
    Url::parse(url).unwrap()
}

#[test]
fn test_front_page_drops_duplicate_link() {
    let html = read_fixture("front_page.html");
    let articles = extract_articles(&html, &page("https://example.com/news")).expect("should extract");

    let headlines: Vec<_> = articles.iter().map(|a| a.headline.as_str()).collect();
    assert_eq!(
        headlines,
        vec![
            "City council approves new transit budget",
            "Harbor bridge reopens after repairs",
            "Library extends weekend hours",
        ]
    );

    assert_eq!(articles[0].link, "https://example.com/news/transit-budget");
    assert_eq!(articles[0].author, "Ana Ruiz");
    assert_eq!(articles[0].date, "January 1, 2022");
    assert_eq!(articles[2].link, "https://example.com/library-hours");
    assert_eq!(articles[2].author, UNKNOWN_AUTHOR);
    assert!(articles.iter().all(|a| a.source == "example.com"));
}

#[test]
fn test_mixed_layout() {
    let html = read_fixture("mixed_layout.html");
    let articles = extract_articles(&html, &page("https://mixed.test/front")).expect("should extract");

    assert_eq!(articles.len(), 4);

    assert_eq!(articles[0].headline, "Rail strike called off at the last minute");
    assert_eq!(articles[0].link, "https://mixed.test/stories/rail-strike");
    assert_eq!(articles[0].date, "March 3, 2023");

    assert_eq!(articles[1].headline, "Markets rally on rate decision");
    assert_eq!(articles[1].author, "Cleo Park");
    assert_eq!(articles[1].date, "09:30");
    assert_eq!(articles[1].link, "https://cdn.mixed.test/markets/rally");

    assert_eq!(articles[2].headline, "Storm warning issued for the coast");
    assert_eq!(articles[2].author, "Weather desk");
    assert_eq!(articles[2].link, "https://mixed.test/weather/storm-warning");

    assert_eq!(articles[3].headline, "Election results certified");
    assert_eq!(articles[3].date, DATE_NOT_AVAILABLE);
}

#[test]
fn test_no_articles_fixture() {
    let html = read_fixture("no_articles.html");
    let result = extract_articles(&html, &page("https://example.com/about"));

    match result {
        Err(ScrapeError::NotFound { error, message }) => {
            assert_eq!(error, "No articles found");
            assert!(message.starts_with("The scraper could not find any articles."));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_every_link_is_absolute() {
    for fixture in ["front_page.html", "mixed_layout.html"] {
        let html = read_fixture(fixture);
        let articles = extract_articles(&html, &page("https://example.com/a/b")).unwrap();
        for article in articles {
            let link = Url::parse(&article.link).expect("absolute link");
            assert!(matches!(link.scheme(), "http" | "https"));
            assert!(!article.headline.is_empty());
        }
    }
}

#[test]
fn test_rank_front_page_newest_first() {
    let html = read_fixture("front_page.html");
    let articles = extract_articles(&html, &page("https://example.com/news")).unwrap();

    let ranked = rank_articles(&articles, &FilterSet::new(), SortMode::NewestFirst);
    let headlines: Vec<_> = ranked.iter().map(|a| a.headline.as_str()).collect();
    assert_eq!(
        headlines,
        vec![
            "Library extends weekend hours",
            "City council approves new transit budget",
            "Harbor bridge reopens after repairs",
        ]
    );
}

#[test]
fn test_rank_filters_by_author() {
    let html = read_fixture("front_page.html");
    let articles = extract_articles(&html, &page("https://example.com/news")).unwrap();

    let filters: FilterSet = ["ruiz"].into_iter().collect();
    let ranked = rank_articles(&articles, &filters, SortMode::OldestFirst);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].author, "Ana Ruiz");
}

#[rstest]
#[case("https://a.com/x/y", "//cdn.com/p", "https://cdn.com/p")]
#[case("https://a.com/x/y", "/z", "https://a.com/z")]
#[case("https://a.com/x/", "z", "https://a.com/x/z")]
#[case("https://a.com", "not a url###", "https://a.com/")]
#[case("https://a.com/x", "https://b.org/q?x=1", "https://b.org/q?x=1")]
fn test_resolve_url_cases(#[case] base: &str, #[case] candidate: &str, #[case] expected: &str) {
    assert_eq!(resolve_url(&page(base), candidate).as_str(), expected);
}

#[rstest]
#[case("")]
#[case("garbage!!")]
#[case("Not available")]
fn test_unparseable_dates_are_zero(#[case] raw: &str) {
    assert_eq!(parse_date(raw), 0);
}

#[test]
fn test_scanner_visits_overlapping_blocks() {
    let doc = Document::parse(&read_fixture("mixed_layout.html"));
    let scanner = BlockScanner::new().unwrap();

    // div.news-item matches both .news-item and div[class*="news"]
    assert_eq!(scanner.scan(&doc).count(), 6);
}

#[test]
fn test_json_contract() {
    let html = read_fixture("front_page.html");
    let articles = extract_articles(&html, &page("https://example.com/news")).unwrap();
    let json = convert_to_json(&articles, &JsonConfig::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first = &value["articles"][0];
    for field in ["headline", "author", "date", "source", "link"] {
        assert!(first.get(field).is_some(), "missing {field}");
    }
}
