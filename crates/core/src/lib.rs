//! Heuristic article-listing extraction.
//!
//! Given the URL of an unknown news page, newscan fetches it, finds
//! repeating article-like blocks, pulls headline/author/date/link out of
//! each, de-duplicates them and hands back a list that consumers can filter
//! and sort.
//!
//! ```rust,no_run
//! use newscan_core::{FetchConfig, FilterSet, Scraper, SortMode, rank_articles};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let scraper = Scraper::new(FetchConfig::default())?;
//! let articles = scraper.scrape_url("https://example.com/news").await?;
//!
//! let filters: FilterSet = ["election"].into_iter().collect();
//! for article in rank_articles(&articles, &filters, SortMode::NewestFirst) {
//!     println!("{} ({})", article.headline, article.link);
//! }
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod date;
pub mod dedup;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod fields;
pub mod formatters;
pub mod parse;
pub mod rank;
pub mod resolve;
pub mod scan;
pub mod scrape;

pub use article::{Article, DATE_NOT_AVAILABLE, UNKNOWN_AUTHOR};
pub use date::{DateParser, parse_date};
pub use dedup::ArticleDeduplicator;
pub use error::{Result, ScrapeError};
#[cfg(feature = "fetch")]
pub use fetch::{DEFAULT_USER_AGENT, FetchConfig, fetch_url};
pub use fields::{Candidates, ExtractedFields, FieldExtractor, FieldReader, FieldRule};
pub use formatters::{ArticleList, JsonConfig, TextConfig, convert_to_json, convert_to_text};
pub use parse::{Document, Element};
pub use rank::{ArticleRanker, FilterSet, SortMode, rank_articles};
pub use resolve::resolve_url;
pub use scan::{BLOCK_SELECTORS, BlockScanner};
#[cfg(feature = "fetch")]
pub use scrape::Scraper;
pub use scrape::{ArticleExtractor, extract_articles, validate_url};
