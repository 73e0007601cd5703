//! Article output type.
//!
//! This module defines the [`Article`] struct, one headline found on a
//! scraped listing page. Serialized field names form the JSON contract of
//! the scrape endpoint.

use serde::{Deserialize, Serialize};

/// Author placeholder when a block carries no byline.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Date placeholder when a block carries no date text.
pub const DATE_NOT_AVAILABLE: &str = "Not available";

/// A single article found on a listing page.
///
/// Articles are value objects: built once per scrape and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Headline text, never empty.
    pub headline: String,

    /// Byline text, or [`UNKNOWN_AUTHOR`].
    pub author: String,

    /// Raw date text as shown on the page, or [`DATE_NOT_AVAILABLE`].
    pub date: String,

    /// Hostname of the scraped page.
    pub source: String,

    /// Absolute article URL, or the scraped page URL when none was found.
    pub link: String,
}

impl Article {
    /// Creates an article, substituting placeholders for blank author and date.
    pub fn new(headline: String, author: String, date: String, source: String, link: String) -> Self {
        let author = if author.trim().is_empty() { UNKNOWN_AUTHOR.to_string() } else { author };
        let date = if date.trim().is_empty() { DATE_NOT_AVAILABLE.to_string() } else { date };

        Self { headline, author, date, source, link }
    }
}
