//! Keyword filtering and sorting of scraped articles.
//!
//! Ranking is a display-time concern: the scraper returns articles in page
//! order and consumers call [`rank_articles`] with their current filters
//! and sort mode.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::date::DateParser;

/// How ranked articles are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    NewestFirst,
    OldestFirst,
    /// Number of filter keywords found in the headline, highest first.
    Relevance,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" | "newest-first" | "newest_first" => Ok(Self::NewestFirst),
            "oldest" | "oldest-first" | "oldest_first" => Ok(Self::OldestFirst),
            "relevance" => Ok(Self::Relevance),
            _ => Err(format!("Invalid sort mode: {}. Valid options: newest, oldest, relevance", s)),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortMode::NewestFirst => "newest-first",
            SortMode::OldestFirst => "oldest-first",
            SortMode::Relevance => "relevance",
        };
        f.write_str(name)
    }
}

/// Case-insensitive keyword set. Empty means "keep everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    keywords: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a keyword. Blank and already present keywords are ignored.
    pub fn insert(&mut self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || self.keywords.contains(&keyword) {
            return false;
        }
        self.keywords.push(keyword);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Lowercased keywords.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// True if the set is empty or any keyword occurs in the headline or author.
    pub fn matches(&self, article: &Article) -> bool {
        if self.is_empty() {
            return true;
        }
        let headline = article.headline.to_lowercase();
        let author = article.author.to_lowercase();
        self.keywords()
            .any(|k| headline.contains(k) || author.contains(k))
    }

    /// Number of keywords occurring in the headline.
    pub fn relevance(&self, article: &Article) -> usize {
        let headline = article.headline.to_lowercase();
        self.keywords().filter(|k| headline.contains(k)).count()
    }
}

impl<S: AsRef<str>> FromIterator<S> for FilterSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for keyword in iter {
            set.insert(keyword.as_ref());
        }
        set
    }
}

/// Filters then sorts articles.
#[derive(Debug, Clone, Default)]
pub struct ArticleRanker {
    dates: DateParser,
}

impl ArticleRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps articles matching `filters`, then orders them by `mode`.
    ///
    /// All sorts are stable. Date sorts break exact ties by headline;
    /// relevance ties keep their incoming order.
    pub fn rank(&self, articles: &[Article], filters: &FilterSet, mode: SortMode) -> Vec<Article> {
        let kept = articles.iter().filter(|a| filters.matches(a));

        match mode {
            SortMode::NewestFirst | SortMode::OldestFirst => {
                let mut keyed: Vec<(i64, &Article)> = kept.map(|a| (self.dates.parse(&a.date), a)).collect();
                keyed.sort_by(|(ta, a), (tb, b)| {
                    let by_date = if mode == SortMode::NewestFirst { tb.cmp(ta) } else { ta.cmp(tb) };
                    by_date.then_with(|| compare_headlines(&a.headline, &b.headline))
                });
                keyed.into_iter().map(|(_, a)| a.clone()).collect()
            }
            SortMode::Relevance => {
                let mut keyed: Vec<(usize, &Article)> = kept.map(|a| (filters.relevance(a), a)).collect();
                keyed.sort_by(|(ra, _), (rb, _)| rb.cmp(ra));
                keyed.into_iter().map(|(_, a)| a.clone()).collect()
            }
        }
    }
}

/// Filters and sorts with a fresh [`ArticleRanker`].
pub fn rank_articles(articles: &[Article], filters: &FilterSet, mode: SortMode) -> Vec<Article> {
    ArticleRanker::new().rank(articles, filters, mode)
}

/// Dictionary-style comparison: case-insensitive first, then exact.
fn compare_headlines(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
