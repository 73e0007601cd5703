use std::collections::HashSet;

/// Rejects articles whose link or headline was already emitted in this scrape.
///
/// The link set is consulted first; either match is enough to reject.
/// Headline comparison is exact and case-sensitive.
#[derive(Debug, Default)]
pub struct ArticleDeduplicator {
    links: HashSet<String>,
    headlines: Vec<String>,
}

impl ArticleDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pair and returns true if neither value has been seen yet.
    pub fn admit(&mut self, link: &str, headline: &str) -> bool {
        if self.links.contains(link) {
            tracing::debug!(link, "duplicate link rejected");
            return false;
        }
        if self.headlines.iter().any(|seen| seen == headline) {
            tracing::debug!(headline, "duplicate headline rejected");
            return false;
        }

        self.links.insert(link.to_string());
        self.headlines.push(headline.to_string());
        true
    }
}
