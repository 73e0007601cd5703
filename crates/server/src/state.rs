use std::time::Duration;

use newscan_core::Scraper;

/// Shared per-process state; one HTTP client serves every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub scraper: Scraper,
    /// Upper bound on one whole `/scrape` request, fetch included.
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(scraper: Scraper, request_timeout: Duration) -> Self {
        Self { scraper, request_timeout }
    }
}
