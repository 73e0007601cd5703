use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use newscan_core::{ArticleList, ScrapeError};
use serde_json::{Value, json};

use crate::AppState;

pub const SCRAPE_FAILED: &str = "Failed to scrape the website";

/// A scrape failure rendered as the JSON error contract.
#[derive(Debug)]
pub struct ApiError(pub ScrapeError);

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match &self.0 {
            ScrapeError::Validation(message) => json!({ "error": message }),
            ScrapeError::NotFound { error, message } => json!({ "error": error, "message": message }),
            other => json!({ "error": SCRAPE_FAILED, "message": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// The `url` member of the request body; anything that is not a JSON
/// object with a string `url` reads as empty and fails validation.
fn requested_url(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| value.get("url").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_default()
}

pub async fn scrape(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<ArticleList>, ApiError> {
    let url = requested_url(&body);

    let outcome = tokio::time::timeout(state.request_timeout, state.scraper.scrape_url(&url))
        .await
        .unwrap_or_else(|_| Err(ScrapeError::Timeout { timeout: state.request_timeout.as_secs() }));

    match outcome {
        Ok(articles) => {
            tracing::info!(url = %url, count = articles.len(), "scrape succeeded");
            Ok(Json(ArticleList { articles }))
        }
        Err(err) => {
            tracing::warn!(url = %url, kind = err.kind(), error = %err, "scrape failed");
            Err(err.into())
        }
    }
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
