//! Pixabay search API client.
//!
//! `GET https://pixabay.com/api/?key=..&q=..&page=..&per_page=..&image_type=photo`
//! returns `{ "total", "totalHits", "hits": [...] }`. Only `totalHits` results
//! are reachable through pagination; requesting a page past them is an HTTP 400.

use crate::model::{FetchError, ImageId, ImageItem, ImageUrl, PageNumber, PageSize, ResultPage};
use crate::source::ImageProvider;
use crate::state::SearchQuery;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Public Pixabay endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://pixabay.com/api/";

/// Longest error body kept in a `FetchError::Status` message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Settings for [`PixabayClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixabayConfig {
    /// Pixabay API key.
    pub api_key: String,
    /// Search endpoint.
    pub base_url: String,
    /// `image_type` filter sent with every request.
    pub image_type: String,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl PixabayConfig {
    /// Defaults for the public endpoint with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE_URL.to_string(),
            image_type: "photo".to_string(),
            timeout: Duration::from_secs(15),
        }
    }
}

/// Blocking Pixabay client. Cheap to share behind an `Arc`.
pub struct PixabayClient {
    http: reqwest::blocking::Client,
    config: PixabayConfig,
}

impl PixabayClient {
    /// Build a client with the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest::Error` if the TLS backend cannot be
    /// initialised.
    pub fn new(config: PixabayConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("pixsearch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    fn request(
        &self,
        query: &SearchQuery,
        page: PageNumber,
        page_size: PageSize,
    ) -> reqwest::blocking::RequestBuilder {
        self.http.get(&self.config.base_url).query(&[
            ("key", self.config.api_key.clone()),
            ("q", query.as_str().to_string()),
            ("page", page.get().to_string()),
            ("per_page", page_size.get().to_string()),
            ("image_type", self.config.image_type.clone()),
        ])
    }
}

impl ImageProvider for PixabayClient {
    fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageNumber,
        page_size: PageSize,
    ) -> Result<ResultPage, FetchError> {
        debug!(query = %query, page = page.get(), "Requesting Pixabay page");

        // Errors are stripped of their URL, which carries the API key
        let response = self
            .request(query, page, page_size)
            .send()
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(FetchError::Status {
                code: status.as_u16(),
                message: error_message(&body, status.canonical_reason()),
            });
        }

        let body = response
            .text()
            .map_err(|e| FetchError::Network(e.without_url().to_string()))?;
        parse_response(&body, page)
    }
}

// ===== Response decoding =====

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "totalHits", default)]
    total_hits: Option<u64>,
    hits: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct Hit {
    id: u64,
    #[serde(rename = "webformatURL")]
    webformat_url: String,
    #[serde(rename = "largeImageURL")]
    large_image_url: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    user: String,
}

impl Hit {
    fn into_item(self) -> Option<ImageItem> {
        let thumbnail = ImageUrl::new(self.webformat_url).ok()?;
        let full = ImageUrl::new(self.large_image_url).ok()?;
        Some(ImageItem::new(ImageId::new(self.id), thumbnail, full).with_metadata(self.tags, self.user))
    }
}

/// Decode a Pixabay search response body into a result page.
///
/// Individual malformed hits are skipped with a warning; only a body that is
/// not a search response at all is an error.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not valid JSON or lacks `hits`.
pub fn parse_response(body: &str, page: PageNumber) -> Result<ResultPage, FetchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    let mut items = Vec::with_capacity(response.hits.len());
    for (index, raw) in response.hits.into_iter().enumerate() {
        match serde_json::from_value::<Hit>(raw) {
            Ok(hit) => {
                let id = hit.id;
                match hit.into_item() {
                    Some(item) => items.push(item),
                    None => warn!(page = page.get(), id, "Skipping hit with empty image URL"),
                }
            }
            Err(err) => warn!(page = page.get(), index, error = %err, "Skipping malformed hit"),
        }
    }

    let mut result = ResultPage::new(items, page);
    result.total_hits = response.total_hits;
    Ok(result)
}

/// Status message from an error body, falling back to the reason phrase.
fn error_message(body: &str, reason: Option<&str>) -> String {
    let body = body.trim();
    if body.is_empty() {
        return reason.unwrap_or("unknown error").to_string();
    }
    let truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    if truncated.len() < body.len() {
        format!("{truncated}…")
    } else {
        truncated
    }
}
