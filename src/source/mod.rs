//! Image sources.
//!
//! This module provides the boundary between the pure session and the network:
//! - [`ImageProvider`]: fetch one page of results for a query
//! - [`PixabayClient`]: the Pixabay implementation
//! - [`FetchWorker`]: runs fetches off the UI thread and reports completions

use crate::model::{FetchError, PageNumber, PageSize, ResultPage};
use crate::state::SearchQuery;

pub mod pixabay;
pub mod worker;

pub use pixabay::{PixabayClient, PixabayConfig};
pub use worker::{FetchCompletion, FetchWorker};

/// A remote image search service.
///
/// Implementations block until the page is available or the request fails.
/// They must not retry on their own; retries are user initiated.
pub trait ImageProvider: Send + Sync {
    /// Fetch the 1-based `page` of results for `query`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` for transport, HTTP status or decoding failures.
    fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageNumber,
        page_size: PageSize,
    ) -> Result<ResultPage, FetchError>;
}
