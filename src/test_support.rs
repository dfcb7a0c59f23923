//! Shared fixtures for unit tests.

use crate::model::{FetchError, ImageId, ImageItem, ImageUrl, PageNumber, PageSize, ResultPage};
use crate::source::ImageProvider;
use crate::state::SearchQuery;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Image with id `n` and URLs derived from it.
pub fn image(n: u64) -> ImageItem {
    ImageItem::new(
        ImageId::new(n),
        ImageUrl::new(format!("https://cdn.pixabay.test/thumb/{n}_640.jpg")).unwrap(),
        ImageUrl::new(format!("https://cdn.pixabay.test/full/{n}_1280.jpg")).unwrap(),
    )
    .with_metadata(format!("tag{n}"), "tester")
}

/// `count` images numbered from `first`.
pub fn images(first: u64, count: u64) -> Vec<ImageItem> {
    (first..first + count).map(image).collect()
}

pub fn page(n: u32) -> PageNumber {
    PageNumber::new(n).unwrap()
}

/// A result page of `count` images starting at id `first`.
pub fn result_page(n: u32, first: u64, count: u64) -> ResultPage {
    ResultPage::new(images(first, count), page(n))
}

/// In-memory provider serving `total_hits` numbered images.
///
/// Image ids run `1..=total_hits` across pages. Failures queued with
/// [`FakeProvider::fail_next`] are returned before any page is served.
pub struct FakeProvider {
    total_hits: u64,
    failures: Mutex<VecDeque<FetchError>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl FakeProvider {
    pub fn new(total_hits: u64) -> Self {
        Self {
            total_hits,
            failures: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_next(&self, error: FetchError) {
        self.failures.lock().unwrap().push_back(error);
    }

    /// `(query, page)` for every fetch received, in order.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ImageProvider for FakeProvider {
    fn fetch_page(
        &self,
        query: &SearchQuery,
        page: PageNumber,
        page_size: PageSize,
    ) -> Result<ResultPage, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.as_str().to_string(), page.get()));
        if let Some(error) = self.failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        let size = u64::from(page_size.get());
        let start = u64::from(page.get() - 1) * size;
        let count = self.total_hits.saturating_sub(start).min(size);
        Ok(ResultPage::new(images(start + 1, count), page).with_total_hits(self.total_hits))
    }
}
