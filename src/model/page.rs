//! Pagination value types.

use crate::model::ImageItem;
use std::fmt;
use std::num::NonZeroU32;

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// Page 1.
    pub const FIRST: PageNumber = PageNumber(NonZeroU32::MIN);

    /// Smart constructor: rejects page 0.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    /// The 1-based page number.
    pub fn get(&self) -> u32 {
        self.0.get()
    }

    /// The following page. Saturates at `u32::MAX`.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of results requested per page.
///
/// Pixabay accepts 3..=200; anything else is rejected with HTTP 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Smallest page size the provider accepts.
    pub const MIN: u32 = 3;
    /// Largest page size the provider accepts.
    pub const MAX: u32 = 200;
    /// Page size used when none is configured.
    pub const DEFAULT: PageSize = PageSize(12);

    /// Smart constructor: rejects sizes outside `MIN..=MAX`.
    pub fn new(raw: u32) -> Result<Self, InvalidPageSize> {
        if (Self::MIN..=Self::MAX).contains(&raw) {
            Ok(Self(raw))
        } else {
            Err(InvalidPageSize::OutOfRange(raw))
        }
    }

    /// Results per page.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Why a [`PageSize`] was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPageSize {
    /// The size is outside `MIN..=MAX`.
    #[error("Page size {0} is outside the accepted range 3..=200")]
    OutOfRange(u32),
}

// ===== ResultPage =====

/// One page of results as returned by a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPage {
    /// Results in provider order.
    pub items: Vec<ImageItem>,
    /// Which page these results are.
    pub page: PageNumber,
    /// Total hits reachable through pagination, when the provider reports it.
    pub total_hits: Option<u64>,
}

impl ResultPage {
    /// Page with an unknown total.
    pub fn new(items: Vec<ImageItem>, page: PageNumber) -> Self {
        Self {
            items,
            page,
            total_hits: None,
        }
    }

    /// Record how many results are reachable in total.
    pub fn with_total_hits(mut self, total_hits: u64) -> Self {
        self.total_hits = Some(total_hits);
        self
    }
}
