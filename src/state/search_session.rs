//! Search session state machine (pure).
//!
//! Owns the query, the page cursor and the accumulated result list, and
//! decides which fetches are needed to keep them consistent with user intent.
//! Transitions are pure functions `(SessionState, input) -> (SessionState, output)`;
//! the fetch to issue is returned as an effect for the shell to execute.
//!
//! ```text
//! Idle(page=1,items=[]) --submit--> Loading(page=1)
//! Loading(N) --ok--> Idle(N, items+page)
//! Loading(N) --fail--> Failed(N)
//! Idle --load_more--> Loading(N+1)
//! Failed --load_more--> Loading(N)        same page, retry
//! any --submit--> Loading(1, items cleared)
//! ```

use crate::model::{FetchError, ImageItem, PageNumber, ResultPage};
use std::fmt;
use tracing::{debug, info, warn};

// ===== SearchQuery =====

/// Validated search query. Never empty; stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: rejects empty or whitespace-only input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvalidQuery> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            Err(InvalidQuery::Empty)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// The trimmed query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a [`SearchQuery`] was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidQuery {
    /// Nothing left after trimming.
    #[error("Search query cannot be empty")]
    Empty,
}

// ===== Fetch identity =====

/// Identity of one fetch: the query generation it was issued for and the page.
///
/// `generation` increments on every accepted submit, so resubmitting the same
/// text still supersedes fetches issued before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket {
    generation: u64,
    page: PageNumber,
}

impl FetchTicket {
    /// Submit generation the fetch belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Page the fetch requests.
    pub fn page(&self) -> PageNumber {
        self.page
    }
}

/// A fetch the shell must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Identity to hand back with the result.
    pub ticket: FetchTicket,
    /// Query to search for.
    pub query: SearchQuery,
    /// Page to fetch.
    pub page: PageNumber,
}

// ===== SessionStatus =====

/// Loading/error status. Sum type: loading and failed are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No fetch in flight.
    #[default]
    Idle,
    /// Exactly one fetch in flight, identified by its ticket.
    Loading {
        /// Ticket identifying the in-flight fetch.
        ticket: FetchTicket,
    },
    /// The last fetch failed. Items and page are as they were before it.
    Failed {
        /// Human-readable failure description.
        message: String,
    },
}

// ===== SessionState =====

/// Search session state. Pure data, no side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    query: Option<SearchQuery>,
    generation: u64,
    page: PageNumber,
    /// Arrival order, duplicates allowed.
    items: Vec<ImageItem>,
    status: SessionStatus,
    total_hits: Option<u64>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Session start: no query, page 1, nothing loaded.
    pub fn new() -> Self {
        Self {
            query: None,
            generation: 0,
            page: PageNumber::FIRST,
            items: Vec::new(),
            status: SessionStatus::Idle,
            total_hits: None,
        }
    }

    /// Current query, `None` before the first submit.
    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Last page requested for the current query.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Accumulated results in arrival order.
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Loading/error status.
    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Whether a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self.status, SessionStatus::Loading { .. })
    }

    /// Message of the last failed fetch.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Results reachable for the current query, once known.
    pub fn total_hits(&self) -> Option<u64> {
        self.total_hits
    }

    /// Ticket of the fetch currently in flight, if any.
    pub fn in_flight(&self) -> Option<FetchTicket> {
        match self.status {
            SessionStatus::Loading { ticket } => Some(ticket),
            _ => None,
        }
    }

    /// Whether the provider has results beyond the ones loaded.
    ///
    /// Unknown totals are treated as "more available".
    pub fn has_more(&self) -> bool {
        match self.total_hits {
            Some(total) => (self.items.len() as u64) < total,
            None => true,
        }
    }

    /// Whether `load_more` would issue a fetch right now.
    pub fn can_load_more(&self) -> bool {
        load_more_precondition(self).is_ok()
    }

    fn issue(&mut self, query: SearchQuery) -> FetchRequest {
        let ticket = FetchTicket {
            generation: self.generation,
            page: self.page,
        };
        self.status = SessionStatus::Loading { ticket };
        FetchRequest {
            ticket,
            query,
            page: self.page,
        }
    }
}

// ===== Events and effects =====

/// Inputs to the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// User submitted the search bar text.
    SubmitQuery(String),
    /// User asked for the next page.
    LoadMore,
    /// A fetch finished.
    FetchSettled {
        /// Ticket the fetch was issued under.
        ticket: FetchTicket,
        /// What the provider returned.
        result: Result<ResultPage, FetchError>,
    },
}

/// Side effects the shell must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Start this fetch in the background.
    Fetch(FetchRequest),
}

/// Why a `load_more` request produced no fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoadMoreRejected {
    /// Nothing to page through yet.
    #[error("No search has been submitted")]
    NoQuery,
    /// Only one fetch may be in flight.
    #[error("A page is already loading")]
    AlreadyLoading,
    /// The current search returned nothing so far.
    #[error("No results loaded for the current search")]
    NothingLoaded,
    /// Every reachable result is loaded.
    #[error("All results are already loaded")]
    Exhausted,
}

/// Result of reconciling a settled fetch with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The fetch belonged to the in-flight request and its result was applied.
    Applied,
    /// The fetch was superseded; its result was ignored.
    StaleDiscarded,
}

// ===== Transitions =====

/// Start a new search.
///
/// Empty or whitespace-only text is rejected without any state change.
/// Otherwise resets the page to 1, clears results and error, and requests page 1.
/// Any fetch still in flight becomes stale.
pub fn submit_query(
    state: SessionState,
    text: &str,
) -> (SessionState, Result<FetchRequest, InvalidQuery>) {
    let query = match SearchQuery::new(text) {
        Ok(query) => query,
        Err(err) => {
            debug!("Rejected empty search query");
            return (state, Err(err));
        }
    };

    let mut state = state;
    if let Some(stale) = state.in_flight() {
        debug!(
            generation = stale.generation,
            page = stale.page.get(),
            "Superseding in-flight fetch"
        );
    }

    state.generation += 1;
    state.query = Some(query.clone());
    state.page = PageNumber::FIRST;
    state.items.clear();
    state.total_hits = None;
    info!(query = %query, generation = state.generation, "Search submitted");

    let request = state.issue(query);
    (state, Ok(request))
}

fn load_more_precondition(state: &SessionState) -> Result<(), LoadMoreRejected> {
    if state.query.is_none() {
        return Err(LoadMoreRejected::NoQuery);
    }
    match state.status {
        SessionStatus::Loading { .. } => Err(LoadMoreRejected::AlreadyLoading),
        // Retry is always allowed, even when page 1 failed
        SessionStatus::Failed { .. } => Ok(()),
        SessionStatus::Idle if state.items.is_empty() => Err(LoadMoreRejected::NothingLoaded),
        SessionStatus::Idle if !state.has_more() => Err(LoadMoreRejected::Exhausted),
        SessionStatus::Idle => Ok(()),
    }
}

/// Request the next page, or retry the failed one.
///
/// From `Idle` the page advances by one; from `Failed` the same page is
/// requested again. The result is appended to the accumulated list.
pub fn load_more(state: SessionState) -> (SessionState, Result<FetchRequest, LoadMoreRejected>) {
    if let Err(reason) = load_more_precondition(&state) {
        debug!(%reason, "Load more rejected");
        return (state, Err(reason));
    }

    let Some(query) = state.query.clone() else {
        return (state, Err(LoadMoreRejected::NoQuery));
    };

    let mut state = state;
    if matches!(state.status, SessionStatus::Idle) {
        state.page = state.page.next();
    }
    debug!(query = %query, page = state.page.get(), "Loading page");

    let request = state.issue(query);
    (state, Ok(request))
}

/// Reconcile a completed fetch with the session.
///
/// Results whose ticket is not the in-flight ticket are discarded silently.
/// Success appends in arrival order; failure records the message and leaves
/// items and page untouched so `load_more` retries the same page.
pub fn on_fetch_settled(
    state: SessionState,
    ticket: FetchTicket,
    result: Result<ResultPage, FetchError>,
) -> (SessionState, SettleOutcome) {
    if state.in_flight() != Some(ticket) {
        debug!(
            generation = ticket.generation,
            page = ticket.page.get(),
            "Discarding stale fetch result"
        );
        return (state, SettleOutcome::StaleDiscarded);
    }

    let mut state = state;
    match result {
        Ok(page) => {
            if page.page != ticket.page {
                warn!(
                    requested = ticket.page.get(),
                    received = page.page.get(),
                    "Provider returned a different page than requested"
                );
            }
            let received = page.items.len();
            state.items.extend(page.items);
            state.total_hits = match page.total_hits {
                // An empty page means the provider has nothing further
                _ if received == 0 => Some(state.items.len() as u64),
                Some(total) => Some(total),
                None => state.total_hits,
            };
            state.status = SessionStatus::Idle;
            info!(
                page = ticket.page.get(),
                received,
                accumulated = state.items.len(),
                "Page loaded"
            );
        }
        Err(err) => {
            warn!(page = ticket.page.get(), error = %err, "Fetch failed");
            state.status = SessionStatus::Failed {
                message: err.to_string(),
            };
        }
    }

    (state, SettleOutcome::Applied)
}

/// Dispatch a session event to its transition.
pub fn update(state: SessionState, event: SessionEvent) -> (SessionState, Vec<SessionEffect>) {
    match event {
        SessionEvent::SubmitQuery(text) => {
            let (state, request) = submit_query(state, &text);
            (state, request.ok().map(SessionEffect::Fetch).into_iter().collect())
        }
        SessionEvent::LoadMore => {
            let (state, request) = load_more(state);
            (state, request.ok().map(SessionEffect::Fetch).into_iter().collect())
        }
        SessionEvent::FetchSettled { ticket, result } => {
            let (state, _) = on_fetch_settled(state, ticket, result);
            (state, Vec::new())
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_session_tests.rs"]
mod tests;
