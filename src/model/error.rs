//! Error types for pixsearch.
//!
//! This module defines the error taxonomy using `thiserror` for structured error
//! handling. Errors compose via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error for startup and terminal failures
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file setup failures
//!   - `std::io::Error` - Terminal/TUI rendering failures
//! - [`FetchError`] - Provider request failures
//!
//! # Error Recovery Strategy
//!
//! Fetch errors are **non-fatal**: they never cross the session boundary as an
//! `Err`. The search session captures them as its failed status so the user can
//! retry with "load more" or start a new search. Only startup and terminal
//! errors propagate to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// No API key was supplied by any configuration source.
    ///
    /// **Recovery**: Display the message and exit. The user must set
    /// `api_key` in the config file, `PIXSEARCH_API_KEY`, or `--api-key`.
    #[error("No Pixabay API key: set api_key in the config file, PIXSEARCH_API_KEY, or --api-key")]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),

    /// Terminal or TUI rendering error.
    ///
    /// Fatal - without a working terminal the TUI cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors produced by an image provider while fetching one page.
///
/// Carries messages rather than the transport's error types so results can be
/// sent across threads, cloned into session state and compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with a non-success status.
    #[error("Provider returned HTTP {code}: {message}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Response body or reason phrase, truncated.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("Invalid provider response: {0}")]
    Decode(String),

    /// The fetch never ran to completion (worker thread unavailable or the
    /// provider panicked).
    #[error("Fetch aborted: {0}")]
    Aborted(String),
}
