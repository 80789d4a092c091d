//! Error types shared between the session core and the widget front end.
//!
//! Two layers live here:
//! - `LoadError` is the closed set of failures a quote fetch can end with. The
//!   session converts every one of them into the `Error` status and never hands
//!   them back to callers.
//! - `QuoteError` unifies everything else (I/O, setup, URL building) so the
//!   binary can propagate a single error type with `?`.
use std::io;

use thiserror::Error;

/// Failure of a single quote fetch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The source could not be reached, timed out, or answered with a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// The payload is not a JSON array of quotes.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The payload decoded fine but held zero quotes.
    #[error("The quote source returned no quotes")]
    EmptyResult,
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err.to_string())
    }
}

/// Unified error type for the workspace.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library (stdin, stdout).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A quote fetch failed outside of a session (e.g. a direct `fetch()` call).
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Invalid or unusable configuration value (endpoint, timeout, hashtag).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Crossbeam/channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),
}
