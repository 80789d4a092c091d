//! Command-line arguments for the quote widget.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::time::Duration;

use clap::Parser;
use quote_common::QuoteError;
use quote_common::net::{DEFAULT_ENDPOINT, DEFAULT_HASHTAG, DEFAULT_TIMEOUT_SECS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// URL answering GET with a JSON array of `{quote, author}` objects.
    #[clap(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Timeout for the quote request, in seconds.
    #[clap(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Hashtag attached to shared quotes.
    #[clap(long, default_value = DEFAULT_HASHTAG)]
    pub hashtag: String,

    /// Seed for quote selection. Same seed and same batch give the same sequence.
    #[clap(long)]
    pub seed: Option<u64>,

    /// Print a single quote and exit instead of reading commands from stdin.
    #[clap(long)]
    pub once: bool,
}

impl Args {
    /// Endpoint with surrounding whitespace and matching quotes removed.
    pub fn endpoint(&self) -> Result<String, QuoteError> {
        let trimmed = self.endpoint.trim();
        let endpoint = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed);
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(QuoteError::Config(format!(
                "--endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        Ok(endpoint.to_string())
    }

    /// Request timeout; zero is rejected.
    pub fn timeout(&self) -> Result<Duration, QuoteError> {
        if self.timeout_secs == 0 {
            return Err(QuoteError::Config("--timeout-secs must be positive".into()));
        }
        Ok(Duration::from_secs(self.timeout_secs))
    }
}
