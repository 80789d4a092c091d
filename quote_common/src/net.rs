//! Remote endpoint and share-intent constants used by the widget.

/// Quote batch served by the reference deployment (up to 100 quotes per call).
pub const DEFAULT_ENDPOINT: &str = "https://api.breakingbadquotes.xyz/v1/quotes/100";
/// HTTP timeout for a single fetch, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Base URL of the share intent.
pub const SHARE_INTENT_BASE: &str = "https://twitter.com/intent/tweet";
/// Hashtag attached to shared quotes.
pub const DEFAULT_HASHTAG: &str = "quotes";
