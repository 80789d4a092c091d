//! Share-intent link for the quote on display.
//!
//! Query values go through `Url::parse_with_params`, so reserved characters in the
//! quote (`&`, `#`, `?`, spaces, non-ASCII) are percent-encoded and cannot break out
//! of the `text` parameter.
use quote_common::net::SHARE_INTENT_BASE;
use quote_common::{Quote, QuoteError};
use reqwest::Url;

/// Text posted along with the link: the quote in double quotes followed by its author.
pub fn share_text(quote: &Quote) -> String {
    format!("\"{}\" - {}", quote.text, quote.author)
}

/// Build the share URL for `quote`, or `None` while only the placeholder is shown.
pub fn share_intent_url(quote: &Quote, hashtag: &str) -> Result<Option<Url>, QuoteError> {
    if quote.is_placeholder() {
        return Ok(None);
    }
    let text = share_text(quote);
    let hashtag = hashtag.trim().trim_start_matches('#');
    let mut params = Vec::with_capacity(2);
    if !hashtag.is_empty() {
        params.push(("hashtags", hashtag));
    }
    params.push(("text", text.as_str()));
    let url = Url::parse_with_params(SHARE_INTENT_BASE, &params)
        .map_err(|e| QuoteError::Format(format!("Failed to build share URL: {}", e)))?;
    Ok(Some(url))
}
