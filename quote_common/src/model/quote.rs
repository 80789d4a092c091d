//! Quote value and wire decoding.
//!
//! The remote service answers with a JSON array of objects such as
//! `{"quote": "...", "author": "..."}`. The body field is mapped to `Quote::text`;
//! sources naming it `text` decode the same way. When an object carries both keys,
//! `quote` wins.
use serde::Deserialize;

use crate::error::LoadError;

/// A single quotation with its attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "WireQuote")]
pub struct Quote {
    /// Quotation body.
    pub text: String,
    /// Who said it.
    pub author: String,
}

/// Object shape as served by the remote source.
#[derive(Deserialize)]
struct WireQuote {
    quote: Option<String>,
    text: Option<String>,
    author: String,
}

impl TryFrom<WireQuote> for Quote {
    type Error = String;

    fn try_from(wire: WireQuote) -> Result<Self, Self::Error> {
        match wire.quote.or(wire.text) {
            Some(text) => Ok(Quote::new(text, wire.author)),
            None => Err("quote object has neither `quote` nor `text`".to_string()),
        }
    }
}

impl Quote {
    /// Creates a quote from its body and attribution.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            author: author.into(),
        }
    }

    /// The empty quote shown before anything was loaded.
    pub fn placeholder() -> Self {
        Quote::default()
    }

    /// `true` for the placeholder (nothing to display or share).
    pub fn is_placeholder(&self) -> bool {
        self.text.is_empty() && self.author.is_empty()
    }
}

/// Decode a response body into an ordered list of quotes.
///
/// Anything that is not a JSON array of `{quote|text, author}` objects is a
/// `LoadError::Decode`. An empty array decodes successfully; deciding whether
/// that counts as a usable batch is up to the session.
pub fn decode_quotes(body: &[u8]) -> Result<Vec<Quote>, LoadError> {
    let quotes = serde_json::from_slice::<Vec<Quote>>(body)?;
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_payload() {
        let body = br#"[{"quote":"I am the one who knocks.","author":"Walter White"},
                        {"quote":"Say my name.","author":"Walter White"}]"#;
        let quotes = decode_quotes(body).unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0], Quote::new("I am the one who knocks.", "Walter White"));
        assert_eq!(quotes[1].text, "Say my name.");
    }

    #[test]
    fn accepts_text_alias_and_ignores_extra_fields() {
        let body = br#"[{"text":"Yeah, science!","author":"Jesse Pinkman","id":7}]"#;
        let quotes = decode_quotes(body).unwrap();
        assert_eq!(quotes, vec![Quote::new("Yeah, science!", "Jesse Pinkman")]);
    }

    #[test]
    fn both_body_keys_prefer_quote() {
        let body = br#"[{"quote":"Say my name.","text":"ignored","author":"Walter White"}]"#;
        let quotes = decode_quotes(body).unwrap();
        assert_eq!(quotes, vec![Quote::new("Say my name.", "Walter White")]);
    }

    #[test]
    fn missing_body_is_decode_error() {
        match decode_quotes(br#"[{"author":"Walter White"}]"#) {
            Err(LoadError::Decode(msg)) => assert!(msg.contains("neither")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn empty_array_is_not_a_decode_error() {
        assert_eq!(decode_quotes(b"[]").unwrap(), Vec::<Quote>::new());
    }

    #[test]
    fn rejects_wrong_shapes() {
        for body in [
            &br#"{"quote":"x","author":"y"}"#[..],
            br#"[{"quote":"missing author"}]"#,
            br#"[{"quote":1,"author":"y"}]"#,
            b"<html>502 Bad Gateway</html>",
            b"",
        ] {
            match decode_quotes(body) {
                Err(LoadError::Decode(msg)) => assert!(!msg.is_empty()),
                other => panic!("expected decode error, got {:?}", other),
            }
        }
    }

    #[test]
    fn placeholder_is_empty() {
        assert!(Quote::placeholder().is_placeholder());
        assert!(!Quote::new("a", "b").is_placeholder());
    }
}
