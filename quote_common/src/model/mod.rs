//! Data model types for the quote session.
//!
//! - `quote` — the `Quote` value and decoding of the remote JSON payload.
pub mod quote;
