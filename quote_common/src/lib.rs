//!
//! Core of the quote widget: the session state machine and the types shared with the
//! terminal front end.
//!
//! This crate aggregates:
//! - `session` — `QuoteSession`, its `Status`, load tickets and change events.
//! - `model` — the `Quote` value and decoding of the remote payload.
//! - `source` — the `QuoteSource` trait implemented by fetch collaborators.
//! - `random` — injectable uniform index selection.
//! - `error` — `LoadError` for fetch failures and the unified `QuoteError`.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `net` — endpoint and share-intent constants.
#![warn(missing_docs)]
pub mod error;
pub mod model;
pub mod net;
pub mod random;
pub mod result;
pub mod session;
pub mod source;

pub use error::{LoadError, QuoteError};
pub use model::quote::Quote;
pub use result::Result;
pub use session::{LoadTicket, QuoteSession, SessionEvent, Status};
pub use source::QuoteSource;
