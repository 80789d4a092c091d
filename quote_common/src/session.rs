//! Quote session state and its transitions.
//!
//! A `QuoteSession` owns the fetched batch of quotes, the quote currently on display,
//! and a four-state status:
//!
//! ```text
//! Idle -> Loading -> Ready
//!                 -> Error
//! Ready | Error -> Loading   (explicit reload only)
//! ```
//!
//! Only two things mutate it: a load (driven by the fetch collaborator) and a random
//! pick (pure, local). Loading is split into `begin_load` / `complete_load` so the
//! outbound read can run elsewhere while the owner keeps handling input; `load` glues
//! the halves together for callers that may block.
//!
//! Observers subscribe with [`QuoteSession::subscribe`] and receive `SessionEvent`s
//! over a `crossbeam_channel` in the exact order the mutations happened.
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info, warn};
use strum_macros::Display;

use crate::error::LoadError;
use crate::model::quote::Quote;
use crate::random::{RandomSource, ThreadRandom};
use crate::source::QuoteSource;

/// Lifecycle status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Status {
    /// Nothing requested yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; see [`QuoteSession::error_message`].
    Error,
    /// Quotes are available and one of them is current.
    Ready,
}

/// Change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The status moved to the given value.
    StatusChanged(Status),
    /// A new quote became current.
    QuoteChanged(Quote),
}

/// Identifies the single in-flight fetch started by [`QuoteSession::begin_load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// In-memory state for one run of the widget.
pub struct QuoteSession<R = ThreadRandom> {
    quotes: Vec<Quote>,
    current: Quote,
    status: Status,
    error: Option<LoadError>,
    rng: R,
    subscribers: Vec<Sender<SessionEvent>>,
    in_flight: Option<LoadTicket>,
    next_ticket: u64,
    closed: bool,
}

impl QuoteSession<ThreadRandom> {
    /// Create an idle session that picks quotes with the thread-local generator.
    pub fn new() -> Self {
        Self::with_random(ThreadRandom::new())
    }
}

impl Default for QuoteSession<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> QuoteSession<R> {
    /// Create an idle session with the given random source.
    pub fn with_random(rng: R) -> Self {
        Self {
            quotes: Vec::new(),
            current: Quote::placeholder(),
            status: Status::Idle,
            error: None,
            rng,
            subscribers: Vec::new(),
            in_flight: None,
            next_ticket: 0,
            closed: false,
        }
    }

    /// Current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The quote on display, or the placeholder if none was ever picked.
    pub fn current(&self) -> &Quote {
        &self.current
    }

    /// The loaded batch (empty until the first successful load).
    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// The failure behind the `Error` status.
    pub fn error(&self) -> Option<&LoadError> {
        self.error.as_ref()
    }

    /// Human-readable form of [`Self::error`].
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }

    /// `true` after [`Self::close`].
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Register an observer. Events sent after this call are delivered in mutation order.
    pub fn subscribe(&mut self) -> Receiver<SessionEvent> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Fetch from `source` and apply the outcome, blocking for the duration of the read.
    ///
    /// Does nothing while another fetch is in flight or after `close`. Fetch failures end
    /// in the `Error` status and are never returned.
    pub fn load<S: QuoteSource + ?Sized>(&mut self, source: &S) -> Status {
        match self.begin_load() {
            Some(ticket) => {
                let result = source.fetch();
                self.complete_load(ticket, result)
            }
            None => self.status,
        }
    }

    /// Enter `Loading` and hand out the ticket for the fetch the caller must now run.
    ///
    /// Returns `None` when a fetch is already in flight or the session is closed; in
    /// that case the caller must not start a fetch.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.closed {
            debug!("load ignored: session closed");
            return None;
        }
        if let Some(ticket) = self.in_flight {
            debug!("load ignored: fetch {:?} still in flight", ticket);
            return None;
        }

        let ticket = LoadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.error = None;
        self.set_status(Status::Loading);
        debug!("fetch {:?} started", ticket);
        Some(ticket)
    }

    /// Apply the outcome of the fetch identified by `ticket`.
    ///
    /// A non-empty batch replaces `quotes`, moves to `Ready` and immediately picks a
    /// quote. Any failure, including an empty batch, moves to `Error` and leaves
    /// `quotes` and `current` untouched. Results for a ticket that is not in flight
    /// (stale, or arriving after `close`) are discarded.
    pub fn complete_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Quote>, LoadError>,
    ) -> Status {
        if self.in_flight != Some(ticket) {
            warn!("discarding result of fetch {:?}: not in flight", ticket);
            return self.status;
        }
        self.in_flight = None;

        match result.and_then(non_empty) {
            Ok(quotes) => {
                info!("loaded {} quotes", quotes.len());
                self.quotes = quotes;
                self.set_status(Status::Ready);
                self.pick_random();
            }
            Err(e) => {
                warn!("quote fetch failed: {}", e);
                self.error = Some(e);
                self.set_status(Status::Error);
            }
        }
        self.status
    }

    /// Make a uniformly chosen quote current. No-op while the batch is empty.
    ///
    /// The previous quote is not excluded, so the same one may come up again.
    pub fn pick_random(&mut self) {
        if self.quotes.is_empty() {
            debug!("pick ignored: no quotes loaded");
            return;
        }
        let index = self.rng.pick_index(self.quotes.len());
        self.current = self.quotes[index].clone();
        debug!("picked quote #{}", index);
        let event = SessionEvent::QuoteChanged(self.current.clone());
        self.broadcast(event);
    }

    /// User action: show another random quote.
    pub fn request_new_quote(&mut self) {
        self.pick_random();
    }

    /// Tear the session down. Any in-flight fetch result is dropped when it arrives and
    /// all observers are disconnected.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.in_flight = None;
        self.subscribers.clear();
        debug!("session closed");
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
        self.broadcast(SessionEvent::StatusChanged(status));
    }

    fn broadcast(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

fn non_empty(quotes: Vec<Quote>) -> Result<Vec<Quote>, LoadError> {
    if quotes.is_empty() {
        Err(LoadError::EmptyResult)
    } else {
        Ok(quotes)
    }
}
