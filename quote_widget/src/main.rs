//! Quote Widget — a terminal front end that fetches a batch of quotes from a remote
//! service, shows one at random, and lets the user page through random quotes and
//! print share links for them.
//!
//! Usage example (CLI):
//! ```bash
//! quote_widget --endpoint https://api.breakingbadquotes.xyz/v1/quotes/100 --hashtag quotes
//! ```
//!
//! The main thread owns the `QuoteSession`. The HTTP fetch and the stdin reader run
//! on background threads and report back over `crossbeam_channel`s; the main loop
//! multiplexes them (plus Ctrl+C) with `select!`, applies each message to the session,
//! then renders the session events it produced.
#![warn(missing_docs)]
mod args;
mod command;
mod fetcher;
mod input;
mod render;
mod share;

use crate::args::Args;
use crate::command::UserCommand;
use crate::fetcher::{FetchOutcome, HttpQuoteSource, spawn_fetch};
use crate::input::InputEvent;
use crate::render::Renderer;
use clap::Parser;
use crossbeam_channel::{Receiver, Sender, bounded, select, unbounded};
use log::{debug, info};
use quote_common::QuoteError;
use quote_common::Result;
use quote_common::random::{RandomSource, SeededRandom, ThreadRandom};
use quote_common::{QuoteSession, QuoteSource, SessionEvent, Status};
use std::io::{self, Write};
use std::sync::Arc;

type Session = QuoteSession<Box<dyn RandomSource>>;

const LOADING_NOTICE: &str = "Still loading quotes...";

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    let endpoint = args.endpoint()?;
    let source = Arc::new(HttpQuoteSource::new(&endpoint, args.timeout()?)?);
    info!("Quote source: {}", source.endpoint());

    let rng: Box<dyn RandomSource> = match args.seed {
        Some(seed) => {
            info!("Using seeded selection (seed={})", seed);
            Box::new(SeededRandom::from_seed(seed))
        }
        None => Box::new(ThreadRandom::new()),
    };
    let mut session: Session = QuoteSession::with_random(rng);
    let mut renderer = Renderer::new(io::stdout());

    if args.once {
        return run_once(&mut session, source.as_ref(), &mut renderer);
    }
    run_interactive(&mut session, source, &mut renderer, &args.hashtag)
}

/// Load, print the picked quote (or the error view) and return.
fn run_once<S, W>(session: &mut Session, source: &S, renderer: &mut Renderer<W>) -> Result<()>
where
    S: QuoteSource + ?Sized,
    W: Write,
{
    let events = session.subscribe();
    session.load(source);
    flush_events(&events, session, renderer)?;
    session.close();

    match session.error() {
        Some(err) => Err(err.clone().into()),
        None => Ok(()),
    }
}

/// Channels the interactive loop waits on.
struct Inbox {
    fetch: Receiver<FetchOutcome>,
    input: Receiver<InputEvent>,
    shutdown: Receiver<()>,
}

fn run_interactive<S, W>(
    session: &mut Session,
    source: Arc<S>,
    renderer: &mut Renderer<W>,
    hashtag: &str,
) -> Result<()>
where
    S: QuoteSource + Send + Sync + 'static,
    W: Write,
{
    let (fetch_tx, fetch_rx) = unbounded::<FetchOutcome>();
    let (input_tx, input_rx) = unbounded::<InputEvent>();
    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);

    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down widget...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| QuoteError::Config(format!("Failed to set Ctrl+C handler: {}", e)))?;

    input::spawn_stdin_reader(input_tx);
    let inbox = Inbox {
        fetch: fetch_rx,
        input: input_rx,
        shutdown: shutdown_rx,
    };
    event_loop(session, &source, renderer, hashtag, &fetch_tx, &inbox)
}

/// Start the first load, then apply fetch results and user commands until quit, end of
/// input or shutdown. The session is closed on the way out, so a fetch still running
/// at that point cannot change it.
fn event_loop<S, W>(
    session: &mut Session,
    source: &Arc<S>,
    renderer: &mut Renderer<W>,
    hashtag: &str,
    fetch_tx: &Sender<FetchOutcome>,
    inbox: &Inbox,
) -> Result<()>
where
    S: QuoteSource + Send + Sync + 'static,
    W: Write,
{
    let events = session.subscribe();
    start_load(session, source, fetch_tx);
    flush_events(&events, session, renderer)?;
    renderer.help()?;

    loop {
        select! {
            recv(inbox.fetch) -> msg => if let Ok((ticket, result)) = msg {
                session.complete_load(ticket, result);
            },
            recv(inbox.input) -> msg => match msg {
                Ok(InputEvent::Command(UserCommand::Quit)) | Ok(InputEvent::Closed) | Err(_) => break,
                Ok(InputEvent::Command(cmd)) => {
                    handle_command(cmd, session, source, fetch_tx, renderer, hashtag)?;
                }
                Ok(InputEvent::Unknown(line)) => renderer.unknown(&line)?,
            },
            recv(inbox.shutdown) -> _ => break,
        }
        flush_events(&events, session, renderer)?;
    }

    session.close();
    info!("Quote widget stopped.");
    Ok(())
}

fn handle_command<S, W>(
    cmd: UserCommand,
    session: &mut Session,
    source: &Arc<S>,
    fetch_tx: &Sender<FetchOutcome>,
    renderer: &mut Renderer<W>,
    hashtag: &str,
) -> Result<()>
where
    S: QuoteSource + Send + Sync + 'static,
    W: Write,
{
    debug!("Command: {}", cmd);
    match cmd {
        UserCommand::Next => match session.status() {
            Status::Loading => renderer.notice(LOADING_NOTICE)?,
            Status::Error => renderer.error_hint()?,
            _ if session.quotes().is_empty() => {
                renderer.notice("No quotes loaded. Type 'retry' to fetch them again.")?
            }
            _ => session.request_new_quote(),
        },
        UserCommand::Share => match session.status() {
            Status::Error => renderer.error_hint()?,
            _ => match share::share_intent_url(session.current(), hashtag)? {
                Some(url) => renderer.share(&url)?,
                None => renderer.notice("Nothing to share yet.")?,
            },
        },
        UserCommand::Retry => {
            if !start_load(session, source, fetch_tx) {
                renderer.notice(LOADING_NOTICE)?;
            }
        }
        UserCommand::Help => renderer.help()?,
        UserCommand::Quit => {}
    }
    Ok(())
}

/// Begin a load and run its fetch in the background. Returns `false` if the session
/// refused because a fetch is already in flight.
fn start_load<S>(session: &mut Session, source: &Arc<S>, fetch_tx: &Sender<FetchOutcome>) -> bool
where
    S: QuoteSource + Send + Sync + 'static,
{
    match session.begin_load() {
        Some(ticket) => {
            spawn_fetch(Arc::clone(source), ticket, fetch_tx.clone());
            true
        }
        None => false,
    }
}

/// Render every pending session event in emission order.
fn flush_events<W: Write>(
    events: &Receiver<SessionEvent>,
    session: &Session,
    renderer: &mut Renderer<W>,
) -> Result<()> {
    let message = session.error_message();
    for event in events.try_iter() {
        renderer.render_event(&event, message.as_deref())?;
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
