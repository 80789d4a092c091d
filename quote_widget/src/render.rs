//! Terminal presentation of the session.
//!
//! The renderer is a session observer: the main loop feeds it every `SessionEvent` in
//! the order it was emitted and it prints the matching view to its writer.
use std::io::{self, Write};

use quote_common::{Quote, SessionEvent, Status};
use reqwest::Url;

/// Shown instead of quote content whenever a fetch failed.
pub const ERROR_FALLBACK: &str = "There was an error loading the quotes. Please try again.";

const SKELETON: &str = "  ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░\n  ░░░░░░░░░░░░░░░░░░░░░░░░░░\n                              ░░░░░░░░░░\n";

/// Writes session views to `out` (stdout in production).
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render one change notification. `error_message` is the session's message at the
    /// time the event is handled.
    pub fn render_event(&mut self, event: &SessionEvent, error_message: Option<&str>) -> io::Result<()> {
        match event {
            SessionEvent::StatusChanged(Status::Loading) => self.out.write_all(SKELETON.as_bytes())?,
            SessionEvent::StatusChanged(Status::Error) => {
                writeln!(self.out, "{}", ERROR_FALLBACK)?;
                if let Some(message) = error_message {
                    writeln!(self.out, "  ({})", message)?;
                }
            }
            SessionEvent::StatusChanged(Status::Idle | Status::Ready) => {}
            SessionEvent::QuoteChanged(quote) => self.quote(quote)?,
        }
        self.out.flush()
    }

    /// Print a quote block.
    pub fn quote(&mut self, quote: &Quote) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "  \"{}\"", quote.text)?;
        writeln!(self.out, "      - {}", quote.author)?;
        writeln!(self.out)
    }

    /// Print a share link.
    pub fn share(&mut self, url: &Url) -> io::Result<()> {
        writeln!(self.out, "Share this quote: {}", url)?;
        self.out.flush()
    }

    /// Print a one-line notice.
    pub fn notice(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    /// Print the error fallback in place of quote content, with a retry hint.
    pub fn error_hint(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", ERROR_FALLBACK)?;
        writeln!(self.out, "Type 'retry' to fetch them again.")?;
        self.out.flush()
    }

    /// Print the command list.
    pub fn help(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Commands: [n]ext (or Enter), [s]hare, [r]etry, [h]elp, [q]uit"
        )?;
        self.out.flush()
    }

    /// Complain about unrecognised input.
    pub fn unknown(&mut self, input: &str) -> io::Result<()> {
        writeln!(self.out, "Unknown command {:?}. Type 'help' for the list.", input)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(f: impl FnOnce(&mut Renderer<Vec<u8>>) -> io::Result<()>) -> String {
        let mut renderer = Renderer::new(Vec::new());
        f(&mut renderer).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn quote_event_shows_text_and_author() {
        let event = SessionEvent::QuoteChanged(Quote::new("Say my name.", "Walter White"));
        let out = output(|r| r.render_event(&event, None));
        assert!(out.contains("\"Say my name.\""));
        assert!(out.contains("- Walter White"));
    }

    #[test]
    fn loading_shows_skeleton() {
        let out = output(|r| r.render_event(&SessionEvent::StatusChanged(Status::Loading), None));
        assert!(out.contains('░'));
    }

    #[test]
    fn error_shows_fallback_and_detail() {
        let out = output(|r| {
            r.render_event(
                &SessionEvent::StatusChanged(Status::Error),
                Some("Network error: timed out"),
            )
        });
        assert!(out.starts_with(ERROR_FALLBACK));
        assert!(out.contains("timed out"));
    }

    #[test]
    fn error_hint_offers_retry() {
        let out = output(|r| r.error_hint());
        assert!(out.starts_with(ERROR_FALLBACK));
        assert!(out.contains("'retry'"));
    }

    #[test]
    fn ready_prints_nothing_by_itself() {
        let out = output(|r| r.render_event(&SessionEvent::StatusChanged(Status::Ready), None));
        assert!(out.is_empty());
    }
}
