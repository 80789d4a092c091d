//! Interactive commands typed by the user.
use strum_macros::{Display, EnumString};

/// Action requested on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum UserCommand {
    /// Show another random quote.
    #[strum(to_string = "next", serialize = "n", serialize = "")]
    Next,
    /// Print a share link for the current quote.
    #[strum(to_string = "share", serialize = "s")]
    Share,
    /// Fetch the batch again.
    #[strum(to_string = "retry", serialize = "r", serialize = "reload")]
    Retry,
    /// List the commands.
    #[strum(to_string = "help", serialize = "h", serialize = "?")]
    Help,
    /// Leave the widget.
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

impl UserCommand {
    /// Parse a raw input line, ignoring surrounding whitespace.
    pub fn parse_line(line: &str) -> Option<Self> {
        line.trim().parse().ok()
    }
}
