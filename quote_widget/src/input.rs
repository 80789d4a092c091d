//! Reading user commands from stdin on a background thread.
use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use log::{debug, error};
use quote_common::{QuoteError, Result};

use crate::command::UserCommand;

/// One line of user input, already interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A recognised command.
    Command(UserCommand),
    /// Input that matched no command.
    Unknown(String),
    /// End of input.
    Closed,
}

/// Forward every line of `reader` to `tx` as an `InputEvent`, then `Closed` at EOF.
///
/// Stops early after `quit`, since nothing further would be read.
pub fn read_commands<R: BufRead>(reader: R, tx: &Sender<InputEvent>) -> Result<()> {
    for line in reader.lines() {
        let line = line?;
        let event = match UserCommand::parse_line(&line) {
            Some(cmd) => InputEvent::Command(cmd),
            None => InputEvent::Unknown(line.trim().to_string()),
        };
        let quit = event == InputEvent::Command(UserCommand::Quit);
        send(tx, event)?;
        if quit {
            return Ok(());
        }
    }
    send(tx, InputEvent::Closed)
}

/// Spawn a thread reading commands from stdin into `tx`.
pub fn spawn_stdin_reader(tx: Sender<InputEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let stdin = io::stdin().lock();
        if let Err(e) = read_commands(stdin, &tx) {
            error!("Input reader stopped: {}", e);
        }
        debug!("Input reader stopping...");
    })
}

fn send(tx: &Sender<InputEvent>, event: InputEvent) -> Result<()> {
    tx.send(event)
        .map_err(|e| QuoteError::ChannelSend(format!("input event {:?}", e.0)))
}
