//! Stdin command reader
//!
//! Runs on a dedicated OS thread: a blocking read on a runtime worker would
//! keep the runtime from shutting down until the next line arrives.

use std::{
    io::{self, BufRead},
    thread,
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::{Command, ParseCommandError};

/// Spawn the thread that reads stdin and forwards parsed commands
pub fn spawn_stdin_reader(commands: mpsc::Sender<Command>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || read_commands(io::stdin().lock(), commands))
}

/// Forward commands parsed from `reader` until EOF, quit, or the receiver goes away
pub fn read_commands<R: BufRead>(reader: R, commands: mpsc::Sender<Command>) {
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                return;
            }
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => continue,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        let quit = command == Command::Quit;
        if commands.blocking_send(command).is_err() {
            debug!("Countdown task gone, stopping input reader");
            return;
        }
        if quit {
            return;
        }
    }

    info!("Input closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_valid_commands_and_skips_noise() {
        let input: &[u8] = b"t\n\nwhat\nmode bogus\nr\nq\nt\n";
        let (tx, mut rx) = mpsc::channel(16);

        read_commands(input, tx);

        let mut received = Vec::new();
        while let Ok(command) = rx.try_recv() {
            received.push(command);
        }
        assert_eq!(
            received,
            vec![
                Command::Toggle,
                Command::SelectMode("bogus".to_string()),
                Command::Reset,
                Command::Quit,
            ]
        );
    }

    #[test]
    fn stops_when_receiver_is_dropped() {
        let input: &[u8] = b"t\nr\n";
        let (tx, rx) = mpsc::channel(16);
        drop(rx);

        // returns instead of blocking on a closed channel
        read_commands(input, tx);
    }
}
