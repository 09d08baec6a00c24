//! Textual host commands

use std::str::FromStr;

use thiserror::Error;

/// A request coming from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Reset,
    /// Raw mode identifier, validated by the controller
    SelectMode(String),
    Status,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command \"{0}\"")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim().to_lowercase();
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?;
        let rest: Vec<&str> = words.collect();

        let command = match (head, rest.as_slice()) {
            ("t" | "toggle" | "start" | "pause" | "space", []) => Command::Toggle,
            ("r" | "reset", []) => Command::Reset,
            ("s" | "status", []) => Command::Status,
            ("q" | "quit" | "exit", []) => Command::Quit,
            ("1", []) => Command::SelectMode("focus".to_string()),
            ("2", []) => Command::SelectMode("short-break".to_string()),
            ("3", []) => Command::SelectMode("long-break".to_string()),
            ("mode", [id]) => Command::SelectMode(id.to_string()),
            ("focus" | "short-break" | "long-break", []) => Command::SelectMode(head.to_string()),
            _ => return Err(ParseCommandError::Unknown(s.trim().to_string())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_aliases() {
        for input in ["t", "toggle", "Start", "PAUSE", "  space  "] {
            assert_eq!(input.parse(), Ok(Command::Toggle), "input {:?}", input);
        }
    }

    #[test]
    fn mode_shortcuts() {
        assert_eq!("1".parse(), Ok(Command::SelectMode("focus".into())));
        assert_eq!("2".parse(), Ok(Command::SelectMode("short-break".into())));
        assert_eq!("3".parse(), Ok(Command::SelectMode("long-break".into())));
        assert_eq!("long-break".parse(), Ok(Command::SelectMode("long-break".into())));
    }

    #[test]
    fn mode_prefix_passes_unknown_ids_through() {
        // validation happens in the controller so the error names the mode
        assert_eq!("mode bogus".parse(), Ok(Command::SelectMode("bogus".into())));
        assert_eq!("mode short-break".parse(), Ok(Command::SelectMode("short-break".into())));
    }

    #[test]
    fn other_commands() {
        assert_eq!("r".parse(), Ok(Command::Reset));
        assert_eq!("status".parse(), Ok(Command::Status));
        assert_eq!("exit".parse(), Ok(Command::Quit));
    }

    #[test]
    fn rejects_blank_and_unknown_input() {
        assert_eq!("   ".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseCommandError::Unknown("jump".into()))
        );
        assert_eq!(
            "reset now".parse::<Command>(),
            Err(ParseCommandError::Unknown("reset now".into()))
        );
        assert!("mode".parse::<Command>().is_err());
    }
}
