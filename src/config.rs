//! Configuration and CLI argument handling

use clap::{Parser, ValueEnum};

/// How countdown updates are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Status lines for humans
    Text,
    /// One JSON object per update
    Json,
}

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "focus-timer")]
#[command(about = "A Pomodoro countdown timer with focus and break presets")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Output format for countdown updates
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Do not set the terminal window title
    #[arg(long)]
    pub no_title: bool,

    /// Do not color the progress bar with the mode accent
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["focus-timer"]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.no_title);
        assert!(!config.no_color);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn json_and_verbose() {
        let config = Config::try_parse_from(["focus-timer", "--format", "json", "-v", "--no-title", "--no-color"]).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.no_color);
        assert!(config.no_title);
        assert_eq!(config.log_level(), "debug");
    }
}
