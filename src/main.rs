//! Focus Timer - A Pomodoro-style countdown with focus and break presets
//! 
//! This is the main entry point for the focus-timer terminal host.

use std::io::{self, IsTerminal};
use tokio::sync::mpsc;
use tracing::info;

use focus_timer::{
    api::{JsonPresenter, Presenter, TextPresenter},
    config::{Config, OutputFormat},
    state::CountdownController,
    tasks::{countdown_task, spawn_stdin_reader},
    utils::{shutdown_signal, shutdown_signals},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, stdout carries the countdown itself
    tracing_subscriber::fmt()
        .with_env_filter(format!("focus_timer={}", config.log_level()))
        .with_writer(io::stderr)
        .init();

    info!("Starting focus-timer v1.0.0");
    info!("Configuration: format={:?}, title={}", config.format, !config.no_title);
    info!("Commands:");
    info!("  t | toggle        - Start or pause");
    info!("  r | reset         - Restore the full duration");
    info!("  1 | 2 | 3         - Focus, short break, long break");
    info!("  mode <id>         - Switch to focus, short-break or long-break");
    info!("  s | status        - Log the current state");
    info!("  q | quit          - Exit");

    let signals = shutdown_signals()?;

    let use_color = !config.no_color && io::stdout().is_terminal();
    let presenter: Box<dyn Presenter + Send> = match config.format {
        OutputFormat::Text => Box::new(TextPresenter::new(io::stdout(), !config.no_title, use_color)),
        OutputFormat::Json => Box::new(JsonPresenter::new(io::stdout())),
    };
    let controller = CountdownController::new(presenter);

    let (command_tx, command_rx) = mpsc::channel(32);
    spawn_stdin_reader(command_tx)?;

    tokio::select! {
        controller = countdown_task(controller, command_rx) => {
            info!("Stopped at {}", controller.snapshot().display_text());
        }
        _ = shutdown_signal(signals) => {
            info!("Shutdown signal received");
        }
    }

    info!("Focus timer shutdown complete");
    Ok(())
}
