//! Focus Timer - A Pomodoro-style countdown with focus and break presets
//! 
//! This library provides the countdown state machine, the fixed mode presets
//! and the presentation boundary a host renders through.

pub mod config;
pub mod error;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::InvalidModeError;
pub use state::{CountdownController, CountdownState, Mode, ModeId};
pub use api::{Presenter, RunningLabel, Update};
pub use utils::signals::shutdown_signal;
