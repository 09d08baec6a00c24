//! Host-facing API module
//! 
//! This module contains the presentation boundary, the input handlers and
//! the terminal renderers that sit on either side of the controller.

pub mod commands;
pub mod handlers;
pub mod presenter;
pub mod presenters;

pub use commands::{Command, ParseCommandError};
pub use handlers::{handle_command, on_mode_selected, on_reset_requested, on_toggle_requested};
pub use presenter::{Presenter, RunningLabel, Update};
pub use presenters::{JsonPresenter, TextPresenter, UpdateFrame};
