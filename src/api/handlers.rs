//! Input handlers for the countdown controller

use std::ops::ControlFlow;
use tracing::{info, warn};

use crate::{
    error::InvalidModeError,
    state::CountdownController,
};
use super::{commands::Command, presenter::Presenter};

/// Handle the start/pause control
pub fn on_toggle_requested<P: Presenter>(controller: &mut CountdownController<P>) {
    controller.toggle();
}

/// Handle the reset control
pub fn on_reset_requested<P: Presenter>(controller: &mut CountdownController<P>) {
    controller.reset();
}

/// Handle a mode selection. Unknown ids are returned to the caller untouched.
pub fn on_mode_selected<P: Presenter>(
    controller: &mut CountdownController<P>,
    mode_id: &str,
) -> Result<(), InvalidModeError> {
    controller.switch_mode(mode_id)
}

/// Dispatch a host command, breaking on quit
pub fn handle_command<P: Presenter>(
    controller: &mut CountdownController<P>,
    command: Command,
) -> ControlFlow<()> {
    match command {
        Command::Toggle => on_toggle_requested(controller),
        Command::Reset => on_reset_requested(controller),
        Command::SelectMode(mode_id) => {
            if let Err(e) = on_mode_selected(controller, &mode_id) {
                warn!("Ignoring mode selection: {}", e);
            }
        }
        Command::Status => {
            let state = controller.snapshot();
            info!(
                "Status: mode={}, remaining={}, running={}, auto_reset_pending={}",
                state.mode,
                state.display_text(),
                state.is_running,
                controller.has_pending_auto_reset()
            );
        }
        Command::Quit => {
            info!("Quit requested");
            return ControlFlow::Break(());
        }
    }

    ControlFlow::Continue(())
}
