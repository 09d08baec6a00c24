//! Countdown event loop

use std::ops::ControlFlow;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    api::{handle_command, Command, Presenter},
    state::CountdownController,
};

/// Serialize host commands and timer events through a single controller.
///
/// Runs until a quit command arrives or every command sender is dropped, then
/// hands the controller back.
pub async fn countdown_task<P: Presenter>(
    mut controller: CountdownController<P>,
    mut commands: mpsc::Receiver<Command>,
) -> CountdownController<P> {
    info!("Starting countdown task");

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    info!("Command channel closed, stopping countdown task");
                    break;
                };
                debug!("Received command: {:?}", command);
                if let ControlFlow::Break(()) = handle_command(&mut controller, command) {
                    break;
                }
            }
            event = controller.next_timer_event() => {
                controller.on_timer_event(event);
            }
        }
    }

    controller.stop();
    controller
}
