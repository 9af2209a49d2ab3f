//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::Notice;

/// Queues a command without blocking the render thread. Returns whether the
/// command was actually queued; callers must not flip busy or in-flight flags
/// when it was not, since no completion event will ever arrive for it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    notice: &mut Option<Notice>,
) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *notice = Some(Notice::error("Command queue is full; please retry"));
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *notice = Some(Notice::error(
                "Backend worker disconnected; restart the app",
            ));
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
