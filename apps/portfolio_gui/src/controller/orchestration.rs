//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = match &cmd {
        BackendCommand::FetchAvatar { .. } => "fetch_avatar",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "Backend queue is full; the avatar will stay as a placeholder".to_string();
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Backend worker is not running; remote images are unavailable".to_string();
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::dispatch_backend_command;
    use crate::backend_bridge::commands::BackendCommand;

    fn fetch(url: &str) -> BackendCommand {
        BackendCommand::FetchAvatar {
            url: url.to_string(),
        }
    }

    #[test]
    fn queues_command_without_touching_status() {
        let (tx, rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, fetch("https://avatars.example/a.png"), &mut status);
        assert!(status.is_empty());
        assert!(matches!(
            rx.try_recv(),
            Ok(BackendCommand::FetchAvatar { url }) if url == "https://avatars.example/a.png"
        ));
    }

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&tx, fetch("a"), &mut status);
        dispatch_backend_command(&tx, fetch("b"), &mut status);
        assert!(status.contains("full"), "{status}");
    }

    #[test]
    fn reports_stopped_worker() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        dispatch_backend_command(&tx, fetch("a"), &mut status);
        assert!(status.contains("not running"), "{status}");
    }
}
