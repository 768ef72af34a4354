use tokio::sync::broadcast;

pub type ShutdownSender = broadcast::Sender<()>;
pub type ShutdownReceiver = broadcast::Receiver<()>;

/// Only a single stop signal is ever sent per run.
const SHUTDOWN_CAPACITY: usize = 1;

#[must_use]
pub fn shutdown_channel() -> ShutdownSender {
    let (shutdown_tx, _) = broadcast::channel(SHUTDOWN_CAPACITY);
    shutdown_tx
}
