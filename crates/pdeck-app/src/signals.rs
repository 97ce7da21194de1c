//! SIGINT/SIGTERM → [`Message::Quit`]

use tokio::sync::mpsc;

use crate::message::Message;
use pdeck_core::prelude::*;

/// Spawn a watcher that asks the engine to quit on the first termination signal
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match termination().await {
            Ok(name) => {
                info!("Received {}, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Quit after {} dropped: engine already gone", name);
                }
            }
            Err(e) => error!("Signal watcher disabled: {}", e),
        }
    });
}

/// Resolve with the name of whichever signal arrives first
async fn termination() -> Result<&'static str> {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .map(|()| "SIGINT")
            .map_err(|e| Error::signal(format!("cannot listen for Ctrl+C: {}", e)))
    };

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut term = signal(SignalKind::terminate())
            .map_err(|e| Error::signal(format!("cannot listen for SIGTERM: {}", e)))?;
        tokio::select! {
            res = interrupt => res,
            _ = term.recv() => Ok("SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        interrupt.await
    }
}
