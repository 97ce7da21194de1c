//! Headless mode runner - main event loop without TUI

use tokio::sync::broadcast::{self, error::TryRecvError};
use tokio::sync::mpsc;

use pdeck_app::message::Message;
use pdeck_app::{Engine, EngineEvent};
use pdeck_client::StatusClient;
use pdeck_core::prelude::*;

use super::command::parse_command;
use super::HeadlessEvent;

/// Run in headless mode until `quit`, a signal, or the channel closes
pub async fn run_headless<C>(mut engine: Engine<C>) -> Result<()>
where
    C: StatusClient + Send + Sync + 'static,
{
    info!("═══════════════════════════════════════════════════════");
    info!("Profile Deck starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut events = engine.subscribe();

    let stdin_tx = engine.msg_sender();
    std::thread::spawn(move || read_stdin_blocking(stdin_tx));

    HeadlessEvent::ready(
        engine.state.panels.len(),
        engine.state.settings.remote.base_url.clone(),
    )
    .emit();

    engine.start_polling();

    while !engine.should_quit() {
        if !engine.process_next().await {
            info!("Message channel closed");
            break;
        }
        flush_events(&mut events);
    }

    engine.shutdown().await;
    flush_events(&mut events);

    info!("Profile Deck headless mode exiting");
    Ok(())
}

/// Write every queued engine event to stdout
fn flush_events(events: &mut broadcast::Receiver<EngineEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => HeadlessEvent::from_engine(&event).emit(),
            Err(TryRecvError::Lagged(n)) => warn!("Dropped {} engine events", n),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}

/// Read commands line by line. Runs on its own thread because stdin is blocking.
fn read_stdin_blocking(msg_tx: mpsc::Sender<Message>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(Some(msg)) => {
                let quit = matches!(msg, Message::Quit);
                debug!("Stdin command: {:?}", msg);
                if msg_tx.blocking_send(msg).is_err() || quit {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Rejected stdin command {:?}: {}", line, e);
                HeadlessEvent::error(e.to_string()).emit();
            }
        }
    }

    // EOF leaves the engine polling; quit or a signal ends the session
    info!("Stdin reader exiting");
}
