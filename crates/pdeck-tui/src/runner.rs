//! TUI runner - event loop around the Engine

use pdeck_app::message::Message;
use pdeck_app::Engine;
use pdeck_client::StatusClient;
use pdeck_core::prelude::*;

use crate::terminal::TerminalSession;
use crate::{event, render};

/// Run the interactive deck until the operator quits.
///
/// The engine's poll timer starts here and is stopped before returning.
pub async fn run<C>(mut engine: Engine<C>) -> Result<()>
where
    C: StatusClient + Send + Sync + 'static,
{
    let mut session = TerminalSession::enter();
    engine.start_polling();

    let result = run_loop(session.terminal(), &mut engine);

    drop(session);
    engine.shutdown().await;

    if let Err(ref e) = result {
        error!("TUI loop failed: {:?}", e);
    }
    result
}

fn run_loop<C>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<C>) -> Result<()>
where
    C: StatusClient + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Results from background requests, poll ticks, signals
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal
            .draw(|frame| render::view(frame, &engine.state))
            .map_err(|e| Error::terminal(format!("draw failed: {}", e)))?;

        match event::poll()? {
            Some(Message::Tick) | None => {}
            Some(message) => engine.process_message(message),
        }
    }

    info!("Leaving TUI loop");
    Ok(())
}
