//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the status
//! client, the process-wide poll timer and the shutdown signal. Front ends
//! feed it messages and render from `engine.state`.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use pdeck_client::StatusClient;
use pdeck_core::prelude::*;
use pdeck_core::Badge;

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::panel::PanelId;
use crate::process;
use crate::signals;
use crate::state::{Alert, AppState, RemoteListing};

/// Message channel capacity
const CHANNEL_CAPACITY: usize = 256;

/// Event broadcast capacity
const EVENT_CAPACITY: usize = 256;

/// Per-panel marks captured before processing, for change detection
#[derive(Debug, Clone)]
struct PanelMark {
    id: PanelId,
    appended: u64,
    clears: u64,
    badge: Badge,
}

/// Lightweight snapshot of state for change detection.
#[derive(Debug, Clone)]
struct StateSnapshot {
    panels: Vec<PanelMark>,
    alert: Option<Alert>,
    remote: RemoteListing,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            panels: state
                .panels
                .iter()
                .map(|p| PanelMark {
                    id: p.id,
                    appended: p.log.total_appended(),
                    clears: p.log.clear_count(),
                    badge: p.badge.clone(),
                })
                .collect(),
            alert: state.alert.clone(),
            remote: state.remote.clone(),
        }
    }
}

/// Orchestration engine for Profile Deck.
pub struct Engine<C>
where
    C: StatusClient + Send + Sync + 'static,
{
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel. Clone for input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the message channel. Front ends drain it.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Send `true` to stop background loops
    pub shutdown_tx: watch::Sender<bool>,

    pub shutdown_rx: watch::Receiver<bool>,

    client: Arc<C>,

    poll_task: Option<JoinHandle<()>>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl<C> Engine<C>
where
    C: StatusClient + Send + Sync + 'static,
{
    /// Create an engine. Must be called inside a tokio runtime.
    ///
    /// The poll timer is not running until [`start_polling`](Self::start_polling).
    pub fn new(settings: Settings, client: C) -> Self {
        let state = AppState::new(settings);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(CHANNEL_CAPACITY);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);

        signals::spawn_signal_handler(msg_tx.clone());

        info!(
            "Engine ready: {} panel(s), backend {}",
            state.panels.len(),
            state.settings.remote.base_url
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            shutdown_tx,
            shutdown_rx,
            client: Arc::new(client),
            poll_task: None,
            event_tx,
        }
    }

    /// Start the process-wide poll timer.
    ///
    /// Sends [`Message::PollTick`] every `polling.interval_ms`, first tick one
    /// interval from now. Calling it again is a no-op.
    pub fn start_polling(&mut self) {
        if self.poll_task.is_some() {
            return;
        }

        let period = self.state.settings.polling.interval();
        let msg_tx = self.msg_tx.clone();
        let mut shutdown_rx = self.shutdown_rx.clone();
        info!("Polling every {:?}", period);

        self.poll_task = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if msg_tx.send(Message::PollTick).await.is_err() {
                            break;
                        }
                    }
                    changed = shutdown_rx.changed() => {
                        if changed.is_err() || *shutdown_rx.borrow() {
                            break;
                        }
                    }
                }
            }
            debug!("Poll timer stopped");
        }));
    }

    /// Subscribe to engine events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.client);

        self.emit_events(&pre);
    }

    /// Drain and process all pending messages. Returns how many ran.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next message and process it. `false` once the channel is closed.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn shutdown_receiver(&self) -> watch::Receiver<bool> {
        self.shutdown_rx.clone()
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop the poll timer and signal background loops.
    ///
    /// In-flight requests are not cancelled; their results are dropped.
    pub async fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);
        let _ = self.shutdown_tx.send(true);

        if let Some(task) = self.poll_task.take() {
            match tokio::time::timeout(std::time::Duration::from_secs(2), task).await {
                Ok(Ok(())) => debug!("Poll timer joined"),
                Ok(Err(e)) => warn!("Poll timer panicked: {}", e),
                Err(_) => warn!("Poll timer shutdown timed out"),
            }
        }
        info!("Engine shut down");
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }

    fn emit_events(&self, pre: &StateSnapshot) {
        for mark in &pre.panels {
            let Some(panel) = self.state.panels.get(mark.id) else {
                continue;
            };

            if panel.log.clear_count() != mark.clears {
                self.emit(EngineEvent::LogCleared { panel: mark.id });
            }

            let new_lines = panel.log.total_appended().saturating_sub(mark.appended);
            if new_lines > 0 {
                let take = usize::try_from(new_lines).unwrap_or(usize::MAX);
                for entry in panel.log.tail(take) {
                    self.emit(EngineEvent::LogAppended {
                        panel: mark.id,
                        entry: entry.clone(),
                    });
                }
            }

            if panel.badge != mark.badge {
                self.emit(EngineEvent::BadgeChanged {
                    panel: mark.id,
                    badge: panel.badge.clone(),
                });
            }
        }

        if let Some(alert) = &self.state.alert {
            if pre.alert.as_ref() != Some(alert) {
                self.emit(EngineEvent::AlertRaised {
                    alert: alert.clone(),
                });
            }
        }

        if self.state.remote != pre.remote {
            self.emit(EngineEvent::RemoteListingChanged {
                listing: self.state.remote.clone(),
            });
        }
    }
}
