//! pdeck-app - Panel state, reconciliation and orchestration for Profile Deck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: every panel's state lives in [`AppState`], only
//! `handler::update` mutates it, and network calls run as spawned actions
//! that report back as [`Message`]s. The [`Engine`] owns the loop plumbing
//! shared by the TUI and headless runners.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod panel;
pub mod panel_manager;
pub mod process;
pub mod signals;
pub mod state;
pub mod view;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{PollTarget, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use panel::{LogSink, Panel, PanelId};
pub use panel_manager::PanelManager;
pub use state::{Alert, AppState, RemoteListing, RemoteProfile, UiMode};
pub use view::{render, render_all, LogLine, PanelView, ViewModel};
