//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every network call happens in a spawned task that reports back through the
//! message channel. Tasks never see `AppState`.

use std::sync::Arc;

use tokio::sync::mpsc;

use pdeck_client::{InjectOptions, StatusClient};
use pdeck_core::prelude::*;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::panel::PanelId;

pub(crate) mod polling;

/// Execute an action by spawning a background task
pub fn handle_action<C>(action: UpdateAction, client: &Arc<C>, msg_tx: mpsc::Sender<Message>)
where
    C: StatusClient + Send + Sync + 'static,
{
    match action {
        UpdateAction::Start { panel, profile_id } => {
            spawn_start(client.clone(), panel, profile_id, msg_tx);
        }

        UpdateAction::Inject {
            panel,
            profile_id,
            options,
        } => {
            spawn_inject(client.clone(), panel, profile_id, options, msg_tx);
        }

        UpdateAction::PollStatus { targets } => {
            polling::spawn_status_polls(client.clone(), targets, msg_tx);
        }

        UpdateAction::ListRemoteProfiles => {
            spawn_remote_listing(client.clone(), msg_tx);
        }
    }
}

fn spawn_start<C>(
    client: Arc<C>,
    panel: PanelId,
    profile_id: String,
    msg_tx: mpsc::Sender<Message>,
) where
    C: StatusClient + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match client.start(&profile_id).await {
            Ok(ack) => Message::StartCompleted {
                panel,
                profile_id,
                message: ack.message,
            },
            Err(e) => Message::StartFailed {
                panel,
                profile_id,
                error: e.to_string(),
            },
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Start result dropped: channel closed");
        }
    });
}

fn spawn_inject<C>(
    client: Arc<C>,
    panel: PanelId,
    profile_id: String,
    options: InjectOptions,
    msg_tx: mpsc::Sender<Message>,
) where
    C: StatusClient + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match client.inject(&profile_id, &options).await {
            Ok(stats) => Message::InjectCompleted {
                panel,
                profile_id,
                stats,
            },
            Err(e) => Message::InjectFailed {
                panel,
                profile_id,
                error: e.to_string(),
            },
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Inject result dropped: channel closed");
        }
    });
}

fn spawn_remote_listing<C>(client: Arc<C>, msg_tx: mpsc::Sender<Message>)
where
    C: StatusClient + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match client.fetch_all().await {
            Ok(profiles) => Message::RemoteProfilesListed { profiles },
            Err(e) => Message::RemoteListFailed {
                error: e.to_string(),
            },
        };
        if msg_tx.send(msg).await.is_err() {
            debug!("Remote listing dropped: channel closed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdeck_client::test_utils::{FakeFailure, FakeStatusClient};
    use pdeck_client::InjectStats;

    #[tokio::test]
    async fn test_start_reports_ack() {
        let fake = Arc::new(FakeStatusClient::new());
        fake.push_start_ok("launching");
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::Start {
                panel: 1,
                profile_id: "abc".into(),
            },
            &fake,
            tx,
        );

        match rx.recv().await.unwrap() {
            Message::StartCompleted {
                panel,
                profile_id,
                message,
            } => {
                assert_eq!(panel, 1);
                assert_eq!(profile_id, "abc");
                assert_eq!(message, "launching");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_start_failure_carries_remote_message() {
        let fake = Arc::new(FakeStatusClient::new());
        fake.push_start_err(FakeFailure::Remote("Profile abc is already running".into()));
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::Start {
                panel: 0,
                profile_id: "abc".into(),
            },
            &fake,
            tx,
        );

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::StartFailed { error, .. } if error == "Profile abc is already running"
        ));
    }

    #[tokio::test]
    async fn test_inject_passes_options_through() {
        let fake = Arc::new(FakeStatusClient::new());
        fake.push_inject_ok(InjectStats {
            contexts: 1,
            ..Default::default()
        });
        let (tx, mut rx) = mpsc::channel(8);
        let options = InjectOptions::new("http://cdn/x.js", "");

        handle_action(
            UpdateAction::Inject {
                panel: 0,
                profile_id: "abc".into(),
                options: options.clone(),
            },
            &fake,
            tx,
        );

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::InjectCompleted { stats, .. } if stats.contexts == 1
        ));
        assert_eq!(
            fake.calls(),
            vec![pdeck_client::test_utils::FakeCall::Inject {
                profile_id: "abc".into(),
                options
            }]
        );
    }

    #[tokio::test]
    async fn test_remote_listing_failure() {
        let fake = Arc::new(FakeStatusClient::new());
        fake.set_all(Err(FakeFailure::Transport("refused".into())));
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::ListRemoteProfiles, &fake, tx);

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::RemoteListFailed { error } if error == "refused"
        ));
    }

    #[tokio::test]
    async fn test_remote_listing_after_engine_gone_is_harmless() {
        let fake = Arc::new(FakeStatusClient::new());
        let (tx, rx) = mpsc::channel(8);
        drop(rx);

        handle_action(UpdateAction::ListRemoteProfiles, &fake, tx);

        for _ in 0..100 {
            if fake.calls().contains(&pdeck_client::test_utils::FakeCall::FetchAll) {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(fake.calls(), vec![pdeck_client::test_utils::FakeCall::FetchAll]);
    }
}
