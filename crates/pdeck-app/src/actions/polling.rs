//! Status poll fan-out for one reconciliation tick.
//!
//! All fetches of a tick run concurrently inside a single task; each result is
//! sent as soon as it completes, so panels have no ordering relative to each
//! other.

use std::sync::Arc;

use futures_util::stream::{FuturesUnordered, StreamExt};
use tokio::sync::mpsc;

use pdeck_client::{StatusClient, StatusLookup};
use pdeck_core::prelude::*;

use crate::handler::PollTarget;
use crate::message::Message;

pub(crate) fn spawn_status_polls<C>(
    client: Arc<C>,
    targets: Vec<PollTarget>,
    msg_tx: mpsc::Sender<Message>,
) where
    C: StatusClient + Send + Sync + 'static,
{
    if targets.is_empty() {
        return;
    }

    tokio::spawn(async move {
        let mut pending: FuturesUnordered<_> = targets
            .into_iter()
            .map(|target| {
                let client = client.clone();
                async move {
                    let result = client.fetch_status(&target.profile_id).await;
                    (target, result)
                }
            })
            .collect();

        while let Some((target, result)) = pending.next().await {
            if msg_tx.send(poll_message(target, result)).await.is_err() {
                debug!("Poll results dropped: channel closed");
                break;
            }
        }
    });
}

fn poll_message(target: PollTarget, result: Result<StatusLookup>) -> Message {
    let PollTarget {
        panel,
        run,
        profile_id,
    } = target;
    match result {
        Ok(StatusLookup::Found(snapshot)) => Message::StatusPolled {
            panel,
            run,
            profile_id,
            snapshot,
        },
        Ok(StatusLookup::NotFound) => Message::StatusNotFound {
            panel,
            run,
            profile_id,
        },
        Err(e) => Message::StatusPollFailed {
            panel,
            run,
            profile_id,
            error: e.to_string(),
        },
    }
}
