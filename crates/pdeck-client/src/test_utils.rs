//! Test utilities for status client consumers
//!
//! Provides [`FakeStatusClient`], a scripted in-memory [`StatusClient`] that
//! records every call it receives.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use pdeck_core::{Error, Result};

use crate::client::StatusClient;
use crate::protocol::{InjectOptions, InjectStats, StartAck, StatusLookup, StatusSnapshot};

/// A scripted failure, turned into the matching [`Error`] when replayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeFailure {
    Remote(String),
    Transport(String),
}

impl FakeFailure {
    fn into_error(self) -> Error {
        match self {
            FakeFailure::Remote(message) => Error::remote(message),
            FakeFailure::Transport(message) => Error::transport(message),
        }
    }
}

/// One recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Start(String),
    Inject {
        profile_id: String,
        options: InjectOptions,
    },
    FetchStatus(String),
    FetchAll,
}

pub type Scripted<T> = std::result::Result<T, FakeFailure>;

#[derive(Default)]
struct FakeState {
    start_replies: VecDeque<Scripted<StartAck>>,
    inject_replies: VecDeque<Scripted<InjectStats>>,
    status_replies: HashMap<String, VecDeque<Scripted<StatusLookup>>>,
    all_reply: Option<Scripted<BTreeMap<String, StatusSnapshot>>>,
    calls: Vec<FakeCall>,
}

/// In-memory [`StatusClient`].
///
/// Start and inject replies are consumed in order; once exhausted they default
/// to an `"ok"` ack and zeroed stats. Status replies are per profile and the
/// last one sticks, so repeated polls keep seeing it. An unscripted profile is
/// [`StatusLookup::NotFound`].
#[derive(Default)]
pub struct FakeStatusClient {
    state: Mutex<FakeState>,
    delay: Option<Duration>,
}

impl FakeStatusClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every reply, to keep requests in flight
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    pub fn push_start_ok(&self, message: &str) {
        self.with_state(|s| {
            s.start_replies.push_back(Ok(StartAck {
                message: message.to_string(),
            }))
        });
    }

    pub fn push_start_err(&self, failure: FakeFailure) {
        self.with_state(|s| s.start_replies.push_back(Err(failure)));
    }

    pub fn push_inject_ok(&self, stats: InjectStats) {
        self.with_state(|s| s.inject_replies.push_back(Ok(stats)));
    }

    pub fn push_inject_err(&self, failure: FakeFailure) {
        self.with_state(|s| s.inject_replies.push_back(Err(failure)));
    }

    pub fn push_status(&self, profile_id: &str, lookup: StatusLookup) {
        self.with_state(|s| {
            s.status_replies
                .entry(profile_id.to_string())
                .or_default()
                .push_back(Ok(lookup))
        });
    }

    /// Shorthand for a found snapshot
    pub fn push_snapshot(&self, profile_id: &str, snapshot: StatusSnapshot) {
        self.push_status(profile_id, StatusLookup::Found(snapshot));
    }

    pub fn push_status_err(&self, profile_id: &str, failure: FakeFailure) {
        self.with_state(|s| {
            s.status_replies
                .entry(profile_id.to_string())
                .or_default()
                .push_back(Err(failure))
        });
    }

    pub fn set_all(&self, reply: Scripted<BTreeMap<String, StatusSnapshot>>) {
        self.with_state(|s| s.all_reply = Some(reply));
    }

    /// Every call received so far, in order
    pub fn calls(&self) -> Vec<FakeCall> {
        self.with_state(|s| s.calls.clone())
    }

    pub fn start_calls(&self) -> usize {
        self.count(|c| matches!(c, FakeCall::Start(_)))
    }

    pub fn inject_calls(&self) -> usize {
        self.count(|c| matches!(c, FakeCall::Inject { .. }))
    }

    pub fn status_calls(&self, profile_id: &str) -> usize {
        self.count(|c| matches!(c, FakeCall::FetchStatus(id) if id == profile_id))
    }

    pub fn total_status_calls(&self) -> usize {
        self.count(|c| matches!(c, FakeCall::FetchStatus(_)))
    }

    fn count(&self, pred: impl Fn(&FakeCall) -> bool) -> usize {
        self.with_state(|s| s.calls.iter().filter(|c| pred(c)).count())
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl StatusClient for FakeStatusClient {
    async fn start(&self, profile_id: &str) -> Result<StartAck> {
        let reply = self.with_state(|s| {
            s.calls.push(FakeCall::Start(profile_id.to_string()));
            s.start_replies.pop_front()
        });
        self.pause().await;

        match reply {
            Some(Ok(ack)) => Ok(ack),
            Some(Err(failure)) => Err(failure.into_error()),
            None => Ok(StartAck {
                message: "ok".to_string(),
            }),
        }
    }

    async fn inject(&self, profile_id: &str, options: &InjectOptions) -> Result<InjectStats> {
        let reply = self.with_state(|s| {
            s.calls.push(FakeCall::Inject {
                profile_id: profile_id.to_string(),
                options: options.clone(),
            });
            s.inject_replies.pop_front()
        });
        self.pause().await;

        match reply {
            Some(Ok(stats)) => Ok(stats),
            Some(Err(failure)) => Err(failure.into_error()),
            None => Ok(InjectStats::default()),
        }
    }

    async fn fetch_status(&self, profile_id: &str) -> Result<StatusLookup> {
        let reply = self.with_state(|s| {
            s.calls.push(FakeCall::FetchStatus(profile_id.to_string()));
            let queue = s.status_replies.get_mut(profile_id)?;
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        });
        self.pause().await;

        match reply {
            Some(Ok(lookup)) => Ok(lookup),
            Some(Err(failure)) => Err(failure.into_error()),
            None => Ok(StatusLookup::NotFound),
        }
    }

    async fn fetch_all(&self) -> Result<BTreeMap<String, StatusSnapshot>> {
        let reply = self.with_state(|s| {
            s.calls.push(FakeCall::FetchAll);
            s.all_reply.clone()
        });
        self.pause().await;

        match reply {
            Some(Ok(all)) => Ok(all),
            Some(Err(failure)) => Err(failure.into_error()),
            None => Ok(BTreeMap::new()),
        }
    }
}
