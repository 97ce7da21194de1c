//! Tests for the update function and its handlers.

use pdeck_client::{InjectStats, StatusSnapshot};
use pdeck_core::{Badge, BadgeKind, DebugEndpoint, LogLevel};

use super::{update, PollTarget, UpdateAction};
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, RemoteListing, UiMode};

// ─────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────

fn state() -> AppState {
    AppState::new(Settings::default())
}

fn messages(state: &AppState, panel: usize) -> Vec<String> {
    state
        .panels
        .get(panel)
        .unwrap()
        .log
        .iter()
        .map(|e| e.message.clone())
        .collect()
}

fn badge(state: &AppState, panel: usize) -> Badge {
    state.panels.get(panel).unwrap().badge.clone()
}

/// Arm a panel and drain the start action
fn start(state: &mut AppState, panel: usize, profile_id: &str) {
    let result = update(
        state,
        Message::RequestStart {
            panel,
            profile_id: profile_id.to_string(),
        },
    );
    assert!(matches!(result.action, Some(UpdateAction::Start { .. })));
}

/// Run one poll tick and feed `snapshot` back for `panel`
fn poll(state: &mut AppState, panel: usize, snapshot: StatusSnapshot) {
    let result = update(state, Message::PollTick);
    let Some(UpdateAction::PollStatus { targets }) = result.action else {
        panic!("expected a poll action");
    };
    let target = targets
        .into_iter()
        .find(|t| t.panel == panel)
        .expect("panel polled");
    update(
        state,
        Message::StatusPolled {
            panel,
            run: target.run,
            profile_id: target.profile_id,
            snapshot,
        },
    );
}

fn snapshot(status: &str) -> StatusSnapshot {
    StatusSnapshot::with_status(status)
}

// ─────────────────────────────────────────────────────────────────
// Start
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_start_then_ack_logs_run_and_message() {
    let mut state = state();
    let result = update(
        &mut state,
        Message::RequestStart {
            panel: 0,
            profile_id: "abc".into(),
        },
    );
    assert_eq!(
        result.action,
        Some(UpdateAction::Start {
            panel: 0,
            profile_id: "abc".into()
        })
    );

    update(
        &mut state,
        Message::StartCompleted {
            panel: 0,
            profile_id: "abc".into(),
            message: "launching".into(),
        },
    );

    assert_eq!(messages(&state, 0), vec!["▶️ Run profile: abc", "⏳ launching"]);
    assert_eq!(badge(&state, 0), Badge::new(BadgeKind::Running, "starting..."));
}

#[test]
fn test_start_trims_profile_id() {
    let mut state = state();
    start(&mut state, 1, "  abc \t");
    assert_eq!(state.panels.get(1).unwrap().profile_id.as_deref(), Some("abc"));
}

#[test]
fn test_blank_profile_id_is_a_blocking_alert() {
    let mut state = state();
    let result = update(
        &mut state,
        Message::RequestStart {
            panel: 0,
            profile_id: "   ".into(),
        },
    );

    assert!(result.action.is_none());
    assert_eq!(state.ui_mode, UiMode::Alert);
    assert!(state.alert.as_ref().unwrap().message.contains("required"));
    assert!(messages(&state, 0).is_empty());
    assert!(!state.panels.get(0).unwrap().is_armed());
}

#[test]
fn test_start_on_missing_panel_is_an_alert() {
    let mut state = state();
    let result = update(
        &mut state,
        Message::RequestStart {
            panel: 7,
            profile_id: "abc".into(),
        },
    );
    assert!(result.action.is_none());
    assert_eq!(state.ui_mode, UiMode::Alert);
}

#[test]
fn test_start_failure_sets_error_badge() {
    let mut state = state();
    start(&mut state, 0, "abc");
    update(
        &mut state,
        Message::StartFailed {
            panel: 0,
            profile_id: "abc".into(),
            error: "Profile abc is already running".into(),
        },
    );

    assert_eq!(badge(&state, 0), Badge::new(BadgeKind::Error, "error"));
    let panel = state.panels.get(0).unwrap();
    let last = panel.log.last().unwrap();
    assert_eq!(last.level, LogLevel::Error);
    assert_eq!(last.message, "❌ Start failed: Profile abc is already running");
}

#[test]
fn test_restart_resets_panel() {
    let mut state = state();
    start(&mut state, 0, "old");
    let mut snap = snapshot("started");
    snap.debug_host = Some("127.0.0.1".into());
    snap.debug_port = Some(9222);
    snap.websocket = Some("ws://old".into());
    poll(&mut state, 0, snap);

    start(&mut state, 0, "new");

    let panel = state.panels.get(0).unwrap();
    assert_eq!(panel.profile_id.as_deref(), Some("new"));
    assert_eq!(panel.last_known_status, None);
    assert_eq!(panel.debug_endpoint, None);
    assert_eq!(panel.websocket, None);
    assert_eq!(messages(&state, 0), vec!["▶️ Run profile: new"]);
}

#[test]
fn test_stale_start_response_still_applies() {
    let mut state = state();
    start(&mut state, 0, "first");
    start(&mut state, 0, "second");

    update(
        &mut state,
        Message::StartFailed {
            panel: 0,
            profile_id: "first".into(),
            error: "boom".into(),
        },
    );

    assert_eq!(badge(&state, 0).kind, BadgeKind::Error);
    assert_eq!(
        messages(&state, 0),
        vec!["▶️ Run profile: second", "❌ Start failed: boom"]
    );
}

// ─────────────────────────────────────────────────────────────────
// Inject
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_inject_without_profile_is_rejected_before_anything() {
    let mut state = state();
    let result = update(&mut state, Message::RequestInject { panel: 0 });

    assert!(result.action.is_none());
    assert_eq!(state.ui_mode, UiMode::Alert);
    assert!(messages(&state, 0).is_empty());
    assert_eq!(badge(&state, 0), Badge::idle());
}

#[test]
fn test_inject_carries_profile_and_options() {
    let mut settings = Settings::default();
    settings.inject.inline_js = "console.log(1)".into();
    let mut state = AppState::new(settings);
    start(&mut state, 2, "abc");

    let result = update(&mut state, Message::RequestInject { panel: 2 });
    let Some(UpdateAction::Inject {
        panel,
        profile_id,
        options,
    }) = result.action
    else {
        panic!("expected inject action");
    };
    assert_eq!(panel, 2);
    assert_eq!(profile_id, "abc");
    assert_eq!(options.inline_js.as_deref(), Some("console.log(1)"));
    assert_eq!(options.script_url, None);
    assert_eq!(
        messages(&state, 2).last().map(String::as_str),
        Some("💉 Inject script into abc")
    );
}

#[test]
fn test_inject_success_appends_one_summary_line() {
    let mut state = state();
    start(&mut state, 0, "abc");
    update(&mut state, Message::RequestInject { panel: 0 });
    let before = messages(&state, 0).len();

    update(
        &mut state,
        Message::InjectCompleted {
            panel: 0,
            profile_id: "abc".into(),
            stats: InjectStats {
                contexts: 2,
                pages: 5,
                ..Default::default()
            },
        },
    );

    let lines = messages(&state, 0);
    assert_eq!(lines.len(), before + 1);
    assert_eq!(
        lines.last().unwrap(),
        "✅ Injected → Ctx:2 | Pages:5 | URL:0 | Inline:0"
    );
}

#[test]
fn test_inject_failure_sets_inject_error_badge() {
    let mut state = state();
    start(&mut state, 0, "abc");
    update(
        &mut state,
        Message::InjectFailed {
            panel: 0,
            profile_id: "abc".into(),
            error: "Profile not started".into(),
        },
    );

    assert_eq!(badge(&state, 0), Badge::new(BadgeKind::Error, "inject error"));
    assert_eq!(
        messages(&state, 0).last().unwrap(),
        "❌ Inject failed: Profile not started"
    );
}

// ─────────────────────────────────────────────────────────────────
// Clear
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_clear_log_touches_only_the_log() {
    let mut state = state();
    start(&mut state, 0, "abc");
    poll(&mut state, 0, snapshot("queued"));

    update(&mut state, Message::ClearLog { panel: 0 });

    let panel = state.panels.get(0).unwrap();
    assert!(panel.log.is_empty());
    assert_eq!(panel.profile_id.as_deref(), Some("abc"));
    assert_eq!(panel.last_known_status.as_deref(), Some("queued"));
    assert_eq!(panel.badge, Badge::new(BadgeKind::Running, "queued"));
}

#[test]
fn test_clear_then_unchanged_polls_keep_log_empty() {
    let mut state = state();
    start(&mut state, 0, "abc");
    poll(&mut state, 0, snapshot("started"));
    update(&mut state, Message::ClearLog { panel: 0 });

    for _ in 0..5 {
        poll(&mut state, 0, snapshot("started"));
    }
    assert!(messages(&state, 0).is_empty());
}

#[test]
fn test_clear_idle_panel_is_fine() {
    let mut state = state();
    update(&mut state, Message::ClearLog { panel: 3 });
    assert!(messages(&state, 3).is_empty());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

// ─────────────────────────────────────────────────────────────────
// Reconciliation
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_poll_tick_ignores_idle_panels() {
    let mut state = state();
    let result = update(&mut state, Message::PollTick);

    assert!(result.action.is_none());
    assert!(state.panels.iter().all(|p| !p.is_polling() && p.log.is_empty()));
}

#[test]
fn test_poll_tick_targets_only_armed_panels() {
    let mut state = state();
    start(&mut state, 1, "b");
    start(&mut state, 3, "d");

    let result = update(&mut state, Message::PollTick);
    assert_eq!(
        result.action,
        Some(UpdateAction::PollStatus {
            targets: vec![
                PollTarget {
                    panel: 1,
                    run: 1,
                    profile_id: "b".into()
                },
                PollTarget {
                    panel: 3,
                    run: 1,
                    profile_id: "d".into()
                },
            ]
        })
    );
}

#[test]
fn test_panel_with_outstanding_poll_is_skipped() {
    let mut state = state();
    start(&mut state, 0, "abc");

    let first = update(&mut state, Message::PollTick);
    assert!(first.action.is_some());
    let second = update(&mut state, Message::PollTick);
    assert!(second.action.is_none());

    update(
        &mut state,
        Message::StatusNotFound {
            panel: 0,
            run: 1,
            profile_id: "abc".into(),
        },
    );
    let third = update(&mut state, Message::PollTick);
    assert!(third.action.is_some());
}

#[test]
fn test_queued_twice_logs_once() {
    let mut state = state();
    start(&mut state, 0, "abc");
    let baseline = messages(&state, 0).len();

    poll(&mut state, 0, snapshot("queued"));
    assert_eq!(badge(&state, 0), Badge::new(BadgeKind::Running, "queued"));
    assert_eq!(messages(&state, 0).len(), baseline + 1);
    assert_eq!(messages(&state, 0).last().unwrap(), "status → queued");

    poll(&mut state, 0, snapshot("queued"));
    assert_eq!(messages(&state, 0).len(), baseline + 1);
    assert_eq!(badge(&state, 0), Badge::new(BadgeKind::Running, "queued"));
}

#[test]
fn test_started_with_websocket_logs_confirmation() {
    let mut state = state();
    start(&mut state, 0, "abc");
    poll(&mut state, 0, snapshot("queued"));

    let mut snap = snapshot("started");
    snap.websocket = Some("ws://x".into());
    snap.debug_host = Some("127.0.0.1".into());
    snap.debug_port = Some(9222);
    snap.started_at = Some("2024-01-08 10:00:01".into());
    poll(&mut state, 0, snap);

    let lines = messages(&state, 0);
    let n = lines.len();
    assert_eq!(lines[n - 2], "status → started");
    assert_eq!(lines[n - 1], "🔌 WebSocket ready: ws://x");
    assert_eq!(badge(&state, 0), Badge::new(BadgeKind::Ok, "started"));

    let panel = state.panels.get(0).unwrap();
    assert_eq!(panel.websocket.as_deref(), Some("ws://x"));
    assert_eq!(panel.debug_endpoint, Some(DebugEndpoint::new("127.0.0.1", 9222)));
    assert_eq!(panel.started_at.as_deref(), Some("2024-01-08 10:00:01"));
}

#[test]
fn test_status_change_with_error_field_adds_error_line() {
    let mut state = state();
    start(&mut state, 0, "abc");

    let mut snap = snapshot("error");
    snap.error = Some("Unexpected response: no port".into());
    poll(&mut state, 0, snap.clone());

    let panel = state.panels.get(0).unwrap();
    let tail: Vec<_> = panel.log.tail(2).cloned().collect();
    assert_eq!(tail[0].message, "status → error");
    assert_eq!(tail[1].message, "⚠️ Unexpected response: no port");
    assert_eq!(tail[1].level, LogLevel::Error);
    assert_eq!(badge(&state, 0), Badge::new(BadgeKind::Error, "error"));

    // Same status again: error is not repeated
    let before = messages(&state, 0).len();
    poll(&mut state, 0, snap);
    assert_eq!(messages(&state, 0).len(), before);
}

#[test]
fn test_endpoints_are_never_unset_by_polls() {
    let mut state = state();
    start(&mut state, 0, "abc");

    let mut snap = snapshot("started");
    snap.debug_host = Some("h".into());
    snap.debug_port = Some(1);
    snap.websocket = Some("ws://x".into());
    poll(&mut state, 0, snap);

    poll(&mut state, 0, snapshot("started (no debug info)"));

    let panel = state.panels.get(0).unwrap();
    assert_eq!(panel.debug_endpoint, Some(DebugEndpoint::new("h", 1)));
    assert_eq!(panel.websocket.as_deref(), Some("ws://x"));
}

#[test]
fn test_host_without_port_does_not_set_endpoint() {
    let mut state = state();
    start(&mut state, 0, "abc");

    let mut snap = snapshot("starting");
    snap.debug_host = Some("h".into());
    poll(&mut state, 0, snap);

    assert_eq!(state.panels.get(0).unwrap().debug_endpoint, None);
}

#[test]
fn test_not_found_changes_nothing() {
    let mut state = state();
    start(&mut state, 0, "abc");
    poll(&mut state, 0, snapshot("queued"));
    let before_log = messages(&state, 0);
    let before_badge = badge(&state, 0);

    update(&mut state, Message::PollTick);
    update(
        &mut state,
        Message::StatusNotFound {
            panel: 0,
            run: 1,
            profile_id: "abc".into(),
        },
    );

    let panel = state.panels.get(0).unwrap();
    assert_eq!(messages(&state, 0), before_log);
    assert_eq!(badge(&state, 0), before_badge);
    assert_eq!(panel.last_known_status.as_deref(), Some("queued"));
    assert!(!panel.is_polling());
}

#[test]
fn test_poll_failure_logs_but_keeps_badge() {
    let mut state = state();
    start(&mut state, 0, "abc");
    poll(&mut state, 0, snapshot("started"));

    update(&mut state, Message::PollTick);
    update(
        &mut state,
        Message::StatusPollFailed {
            panel: 0,
            run: 1,
            profile_id: "abc".into(),
            error: "connection refused".into(),
        },
    );

    let panel = state.panels.get(0).unwrap();
    let last = panel.log.last().unwrap();
    assert_eq!(last.level, LogLevel::Warning);
    assert_eq!(last.message, "⚠️ Poll failed: connection refused");
    assert_eq!(panel.badge, Badge::new(BadgeKind::Ok, "started"));
    assert_eq!(panel.last_known_status.as_deref(), Some("started"));
}

#[test]
fn test_stale_poll_result_is_discarded_after_rearm() {
    let mut state = state();
    start(&mut state, 0, "old");
    update(&mut state, Message::PollTick);

    start(&mut state, 0, "new");
    update(
        &mut state,
        Message::StatusPolled {
            panel: 0,
            run: 1,
            profile_id: "old".into(),
            snapshot: snapshot("started"),
        },
    );

    let panel = state.panels.get(0).unwrap();
    assert_eq!(panel.last_known_status, None);
    assert_eq!(panel.badge, Badge::starting());
    assert_eq!(messages(&state, 0), vec!["▶️ Run profile: new"]);
    assert!(!panel.is_polling());
}

#[test]
fn test_rearm_with_poll_outstanding_polls_new_run_next_tick() {
    let mut state = state();
    start(&mut state, 0, "old");
    let first = update(&mut state, Message::PollTick);
    assert!(first.action.is_some());

    // The "old" poll never returns
    start(&mut state, 0, "new");

    let result = update(&mut state, Message::PollTick);
    assert_eq!(
        result.action,
        Some(UpdateAction::PollStatus {
            targets: vec![PollTarget {
                panel: 0,
                run: 2,
                profile_id: "new".into()
            }]
        })
    );
}

#[test]
fn test_late_result_of_previous_run_does_not_release_new_poll() {
    let mut state = state();
    start(&mut state, 0, "old");
    update(&mut state, Message::PollTick);
    start(&mut state, 0, "new");
    update(&mut state, Message::PollTick);

    update(
        &mut state,
        Message::StatusNotFound {
            panel: 0,
            run: 1,
            profile_id: "old".into(),
        },
    );

    assert!(state.panels.get(0).unwrap().is_polling());
    assert!(update(&mut state, Message::PollTick).action.is_none());
}

#[test]
fn test_rearm_same_profile_discards_previous_run_result() {
    let mut state = state();
    start(&mut state, 0, "abc");
    update(&mut state, Message::PollTick);

    start(&mut state, 0, "abc");
    update(
        &mut state,
        Message::StatusPolled {
            panel: 0,
            run: 1,
            profile_id: "abc".into(),
            snapshot: snapshot("started"),
        },
    );

    let panel = state.panels.get(0).unwrap();
    assert_eq!(panel.last_known_status, None);
    assert_eq!(panel.badge, Badge::starting());
}

#[test]
fn test_badge_follows_latest_status() {
    let mut state = state();
    start(&mut state, 0, "abc");

    for (status, kind) in [
        ("queued", BadgeKind::Running),
        ("starting", BadgeKind::Ok),
        ("Stopping", BadgeKind::Neutral),
        ("ERROR: crashed", BadgeKind::Error),
    ] {
        poll(&mut state, 0, snapshot(status));
        assert_eq!(badge(&state, 0).kind, kind, "{status}");
    }
}

// ─────────────────────────────────────────────────────────────────
// Keys and prompt
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_profile_prompt_flow() {
    let mut state = state();
    update(&mut state, Message::SelectPanel(2));

    let open = update(&mut state, Message::Key(InputKey::Char('s')));
    update(&mut state, open.message.unwrap());
    assert_eq!(state.ui_mode, UiMode::ProfileInput);

    for c in "abx".chars() {
        let r = update(&mut state, Message::Key(InputKey::Char(c)));
        update(&mut state, r.message.unwrap());
    }
    let r = update(&mut state, Message::Key(InputKey::Backspace));
    update(&mut state, r.message.unwrap());
    let r = update(&mut state, Message::Key(InputKey::Char('c')));
    update(&mut state, r.message.unwrap());

    let submit = update(&mut state, Message::Key(InputKey::Enter));
    let follow = update(&mut state, submit.message.unwrap());
    assert_eq!(state.ui_mode, UiMode::Normal);

    let request = follow.message.unwrap();
    assert!(matches!(
        &request,
        Message::RequestStart { panel: 2, profile_id } if profile_id == "abc"
    ));
    let result = update(&mut state, request);
    assert!(matches!(result.action, Some(UpdateAction::Start { panel: 2, .. })));
}

#[test]
fn test_keys_in_normal_mode() {
    let mut state = state();
    update(&mut state, Message::SelectPanel(1));

    let map = |state: &AppState, key| super::keys::handle_key(state, key);
    assert!(matches!(
        map(&state, InputKey::Char('i')),
        Some(Message::RequestInject { panel: 1 })
    ));
    assert!(matches!(
        map(&state, InputKey::Char('c')),
        Some(Message::ClearLog { panel: 1 })
    ));
    assert!(matches!(
        map(&state, InputKey::Char('4')),
        Some(Message::SelectPanel(3))
    ));
    assert!(matches!(map(&state, InputKey::Char('q')), Some(Message::Quit)));
    assert!(matches!(
        map(&state, InputKey::Char('l')),
        Some(Message::RequestRemoteList)
    ));
}

#[test]
fn test_alert_swallows_keys_until_dismissed() {
    let mut state = state();
    update(&mut state, Message::RequestInject { panel: 0 });
    assert_eq!(state.ui_mode, UiMode::Alert);

    assert!(update(&mut state, Message::Key(InputKey::Char('q')))
        .message
        .is_none());

    let dismiss = update(&mut state, Message::Key(InputKey::Esc));
    update(&mut state, dismiss.message.unwrap());
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.alert.is_none());
}

#[test]
fn test_quit() {
    let mut state = state();
    update(&mut state, Message::Quit);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────────────
// Remote listing
// ─────────────────────────────────────────────────────────────────

#[test]
fn test_remote_listing_lifecycle() {
    let mut state = state();
    let result = update(&mut state, Message::RequestRemoteList);
    assert_eq!(result.action, Some(UpdateAction::ListRemoteProfiles));
    assert_eq!(state.remote, RemoteListing::Loading);

    let profiles = [("a".to_string(), snapshot("queued"))].into_iter().collect();
    update(&mut state, Message::RemoteProfilesListed { profiles });
    let RemoteListing::Loaded { profiles, .. } = &state.remote else {
        panic!("expected loaded listing");
    };
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].badge.kind, BadgeKind::Running);

    update(
        &mut state,
        Message::RemoteListFailed {
            error: "refused".into(),
        },
    );
    assert_eq!(state.remote, RemoteListing::Failed("refused".into()));
    assert_eq!(state.ui_mode, UiMode::Normal);
}
