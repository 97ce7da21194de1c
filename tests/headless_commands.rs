//! Headless command lines driven through the engine, checked via NDJSON events

use pdeck_app::config::Settings;
use pdeck_app::Engine;
use pdeck_client::test_utils::FakeStatusClient;
use profile_deck::headless::command::parse_command;
use profile_deck::headless::HeadlessEvent;

fn event_names(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["event"].as_str().unwrap().to_string()
        })
        .collect()
}

#[tokio::test]
async fn start_command_produces_panel_events() {
    let mut engine = Engine::new(Settings::default(), FakeStatusClient::new());
    let mut events = engine.subscribe();

    let msg = parse_command("start 3 shop-9").unwrap().unwrap();
    engine.process_message(msg);

    let mut lines = Vec::new();
    while let Ok(event) = events.try_recv() {
        lines.push(HeadlessEvent::from_engine(&event).to_line().unwrap());
    }

    assert_eq!(event_names(&lines), vec!["log_cleared", "log", "badge"]);
    let log: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(log["panel"], 3);
    assert_eq!(log["message"], "▶️ Run profile: shop-9");
}

#[tokio::test]
async fn inject_before_start_raises_alert_event() {
    let mut engine = Engine::new(Settings::default(), FakeStatusClient::new());
    let mut events = engine.subscribe();

    engine.process_message(parse_command("inject 1").unwrap().unwrap());

    let event = events.try_recv().unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&HeadlessEvent::from_engine(&event).to_line().unwrap()).unwrap();
    assert_eq!(v["event"], "alert");
    assert_eq!(engine.client().inject_calls(), 0);
}

#[tokio::test]
async fn out_of_range_panel_is_rejected_without_network() {
    let mut engine = Engine::new(Settings::default(), FakeStatusClient::new());

    engine.process_message(parse_command("start 9 abc").unwrap().unwrap());

    assert!(engine.state.alert.is_some());
    assert!(engine.state.panels.iter().all(|p| p.profile_id.is_none()));
    assert_eq!(engine.client().start_calls(), 0);
}
