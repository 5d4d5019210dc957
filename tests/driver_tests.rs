//! Driver tests - headless play with the JSON-lines event log

use std::fs;

use bitris::config::Settings;
use bitris::driver::Driver;
use bitris::event_log::EventLog;
use bitris::types::GameAction;

fn settings(seed: u32) -> Settings {
    Settings {
        columns: 8,
        seed: Some(seed),
        ..Settings::default()
    }
}

fn script() -> impl Iterator<Item = GameAction> {
    [
        GameAction::MoveLeft,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
    ]
    .into_iter()
    .cycle()
    .take(600)
}

fn run(seed: u32) -> Vec<u8> {
    let mut driver = Driver::new(settings(seed), 12, EventLog::to_writer(Vec::new()));
    for action in script() {
        driver.apply(action, 12);
        driver.tick();
    }
    driver.into_log().into_inner().unwrap()
}

#[test]
fn test_replay_with_same_seed_logs_identically() {
    assert_eq!(run(2024), run(2024));
}

#[test]
fn test_log_lines_are_json_objects() {
    let bytes = run(31);
    let text = String::from_utf8(bytes).unwrap();
    let mut fusions = 0;
    for line in text.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        let kind = value["type"].as_str().unwrap();
        assert!(["start", "input", "fusion", "game_over"].contains(&kind));
        if kind == "fusion" {
            fusions += 1;
            assert!(value["piece"].is_string());
        }
    }
    assert!(fusions > 0);
}

#[test]
fn test_driver_uses_configured_width() {
    let driver = Driver::new(settings(1), 30, EventLog::to_writer(Vec::new()));
    let dims = driver.session().dimensions();
    assert_eq!(dims.columns(), 8);
    assert_eq!(dims.rows(), 30);
}

#[test]
fn test_event_log_appends_to_file() {
    let path = std::env::temp_dir().join(format!("bitris-driver-{}.jsonl", std::process::id()));
    let _ = fs::remove_file(&path);

    for _ in 0..2 {
        let log = EventLog::open(&path).unwrap();
        let mut driver = Driver::new(settings(5), 10, log);
        driver.apply(GameAction::MoveLeft, 10);
        assert!(driver.log_mut().take_error().is_none());
    }

    let text = fs::read_to_string(&path).unwrap();
    let starts = text.lines().filter(|l| l.contains("\"type\":\"start\"")).count();
    assert_eq!(starts, 2);
    assert_eq!(text.lines().count(), 4);

    let _ = fs::remove_file(&path);
}
