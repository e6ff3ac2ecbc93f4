//! App-level tests: key presses in, requests and log entries out

mod common;

use common::RecordingSender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use prop_panel::app::{App, LoopState};
use prop_panel::config::Config;
use prop_panel::form::FormField;
use prop_panel::logging::LogKind;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn app_with(sender: Arc<RecordingSender>) -> App {
    let mut config = Config::default();
    config.device.base_url = "http://device.test".to_string();
    App::new(config, sender)
}

fn press(app: &mut App, code: KeyCode) -> bool {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Select `field`, open its editor, replace the text and commit
fn edit_field(app: &mut App, field: FormField, text: &str) {
    app.select(field);
    press(app, KeyCode::Enter);
    while app.edit_buffer().is_some_and(|b| !b.is_empty()) {
        press(app, KeyCode::Backspace);
    }
    type_text(app, text);
    press(app, KeyCode::Enter);
}

#[tokio::test(start_paused = true)]
async fn test_slider_move_starts_continuous_updates() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    app.select(FormField::Frequency);
    press(&mut app, KeyCode::Right);
    sleep(Duration::from_millis(2500)).await;

    let calls = sender.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls
        .iter()
        .all(|c| c.url == "http://device.test/sound" && c.payload["freq"] == 1010));
    assert!(matches!(
        app.state().loop_state,
        LoopState::Running { generation: 1 }
    ));
}

#[tokio::test(start_paused = true)]
async fn test_two_quick_slider_moves_leave_one_loop() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    app.select(FormField::Duration);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Right);
    sleep(Duration::from_millis(2500)).await;

    let calls = sender.calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.payload["duration"] == 320));
    assert!(matches!(
        app.state().loop_state,
        LoopState::Running { generation: 2 }
    ));
}

#[tokio::test(start_paused = true)]
async fn test_adjust_on_non_slider_does_nothing() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    app.select(FormField::BombCount);
    press(&mut app, KeyCode::Right);
    sleep(Duration::from_millis(1500)).await;

    assert_eq!(sender.count(), 0);
    assert!(!app.is_updating());
}

#[tokio::test(start_paused = true)]
async fn test_stop_updates() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    app.select(FormField::OffDuration);
    press(&mut app, KeyCode::Left);
    sleep(Duration::from_millis(1500)).await;
    press(&mut app, KeyCode::Char('s'));
    sleep(Duration::from_millis(3000)).await;

    assert_eq!(sender.count(), 2);
    assert!(!app.is_updating());
    assert_eq!(app.state().loop_state, LoopState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_game_state_is_rejected_without_request() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    edit_field(&mut app, FormField::BombCount, "x");
    edit_field(&mut app, FormField::MinutesRemaining, "30");
    press(&mut app, KeyCode::Char('g'));
    sleep(Duration::from_millis(100)).await;
    app.poll();

    assert_eq!(sender.count(), 0);
    let rejected = app
        .logs()
        .iter()
        .find_map(|e| match &e.kind {
            LogKind::Rejected { message } => Some(message.clone()),
            _ => None,
        })
        .expect("rejection logged");
    assert!(rejected.contains("bomb count"), "{}", rejected);
    assert!(app
        .state()
        .status_message
        .is_some_and(|m| m.contains("bomb count")));
}

#[tokio::test(start_paused = true)]
async fn test_game_state_sent_once() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    edit_field(&mut app, FormField::BombCount, "3");
    edit_field(&mut app, FormField::MinutesRemaining, " 45 ");
    press(&mut app, KeyCode::Char('g'));
    sleep(Duration::from_millis(100)).await;
    app.poll();

    let calls = sender.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].url, "http://device.test/gamestate");
    assert_eq!(
        calls[0].payload,
        json!({"bombCount": 3, "minutesRemaining": 45})
    );
    assert_eq!(app.state().status_message, Some("Game State Updated!"));
    assert!(!app.is_updating(), "game state never starts the loop");
}

#[tokio::test(start_paused = true)]
async fn test_manual_sound_update_reports_failure() {
    let sender = Arc::new(RecordingSender::with_status(503));
    let mut app = app_with(sender.clone());

    press(&mut app, KeyCode::Char('u'));
    sleep(Duration::from_millis(100)).await;
    app.poll();

    assert_eq!(sender.count(), 1);
    assert_eq!(app.stats().failed(), 1);
    assert_eq!(
        app.state().status_message,
        Some("Sound Update Failed! (HTTP 503)")
    );
}

#[tokio::test(start_paused = true)]
async fn test_unparseable_volume_is_left_out_of_payload() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    edit_field(&mut app, FormField::Volume, "loud");
    app.select(FormField::Enable);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('u'));
    sleep(Duration::from_millis(100)).await;

    let calls = sender.calls();
    assert_eq!(calls.len(), 1);
    let payload = &calls[0].payload;
    assert!(payload.get("volume").is_none());
    assert_eq!(payload["enable"], true);
    assert_eq!(payload["cutVolume"], 15);
    assert_eq!(payload["offDuration"], 700);
}

#[tokio::test(start_paused = true)]
async fn test_edit_cancel_keeps_old_value() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    app.select(FormField::CutVolume);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "99");
    press(&mut app, KeyCode::Esc);

    assert!(app.edit_buffer().is_none());
    assert_eq!(app.form().cut_volume, "15");
    assert!(!app.should_quit(), "Esc closes the editor, not the app");
}

#[tokio::test(start_paused = true)]
async fn test_reset_restores_defaults_without_sending() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    app.select(FormField::Frequency);
    press(&mut app, KeyCode::Left);
    sleep(Duration::from_millis(10)).await;
    edit_field(&mut app, FormField::CutFailedVolume, "7");
    app.select(FormField::Enable);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('r'));

    let form = app.form();
    assert_eq!(form.frequency.value(), 1000);
    assert_eq!(form.cut_failed_volume, "100");
    assert!(form.enable, "reset leaves the switch alone");

    // The running loop picks up the restored values
    sleep(Duration::from_millis(1500)).await;
    let calls = sender.calls();
    assert_eq!(calls[0].payload["freq"], 990);
    assert_eq!(calls[1].payload["freq"], 1000);
}

#[tokio::test(start_paused = true)]
async fn test_quit_stops_loop() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender.clone());

    app.select(FormField::Frequency);
    press(&mut app, KeyCode::Right);
    sleep(Duration::from_millis(500)).await;

    assert!(press(&mut app, KeyCode::Char('q')));
    assert!(app.should_quit());
    sleep(Duration::from_millis(3000)).await;
    assert_eq!(sender.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_clearing_log_leaves_one_breadcrumb() {
    let sender = Arc::new(RecordingSender::ok());
    let mut app = app_with(sender);
    let before = app.logs().len();

    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.logs().len(), 1);
    assert!(matches!(
        &app.logs()[0].kind,
        LogKind::System { message } if *message == format!("{} events cleared", before)
    ));
}
