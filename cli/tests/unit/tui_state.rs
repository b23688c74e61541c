//! Key handling of the full-screen flow.
//!
//! Tests run on paused tokio time because typing into the email field
//! schedules the debounced availability check.

#![allow(clippy::expect_used)]

use civitas_cli::application::ports::EmailAvailability;
use civitas_cli::application::services::email_check::{DEFAULT_DEBOUNCE, EmailCheckDebouncer};
use civitas_cli::application::services::registration::{
    REVIEW_TITLE, RegistrationFlow, SUCCESS_TITLE,
};
use civitas_cli::domain::onboarding::OnboardingStep;
use civitas_cli::domain::schema::RegistrationSchema;
use civitas_cli::domain::trigger::EmailCheckTrigger;
use civitas_cli::tui::{FlowExit, Focus, OnboardingApp};
use civitas_common::Field;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::mocks::{RecordingCheck, RecordingNavigator};

fn app_with(check: RecordingCheck) -> OnboardingApp<RecordingCheck> {
    let flow = RegistrationFlow::new(RegistrationSchema::default());
    let debouncer = EmailCheckDebouncer::new(check, EmailCheckTrigger::ContainsAt, DEFAULT_DEBOUNCE);
    OnboardingApp::new(flow, debouncer)
}

fn app() -> OnboardingApp<RecordingCheck> {
    app_with(RecordingCheck::answering(EmailAvailability::Available))
}

fn press(app: &mut OnboardingApp<RecordingCheck>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut OnboardingApp<RecordingCheck>, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_str(app: &mut OnboardingApp<RecordingCheck>, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Skip the intro and fill every field, leaving focus on the submit button.
fn fill_form(app: &mut OnboardingApp<RecordingCheck>, values: [&str; 4]) {
    press(app, KeyCode::Char('s'));
    for value in values {
        type_str(app, value);
        press(app, KeyCode::Tab);
    }
}

// ── Intro pages ───────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_enter_advances_through_intro() {
    let mut app = app();
    assert_eq!(app.flow().step(), OnboardingStep::Welcome);

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.flow().step(), OnboardingStep::Security);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.flow().step(), OnboardingStep::Registration);
}

#[tokio::test(start_paused = true)]
async fn test_s_skips_to_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    assert_eq!(app.flow().step(), OnboardingStep::Registration);
    assert_eq!(app.focus(), Focus::Field(Field::FullName));
}

#[tokio::test(start_paused = true)]
async fn test_skip_notifies_navigator() {
    let nav = RecordingNavigator::default();
    let flow = RegistrationFlow::new(RegistrationSchema::default()).with_navigator(nav.clone());
    let debouncer = EmailCheckDebouncer::new(
        RecordingCheck::answering(EmailAvailability::Available),
        EmailCheckTrigger::ContainsAt,
        DEFAULT_DEBOUNCE,
    );
    let mut app = OnboardingApp::new(flow, debouncer);

    press(&mut app, KeyCode::Char('s'));

    assert_eq!(nav.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_esc_on_intro_cancels() {
    let mut app = app();
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.take_exit(), Some(FlowExit::Cancelled));
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_c_cancels_anywhere() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    type_str(&mut app, "Ana");
    ctrl(&mut app, 'c');
    assert_eq!(app.take_exit(), Some(FlowExit::Cancelled));
    assert_eq!(app.flow().form().full_name, "Ana");
}

#[tokio::test(start_paused = true)]
async fn test_key_release_is_ignored() {
    let mut app = app();
    let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    app.handle_key(key);
    assert_eq!(app.flow().step(), OnboardingStep::Welcome);
}

// ── Form editing ──────────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_typing_fills_focused_field() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));

    type_str(&mut app, "Ana Sosa");
    press(&mut app, KeyCode::Backspace);

    assert_eq!(app.flow().form().full_name, "Ana Sos");
    assert!(app.take_exit().is_none(), "'s' is text on the form");
}

#[tokio::test(start_paused = true)]
async fn test_focus_cycles_with_tab_and_backtab() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Field(Field::Email));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.focus(), Focus::Submit);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Field(Field::FullName));
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Submit);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.focus(), Focus::Field(Field::ConfirmPassword));
}

#[tokio::test(start_paused = true)]
async fn test_email_field_rejects_spaces() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Tab);

    type_str(&mut app, "ana @civitas.org");

    assert_eq!(app.flow().form().email, "ana@civitas.org");
}

#[tokio::test(start_paused = true)]
async fn test_typing_email_runs_debounced_check() {
    let check = RecordingCheck::answering(EmailAvailability::Available);
    let mut app = app_with(check.clone());
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Tab);

    type_str(&mut app, "ana");
    assert!(!app.is_checking_email());
    type_str(&mut app, "@civitas.org");
    assert!(app.is_checking_email());

    app.subscribe_email_check()
        .wait_for(|s| !s.is_validating())
        .await
        .expect("status sender alive");

    assert_eq!(check.calls(), vec!["ana@civitas.org".to_string()]);
    assert_eq!(app.email_outcome(), Some(EmailAvailability::Available));
}

#[tokio::test(start_paused = true)]
async fn test_spinner_advances_on_tick() {
    let mut app = app();
    let first = app.spinner_frame();
    app.on_tick();
    assert_ne!(app.spinner_frame(), first);
}

// ── Submit and modal ──────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_invalid_submit_shows_review_modal_and_inline_errors() {
    let mut app = app();
    fill_form(&mut app, ["Al", "bad", "abcdefg1", "abcdefg1"]);

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.modal().map(|m| m.title.as_str()), Some(REVIEW_TITLE));
    assert!(app.flow().first_error(Field::FullName).is_some());
    assert!(app.flow().first_error(Field::Email).is_some());

    press(&mut app, KeyCode::Enter);
    assert!(app.modal().is_none());
    assert!(app.take_exit().is_none(), "form stays open after review");
}

#[tokio::test(start_paused = true)]
async fn test_modal_swallows_other_keys() {
    let mut app = app();
    fill_form(&mut app, ["Al", "bad", "abcdefg1", "abcdefg1"]);
    press(&mut app, KeyCode::Enter);

    press(&mut app, KeyCode::Char('x'));

    assert!(app.modal().is_some());
    assert_eq!(app.flow().form().full_name, "Al");
}

#[tokio::test(start_paused = true)]
async fn test_valid_submit_exits_after_success_modal() {
    let mut app = app();
    fill_form(
        &mut app,
        ["Ana Lopez", "ana@civitas.org", "abcdefg1", "abcdefg1"],
    );

    ctrl(&mut app, 's');
    assert_eq!(app.modal().map(|m| m.title.as_str()), Some(SUCCESS_TITLE));
    assert!(app.take_exit().is_none(), "waits for the dialog");

    press(&mut app, KeyCode::Enter);

    match app.take_exit() {
        Some(FlowExit::Registered(form)) => {
            assert_eq!(form.full_name, "Ana Lopez");
            assert_eq!(form.email, "ana@civitas.org");
        }
        other => panic!("expected Registered, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn test_enter_on_field_moves_focus_instead_of_submitting() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));

    press(&mut app, KeyCode::Enter);

    assert_eq!(app.focus(), Focus::Field(Field::Email));
    assert!(app.modal().is_none());
}
