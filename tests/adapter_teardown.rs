//! Widget adapter: teardown ordering and stale-session filtering.

mod common;

use common::{log_entries, new_log, RecordingFactory};

use bishun::widget::{PracticeAdapter, PracticeMode, PracticeSignal, WidgetEvent};
use uuid::Uuid;

fn new_adapter(log: &common::CallLog) -> PracticeAdapter {
    PracticeAdapter::new(Box::new(RecordingFactory {
        log: std::sync::Arc::clone(log),
    }))
}

#[test]
fn learning_session_starts_with_a_demonstration() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Learning)));
    assert_eq!(log_entries(&log), vec!["create 水", "animate 水"]);
}

#[test]
fn quiz_session_starts_in_quiz_mode() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Quiz)));
    assert_eq!(log_entries(&log), vec!["create 水", "quiz 水"]);
}

#[test]
fn old_session_is_cancelled_before_the_new_one_is_created() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Learning)));
    adapter.sync(Some(("火", PracticeMode::Learning)));

    assert_eq!(
        log_entries(&log),
        vec!["create 水", "animate 水", "cancel 水", "create 火", "animate 火"]
    );
}

#[test]
fn mode_change_on_the_same_character_recreates_the_session() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Learning)));
    let first = adapter.session().unwrap();
    adapter.sync(Some(("水", PracticeMode::Quiz)));
    let second = adapter.session().unwrap();

    assert_ne!(first, second);
    assert_eq!(
        log_entries(&log),
        vec!["create 水", "animate 水", "cancel 水", "create 水", "quiz 水"]
    );
}

#[test]
fn unchanged_target_does_not_recreate() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Learning)));
    let session = adapter.session().unwrap();
    adapter.sync(Some(("水", PracticeMode::Learning)));

    assert_eq!(adapter.session(), Some(session));
    assert_eq!(log_entries(&log), vec!["create 水", "animate 水"]);
}

#[test]
fn sync_to_none_tears_down() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Quiz)));
    adapter.sync(None);

    assert!(adapter.session().is_none());
    assert!(adapter.view().is_none());
    assert_eq!(log_entries(&log), vec!["create 水", "quiz 水", "cancel 水"]);
}

#[test]
fn completion_from_the_live_quiz_session_is_forwarded() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Quiz)));
    let session = adapter.session().unwrap();

    assert_eq!(
        adapter.handle_event(WidgetEvent::QuizComplete { session }),
        Some(PracticeSignal::QuizComplete)
    );
}

#[test]
fn completion_from_a_torn_down_session_is_dropped() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Quiz)));
    let stale = adapter.session().unwrap();
    adapter.sync(Some(("火", PracticeMode::Quiz)));

    assert_eq!(
        adapter.handle_event(WidgetEvent::QuizComplete { session: stale }),
        None
    );
}

#[test]
fn completion_outside_quiz_mode_is_dropped() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Learning)));
    let session = adapter.session().unwrap();

    assert_eq!(
        adapter.handle_event(WidgetEvent::QuizComplete { session }),
        None
    );
}

#[test]
fn unknown_session_is_dropped() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Quiz)));
    assert_eq!(
        adapter.handle_event(WidgetEvent::QuizComplete {
            session: Uuid::new_v4()
        }),
        None
    );
}

#[test]
fn replay_only_runs_in_learning_mode() {
    let log = new_log();
    let mut adapter = new_adapter(&log);

    adapter.sync(Some(("水", PracticeMode::Quiz)));
    adapter.replay();
    assert_eq!(log_entries(&log), vec!["create 水", "quiz 水"]);

    adapter.sync(Some(("水", PracticeMode::Learning)));
    adapter.replay();
    let entries = log_entries(&log);
    assert_eq!(entries.last().unwrap(), "animate 水");
}
