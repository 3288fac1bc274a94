//! Word-info fetch reconciliation: request tokens and the
//! stale-response discard rule.

mod common;

use bishun::catalog::Category;
use bishun::services::WordInfo;
use bishun::ui::game::GameIntent;

#[test]
fn entering_learning_issues_a_fetch_and_sets_loading() {
    let mut app = common::new_app();
    app.dispatch(GameIntent::SelectCategory(Category::Numbers));
    assert!(app.take_fetch_request().is_none());

    app.dispatch(GameIntent::SelectWord(0));
    let request = app.take_fetch_request().expect("learning should fetch");
    assert_eq!(request.character, "一");
    assert!(app.info_card().loading);
    assert!(app.info_card().info.is_none());
}

#[test]
fn completion_with_latest_token_lands() {
    let mut app = common::new_app();
    app.dispatch(GameIntent::SelectCategory(Category::Numbers));
    app.dispatch(GameIntent::SelectWord(0));
    let request = app.take_fetch_request().unwrap();

    app.on_word_info(request.token, WordInfo::fallback("一"));
    let card = app.info_card();
    assert!(!card.loading);
    assert_eq!(card.info.as_ref().unwrap().word, "一");
}

#[test]
fn loading_transitions_true_to_false_exactly_once_per_fetch() {
    let mut app = common::new_app();
    app.dispatch(GameIntent::SelectCategory(Category::Numbers));
    app.dispatch(GameIntent::SelectWord(2));
    let request = app.take_fetch_request().unwrap();
    assert!(app.info_card().loading);

    // A failed fetch still resolves to fallback content upstream; the
    // completion is what ends the loading state.
    app.on_word_info(request.token, WordInfo::fallback("三"));
    assert!(!app.info_card().loading);

    // A duplicate completion for the same token changes nothing.
    app.on_word_info(request.token, WordInfo::fallback("三"));
    assert!(!app.info_card().loading);
    assert!(app
        .info_card()
        .info
        .as_ref()
        .unwrap()
        .example_sentence
        .contains('三'));
}

#[test]
fn stale_response_never_overwrites_the_new_word() {
    let mut app = common::new_app();
    app.dispatch(GameIntent::SelectCategory(Category::Numbers));

    // Start fetching word A.
    app.dispatch(GameIntent::SelectWord(0));
    let stale = app.take_fetch_request().unwrap();

    // Navigate away to word B before A's fetch resolves.
    app.dispatch(GameIntent::Back);
    app.dispatch(GameIntent::SelectWord(1));
    let fresh = app.take_fetch_request().unwrap();
    assert_ne!(stale.token, fresh.token);

    // B's info arrives, then A's stale response trails in.
    app.on_word_info(fresh.token, WordInfo::fallback("二"));
    app.on_word_info(stale.token, WordInfo::fallback("一"));

    assert_eq!(app.info_card().info.as_ref().unwrap().word, "二");
}

#[test]
fn stale_response_after_leaving_word_screens_is_dropped() {
    let mut app = common::new_app();
    app.dispatch(GameIntent::SelectCategory(Category::Numbers));
    app.dispatch(GameIntent::SelectWord(0));
    let request = app.take_fetch_request().unwrap();

    app.dispatch(GameIntent::Home);
    app.on_word_info(request.token, WordInfo::fallback("一"));

    let card = app.info_card();
    assert!(card.info.is_none());
    assert!(!card.loading);
}

#[test]
fn moving_from_learning_to_quiz_refetches_the_same_character() {
    // No caching: every (screen, character) change fetches fresh.
    let mut app = common::new_app();
    app.dispatch(GameIntent::SelectCategory(Category::Nature));
    app.dispatch(GameIntent::SelectWord(0));
    let first = app.take_fetch_request().unwrap();

    app.dispatch(GameIntent::LearnedIt);
    let second = app.take_fetch_request().expect("quiz entry should refetch");
    assert_eq!(first.character, second.character);
    assert_ne!(first.token, second.token);
}

#[test]
fn celebration_keeps_no_fetch_outstanding() {
    let mut app = common::new_app();
    app.dispatch(GameIntent::SelectCategory(Category::Numbers));
    app.dispatch(GameIntent::SelectWord(0));
    app.take_fetch_request().unwrap();
    app.dispatch(GameIntent::LearnedIt);
    app.take_fetch_request().unwrap();

    app.on_trace(); // 一 completes in one stroke
    assert!(app.take_fetch_request().is_none());
}
