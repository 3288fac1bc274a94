//! Key → intent mapping, per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::catalog::Category;
use crate::store::StorageBackend;
use crate::ui::app::App;
use crate::ui::game::{AchievementsPane, GameIntent, GameScreen};

pub fn handle_key<S: StorageBackend>(app: &mut App<S>, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits, even inside a text editor pane.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return;
    }

    let screen = app.screen().clone();
    match screen {
        GameScreen::Start => on_start_key(app, key.code),
        GameScreen::SelectWord { category } => on_select_word_key(app, key.code, category),
        GameScreen::Learning { .. } => on_learning_key(app, key.code),
        GameScreen::Quiz { .. } => on_quiz_key(app, key.code),
        GameScreen::Celebration { .. } => on_celebration_key(app, key.code),
        GameScreen::Achievements { pane } => on_achievements_key(app, key.code, pane),
    }
}

fn on_start_key<S: StorageBackend>(app: &mut App<S>, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('a') => app.dispatch(GameIntent::OpenAchievements),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                let slot = digit as usize;
                if (1..=Category::ALL.len()).contains(&slot) {
                    app.dispatch(GameIntent::SelectCategory(Category::ALL[slot - 1]));
                }
            }
        }
        _ => {}
    }
}

fn on_select_word_key<S: StorageBackend>(app: &mut App<S>, code: KeyCode, category: Category) {
    match code {
        KeyCode::Esc | KeyCode::Char('h') => app.dispatch(GameIntent::Home),
        KeyCode::Char(c) => {
            if let Some(digit) = c.to_digit(10) {
                // Keys 1-9 pick the first nine words, 0 picks the tenth.
                let index = if digit == 0 { 9 } else { digit as usize - 1 };
                if index < category.len() {
                    app.dispatch(GameIntent::SelectWord(index));
                }
            }
        }
        _ => {}
    }
}

fn on_learning_key<S: StorageBackend>(app: &mut App<S>, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Char('l') => app.dispatch(GameIntent::LearnedIt),
        KeyCode::Char('r') => app.replay_demo(),
        KeyCode::Esc => app.dispatch(GameIntent::Back),
        KeyCode::Char('h') => app.dispatch(GameIntent::Home),
        _ => {}
    }
}

fn on_quiz_key<S: StorageBackend>(app: &mut App<S>, code: KeyCode) {
    match code {
        KeyCode::Char(' ') => app.on_trace(),
        KeyCode::Esc => app.dispatch(GameIntent::Back),
        KeyCode::Char('h') => app.dispatch(GameIntent::Home),
        _ => {}
    }
}

fn on_celebration_key<S: StorageBackend>(app: &mut App<S>, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => app.dispatch(GameIntent::Continue),
        KeyCode::Esc => app.dispatch(GameIntent::Back),
        KeyCode::Char('h') => app.dispatch(GameIntent::Home),
        _ => {}
    }
}

fn on_achievements_key<S: StorageBackend>(app: &mut App<S>, code: KeyCode, pane: AchievementsPane) {
    match pane {
        AchievementsPane::Overview => match code {
            KeyCode::Esc | KeyCode::Char('h') => app.dispatch(GameIntent::Home),
            KeyCode::Char('g') => app.dispatch(GameIntent::EditAvatarPrompt),
            KeyCode::Char('u') => app.dispatch(GameIntent::EditUploadPath),
            KeyCode::Char('c') => app.dispatch(GameIntent::RequestClearAll),
            _ => {}
        },
        AchievementsPane::ConfirmClear => match code {
            KeyCode::Char('y') => app.dispatch(GameIntent::ConfirmClearAll),
            KeyCode::Char('n') | KeyCode::Esc => app.dispatch(GameIntent::CancelClearAll),
            _ => {}
        },
        AchievementsPane::AvatarPrompt { .. } | AchievementsPane::UploadPath { .. } => match code {
            KeyCode::Enter => app.dispatch(GameIntent::SubmitInput),
            KeyCode::Esc => app.dispatch(GameIntent::CancelInput),
            KeyCode::Backspace => app.dispatch(GameIntent::InputBackspace),
            KeyCode::Char(c) => app.dispatch(GameIntent::InputChar(c)),
            _ => {}
        },
    }
}
