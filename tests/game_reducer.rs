use bishun::catalog::Category;
use bishun::ui::game::{AchievementsPane, GameIntent, GameReducer, GameScreen};
use bishun::ui::mvi::Reducer;

fn reduce(state: GameScreen, intent: GameIntent) -> GameScreen {
    GameReducer::reduce(state, intent)
}

#[test]
fn start_to_word_picker_on_category_select() {
    let state = reduce(
        GameScreen::Start,
        GameIntent::SelectCategory(Category::Numbers),
    );
    assert_eq!(
        state,
        GameScreen::SelectWord {
            category: Category::Numbers
        }
    );
}

#[test]
fn word_pick_enters_learning_at_that_index() {
    let state = reduce(
        GameScreen::SelectWord {
            category: Category::Nature,
        },
        GameIntent::SelectWord(3),
    );
    assert_eq!(
        state,
        GameScreen::Learning {
            category: Category::Nature,
            index: 3
        }
    );
}

#[test]
fn out_of_range_word_pick_is_ignored() {
    let picker = GameScreen::SelectWord {
        category: Category::Nature,
    };
    let state = reduce(picker.clone(), GameIntent::SelectWord(10));
    assert_eq!(state, picker);
}

#[test]
fn learned_it_enters_quiz() {
    let state = reduce(
        GameScreen::Learning {
            category: Category::Body,
            index: 2,
        },
        GameIntent::LearnedIt,
    );
    assert_eq!(
        state,
        GameScreen::Quiz {
            category: Category::Body,
            index: 2
        }
    );
}

#[test]
fn quiz_complete_enters_celebration() {
    let state = reduce(
        GameScreen::Quiz {
            category: Category::Body,
            index: 2,
        },
        GameIntent::QuizComplete,
    );
    assert_eq!(
        state,
        GameScreen::Celebration {
            category: Category::Body,
            index: 2
        }
    );
}

#[test]
fn quiz_complete_outside_quiz_is_ignored() {
    let learning = GameScreen::Learning {
        category: Category::Body,
        index: 2,
    };
    assert_eq!(reduce(learning.clone(), GameIntent::QuizComplete), learning);
    assert_eq!(reduce(GameScreen::Start, GameIntent::QuizComplete), GameScreen::Start);
}

#[test]
fn continue_advances_to_next_word() {
    let state = reduce(
        GameScreen::Celebration {
            category: Category::Numbers,
            index: 4,
        },
        GameIntent::Continue,
    );
    assert_eq!(
        state,
        GameScreen::Learning {
            category: Category::Numbers,
            index: 5
        }
    );
}

#[test]
fn continue_after_last_word_returns_to_picker() {
    let last = Category::Numbers.len() - 1;
    let state = reduce(
        GameScreen::Celebration {
            category: Category::Numbers,
            index: last,
        },
        GameIntent::Continue,
    );
    assert_eq!(
        state,
        GameScreen::SelectWord {
            category: Category::Numbers
        }
    );
}

#[test]
fn home_returns_to_start_from_anywhere() {
    let screens = [
        GameScreen::SelectWord {
            category: Category::DailyLife,
        },
        GameScreen::Learning {
            category: Category::DailyLife,
            index: 0,
        },
        GameScreen::Quiz {
            category: Category::DailyLife,
            index: 9,
        },
        GameScreen::Achievements {
            pane: AchievementsPane::Overview,
        },
    ];
    for screen in screens {
        assert_eq!(reduce(screen, GameIntent::Home), GameScreen::Start);
    }
}

#[test]
fn back_from_word_screens_keeps_category() {
    let state = reduce(
        GameScreen::Quiz {
            category: Category::Nature,
            index: 7,
        },
        GameIntent::Back,
    );
    assert_eq!(
        state,
        GameScreen::SelectWord {
            category: Category::Nature
        }
    );
}

#[test]
fn achievements_opens_only_from_start() {
    let state = reduce(GameScreen::Start, GameIntent::OpenAchievements);
    assert_eq!(
        state,
        GameScreen::Achievements {
            pane: AchievementsPane::Overview
        }
    );

    let quiz = GameScreen::Quiz {
        category: Category::Body,
        index: 0,
    };
    assert_eq!(reduce(quiz.clone(), GameIntent::OpenAchievements), quiz);
}

#[test]
fn clear_all_requires_arming_then_confirmation() {
    let overview = GameScreen::Achievements {
        pane: AchievementsPane::Overview,
    };

    // Confirm without arming does nothing.
    assert_eq!(
        reduce(overview.clone(), GameIntent::ConfirmClearAll),
        overview
    );

    let armed = reduce(overview, GameIntent::RequestClearAll);
    assert_eq!(
        armed,
        GameScreen::Achievements {
            pane: AchievementsPane::ConfirmClear
        }
    );

    assert_eq!(
        reduce(armed.clone(), GameIntent::CancelClearAll),
        GameScreen::Achievements {
            pane: AchievementsPane::Overview
        }
    );
    assert_eq!(reduce(armed, GameIntent::ConfirmClearAll), GameScreen::Start);
}

#[test]
fn avatar_prompt_editor_collects_input() {
    let mut state = reduce(
        GameScreen::Achievements {
            pane: AchievementsPane::Overview,
        },
        GameIntent::EditAvatarPrompt,
    );
    for c in ['小', '貓'] {
        state = reduce(state, GameIntent::InputChar(c));
    }
    state = reduce(state, GameIntent::InputChar('x'));
    state = reduce(state, GameIntent::InputBackspace);
    assert_eq!(
        state,
        GameScreen::Achievements {
            pane: AchievementsPane::AvatarPrompt {
                input: "小貓".to_string()
            }
        }
    );

    assert_eq!(
        reduce(state, GameIntent::CancelInput),
        GameScreen::Achievements {
            pane: AchievementsPane::Overview
        }
    );
}

#[test]
fn the_machine_is_cyclic() {
    // No absorbing state: a full category loop lands back on the picker,
    // from which practice can restart.
    let mut state = GameScreen::Start;
    state = reduce(state, GameIntent::SelectCategory(Category::Numbers));
    for index in 0..Category::Numbers.len() {
        state = reduce(state, GameIntent::SelectWord(index));
        state = reduce(state, GameIntent::LearnedIt);
        state = reduce(state, GameIntent::QuizComplete);
        state = reduce(state, GameIntent::Continue);
        if index + 1 < Category::Numbers.len() {
            // Continue already advanced into the next learning screen.
            assert_eq!(
                state,
                GameScreen::Learning {
                    category: Category::Numbers,
                    index: index + 1
                }
            );
            state = reduce(state, GameIntent::Back);
        }
    }
    assert_eq!(
        state,
        GameScreen::SelectWord {
            category: Category::Numbers
        }
    );
}
