use crate::ui::game::intent::GameIntent;
use crate::ui::game::state::{AchievementsPane, GameScreen};
use crate::ui::mvi::Reducer;

/// Pure screen-flow transitions. Intents that make no sense for the
/// current screen (a stale `QuizComplete`, an out-of-range word pick)
/// leave the state unchanged.
pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameScreen;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Home => GameScreen::Start,

            GameIntent::SelectCategory(category) => match state {
                GameScreen::Start => GameScreen::SelectWord { category },
                other => other,
            },

            GameIntent::SelectWord(index) => match state {
                GameScreen::SelectWord { category } if index < category.len() => {
                    GameScreen::Learning { category, index }
                }
                other => other,
            },

            GameIntent::LearnedIt => match state {
                GameScreen::Learning { category, index } => GameScreen::Quiz { category, index },
                other => other,
            },

            GameIntent::QuizComplete => match state {
                GameScreen::Quiz { category, index } => {
                    GameScreen::Celebration { category, index }
                }
                other => other,
            },

            GameIntent::Continue => match state {
                GameScreen::Celebration { category, index } => {
                    let next = index + 1;
                    if next < category.len() {
                        GameScreen::Learning {
                            category,
                            index: next,
                        }
                    } else {
                        GameScreen::SelectWord { category }
                    }
                }
                other => other,
            },

            GameIntent::Back => match state {
                GameScreen::Learning { category, .. }
                | GameScreen::Quiz { category, .. }
                | GameScreen::Celebration { category, .. } => GameScreen::SelectWord { category },
                GameScreen::SelectWord { .. } | GameScreen::Achievements { .. } => {
                    GameScreen::Start
                }
                GameScreen::Start => GameScreen::Start,
            },

            GameIntent::OpenAchievements => match state {
                GameScreen::Start => GameScreen::Achievements {
                    pane: AchievementsPane::Overview,
                },
                other => other,
            },

            GameIntent::RequestClearAll => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::Overview,
                } => GameScreen::Achievements {
                    pane: AchievementsPane::ConfirmClear,
                },
                other => other,
            },

            GameIntent::ConfirmClearAll => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::ConfirmClear,
                } => GameScreen::Start,
                other => other,
            },

            GameIntent::CancelClearAll => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::ConfirmClear,
                } => GameScreen::Achievements {
                    pane: AchievementsPane::Overview,
                },
                other => other,
            },

            GameIntent::EditAvatarPrompt => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::Overview,
                } => GameScreen::Achievements {
                    pane: AchievementsPane::AvatarPrompt {
                        input: String::new(),
                    },
                },
                other => other,
            },

            GameIntent::EditUploadPath => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::Overview,
                } => GameScreen::Achievements {
                    pane: AchievementsPane::UploadPath {
                        input: String::new(),
                    },
                },
                other => other,
            },

            GameIntent::InputChar(c) => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::AvatarPrompt { mut input },
                } => {
                    input.push(c);
                    GameScreen::Achievements {
                        pane: AchievementsPane::AvatarPrompt { input },
                    }
                }
                GameScreen::Achievements {
                    pane: AchievementsPane::UploadPath { mut input },
                } => {
                    input.push(c);
                    GameScreen::Achievements {
                        pane: AchievementsPane::UploadPath { input },
                    }
                }
                other => other,
            },

            GameIntent::InputBackspace => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::AvatarPrompt { mut input },
                } => {
                    input.pop();
                    GameScreen::Achievements {
                        pane: AchievementsPane::AvatarPrompt { input },
                    }
                }
                GameScreen::Achievements {
                    pane: AchievementsPane::UploadPath { mut input },
                } => {
                    input.pop();
                    GameScreen::Achievements {
                        pane: AchievementsPane::UploadPath { input },
                    }
                }
                other => other,
            },

            GameIntent::SubmitInput | GameIntent::CancelInput => match state {
                GameScreen::Achievements {
                    pane: AchievementsPane::AvatarPrompt { .. },
                }
                | GameScreen::Achievements {
                    pane: AchievementsPane::UploadPath { .. },
                } => GameScreen::Achievements {
                    pane: AchievementsPane::Overview,
                },
                other => other,
            },
        }
    }
}
