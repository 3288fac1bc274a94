use crate::catalog::Category;
use crate::ui::mvi::UiState;

/// The screen flow, as one tagged union so every render and transition
/// path is total over the variants.
///
/// `index` is only carried by screens that display a word, and the
/// reducer keeps it in bounds for the active category. The machine is
/// cyclic: finishing the last word of a category returns to the word
/// picker, there is no terminal screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GameScreen {
    #[default]
    Start,
    SelectWord {
        category: Category,
    },
    Learning {
        category: Category,
        index: usize,
    },
    Quiz {
        category: Category,
        index: usize,
    },
    Celebration {
        category: Category,
        index: usize,
    },
    Achievements {
        pane: AchievementsPane,
    },
}

/// Sub-state of the achievements/profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AchievementsPane {
    #[default]
    Overview,
    /// Destructive reset armed; requires an explicit confirmation.
    ConfirmClear,
    /// Editing the avatar-generation prompt.
    AvatarPrompt { input: String },
    /// Editing the path of an image file to upload.
    UploadPath { input: String },
}

impl UiState for GameScreen {}

impl GameScreen {
    /// The category in play, when one is selected.
    pub fn category(&self) -> Option<Category> {
        match self {
            GameScreen::Start | GameScreen::Achievements { .. } => None,
            GameScreen::SelectWord { category }
            | GameScreen::Learning { category, .. }
            | GameScreen::Quiz { category, .. }
            | GameScreen::Celebration { category, .. } => Some(*category),
        }
    }

    /// The character currently on a word screen.
    pub fn current_character(&self) -> Option<&'static str> {
        match self {
            GameScreen::Learning { category, index }
            | GameScreen::Quiz { category, index }
            | GameScreen::Celebration { category, index } => category.character(*index),
            GameScreen::Start
            | GameScreen::SelectWord { .. }
            | GameScreen::Achievements { .. } => None,
        }
    }

    pub fn is_quiz(&self) -> bool {
        matches!(self, GameScreen::Quiz { .. })
    }

    pub fn is_learning(&self) -> bool {
        matches!(self, GameScreen::Learning { .. })
    }
}
