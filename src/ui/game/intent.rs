use crate::catalog::Category;
use crate::ui::mvi::Intent;

/// User actions and system events driving the screen flow.
///
/// `QuizComplete` arrives from the widget adapter, never directly from
/// input handling; the controller marks mastery before reducing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameIntent {
    /// Start screen: pick a category.
    SelectCategory(Category),
    /// Word picker: pick a word by index into the category list.
    SelectWord(usize),
    /// Learning screen: "我學會了，去測驗！".
    LearnedIt,
    /// Widget reported the tracing quiz finished.
    QuizComplete,
    /// Celebration: next word, or back to the picker after the last one.
    Continue,
    /// One level up (word screens → picker, picker → start).
    Back,
    /// Straight to the start screen from anywhere.
    Home,
    /// Start screen: open the achievements/profile screen.
    OpenAchievements,

    // Achievements pane
    /// Arm the clear-all-data reset (asks for confirmation).
    RequestClearAll,
    /// Confirmed reset; the controller wipes the stores on this intent.
    ConfirmClearAll,
    CancelClearAll,
    /// Open the avatar-generation prompt editor.
    EditAvatarPrompt,
    /// Open the upload-path editor.
    EditUploadPath,
    InputChar(char),
    InputBackspace,
    /// Submit the active editor; the controller reads the input and
    /// performs the effect before this reduces back to the overview.
    SubmitInput,
    CancelInput,
}

impl Intent for GameIntent {}
