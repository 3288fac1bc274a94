//! Top-level controller.
//!
//! Owns the screen state, the persisted stores, and the widget adapter.
//! Intents run through the pure reducer; effects (mastery writes, store
//! wipes, service requests, widget sessions) happen here, around the
//! reduce step. Async work is queued as request values tagged with a
//! token — the runtime spawns them and feeds completions back, and any
//! completion whose token is not the latest issued one is discarded, so
//! the last *requested* character always wins display rights.

use std::collections::VecDeque;
use std::path::Path;

use crate::services::WordInfo;
use crate::store::{
    AvatarManager, CategoryProgress, GenerationOutcome, MasteryStore, StorageBackend, Tier,
};
use crate::ui::game::{AchievementsPane, GameIntent, GameReducer, GameScreen};
use crate::ui::mvi::Reducer;
use crate::widget::{
    PracticeAdapter, PracticeMode, PracticeSignal, WidgetEvent, WidgetFactory, WidgetView,
};
use crate::catalog::Category;

const MAX_NOTICES: usize = 20;

/// Word-info display state for the info card.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoCard {
    pub info: Option<WordInfo>,
    pub loading: bool,
}

/// A word-info request the runtime must issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: u64,
    pub character: &'static str,
}

/// An avatar-generation request the runtime must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRequest {
    pub token: u64,
    pub prompt: String,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App<S: StorageBackend> {
    screen: GameScreen,
    mastery: MasteryStore<S>,
    avatar: AvatarManager<S>,
    adapter: PracticeAdapter,
    info: InfoCard,
    /// Token of the latest issued word-info request.
    fetch_token: u64,
    /// `(character, screen kind)` the last fetch was issued for.
    fetch_focus: Option<(&'static str, PracticeMode)>,
    pending_fetch: Option<FetchRequest>,
    pending_avatar: Option<AvatarRequest>,
    notices: VecDeque<String>,
    should_quit: bool,
}

impl<S: StorageBackend> App<S> {
    pub fn new(
        mastery: MasteryStore<S>,
        avatar: AvatarManager<S>,
        factory: Box<dyn WidgetFactory>,
    ) -> Self {
        Self {
            screen: GameScreen::default(),
            mastery,
            avatar,
            adapter: PracticeAdapter::new(factory),
            info: InfoCard::default(),
            fetch_token: 0,
            fetch_focus: None,
            pending_fetch: None,
            pending_avatar: None,
            notices: VecDeque::new(),
            should_quit: false,
        }
    }

    // ── Intent dispatch ─────────────────────────────────────────────

    /// Run one intent: effects first where the transition demands them,
    /// then the pure reduce, then reconciliation of fetch and widget.
    pub fn dispatch(&mut self, intent: GameIntent) {
        self.run_effects(&intent);
        dispatch_mvi!(self, screen, GameReducer, intent);
        self.reconcile();
    }

    fn run_effects(&mut self, intent: &GameIntent) {
        match intent {
            GameIntent::QuizComplete => {
                // Mastery is recorded exactly when the quiz screen
                // receives its completion.
                if self.screen.is_quiz() {
                    if let Some(character) = self.screen.current_character() {
                        self.mastery.mark_mastered(character);
                    }
                }
            }
            GameIntent::ConfirmClearAll => {
                if matches!(
                    self.screen,
                    GameScreen::Achievements {
                        pane: AchievementsPane::ConfirmClear
                    }
                ) {
                    self.mastery.clear();
                    self.avatar.clear();
                    self.push_notice("已清除所有紀錄，重新開始！".to_string());
                }
            }
            GameIntent::SubmitInput => self.submit_editor(),
            _ => {}
        }
    }

    /// Handle submission of the achievements editors (avatar prompt or
    /// upload path) before the pane reduces back to the overview.
    fn submit_editor(&mut self) {
        let pane = match &self.screen {
            GameScreen::Achievements { pane } => pane.clone(),
            _ => return,
        };
        match pane {
            AchievementsPane::AvatarPrompt { input } => match self.avatar.begin_generation(&input)
            {
                Ok(token) => {
                    self.pending_avatar = Some(AvatarRequest {
                        token,
                        prompt: input,
                    });
                }
                Err(err) => self.push_notice(err.to_string()),
            },
            AchievementsPane::UploadPath { input } => self.upload_avatar(input.trim()),
            AchievementsPane::Overview | AchievementsPane::ConfirmClear => {}
        }
    }

    fn upload_avatar(&mut self, path: &str) {
        if path.is_empty() {
            return;
        }
        match std::fs::read(Path::new(path)) {
            Ok(bytes) => match self.avatar.set_from_upload(&bytes) {
                Ok(()) => self.push_notice("頭像已更新！".to_string()),
                Err(err) => self.push_notice(err.to_string()),
            },
            Err(err) => {
                tracing::warn!(path, error = %err, "avatar upload failed");
                self.push_notice("讀不到這個圖片檔案".to_string());
            }
        }
    }

    // ── Reconciliation ──────────────────────────────────────────────

    fn reconcile(&mut self) {
        self.reconcile_fetch();
        self.reconcile_widget();
    }

    /// Entering a learning or quiz screen (or the character changing
    /// within them) issues a fresh word-info request. Deliberately no
    /// cache: re-entry re-fetches, matching the always-fresh behavior
    /// of the shipped app.
    fn reconcile_fetch(&mut self) {
        let focus = match &self.screen {
            GameScreen::Learning { .. } => self
                .screen
                .current_character()
                .map(|c| (c, PracticeMode::Learning)),
            GameScreen::Quiz { .. } => self
                .screen
                .current_character()
                .map(|c| (c, PracticeMode::Quiz)),
            _ => None,
        };

        if focus == self.fetch_focus {
            return;
        }
        self.fetch_focus = focus;

        match focus {
            Some((character, _)) => {
                self.fetch_token += 1;
                self.info.loading = true;
                self.pending_fetch = Some(FetchRequest {
                    token: self.fetch_token,
                    character,
                });
            }
            None => {
                // Off the word screens: drop the card and end any
                // in-flight display interest.
                self.info = InfoCard::default();
            }
        }
    }

    fn reconcile_widget(&mut self) {
        let target = match &self.screen {
            GameScreen::Learning { .. } => self
                .screen
                .current_character()
                .map(|c| (c, PracticeMode::Learning)),
            GameScreen::Quiz { .. } => self
                .screen
                .current_character()
                .map(|c| (c, PracticeMode::Quiz)),
            _ => None,
        };
        self.adapter.sync(target);
    }

    // ── Async completions ───────────────────────────────────────────

    /// Word-info fetch finished. Stale completions (token no longer the
    /// latest issued) are discarded so they cannot overwrite the info
    /// for the character the learner has since navigated to.
    pub fn on_word_info(&mut self, token: u64, info: WordInfo) {
        if token != self.fetch_token || self.fetch_focus.is_none() {
            tracing::debug!(token, latest = self.fetch_token, "discarding stale word info");
            return;
        }
        self.info = InfoCard {
            info: Some(info),
            loading: false,
        };
    }

    /// Avatar generation finished.
    pub fn on_avatar_result(&mut self, token: u64, result: Result<String, String>) {
        match self.avatar.complete_generation(token, result) {
            GenerationOutcome::Updated => self.push_notice("新頭像畫好了！".to_string()),
            GenerationOutcome::Failed(_) => {
                self.push_notice("頭像生成失敗，再試一次吧".to_string());
            }
            GenerationOutcome::Stale => {}
        }
    }

    /// Take the queued word-info request, if any. The runtime spawns it.
    pub fn take_fetch_request(&mut self) -> Option<FetchRequest> {
        self.pending_fetch.take()
    }

    /// Take the queued avatar request, if any.
    pub fn take_avatar_request(&mut self) -> Option<AvatarRequest> {
        self.pending_avatar.take()
    }

    // ── Widget plumbing ─────────────────────────────────────────────

    /// One tracing keypress during the quiz.
    pub fn on_trace(&mut self) {
        if let Some(event) = self.adapter.trace_input() {
            self.on_widget_event(event);
        }
    }

    /// Widget events, filtered through the adapter's session check.
    pub fn on_widget_event(&mut self, event: WidgetEvent) {
        if let Some(PracticeSignal::QuizComplete) = self.adapter.handle_event(event) {
            self.dispatch(GameIntent::QuizComplete);
        }
    }

    /// Manual replay of the stroke demonstration (learning screen).
    pub fn replay_demo(&mut self) {
        self.adapter.replay();
    }

    pub fn on_tick(&mut self) {
        self.adapter.on_tick();
    }

    // ── View accessors ──────────────────────────────────────────────

    pub fn screen(&self) -> &GameScreen {
        &self.screen
    }

    pub fn info_card(&self) -> &InfoCard {
        &self.info
    }

    pub fn widget_view(&self) -> Option<WidgetView> {
        self.adapter.view()
    }

    pub fn progress(&self, category: Category) -> CategoryProgress {
        self.mastery.progress(category)
    }

    pub fn is_mastered(&self, character: &str) -> bool {
        self.mastery.is_mastered(character)
    }

    pub fn mastered_count(&self) -> usize {
        self.mastery.mastered_count()
    }

    pub fn tier(&self) -> Tier {
        self.mastery.tier()
    }

    pub fn has_avatar(&self) -> bool {
        self.avatar.has_avatar()
    }

    pub fn avatar_generating(&self) -> bool {
        self.avatar.is_generating()
    }

    pub fn latest_notice(&self) -> Option<&str> {
        self.notices.back().map(String::as_str)
    }

    fn push_notice(&mut self, notice: String) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }
}
