//! Translation layer between the screen state machine and the stroke
//! widget. Holds no mastery or fetch logic.

use uuid::Uuid;

use crate::widget::{StrokeWidget, WidgetEvent, WidgetFactory, WidgetView};

/// Practice mode the widget should be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeMode {
    /// Animated demonstration with a manual replay control.
    Learning,
    /// Interactive tracing quiz.
    Quiz,
}

/// Signals the adapter forwards to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeSignal {
    QuizComplete,
}

struct ActiveSession {
    session: Uuid,
    character: String,
    mode: PracticeMode,
    widget: Box<dyn StrokeWidget>,
}

pub struct PracticeAdapter {
    factory: Box<dyn WidgetFactory>,
    active: Option<ActiveSession>,
}

impl PracticeAdapter {
    pub fn new(factory: Box<dyn WidgetFactory>) -> Self {
        Self {
            factory,
            active: None,
        }
    }

    /// Reconcile the widget against the wanted `(character, mode)`.
    ///
    /// On any change the previous session is cancelled and dropped
    /// before the new one is created; `None` tears down without a
    /// replacement (non-practice screens).
    pub fn sync(&mut self, target: Option<(&str, PracticeMode)>) {
        if let (Some(active), Some((character, mode))) = (&self.active, target) {
            if active.character == character && active.mode == mode {
                return;
            }
        }
        if self.active.is_none() && target.is_none() {
            return;
        }

        self.teardown();

        if let Some((character, mode)) = target {
            let session = Uuid::new_v4();
            let mut widget = self.factory.create(character, session);
            match mode {
                PracticeMode::Learning => widget.animate(),
                PracticeMode::Quiz => widget.begin_quiz(),
            }
            self.active = Some(ActiveSession {
                session,
                character: character.to_string(),
                mode,
                widget,
            });
        }
    }

    /// Cancel and drop the live session, if any. Synchronous: once this
    /// returns, no event from the old session will be accepted.
    pub fn teardown(&mut self) {
        if let Some(mut active) = self.active.take() {
            active.widget.cancel_quiz();
        }
    }

    /// Manual "看示範" control: replay the demonstration. Only
    /// meaningful in learning mode.
    pub fn replay(&mut self) {
        if let Some(active) = &mut self.active {
            if active.mode == PracticeMode::Learning {
                active.widget.animate();
            }
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(active) = &mut self.active {
            active.widget.on_tick();
        }
    }

    /// Forward one tracing input to a live quiz session.
    pub fn trace_input(&mut self) -> Option<WidgetEvent> {
        match &mut self.active {
            Some(active) if active.mode == PracticeMode::Quiz => active.widget.trace_input(),
            _ => None,
        }
    }

    /// Translate a widget event into a state-machine signal. Events
    /// whose session does not match the live quiz session are stale and
    /// are dropped.
    pub fn handle_event(&self, event: WidgetEvent) -> Option<PracticeSignal> {
        let WidgetEvent::QuizComplete { session } = event;
        match &self.active {
            Some(active) if active.session == session && active.mode == PracticeMode::Quiz => {
                Some(PracticeSignal::QuizComplete)
            }
            _ => {
                tracing::debug!(%session, "dropping stale widget event");
                None
            }
        }
    }

    pub fn view(&self) -> Option<WidgetView> {
        self.active.as_ref().map(|a| a.widget.view())
    }

    /// Session id of the live widget, if any.
    pub fn session(&self) -> Option<Uuid> {
        self.active.as_ref().map(|a| a.session)
    }
}
