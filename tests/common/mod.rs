//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use bishun::store::{AvatarManager, MasteryStore, MemoryStorage};
use bishun::ui::app::App;
use bishun::widget::{
    StrokeWidget, TerminalWriterFactory, WidgetEvent, WidgetFactory, WidgetView,
};

/// Call log shared between a recording factory and the test.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn log_entries(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Widget that records every call it receives.
pub struct RecordingWidget {
    pub character: String,
    pub session: Uuid,
    pub log: CallLog,
}

impl RecordingWidget {
    fn record(&self, call: &str) {
        self.log
            .lock()
            .unwrap()
            .push(format!("{call} {}", self.character));
    }
}

impl StrokeWidget for RecordingWidget {
    fn animate(&mut self) {
        self.record("animate");
    }

    fn begin_quiz(&mut self) {
        self.record("quiz");
    }

    fn cancel_quiz(&mut self) {
        self.record("cancel");
    }

    fn on_tick(&mut self) {}

    fn trace_input(&mut self) -> Option<WidgetEvent> {
        None
    }

    fn view(&self) -> WidgetView {
        WidgetView {
            character: self.character.clone(),
            total_strokes: 1,
            strokes_shown: 0,
            strokes_traced: 0,
            quizzing: false,
        }
    }
}

/// Factory producing [`RecordingWidget`]s that share one call log.
pub struct RecordingFactory {
    pub log: CallLog,
}

impl WidgetFactory for RecordingFactory {
    fn create(&self, character: &str, session: Uuid) -> Box<dyn StrokeWidget> {
        self.log.lock().unwrap().push(format!("create {character}"));
        Box::new(RecordingWidget {
            character: character.to_string(),
            session,
            log: Arc::clone(&self.log),
        })
    }
}

/// An app over in-memory stores and the terminal widget.
pub fn new_app() -> App<MemoryStorage> {
    App::new(
        MasteryStore::load(MemoryStorage::new()),
        AvatarManager::load(MemoryStorage::new()),
        Box::new(TerminalWriterFactory),
    )
}
