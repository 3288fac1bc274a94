//! Built-in widget for the terminal front-end.
//!
//! The demonstration reveals one stroke per tick; the quiz counts one
//! tracing keypress per stroke and reports completion after the final
//! stroke. Real calligraphy tracing needs a pointer device — in the
//! terminal the pacing and the completion contract are what matter.

use uuid::Uuid;

use crate::widget::strokes::stroke_count;
use crate::widget::{StrokeWidget, WidgetEvent, WidgetFactory, WidgetView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Idle,
    Demonstrating,
    Quiz,
    /// Quiz finished; no further events may be emitted.
    Done,
}

pub struct TerminalWriter {
    character: String,
    session: Uuid,
    total: usize,
    shown: usize,
    traced: usize,
    mode: Mode,
}

impl TerminalWriter {
    pub fn new(character: &str, session: Uuid) -> Self {
        Self {
            character: character.to_string(),
            session,
            total: stroke_count(character),
            shown: 0,
            traced: 0,
            mode: Mode::Idle,
        }
    }
}

impl StrokeWidget for TerminalWriter {
    fn animate(&mut self) {
        self.mode = Mode::Demonstrating;
        self.shown = 0;
    }

    fn begin_quiz(&mut self) {
        self.mode = Mode::Quiz;
        // The full character stays hidden during the quiz.
        self.shown = 0;
        self.traced = 0;
    }

    fn cancel_quiz(&mut self) {
        self.mode = Mode::Done;
    }

    fn on_tick(&mut self) {
        if self.mode == Mode::Demonstrating && self.shown < self.total {
            self.shown += 1;
        }
    }

    fn trace_input(&mut self) -> Option<WidgetEvent> {
        if self.mode != Mode::Quiz {
            return None;
        }
        self.traced += 1;
        if self.traced >= self.total {
            self.mode = Mode::Done;
            return Some(WidgetEvent::QuizComplete {
                session: self.session,
            });
        }
        None
    }

    fn view(&self) -> WidgetView {
        WidgetView {
            character: self.character.clone(),
            total_strokes: self.total,
            strokes_shown: self.shown,
            strokes_traced: self.traced,
            quizzing: self.mode == Mode::Quiz,
        }
    }
}

/// Factory for [`TerminalWriter`] sessions.
#[derive(Default)]
pub struct TerminalWriterFactory;

impl WidgetFactory for TerminalWriterFactory {
    fn create(&self, character: &str, session: Uuid) -> Box<dyn StrokeWidget> {
        Box::new(TerminalWriter::new(character, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_completes_after_final_stroke() {
        let session = Uuid::new_v4();
        let mut writer = TerminalWriter::new("三", session);
        writer.begin_quiz();
        assert_eq!(writer.trace_input(), None);
        assert_eq!(writer.trace_input(), None);
        assert_eq!(
            writer.trace_input(),
            Some(WidgetEvent::QuizComplete { session })
        );
    }

    #[test]
    fn no_events_after_cancel() {
        let mut writer = TerminalWriter::new("三", Uuid::new_v4());
        writer.begin_quiz();
        writer.cancel_quiz();
        assert_eq!(writer.trace_input(), None);
    }

    #[test]
    fn no_events_outside_quiz_mode() {
        let mut writer = TerminalWriter::new("一", Uuid::new_v4());
        writer.animate();
        assert_eq!(writer.trace_input(), None);
    }

    #[test]
    fn demonstration_reveals_one_stroke_per_tick() {
        let mut writer = TerminalWriter::new("山", Uuid::new_v4());
        writer.animate();
        writer.on_tick();
        writer.on_tick();
        let view = writer.view();
        assert_eq!(view.strokes_shown, 2);
        assert_eq!(view.total_strokes, 3);
    }

    #[test]
    fn completion_fires_only_once() {
        let mut writer = TerminalWriter::new("一", Uuid::new_v4());
        writer.begin_quiz();
        assert!(writer.trace_input().is_some());
        assert_eq!(writer.trace_input(), None);
    }
}
