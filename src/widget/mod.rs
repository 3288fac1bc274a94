//! Stroke-order practice widget seam.
//!
//! The rendering widget is an opaque capability: it can demonstrate a
//! character's stroke order and run an interactive tracing quiz that
//! reports completion. The adapter translates screen state into widget
//! calls and widget events back into state-machine intents; every
//! widget session carries an id so events from a torn-down session can
//! never be mistaken for the live one.

mod adapter;
mod strokes;
mod terminal;

pub use adapter::{PracticeAdapter, PracticeMode, PracticeSignal};
pub use strokes::stroke_count;
pub use terminal::{TerminalWriter, TerminalWriterFactory};

use uuid::Uuid;

/// Events emitted by a widget session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The learner finished tracing every stroke in quiz mode.
    QuizComplete { session: Uuid },
}

/// Render snapshot of a widget session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub character: String,
    pub total_strokes: usize,
    /// Strokes revealed so far by the demonstration animation.
    pub strokes_shown: usize,
    /// Strokes the learner has traced in quiz mode.
    pub strokes_traced: usize,
    pub quizzing: bool,
}

/// One live widget session bound to a single character.
pub trait StrokeWidget: Send {
    /// Play (or replay) the full stroke-order demonstration.
    fn animate(&mut self);

    /// Enter interactive tracing mode.
    fn begin_quiz(&mut self);

    /// Synchronous teardown: cancel any in-progress quiz. After this
    /// call the session must emit no further events.
    fn cancel_quiz(&mut self);

    /// Advance time-driven behavior (demonstration animation).
    fn on_tick(&mut self);

    /// Register one tracing input from the learner; returns the
    /// completion event when the final stroke lands.
    fn trace_input(&mut self) -> Option<WidgetEvent>;

    fn view(&self) -> WidgetView;
}

/// Creates widget sessions. The terminal front-end supplies
/// [`TerminalWriterFactory`]; tests supply scripted fakes.
pub trait WidgetFactory: Send {
    fn create(&self, character: &str, session: Uuid) -> Box<dyn StrokeWidget>;
}
