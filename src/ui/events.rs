//! Event plumbing for the UI loop.
//!
//! A dedicated thread polls terminal input and emits ticks; async
//! completions (word info, avatar generation) are sent into the same
//! channel by the tasks the runtime spawns, so the app mutates state on
//! one logical thread only.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::services::WordInfo;
use crate::widget::WidgetEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Word-info fetch completed. Tagged with its request token so
    /// stale completions can be discarded.
    WordInfoLoaded { token: u64, info: WordInfo },
    /// Avatar generation completed (data URI or error message).
    AvatarGenerated {
        token: u64,
        result: Result<String, String>,
    },
    /// Event from an out-of-process stroke widget.
    Widget(WidgetEvent),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(Event::Resize(cols, rows)) => {
                            let _ = event_tx.send(AppEvent::Resize(cols, rows));
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Cloneable sender for async completion tasks.
    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}
