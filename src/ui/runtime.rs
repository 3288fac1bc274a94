//! The UI event loop.
//!
//! Single logical thread of control: all state mutation happens here in
//! response to channel events. Async service calls are spawned on the
//! tokio runtime and re-enter the loop as tagged completion events.

use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::services::{ImageGenClient, WordInfoClient};
use crate::store::StorageBackend;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Clients for the external generative services.
pub struct Services {
    pub word_info: WordInfoClient,
    pub image_gen: ImageGenClient,
}

pub fn run<S: StorageBackend>(
    mut app: App<S>,
    services: Services,
    handle: tokio::runtime::Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let sender = events.sender();

    loop {
        pump_requests(&mut app, &services, &handle, &sender);
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::WordInfoLoaded { token, info }) => app.on_word_info(token, info),
            Ok(AppEvent::AvatarGenerated { token, result }) => {
                app.on_avatar_result(token, result)
            }
            Ok(AppEvent::Widget(event)) => app.on_widget_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Spawn any requests the controller queued during the last dispatch.
fn pump_requests<S: StorageBackend>(
    app: &mut App<S>,
    services: &Services,
    handle: &tokio::runtime::Handle,
    sender: &Sender<AppEvent>,
) {
    if let Some(request) = app.take_fetch_request() {
        let client = services.word_info.clone();
        let tx = sender.clone();
        handle.spawn(async move {
            let info = client.fetch_info(request.character).await;
            let _ = tx.send(AppEvent::WordInfoLoaded {
                token: request.token,
                info,
            });
        });
    }

    if let Some(request) = app.take_avatar_request() {
        let client = services.image_gen.clone();
        let tx = sender.clone();
        handle.spawn(async move {
            let result = client
                .generate(&request.prompt)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(AppEvent::AvatarGenerated {
                token: request.token,
                result,
            });
        });
    }
}
