//! Terminal UI: MVI screen flow, event loop, rendering.

pub mod app;
pub mod events;
pub mod game;
pub mod input;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
