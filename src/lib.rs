//! 筆順大冒險 — stroke-order practice for young learners.
//!
//! The library holds all core logic: the fixed word catalog, persisted
//! mastery and avatar stores, generative-service clients, the stroke
//! widget adapter, and the MVI screen flow. The binary wires them to a
//! ratatui front-end.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod services;
pub mod store;
pub mod ui;
pub mod widget;
