//! Base trait for intents (user/system actions).

/// Marker trait for intents.
///
/// An intent is a user action (key press), a system event (service
/// completion, widget signal), or a navigation request. Reducers turn
/// intents into new states.
pub trait Intent: Send + 'static {}
