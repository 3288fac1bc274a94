//! Base trait for UI state.

/// Marker trait for screen state values.
///
/// States are immutable snapshots: cloneable, self-contained enough to
/// render from, and comparable so change detection stays cheap.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
