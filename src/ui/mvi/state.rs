//! Marker trait for UI state.

/// A renderable snapshot.
///
/// `PartialEq` lets callers skip redraws when a reducer returned an
/// identical value (duplicate relay deliveries do exactly that).
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
