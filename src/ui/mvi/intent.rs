//! Marker trait for intents.

/// Something that happened and may change UI state.
///
/// Intents come from the keyboard, from the relay, or from the app itself
/// once it has prepared data (a freshly initialized round, an error notice).
pub trait Intent: Send + 'static {}
