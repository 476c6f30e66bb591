//! Base trait for actions (user/system intents) in MVI architecture.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User actions (button taps, text input)
/// - Lifecycle events (screen loaded, refresh requested)
///
/// Actions are turned into mutations by a [`Reactor`](super::Reactor).
/// They carry only the data needed to compute those mutations.
pub trait Action: std::fmt::Debug + Send + 'static {}
