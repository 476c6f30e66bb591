//! Base trait for UI state in MVI architecture.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Shareable with the fold loop (Send + Sync)
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
