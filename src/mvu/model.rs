//! Base trait for model state in the MVU loop.

/// Marker trait for model state objects.
///
/// Models should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq so derived stages can detect changes)
pub trait Model: Clone + PartialEq + Send + 'static {}
