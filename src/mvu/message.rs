//! Base trait for messages (user/system events) in the MVU loop.

/// Marker trait for message objects.
///
/// Messages represent:
/// - User actions (key presses, text edits)
/// - System events (effect results, timers)
///
/// Messages are processed by reducers to produce new states. Each
/// application defines one closed enum; reducers match it exhaustively, so
/// an unrecognized variant cannot exist at runtime.
pub trait Message: Send + 'static {}
