//! Reducer trait for the MVU loop.

use crate::mvu::effect::Effect;
use crate::mvu::message::Message;
use crate::mvu::model::Model;

/// Reducer transforms state based on messages.
///
/// The reducer is the only place where state transitions happen. It must be
/// a pure function: given the same (State, Message) pair it returns the same
/// (State, Effect) pair, mutates nothing shared, and performs no I/O. Side
/// effects are described by the returned [`Effect`] and executed by the
/// store after the new state has been published.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: Model;

    /// The message type this reducer handles.
    type Message: Message;

    /// Process a message and return the new state plus any follow-up work.
    fn reduce(
        state: Self::State,
        message: Self::Message,
    ) -> (Self::State, Effect<Self::Message>);
}
