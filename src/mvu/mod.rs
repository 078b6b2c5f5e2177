//! Model-View-Update (MVU) architecture primitives.
//!
//! This module provides the message loop for implementing unidirectional
//! data flow:
//!
//! ```text
//! Message ──→ Reducer ──→ (State, Effect) ──→ subscribers ──→ View
//!    ↑                          │
//!    └──────── dispatch ←───────┘
//! ```
//!
//! - **Model**: Immutable state, replaced wholesale on every transition
//! - **Message**: User actions or system events dispatched into the store
//! - **Reducer**: Pure function from (state, message) to (state, effect)
//! - **Effect**: Asynchronous work run after a transition, reporting back
//!   only through dispatch
//! - **Store**: Serializes dispatches, applies the reducer once per message,
//!   and publishes every new state to subscribers in transition order

mod derive;
mod effect;
mod message;
mod model;
mod reducer;
mod store;

pub use derive::{Debounce, Distinct};
pub use effect::Effect;
pub use message::Message;
pub use model::Model;
pub use reducer::Reducer;
pub use store::{StateStream, Store};
