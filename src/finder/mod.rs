//! The name-search sample: a counter whose shortcuts double as actions,
//! plus a text search resolved by an asynchronous lookup effect.

mod message;
mod reducer;
mod state;

pub use message::FinderMsg;
pub use reducer::FinderReducer;
pub use state::FinderModel;
