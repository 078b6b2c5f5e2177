use crate::mvu::Message;

/// Events the counter screen produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterMsg {
    Increment,
    Decrement,
    /// The label text box changed.
    SetLabel(String),
}

impl Message for CounterMsg {}
