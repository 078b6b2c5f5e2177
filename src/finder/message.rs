use crate::mvu::Message;

/// Events the finder screen produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FinderMsg {
    Increment,
    Decrement,
    Reset,
    /// Raw text-box edit; no lookup yet.
    InputChanged(String),
    /// Debounced input (or a count shortcut's action label) committed to
    /// the search.
    SetName(String),
    /// Lookup result delivered by the search effect.
    NameFound(bool),
}

impl Message for FinderMsg {}
