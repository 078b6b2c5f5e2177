use crate::finder::message::FinderMsg;
use crate::finder::state::FinderModel;
use crate::mvu::{Effect, Reducer};

pub struct FinderReducer;

impl Reducer for FinderReducer {
    type State = FinderModel;
    type Message = FinderMsg;

    fn reduce(
        state: Self::State,
        message: Self::Message,
    ) -> (Self::State, Effect<Self::Message>) {
        match message {
            FinderMsg::Increment => counted(
                FinderModel {
                    count: state.count + 1,
                    ..state
                },
                "Increment",
            ),
            FinderMsg::Decrement => counted(
                FinderModel {
                    count: state.count - 1,
                    ..state
                },
                "Decrement",
            ),
            FinderMsg::Reset => counted(FinderModel { count: 0, ..state }, "Reset"),
            FinderMsg::InputChanged(text) => (
                FinderModel {
                    input: text,
                    ..state
                },
                Effect::none(),
            ),
            FinderMsg::SetName(name) => set_name(state, name),
            FinderMsg::NameFound(found) => (
                FinderModel {
                    name_found: found,
                    ..state
                },
                Effect::none(),
            ),
        }
    }
}

/// Count shortcuts also run the search with their action label, mirroring
/// the chained message the counter buttons produce.
fn counted(state: FinderModel, action: &str) -> (FinderModel, Effect<FinderMsg>) {
    (state, Effect::msg(FinderMsg::SetName(action.to_string())))
}

/// Record the name and schedule the lookup. The result comes back as a
/// `NameFound` message; concurrent lookups are last-writer-wins.
fn set_name(state: FinderModel, name: String) -> (FinderModel, Effect<FinderMsg>) {
    let probe = name.clone();
    let target = state.target.clone();
    let effect = Effect::perform(
        move || probe.eq_ignore_ascii_case(&target),
        FinderMsg::NameFound,
    );
    (FinderModel { name, ..state }, effect)
}
