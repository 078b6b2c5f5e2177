use crate::counter::message::CounterMsg;
use crate::counter::state::CounterModel;
use crate::mvu::{Effect, Reducer};

/// All counter transitions are pure; none schedules follow-up work.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterModel;
    type Message = CounterMsg;

    fn reduce(
        state: Self::State,
        message: Self::Message,
    ) -> (Self::State, Effect<Self::Message>) {
        match message {
            CounterMsg::Increment => (
                CounterModel {
                    count: state.count + 1,
                    ..state
                },
                Effect::none(),
            ),
            CounterMsg::Decrement => (
                CounterModel {
                    count: state.count - 1,
                    ..state
                },
                Effect::none(),
            ),
            CounterMsg::SetLabel(text) => (
                CounterModel {
                    label: text,
                    ..state
                },
                Effect::none(),
            ),
        }
    }
}
