//! Root model composing the sample apps with screen focus and the quit
//! flag. The root reducer only routes: sample transitions stay in their own
//! modules and their effects are lifted into the root message space.

use crate::config::Config;
use crate::counter::{CounterModel, CounterMsg, CounterReducer};
use crate::finder::{FinderModel, FinderMsg, FinderReducer};
use crate::mvu::{Effect, Message, Model, Reducer};

/// Which sample screen is focused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Counter,
    Finder,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Counter => "Counter",
            Screen::Finder => "Finder",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Screen::Counter => Screen::Finder,
            Screen::Finder => Screen::Counter,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppModel {
    pub screen: Screen,
    pub should_quit: bool,
    pub counter: CounterModel,
    pub finder: FinderModel,
}

impl AppModel {
    pub fn new(config: &Config, screen: Screen) -> Self {
        Self {
            screen,
            should_quit: false,
            counter: CounterModel::new(config.counter.initial_count),
            finder: FinderModel::new(config.finder.target_name.clone()),
        }
    }
}

impl Model for AppModel {}

/// Root message wrapping the sample messages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AppMsg {
    Counter(CounterMsg),
    Finder(FinderMsg),
    SwitchScreen,
    Quit,
}

impl Message for AppMsg {}

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppModel;
    type Message = AppMsg;

    fn reduce(
        state: Self::State,
        message: Self::Message,
    ) -> (Self::State, Effect<Self::Message>) {
        let AppModel {
            screen,
            should_quit,
            counter,
            finder,
        } = state;

        match message {
            AppMsg::Counter(msg) => {
                let (counter, effect) = CounterReducer::reduce(counter, msg);
                (
                    AppModel {
                        screen,
                        should_quit,
                        counter,
                        finder,
                    },
                    effect.map(AppMsg::Counter),
                )
            }
            AppMsg::Finder(msg) => {
                let (finder, effect) = FinderReducer::reduce(finder, msg);
                (
                    AppModel {
                        screen,
                        should_quit,
                        counter,
                        finder,
                    },
                    effect.map(AppMsg::Finder),
                )
            }
            AppMsg::SwitchScreen => (
                AppModel {
                    screen: screen.toggled(),
                    should_quit,
                    counter,
                    finder,
                },
                Effect::none(),
            ),
            AppMsg::Quit => (
                AppModel {
                    screen,
                    should_quit: true,
                    counter,
                    finder,
                },
                Effect::none(),
            ),
        }
    }
}
