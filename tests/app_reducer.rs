mod common;

use elmtui::config::Config;
use elmtui::counter::CounterMsg;
use elmtui::finder::FinderMsg;
use elmtui::mvu::{Effect, Reducer};
use elmtui::ui::app::{AppModel, AppMsg, AppReducer, Screen};

fn model() -> AppModel {
    AppModel::new(&Config::default(), Screen::Counter)
}

#[test]
fn switch_screen_toggles_back_and_forth() {
    let (state, effect) = AppReducer::reduce(model(), AppMsg::SwitchScreen);
    assert_eq!(state.screen, Screen::Finder);
    assert!(effect.is_none());

    let (state, _) = AppReducer::reduce(state, AppMsg::SwitchScreen);
    assert_eq!(state.screen, Screen::Counter);
}

#[test]
fn quit_sets_the_flag() {
    let (state, effect) = AppReducer::reduce(model(), AppMsg::Quit);
    assert!(state.should_quit);
    assert!(effect.is_none());
}

#[test]
fn counter_messages_delegate_to_the_counter_model() {
    let before = model();
    let finder_before = before.finder.clone();

    let (state, effect) = AppReducer::reduce(before, AppMsg::Counter(CounterMsg::Increment));
    assert_eq!(state.counter.count, 11);
    assert_eq!(state.finder, finder_before);
    assert!(effect.is_none());
}

#[test]
fn finder_messages_delegate_to_the_finder_model() {
    let (state, _) = AppReducer::reduce(
        model(),
        AppMsg::Finder(FinderMsg::InputChanged("pe".to_string())),
    );
    assert_eq!(state.finder.input, "pe");
    assert_eq!(state.counter.count, 10);
}

#[test]
fn child_effects_are_lifted_into_the_root_message_space() {
    let (_, effect) = AppReducer::reduce(model(), AppMsg::Finder(FinderMsg::Increment));
    assert!(
        matches!(
            effect,
            Effect::Msg(AppMsg::Finder(FinderMsg::SetName(ref name))) if name == "Increment"
        ),
        "expected the chained finder message wrapped as an AppMsg, got {:?}",
        effect
    );
}

#[test]
fn initial_state_comes_from_config() {
    let mut config = Config::default();
    config.counter.initial_count = 3;
    config.finder.target_name = "lara".to_string();

    let state = AppModel::new(&config, Screen::Finder);
    assert_eq!(state.counter.count, 3);
    assert_eq!(state.finder.target, "lara");
    assert_eq!(state.screen, Screen::Finder);
    assert!(!state.should_quit);
}
