use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::counter::CounterMsg;
use crate::finder::FinderMsg;
use crate::ui::app::{AppModel, AppMsg, Screen};

/// Map a key event to a message for the current screen.
///
/// Returns `None` for keys that mean nothing in the current state; the
/// caller dispatches whatever comes back.
pub fn handle_key(state: &AppModel, key: KeyEvent) -> Option<AppMsg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') {
        return Some(AppMsg::Quit);
    }
    if matches!(key.code, KeyCode::Tab) {
        return Some(AppMsg::SwitchScreen);
    }

    match state.screen {
        Screen::Counter => counter_key(state, key),
        Screen::Finder => finder_key(state, key),
    }
}

fn counter_key(state: &AppModel, key: KeyEvent) -> Option<AppMsg> {
    let msg = match key.code {
        KeyCode::Up => CounterMsg::Increment,
        KeyCode::Down => CounterMsg::Decrement,
        KeyCode::Backspace => {
            let mut label = state.counter.label.clone();
            label.pop()?;
            CounterMsg::SetLabel(label)
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut label = state.counter.label.clone();
            label.push(ch);
            CounterMsg::SetLabel(label)
        }
        _ => return None,
    };
    Some(AppMsg::Counter(msg))
}

fn finder_key(state: &AppModel, key: KeyEvent) -> Option<AppMsg> {
    if is_ctrl_char(key, 'r') {
        return Some(AppMsg::Finder(FinderMsg::Reset));
    }

    let msg = match key.code {
        KeyCode::Up => FinderMsg::Increment,
        KeyCode::Down => FinderMsg::Decrement,
        // Commit the typed input right away, skipping the debounce.
        KeyCode::Enter => FinderMsg::SetName(state.finder.input.clone()),
        KeyCode::Backspace => {
            let mut input = state.finder.input.clone();
            input.pop()?;
            FinderMsg::InputChanged(input)
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let mut input = state.finder.input.clone();
            input.push(ch);
            FinderMsg::InputChanged(input)
        }
        _ => return None,
    };
    Some(AppMsg::Finder(msg))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::handle_key;
    use crate::config::Config;
    use crate::counter::CounterMsg;
    use crate::finder::FinderMsg;
    use crate::ui::app::{AppModel, AppMsg, Screen};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn model(screen: Screen) -> AppModel {
        AppModel::new(&Config::default(), screen)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn esc_quits_on_any_screen() {
        for screen in [Screen::Counter, Screen::Finder] {
            let msg = handle_key(&model(screen), press(KeyCode::Esc));
            assert_eq!(msg, Some(AppMsg::Quit));
        }
    }

    #[test]
    fn tab_switches_screens() {
        let msg = handle_key(&model(Screen::Counter), press(KeyCode::Tab));
        assert_eq!(msg, Some(AppMsg::SwitchScreen));
    }

    #[test]
    fn up_increments_the_focused_screen() {
        let msg = handle_key(&model(Screen::Counter), press(KeyCode::Up));
        assert_eq!(msg, Some(AppMsg::Counter(CounterMsg::Increment)));

        let msg = handle_key(&model(Screen::Finder), press(KeyCode::Up));
        assert_eq!(msg, Some(AppMsg::Finder(FinderMsg::Increment)));
    }

    #[test]
    fn typing_appends_to_the_finder_input() {
        let msg = handle_key(&model(Screen::Finder), press(KeyCode::Char('p')));
        assert_eq!(
            msg,
            Some(AppMsg::Finder(FinderMsg::InputChanged("p".to_string())))
        );
    }

    #[test]
    fn backspace_on_empty_finder_input_is_ignored() {
        let msg = handle_key(&model(Screen::Finder), press(KeyCode::Backspace));
        assert_eq!(msg, None);
    }

    #[test]
    fn enter_commits_the_typed_input() {
        let mut state = model(Screen::Finder);
        state.finder.input = "peter".to_string();
        let msg = handle_key(&state, press(KeyCode::Enter));
        assert_eq!(
            msg,
            Some(AppMsg::Finder(FinderMsg::SetName("peter".to_string())))
        );
    }

    #[test]
    fn ctrl_r_resets_the_finder() {
        let msg = handle_key(&model(Screen::Finder), ctrl('r'));
        assert_eq!(msg, Some(AppMsg::Finder(FinderMsg::Reset)));
    }

    #[test]
    fn release_events_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&model(Screen::Counter), key), None);
    }
}
