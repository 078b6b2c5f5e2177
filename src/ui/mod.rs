pub mod app;
pub mod events;
pub mod input;
pub mod render;

mod footer;
mod header;
mod layout;
mod theme;

use std::io;
use std::io::Stdout;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::finder::FinderMsg;
use crate::mvu::{Debounce, Distinct, Store};
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::{AppModel, AppMsg, AppReducer, Screen};
use crate::ui::events::{EventBridge, UiEvent};

/// Run the sample apps until the user quits or the store halts.
pub async fn run(config: Config, screen: Screen) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownCoordinator::new();

    let store: Store<AppReducer> = Store::spawn(AppModel::new(&config, screen));
    let mut states = store.subscribe();
    let mut events = EventBridge::spawn(
        Duration::from_millis(config.ui.tick_rate_ms),
        shutdown.handle(),
    );

    // The subscription opens with a snapshot of the initial state.
    let Some(mut latest) = states.next().await else {
        return Ok(());
    };

    // Debounced search input: only quiet, actually-changed text reaches the
    // SetName transition, like the throttled text binding it replaces.
    let mut changed = Distinct::seeded(latest.finder.input.clone());
    let mut debounce = Debounce::new(Duration::from_millis(config.finder.debounce_ms));

    loop {
        terminal.draw(|frame| render::draw(frame, &latest))?;
        if latest.should_quit {
            break;
        }

        tokio::select! {
            maybe_state = states.next() => match maybe_state {
                Some(state) => {
                    if let Some(text) = changed.filter(state.finder.input.clone()) {
                        debounce.feed(text, Instant::now());
                    }
                    latest = state;
                }
                None => break,
            },
            maybe_event = events.next() => match maybe_event {
                Some(UiEvent::Key(key)) => {
                    if let Some(msg) = input::handle_key(&latest, key) {
                        store.dispatch(msg);
                    }
                }
                Some(UiEvent::Tick) => {
                    if let Some(text) = debounce.poll(Instant::now()) {
                        store.dispatch(AppMsg::Finder(FinderMsg::SetName(text)));
                    }
                }
                Some(UiEvent::Resize(_, _)) => {
                    // The next draw call picks up the new size.
                }
                None => break,
            },
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}

struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>,
}

impl TerminalGuard {
    fn new() -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
        }
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        if let Ok(mut slot) = self.cleanup.lock() {
            *slot = Some(Box::new(cleanup));
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Ok(mut slot) = cleanup.lock() {
                if let Some(cleanup) = slot.take() {
                    cleanup();
                }
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Ok(mut slot) = self.cleanup.lock() {
            if let Some(cleanup) = slot.take() {
                cleanup();
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    let guard = TerminalGuard::new();
    guard.set_cleanup(|| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = stdout.execute(Show);
    });
    guard.install_panic_hook();

    Ok((terminal, guard))
}
