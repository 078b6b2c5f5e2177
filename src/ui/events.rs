use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::time::MissedTickBehavior;
use tracing::error;

use crate::shutdown::ShutdownHandle;

/// Events the view loop consumes: terminal input bridged from crossterm,
/// plus a steady tick.
pub enum UiEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

pub struct EventBridge {
    rx: UnboundedReceiver<UiEvent>,
}

impl EventBridge {
    /// Spawn the background task reading crossterm's event stream.
    pub fn spawn(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            let mut stream = EventStream::new();
            let mut tick = tokio::time::interval(tick_rate);
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown.wait() => break,
                    _ = tick.tick() => {
                        if tx.send(UiEvent::Tick).is_err() {
                            break;
                        }
                    }
                    maybe_event = stream.next() => match maybe_event {
                        Some(Ok(Event::Key(key))) => {
                            if tx.send(UiEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Some(Ok(Event::Resize(cols, rows))) => {
                            if tx.send(UiEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => {
                            error!("terminal event stream error: {err}");
                            break;
                        }
                        None => break,
                    },
                }
            }
        });

        Self { rx }
    }

    pub async fn next(&mut self) -> Option<UiEvent> {
        self.rx.recv().await
    }
}
