//! The store: owns the state, serializes dispatches, runs the reducer,
//! executes effects, and publishes every new state in transition order.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, WeakUnboundedSender};
use tracing::{error, warn};

use crate::mvu::effect::Effect;
use crate::mvu::reducer::Reducer;

/// Handle to a running MVU loop.
///
/// Cheap to clone; `dispatch` may be called from any thread or callback,
/// including subscriber callbacks, and never blocks. Messages are processed
/// strictly in dispatch order by a single worker task, so the reducer never
/// runs concurrently with itself.
///
/// Failure policy: a panic inside the reducer halts the loop. The panic is
/// logged, subscriber streams end, and later dispatches are dropped with a
/// warning. The loop also ends once every handle and in-flight effect is
/// gone.
pub struct Store<R: Reducer> {
    tx: UnboundedSender<R::Message>,
    inner: Arc<Mutex<Inner<R::State>>>,
}

/// Current state and subscriber registry, guarded together so a new
/// subscription and a publication cannot interleave into a duplicated or
/// skipped state.
struct Inner<S> {
    current: S,
    subscribers: Vec<UnboundedSender<S>>,
}

/// Ordered stream of published states.
///
/// Opens with a snapshot of the state at subscription time, then yields
/// exactly one state per accepted message, in transition order. The queue is
/// unbounded per subscriber: a slow reader lags, it never loses a state.
pub struct StateStream<S> {
    rx: UnboundedReceiver<S>,
}

impl<S> StateStream<S> {
    /// The next published state, or `None` once the loop has ended.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> Store<R>
where
    R: Reducer + 'static,
{
    /// Start the loop with an initial state and return its handle.
    pub fn spawn(initial: R::State) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let inner = Arc::new(Mutex::new(Inner {
            current: initial.clone(),
            subscribers: Vec::new(),
        }));

        // The worker holds only a weak sender for effect feedback, so the
        // queue closes once every external handle is dropped.
        tokio::spawn(run_loop::<R>(rx, Arc::clone(&inner), tx.downgrade(), initial));

        Self { tx, inner }
    }

    /// Enqueue a message for processing. Never blocks.
    pub fn dispatch(&self, message: R::Message) {
        if self.tx.send(message).is_err() {
            warn!("dispatch after the store halted; message dropped");
        }
    }

    /// Subscribe to the state stream, starting with a snapshot of the
    /// current state.
    pub fn subscribe(&self) -> StateStream<R::State> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Snapshot under the same lock that guards publication, so the
        // stream starts exactly one state behind whatever comes next.
        let _ = tx.send(inner.current.clone());
        inner.subscribers.push(tx);
        StateStream { rx }
    }

    /// Snapshot of the latest published state.
    pub fn current(&self) -> R::State {
        self.inner.lock().current.clone()
    }
}

async fn run_loop<R>(
    mut rx: UnboundedReceiver<R::Message>,
    inner: Arc<Mutex<Inner<R::State>>>,
    feedback: WeakUnboundedSender<R::Message>,
    mut state: R::State,
) where
    R: Reducer + 'static,
{
    while let Some(message) = rx.recv().await {
        let outcome = catch_unwind(AssertUnwindSafe(|| R::reduce(state.clone(), message)));
        let (next, effect) = match outcome {
            Ok(transition) => transition,
            Err(payload) => {
                error!(
                    "reducer panicked: {}; halting the loop",
                    panic_message(payload.as_ref())
                );
                break;
            }
        };

        state = next;
        // Publish before touching the queue again, so subscribers observe
        // states in exactly the order transitions were applied.
        publish(&inner, &state);
        execute(effect, &feedback);
    }

    // Ends every subscriber stream, whether the queue closed or a panic
    // halted the loop.
    inner.lock().subscribers.clear();
}

fn publish<S: Clone>(inner: &Mutex<Inner<S>>, state: &S) {
    let mut inner = inner.lock();
    inner.current = state.clone();
    inner
        .subscribers
        .retain(|tx| tx.send(state.clone()).is_ok());
}

/// Run an effect off the critical path. Completion re-enters the loop only
/// through the dispatch queue; if the loop is already gone the result is
/// dropped.
fn execute<M: Send + 'static>(effect: Effect<M>, feedback: &WeakUnboundedSender<M>) {
    match effect {
        Effect::None => {}
        Effect::Msg(message) => {
            if let Some(tx) = feedback.upgrade() {
                let _ = tx.send(message);
            }
        }
        Effect::Batch(effects) => {
            for effect in effects {
                execute(effect, feedback);
            }
        }
        Effect::Task(future) => {
            let feedback = feedback.clone();
            tokio::spawn(async move {
                if let Some(message) = future.await {
                    if let Some(tx) = feedback.upgrade() {
                        let _ = tx.send(message);
                    }
                }
            });
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}
