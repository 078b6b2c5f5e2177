//! Effects: side effects declared by reducers and executed by the store.
//!
//! Keeping effects as data keeps the reducer pure while making async
//! operations explicit. An effect that can fail must fold the failure into
//! the message it resolves to (a dedicated error-carrying variant); nothing
//! may throw past the loop boundary.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tracing::error;

type EffectFuture<M> = Pin<Box<dyn Future<Output = Option<M>> + Send>>;

/// A description of work to run after a transition.
pub enum Effect<M> {
    /// No side effect.
    None,
    /// Feed a message back into the dispatch queue.
    Msg(M),
    /// Several effects, executed independently.
    Batch(Vec<Effect<M>>),
    /// Asynchronous work resolving to a follow-up message.
    Task(EffectFuture<M>),
}

impl<M: Send + 'static> Effect<M> {
    /// The neutral effect for transitions with no side work.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Re-dispatch a message. It joins the back of the queue, behind
    /// anything already dispatched.
    #[inline]
    pub fn msg(message: M) -> Self {
        Self::Msg(message)
    }

    /// Combine several effects. Empty collapses to `None`, a single effect
    /// stays unwrapped.
    pub fn batch(mut effects: Vec<Self>) -> Self {
        match effects.len() {
            0 => Self::None,
            1 => effects.remove(0),
            _ => Self::Batch(effects),
        }
    }

    /// Run a future and dispatch the message it resolves to.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = M> + Send + 'static,
    {
        Self::Task(Box::pin(async move { Some(future.await) }))
    }

    /// Run a blocking computation on the blocking pool and map its output
    /// into a message.
    ///
    /// If the closure panics the panic is logged and no message is
    /// dispatched; fallible work should instead return a `Result` and let
    /// `map` fold both arms into message variants.
    pub fn perform<T, F, G>(f: F, map: G) -> Self
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
        G: FnOnce(T) -> M + Send + 'static,
    {
        Self::Task(Box::pin(async move {
            match tokio::task::spawn_blocking(f).await {
                Ok(value) => Some(map(value)),
                Err(err) => {
                    error!("effect computation panicked: {err}");
                    None
                }
            }
        }))
    }

    /// Lift this effect's messages into another message space, for parent
    /// reducers delegating to child reducers.
    pub fn map<N, F>(self, f: F) -> Effect<N>
    where
        N: Send + 'static,
        F: Fn(M) -> N + Send + Sync + 'static,
    {
        self.map_shared(Arc::new(f))
    }

    fn map_shared<N: Send + 'static>(self, f: Arc<dyn Fn(M) -> N + Send + Sync>) -> Effect<N> {
        match self {
            Effect::None => Effect::None,
            Effect::Msg(message) => Effect::Msg(f(message)),
            Effect::Batch(effects) => Effect::Batch(
                effects
                    .into_iter()
                    .map(|effect| effect.map_shared(Arc::clone(&f)))
                    .collect(),
            ),
            Effect::Task(future) => {
                Effect::Task(Box::pin(async move { future.await.map(|m| f(m)) }))
            }
        }
    }

    /// True for the neutral effect.
    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }
}

impl<M: fmt::Debug> fmt::Debug for Effect<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Msg(message) => f.debug_tuple("Msg").field(message).finish(),
            Self::Batch(effects) => f.debug_tuple("Batch").field(effects).finish(),
            Self::Task(_) => write!(f, "Task(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Effect;

    #[test]
    fn batch_of_nothing_is_none() {
        let effect: Effect<u32> = Effect::batch(Vec::new());
        assert!(effect.is_none());
    }

    #[test]
    fn batch_of_one_unwraps() {
        let effect = Effect::batch(vec![Effect::msg(7u32)]);
        assert!(matches!(effect, Effect::Msg(7)));
    }

    #[test]
    fn batch_of_many_stays_a_batch() {
        let effect = Effect::batch(vec![Effect::msg(1u32), Effect::msg(2)]);
        assert!(matches!(effect, Effect::Batch(ref effects) if effects.len() == 2));
    }

    #[test]
    fn map_rewraps_messages() {
        let effect = Effect::msg(3u32).map(|n| n + 1);
        assert!(matches!(effect, Effect::Msg(4)));
    }

    #[test]
    fn map_recurses_into_batches() {
        let effect = Effect::batch(vec![Effect::msg(1u32), Effect::msg(2)]).map(|n| n * 10);
        match effect {
            Effect::Batch(effects) => {
                assert!(matches!(effects[0], Effect::Msg(10)));
                assert!(matches!(effects[1], Effect::Msg(20)));
            }
            other => panic!("expected Batch, got {:?}", other),
        }
    }
}
