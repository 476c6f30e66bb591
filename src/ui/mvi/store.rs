//! Reactive state store.
//!
//! A [`Store`] owns one screen's state for the lifetime of that screen.
//! Actions are mapped by the [`Reactor`] to a [`Mutations`] producer:
//!
//! - immediate producers, and the leading immediate mutations of a concat,
//!   are folded synchronously inside `dispatch`, so they keep the order in
//!   which actions were dispatched and a loading flag is visible to the very
//!   next action;
//! - whatever follows the first asynchronous part runs on a spawned task and
//!   hands its mutations to the store's fold loop through a channel.
//!
//! Every fold publishes exactly one snapshot to every observer. Dropping or
//! disposing the store cancels in-flight producers; nothing folds afterwards.

use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::Stream;
use parking_lot::{Mutex, RwLock};
use tokio::sync::mpsc;

use super::dispose::DisposeBag;
use super::mutations::Mutations;
use super::pulse::{Pulse, PulseReader};
use super::reducer::{Reactor, Reducer};
use super::state::UiState;

struct Shared<S> {
    state: RwLock<S>,
    /// Guards folding and subscribing so a new observer never misses or
    /// duplicates a snapshot.
    subscribers: Mutex<Vec<mpsc::UnboundedSender<S>>>,
    dispose_bag: DisposeBag,
}

impl<S: UiState> Shared<S> {
    /// Fold one mutation and publish the result. Returns false once the
    /// store has been disposed.
    fn fold<R>(&self, mutation: R::Mutation) -> bool
    where
        R: Reducer<State = S>,
    {
        let mut subscribers = self.subscribers.lock();
        if self.dispose_bag.is_disposed() {
            tracing::trace!(?mutation, "Mutation dropped after dispose");
            return false;
        }
        tracing::trace!(?mutation, "Folding mutation");
        let next = R::reduce(self.state.read().clone(), mutation);
        *self.state.write() = next.clone();
        subscribers.retain(|tx| tx.send(next.clone()).is_ok());
        true
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subscribers = self.subscribers.lock();
        let _ = tx.send(self.state.read().clone());
        if !self.dispose_bag.is_disposed() {
            subscribers.push(tx);
        }
        rx
    }

    fn dispose(&self) -> bool {
        let mut subscribers = self.subscribers.lock();
        let first = self.dispose_bag.dispose();
        subscribers.clear();
        first
    }
}

/// State container for a single screen.
///
/// Must be created inside a tokio runtime: the fold loop and asynchronous
/// producers run as tokio tasks.
pub struct Store<R: Reactor> {
    reactor: Arc<R>,
    shared: Arc<Shared<R::State>>,
    sender: mpsc::UnboundedSender<R::Mutation>,
    name: &'static str,
}

impl<R: Reactor> Store<R> {
    pub fn new(reactor: R) -> Self {
        let name = std::any::type_name::<R>();
        let shared = Arc::new(Shared {
            state: RwLock::new(reactor.initial_state()),
            subscribers: Mutex::new(Vec::new()),
            dispose_bag: DisposeBag::new(),
        });
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(fold_loop::<R>(Arc::clone(&shared), receiver, name));

        Self {
            reactor: Arc::new(reactor),
            shared,
            sender,
            name,
        }
    }

    /// Accept an action. Never blocks on I/O: asynchronous producers are
    /// spawned and fold their mutations as they arrive.
    pub fn dispatch(&self, action: R::Action) {
        if self.is_disposed() {
            tracing::debug!(store = self.name, ?action, "Dispatch ignored, store disposed");
            return;
        }
        tracing::debug!(store = self.name, ?action, "Dispatch");

        let producer = self.reactor.mutate(action, &self.current_state());
        let (prefix, rest) = producer.split_immediate();
        for mutation in prefix {
            if !self.shared.fold::<R>(mutation) {
                return;
            }
        }
        if let Some(rest) = rest {
            self.spawn_producer(rest);
        }
    }

    fn spawn_producer(&self, producer: Mutations<R::Mutation>) {
        let sender = self.sender.clone();
        let dispose_bag = self.shared.dispose_bag.clone();
        let name = self.name;
        tokio::spawn(async move {
            let emit = move |mutation: R::Mutation| {
                let _ = sender.send(mutation);
            };
            tokio::select! {
                biased;
                _ = dispose_bag.disposed() => {
                    tracing::trace!(store = name, "Producer cancelled");
                }
                _ = producer.drive(&emit) => {}
            }
        });
    }

    /// Latest folded state.
    pub fn current_state(&self) -> R::State {
        self.shared.state.read().clone()
    }

    /// Stream of snapshots: the current state first, then one per fold.
    pub fn observe(&self) -> StateStream<R::State> {
        StateStream {
            receiver: self.shared.subscribe(),
        }
    }

    /// Stream of values written to one pulse field, each delivered once.
    pub fn pulse<T, F>(&self, field: F) -> PulseStream<R::State, T, F>
    where
        T: Clone,
        F: Fn(&R::State) -> &Pulse<T> + Unpin,
    {
        self.observe().pulses(field)
    }

    pub fn reactor(&self) -> &R {
        &self.reactor
    }

    /// Tear the store down: in-flight producers are cancelled, observer
    /// streams end, and no further mutation is folded.
    pub fn dispose(&self) {
        if self.shared.dispose() {
            tracing::debug!(store = self.name, "Store disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.dispose_bag.is_disposed()
    }
}

impl<R: Reactor> Drop for Store<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}

async fn fold_loop<R: Reactor>(
    shared: Arc<Shared<R::State>>,
    mut receiver: mpsc::UnboundedReceiver<R::Mutation>,
    name: &'static str,
) {
    let dispose_bag = shared.dispose_bag.clone();
    loop {
        tokio::select! {
            biased;
            _ = dispose_bag.disposed() => break,
            next = receiver.recv() => match next {
                Some(mutation) => {
                    if !shared.fold::<R>(mutation) {
                        break;
                    }
                }
                None => break,
            },
        }
    }
    tracing::trace!(store = name, "Fold loop stopped");
}

/// Per-subscriber stream of state snapshots.
pub struct StateStream<S> {
    receiver: mpsc::UnboundedReceiver<S>,
}

impl<S: UiState> StateStream<S> {
    /// Next snapshot, or `None` once the store is disposed.
    pub async fn next_state(&mut self) -> Option<S> {
        self.receiver.recv().await
    }

    /// First snapshot (including the current one) matching `predicate`.
    /// Returns `None` on timeout or when the store goes away.
    pub async fn wait_for<P>(&mut self, mut predicate: P, timeout: Duration) -> Option<S>
    where
        P: FnMut(&S) -> bool,
    {
        let search = async {
            while let Some(state) = self.receiver.recv().await {
                if predicate(&state) {
                    return Some(state);
                }
            }
            None
        };
        tokio::time::timeout(timeout, search).await.ok().flatten()
    }

    /// Turn this stream into a stream of one pulse field's values.
    pub fn pulses<T, F>(self, field: F) -> PulseStream<S, T, F>
    where
        T: Clone,
        F: Fn(&S) -> &Pulse<T> + Unpin,
    {
        PulseStream {
            states: self,
            field,
            reader: PulseReader::new(),
            _value: PhantomData,
        }
    }
}

impl<S> Stream for StateStream<S> {
    type Item = S;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        self.receiver.poll_recv(cx)
    }
}

/// Stream of pulse values; each write is yielded exactly once.
pub struct PulseStream<S, T, F> {
    states: StateStream<S>,
    field: F,
    reader: PulseReader,
    _value: PhantomData<fn() -> T>,
}

impl<S, T, F> Stream for PulseStream<S, T, F>
where
    T: Clone,
    F: Fn(&S) -> &Pulse<T> + Unpin,
{
    type Item = T;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = self.get_mut();
        loop {
            match this.states.receiver.poll_recv(cx) {
                Poll::Ready(Some(state)) => {
                    if let Some(value) = this.reader.read((this.field)(&state)) {
                        return Poll::Ready(Some(value));
                    }
                }
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}
