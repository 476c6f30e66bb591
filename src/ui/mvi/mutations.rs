//! Mutation producers.
//!
//! A reactor answers every action with a [`Mutations`] value describing how
//! mutations are produced: immediately, in a fixed sequence, by independent
//! concurrent operations, or by an asynchronous task. The store drives the
//! producer and folds each mutation as soon as it is emitted.

use std::future::Future;

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use parking_lot::Mutex;

/// A producer of zero or more mutations.
pub struct Mutations<M> {
    kind: Kind<M>,
}

enum Kind<M> {
    Empty,
    Just(M),
    /// Children run one after another; declaration order is preserved.
    Concat(Vec<Mutations<M>>),
    /// Children run concurrently; emissions interleave by completion time.
    Merge(Vec<Mutations<M>>),
    /// Asynchronous work resolving to a further producer. The output type is
    /// `Mutations`, not `Result`, so failures must be mapped to a mutation
    /// before they reach the store.
    Task(BoxFuture<'static, Mutations<M>>),
}

impl<M: Send + 'static> Mutations<M> {
    pub fn empty() -> Self {
        Self { kind: Kind::Empty }
    }

    pub fn just(mutation: M) -> Self {
        Self {
            kind: Kind::Just(mutation),
        }
    }

    /// Several mutations emitted in the given order.
    pub fn sequence<I: IntoIterator<Item = M>>(mutations: I) -> Self {
        Self::concat(mutations.into_iter().map(Self::just))
    }

    /// Run producers one after another.
    pub fn concat<I: IntoIterator<Item = Mutations<M>>>(parts: I) -> Self {
        Self {
            kind: Kind::Concat(parts.into_iter().collect()),
        }
    }

    /// Run producers concurrently. The relative order of mutations coming
    /// from different parts depends on which part completes first and is
    /// not deterministic.
    pub fn merge<I: IntoIterator<Item = Mutations<M>>>(parts: I) -> Self {
        Self {
            kind: Kind::Merge(parts.into_iter().collect()),
        }
    }

    /// Asynchronous producer. The future decides which mutations follow.
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = Mutations<M>> + Send + 'static,
    {
        Self {
            kind: Kind::Task(future.boxed()),
        }
    }

    /// Asynchronous producer whose error is converted by `on_error`.
    pub fn try_task<F, E, H>(future: F, on_error: H) -> Self
    where
        F: Future<Output = Result<Mutations<M>, E>> + Send + 'static,
        H: FnOnce(E) -> Mutations<M> + Send + 'static,
        E: Send + 'static,
    {
        Self::task(async move {
            match future.await {
                Ok(mutations) => mutations,
                Err(err) => on_error(err),
            }
        })
    }

    /// Append another producer after this one.
    pub fn then(self, next: Mutations<M>) -> Self {
        match self.kind {
            Kind::Empty => next,
            Kind::Concat(mut parts) => {
                parts.push(next);
                Self::concat(parts)
            }
            kind => Self::concat([Self { kind }, next]),
        }
    }

    /// True when no part of the producer is asynchronous.
    pub fn is_immediate(&self) -> bool {
        match &self.kind {
            Kind::Empty | Kind::Just(_) => true,
            Kind::Concat(parts) | Kind::Merge(parts) => parts.iter().all(Self::is_immediate),
            Kind::Task(_) => false,
        }
    }

    /// Flatten an immediate producer into its mutations, in order.
    /// Producers with an asynchronous part are handed back unchanged.
    pub fn into_immediate(self) -> Result<Vec<M>, Self> {
        if !self.is_immediate() {
            return Err(self);
        }
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        Ok(out)
    }

    /// Split off the mutations that can be emitted before the first
    /// asynchronous part. The remainder is `None` when nothing is left.
    ///
    /// Only leading concat parts are split; a merge with an asynchronous
    /// part stays whole.
    pub(crate) fn split_immediate(self) -> (Vec<M>, Option<Self>) {
        let mut prefix = Vec::new();
        let rest = self.split_into(&mut prefix);
        (prefix, rest)
    }

    fn split_into(self, prefix: &mut Vec<M>) -> Option<Self> {
        if self.is_immediate() {
            self.flatten_into(prefix);
            return None;
        }
        match self.kind {
            Kind::Concat(parts) => {
                let mut parts = parts.into_iter();
                while let Some(part) = parts.next() {
                    if let Some(rest) = part.split_into(prefix) {
                        let mut remaining = vec![rest];
                        remaining.extend(parts);
                        return Some(Self::concat(remaining));
                    }
                }
                None
            }
            kind => Some(Self { kind }),
        }
    }

    fn flatten_into(self, out: &mut Vec<M>) {
        match self.kind {
            Kind::Empty | Kind::Task(_) => {}
            Kind::Just(mutation) => out.push(mutation),
            Kind::Concat(parts) | Kind::Merge(parts) => {
                for part in parts {
                    part.flatten_into(out);
                }
            }
        }
    }

    /// Drive the producer to completion, handing each mutation to `emit` as
    /// soon as it is available.
    pub(crate) fn drive<'a, F>(self, emit: &'a F) -> BoxFuture<'a, ()>
    where
        F: Fn(M) + Sync,
    {
        async move {
            match self.kind {
                Kind::Empty => {}
                Kind::Just(mutation) => emit(mutation),
                Kind::Concat(parts) => {
                    for part in parts {
                        part.drive(emit).await;
                    }
                }
                Kind::Merge(parts) => {
                    join_all(parts.into_iter().map(|part| part.drive(emit))).await;
                }
                Kind::Task(future) => future.await.drive(emit).await,
            }
        }
        .boxed()
    }

    /// Drive the producer without a store and return every mutation in
    /// emission order.
    pub async fn collect(self) -> Vec<M> {
        let collected = Mutex::new(Vec::new());
        let emit = |mutation: M| collected.lock().push(mutation);
        self.drive(&emit).await;
        collected.into_inner()
    }
}

impl<M> std::fmt::Debug for Mutations<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            Kind::Empty => write!(f, "Mutations::Empty"),
            Kind::Just(_) => write!(f, "Mutations::Just"),
            Kind::Concat(parts) => f.debug_tuple("Mutations::Concat").field(parts).finish(),
            Kind::Merge(parts) => f.debug_tuple("Mutations::Merge").field(parts).finish(),
            Kind::Task(_) => write!(f, "Mutations::Task"),
        }
    }
}
