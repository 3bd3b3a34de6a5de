// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{Outcome, Panic};

/// Combinators for a pending [`Outcome`].
///
/// Implemented for every [`Future`] resolving to an `Outcome`, so asynchronous chains read the
/// same way as synchronous ones. Each step awaits the previous one before inspecting the variant
/// and calling its own callback; steps never run concurrently. Dropping the chain drops whichever
/// step is in flight and no later callback is called.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, OutcomeFuture};
///
/// # futures::executor::block_on(async {
/// let outcome = Outcome::<u32, String>::success(1)
///     .map_async(async |x| x + 1)
///     .map_async(async |x| x * 2)
///     .await;
///
/// assert_eq!(outcome, Outcome::success(4));
/// # });
/// ```
pub trait OutcomeFuture<S, E>: Future<Output = Outcome<S, E>> + Sized {
    /// Awaits the outcome, then applies [`Outcome::map_async`].
    fn map_async<S2>(self, f: impl AsyncFnOnce(S) -> S2) -> impl Future<Output = Outcome<S2, E>> {
        async move { self.await.map_async(f).await }
    }

    /// Awaits the outcome, then applies [`Outcome::map_error_async`].
    fn map_error_async(self, f: impl AsyncFnOnce(E) -> S) -> impl Future<Output = Outcome<S, E>> {
        async move { self.await.map_error_async(f).await }
    }

    /// Awaits the outcome, then applies [`Outcome::map_try_async`].
    ///
    /// Only `attempt` is guarded; a panic raised by the pending outcome itself propagates.
    fn map_try_async<S2>(
        self,
        attempt: impl AsyncFnOnce(S) -> S2,
        recover: impl FnOnce(Panic) -> E,
    ) -> impl Future<Output = Outcome<S2, E>> {
        async move { self.await.map_try_async(attempt, recover).await }
    }

    /// Awaits the outcome, then applies [`Outcome::bind_async`].
    fn bind_async<S2>(self, f: impl AsyncFnOnce(S) -> Outcome<S2, E>) -> impl Future<Output = Outcome<S2, E>> {
        async move { self.await.bind_async(f).await }
    }

    /// Awaits the outcome, then applies [`Outcome::bind_error_async`].
    fn bind_error_async<E2>(self, f: impl AsyncFnOnce(E) -> Outcome<S, E2>) -> impl Future<Output = Outcome<S, E2>> {
        async move { self.await.bind_error_async(f).await }
    }

    /// Awaits the outcome, then applies [`Outcome::bind_try_async`].
    fn bind_try_async<S2>(
        self,
        attempt: impl AsyncFnOnce(S) -> Outcome<S2, E>,
        recover: impl FnOnce(Panic) -> Outcome<S2, E>,
    ) -> impl Future<Output = Outcome<S2, E>> {
        async move { self.await.bind_try_async(attempt, recover).await }
    }

    /// Awaits the outcome, then applies [`Outcome::on_success_async`].
    fn on_success_async(self, f: impl AsyncFnOnce(&S)) -> impl Future<Output = Outcome<S, E>> {
        async move { self.await.on_success_async(f).await }
    }

    /// Awaits the outcome, then applies [`Outcome::on_success_try_async`].
    fn on_success_try_async(
        self,
        f: impl AsyncFnOnce(&S),
        recover: impl FnOnce(Panic) -> E,
    ) -> impl Future<Output = Outcome<S, E>> {
        async move { self.await.on_success_try_async(f, recover).await }
    }

    /// Awaits the outcome, then applies [`Outcome::on_error_async`].
    fn on_error_async(self, f: impl AsyncFnOnce(&E)) -> impl Future<Output = Outcome<S, E>> {
        async move { self.await.on_error_async(f).await }
    }

    /// Awaits the outcome, then reduces it with [`Outcome::fold_async`].
    fn fold_async<R>(
        self,
        on_success: impl AsyncFnOnce(S) -> R,
        on_error: impl AsyncFnOnce(E) -> R,
    ) -> impl Future<Output = R> {
        async move { self.await.fold_async(on_success, on_error).await }
    }
}

impl<F, S, E> OutcomeFuture<S, E> for F where F: Future<Output = Outcome<S, E>> {}
