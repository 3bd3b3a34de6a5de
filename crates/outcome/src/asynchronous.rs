// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Asynchronous counterparts of the combinators, for an outcome that is already known.
//!
//! Each callback is an async closure that is called only after the outcome's variant has been
//! inspected, and it is awaited to completion before the combinator resolves. A short-circuited
//! variant resolves on the first poll without calling or awaiting anything.

use crate::panic::intercept_async;
use crate::{Outcome, Panic};

impl<S, E> Outcome<S, E> {
    /// Asynchronous [`map`](Self::map).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// # futures::executor::block_on(async {
    /// let outcome = Outcome::<u32, String>::success(20)
    ///     .map_async(async |x| x + 1)
    ///     .await;
    ///
    /// assert_eq!(outcome, Outcome::success(21));
    /// # });
    /// ```
    pub async fn map_async<S2>(self, f: impl AsyncFnOnce(S) -> S2) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => Outcome::Success(f(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Asynchronous [`map_error`](Self::map_error): recovers a failure into a success.
    pub async fn map_error_async(self, f: impl AsyncFnOnce(E) -> S) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(f(error).await),
        }
    }

    /// Asynchronous [`map_try`](Self::map_try).
    ///
    /// A panic raised while creating or polling the future returned by `attempt` is passed to
    /// `recover`.
    pub async fn map_try_async<S2>(
        self,
        attempt: impl AsyncFnOnce(S) -> S2,
        recover: impl FnOnce(Panic) -> E,
    ) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => match intercept_async(async move { attempt(value).await }).await {
                Ok(mapped) => Outcome::Success(mapped),
                Err(panic) => Outcome::Failure(recover(panic)),
            },
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Asynchronous [`bind`](Self::bind).
    pub async fn bind_async<S2>(self, f: impl AsyncFnOnce(S) -> Outcome<S2, E>) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => f(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Asynchronous [`bind_error`](Self::bind_error).
    pub async fn bind_error_async<E2>(self, f: impl AsyncFnOnce(E) -> Outcome<S, E2>) -> Outcome<S, E2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error).await,
        }
    }

    /// Asynchronous [`bind_try`](Self::bind_try).
    pub async fn bind_try_async<S2>(
        self,
        attempt: impl AsyncFnOnce(S) -> Outcome<S2, E>,
        recover: impl FnOnce(Panic) -> Outcome<S2, E>,
    ) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => intercept_async(async move { attempt(value).await })
                .await
                .unwrap_or_else(recover),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Asynchronous [`on_success`](Self::on_success); the side effect completes before the
    /// outcome is returned.
    pub async fn on_success_async(self, f: impl AsyncFnOnce(&S)) -> Self {
        if let Self::Success(value) = &self {
            f(value).await;
        }

        self
    }

    /// Asynchronous [`on_error`](Self::on_error); the side effect completes before the outcome
    /// is returned.
    pub async fn on_error_async(self, f: impl AsyncFnOnce(&E)) -> Self {
        if let Self::Failure(error) = &self {
            f(error).await;
        }

        self
    }

    /// Asynchronous [`on_success_try`](Self::on_success_try).
    pub async fn on_success_try_async(self, f: impl AsyncFnOnce(&S), recover: impl FnOnce(Panic) -> E) -> Self {
        match self {
            Self::Success(value) => {
                let checked = intercept_async(async { f(&value).await }).await;

                match checked {
                    Ok(()) => Self::Success(value),
                    Err(panic) => Self::Failure(recover(panic)),
                }
            }
            Self::Failure(error) => Self::Failure(error),
        }
    }

    /// Asynchronous [`fold`](Self::fold); only the selected branch is awaited.
    pub async fn fold_async<R>(self, on_success: impl AsyncFnOnce(S) -> R, on_error: impl AsyncFnOnce(E) -> R) -> R {
        match self {
            Self::Success(value) => on_success(value).await,
            Self::Failure(error) => on_error(error).await,
        }
    }

    /// Asynchronous [`try_of`](Self::try_of).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// # futures::executor::block_on(async {
    /// let outcome = Outcome::try_of_async(
    ///     async || -> u32 { panic!("connection reset") },
    ///     |panic| panic.to_string(),
    /// )
    /// .await;
    ///
    /// assert_eq!(outcome, Outcome::failure("connection reset".to_string()));
    /// # });
    /// ```
    pub async fn try_of_async(attempt: impl AsyncFnOnce() -> S, recover: impl FnOnce(Panic) -> E) -> Self {
        match intercept_async(async move { attempt().await }).await {
            Ok(value) => Self::Success(value),
            Err(panic) => Self::Failure(recover(panic)),
        }
    }

    /// Asynchronous [`try_of_outcome`](Self::try_of_outcome).
    pub async fn try_of_outcome_async(attempt: impl AsyncFnOnce() -> Self, recover: impl FnOnce(Panic) -> E) -> Self {
        intercept_async(async move { attempt().await })
            .await
            .unwrap_or_else(|panic| Self::Failure(recover(panic)))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[cfg(not(miri))] // tokio runtime does not support Miri.
#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::task::{Context, Poll, Waker};
    use std::time::Duration;

    use futures::FutureExt as _;
    use futures::executor::block_on;

    use super::*;

    fn message(panic: Panic) -> String {
        panic.message().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn map_async_transforms_success() {
        let outcome = Outcome::<u32, String>::success(2)
            .map_async(async |x| {
                tokio::time::sleep(Duration::from_millis(1)).await;
                x * 10
            })
            .await;

        assert_eq!(outcome, Outcome::success(20));
    }

    #[tokio::test]
    async fn failure_never_calls_async_callbacks() {
        let calls = AtomicUsize::new(0);
        let failure = Outcome::<u32, &str>::failure("bad");

        let mapped = failure
            .map_async(async |x| {
                calls.fetch_add(1, Ordering::SeqCst);
                x
            })
            .await;
        let bound = failure
            .bind_async(async |x| {
                calls.fetch_add(1, Ordering::SeqCst);
                Outcome::success(x)
            })
            .await;
        let hooked = failure
            .on_success_async(async |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .await;
        let tried = failure
            .map_try_async(
                async |x| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    x
                },
                |_| "recovered",
            )
            .await;

        assert_eq!(mapped, failure);
        assert_eq!(bound, failure);
        assert_eq!(hooked, failure);
        assert_eq!(tried, failure);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn success_never_calls_error_side_callbacks() {
        let calls = AtomicUsize::new(0);
        let success = Outcome::<u32, &str>::success(1);

        let recovered = success
            .map_error_async(async |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                0
            })
            .await;
        let rebound = success
            .bind_error_async(async |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                Outcome::<u32, ()>::failure(())
            })
            .await;
        let hooked = success
            .on_error_async(async |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            })
            .await;

        assert_eq!(recovered, success);
        assert_eq!(rebound, Outcome::success(1));
        assert_eq!(hooked, success);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn error_side_async_callbacks() {
        let recovered = Outcome::<usize, String>::failure("abc".into())
            .map_error_async(async |e| e.len())
            .await;
        let remapped = Outcome::<usize, String>::failure("abc".into())
            .bind_error_async(async |e| Outcome::<usize, char>::failure(e.chars().next().unwrap_or('?')))
            .await;

        assert_eq!(recovered, Outcome::success(3));
        assert_eq!(remapped, Outcome::failure('a'));
    }

    #[tokio::test]
    async fn hooks_await_side_effect_before_resolving() {
        let log = Arc::new(Mutex::new(Vec::new()));

        let outcome = Outcome::<u32, String>::success(8)
            .on_success_async(async |v| {
                tokio::time::sleep(Duration::from_millis(5)).await;
                log.lock().unwrap().push(format!("saw {v}"));
            })
            .await;
        log.lock().unwrap().push("resolved".to_string());

        let failure = Outcome::<u32, String>::failure("oops".into())
            .on_error_async(async |e| log.lock().unwrap().push(format!("error {e}")))
            .await;

        assert_eq!(outcome, Outcome::success(8));
        assert_eq!(failure, Outcome::failure("oops".to_string()));
        assert_eq!(*log.lock().unwrap(), ["saw 8", "resolved", "error oops"]);
    }

    #[tokio::test]
    async fn map_try_async_converts_panic() {
        let outcome = Outcome::<u32, String>::success(3)
            .map_try_async(
                async |x| -> u32 {
                    tokio::task::yield_now().await;
                    panic!("failed on {x}")
                },
                message,
            )
            .await;

        assert_eq!(outcome, Outcome::failure("failed on 3".to_string()));
    }

    #[tokio::test]
    async fn map_try_async_catches_panic_before_first_await() {
        let outcome = Outcome::<u32, String>::success(3)
            .map_try_async(|_: u32| -> std::future::Ready<u32> { panic!("eager") }, message)
            .await;

        assert_eq!(outcome, Outcome::failure("eager".to_string()));
    }

    #[tokio::test]
    async fn bind_try_async_paths() {
        let ok = Outcome::<u32, String>::success(1)
            .bind_try_async(async |x| Outcome::success(x + 1), |p| Outcome::failure(message(p)))
            .await;
        let recovered = Outcome::<u32, String>::success(1)
            .bind_try_async(async |_| -> Outcome<u32, String> { panic!("lost") }, |_| Outcome::success(0))
            .await;
        let skipped = Outcome::<u32, String>::failure("early".into())
            .bind_try_async(async |_| -> Outcome<u32, String> { panic!("unreachable") }, |_| Outcome::success(0))
            .await;

        assert_eq!(ok, Outcome::success(2));
        assert_eq!(recovered, Outcome::success(0));
        assert_eq!(skipped, Outcome::failure("early".to_string()));
    }

    #[tokio::test]
    async fn on_success_try_async_paths() {
        let kept = Outcome::<u32, String>::success(1)
            .on_success_try_async(async |_| tokio::task::yield_now().await, message)
            .await;
        let converted = Outcome::<u32, String>::success(1)
            .on_success_try_async(
                async |v| {
                    panic!("hook failed for {v}");
                },
                message,
            )
            .await;

        assert_eq!(kept, Outcome::success(1));
        assert_eq!(converted, Outcome::failure("hook failed for 1".to_string()));
    }

    #[tokio::test]
    async fn fold_async_awaits_selected_branch() {
        let text = Outcome::<u32, String>::failure("down".into())
            .fold_async(async |n| format!("{n} items"), async |e| format!("error: {e}"))
            .await;

        assert_eq!(text, "error: down");
    }

    #[tokio::test]
    async fn try_of_async_paths() {
        let ok = Outcome::<u32, String>::try_of_async(async || 5, message).await;
        let caught = Outcome::<u32, String>::try_of_async(async || -> u32 { panic!("reset") }, message).await;

        assert_eq!(ok, Outcome::success(5));
        assert_eq!(caught, Outcome::failure("reset".to_string()));
    }

    #[tokio::test]
    async fn try_of_outcome_async_flattens() {
        let typed = Outcome::<u32, String>::try_of_outcome_async(async || Outcome::failure("typed".into()), message).await;
        let caught =
            Outcome::<u32, String>::try_of_outcome_async(async || -> Outcome<u32, String> { panic!("untyped") }, message)
                .await;

        assert_eq!(typed, Outcome::failure("typed".to_string()));
        assert_eq!(caught, Outcome::failure("untyped".to_string()));
    }

    #[test]
    fn short_circuit_resolves_on_first_poll() {
        let calls = AtomicUsize::new(0);

        let mut pending = Box::pin(Outcome::<u32, &str>::failure("x").bind_try_async(
            async |x| {
                calls.fetch_add(1, Ordering::SeqCst);
                std::future::pending::<()>().await;
                Outcome::success(x)
            },
            |_| Outcome::failure("recovered"),
        ));

        let mut cx = Context::from_waker(Waker::noop());
        assert_eq!(pending.poll_unpin(&mut cx), Poll::Ready(Outcome::Failure("x")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn recover_panics_propagate_from_async_bridges() {
        let from_try_of = catch_unwind(|| {
            block_on(Outcome::<u32, String>::try_of_async(
                async || -> u32 { panic!("attempt") },
                |_| -> String { panic!("recover broke") },
            ))
        });
        let from_map_try = catch_unwind(AssertUnwindSafe(|| {
            block_on(Outcome::<u32, String>::success(1).map_try_async(
                async |_| -> u32 { panic!("attempt") },
                |_| -> String { panic!("recover broke") },
            ))
        }));

        assert_eq!(from_try_of.unwrap_err().downcast_ref::<&str>(), Some(&"recover broke"));
        assert_eq!(from_map_try.unwrap_err().downcast_ref::<&str>(), Some(&"recover broke"));
    }
}
