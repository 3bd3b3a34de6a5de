// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Conversions from panics into the typed failure channel.
//!
//! Only the `attempt` stage is guarded. A panic raised by a `recover` callback propagates to the
//! caller, and a panic carrying an [`UnwrappedFailure`](crate::UnwrappedFailure) is always
//! resumed.

use crate::panic::intercept;
use crate::{Outcome, Panic};

impl<S, E> Outcome<S, E> {
    /// Runs `attempt`, wrapping its return value in a success or converting a panic it raises
    /// into a failure through `recover`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::hint::black_box;
    ///
    /// use outcome::Outcome;
    ///
    /// let divisor = black_box(0);
    /// let outcome = Outcome::try_of(|| 10 / divisor, |panic| format!("caught:{panic}"));
    ///
    /// assert_eq!(outcome, Outcome::failure("caught:attempt to divide by zero".to_string()));
    /// ```
    pub fn try_of(attempt: impl FnOnce() -> S, recover: impl FnOnce(Panic) -> E) -> Self {
        match intercept(attempt) {
            Ok(value) => Self::Success(value),
            Err(panic) => Self::Failure(recover(panic)),
        }
    }

    /// Like [`try_of`](Self::try_of), for an `attempt` that already produces an outcome.
    ///
    /// The returned outcome is used as is rather than wrapped again.
    pub fn try_of_outcome(attempt: impl FnOnce() -> Self, recover: impl FnOnce(Panic) -> E) -> Self {
        intercept(attempt).unwrap_or_else(|panic| Self::Failure(recover(panic)))
    }

    /// Like [`map`](Self::map), converting a panic raised by `attempt` into a failure.
    ///
    /// A failure passes through; neither callback is called.
    pub fn map_try<S2>(self, attempt: impl FnOnce(S) -> S2, recover: impl FnOnce(Panic) -> E) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => Outcome::try_of(|| attempt(value), recover),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`bind`](Self::bind), converting a panic raised by `attempt` into an outcome through
    /// `recover`.
    ///
    /// A failure passes through; neither callback is called.
    pub fn bind_try<S2>(
        self,
        attempt: impl FnOnce(S) -> Outcome<S2, E>,
        recover: impl FnOnce(Panic) -> Outcome<S2, E>,
    ) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => intercept(|| attempt(value)).unwrap_or_else(recover),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`on_success`](Self::on_success), turning the outcome into a failure if the side
    /// effect panics.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::<&str, String>::success("payload")
    ///     .on_success_try(|_| panic!("audit log unavailable"), |panic| panic.to_string());
    ///
    /// assert_eq!(outcome, Outcome::failure("audit log unavailable".to_string()));
    /// ```
    pub fn on_success_try(self, f: impl FnOnce(&S), recover: impl FnOnce(Panic) -> E) -> Self {
        match self {
            Self::Success(value) => match intercept(|| f(&value)) {
                Ok(()) => Self::Success(value),
                Err(panic) => Self::Failure(recover(panic)),
            },
            Self::Failure(error) => Self::Failure(error),
        }
    }
}
