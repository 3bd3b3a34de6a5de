// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt::Debug;

use crate::Outcome;

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Raised when the success payload is forcibly extracted from a failed [`Outcome`].
///
/// [`Outcome::expect`] panics with this value as the panic payload, so a caller that really
/// needs to can recover it with [`std::panic::catch_unwind`] and `downcast_ref`. The bridging
/// combinators deliberately never convert it back into an `Outcome`: extracting a value that is
/// not there is a contract violation, not a domain error.
///
/// # Examples
///
/// ```
/// use outcome::{Outcome, UnwrappedFailure};
///
/// let failure = Outcome::<u32, &str>::failure("missing").try_expect().unwrap_err();
///
/// assert_eq!(failure.success_type(), "u32");
/// assert_eq!(failure.error_type(), "&str");
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct UnwrappedFailure {
    message: String,
    success_type: &'static str,
    error_type: &'static str,
    #[source]
    cause: Option<Cause>,
}

impl UnwrappedFailure {
    pub(crate) fn new<S, E: Debug>(error: &E, cause: Option<Cause>) -> Self {
        let success_type = type_name::<S>();
        let error_type = type_name::<E>();

        Self {
            message: format!("expected a `Success` of type `{success_type}` but found a `Failure` of type `{error_type}`: {error:?}"),
            success_type,
            error_type,
            cause,
        }
    }

    /// Returns the human-readable description of the failed extraction.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the declared type name of the success payload that was expected.
    #[must_use]
    pub const fn success_type(&self) -> &'static str {
        self.success_type
    }

    /// Returns the declared type name of the failure payload that was found.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        self.error_type
    }
}

impl<S, E: Debug> Outcome<S, E> {
    /// Returns the success payload, panicking if the outcome is a failure.
    ///
    /// Prefer [`fold`](Self::fold), [`check_success`](Self::check_success) or
    /// [`try_expect`](Self::try_expect) when the failure case is reachable.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrappedFailure`] payload if the outcome is a
    /// [`Failure`](Outcome::Failure).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<u8, ()>::success(3).expect(), 3);
    /// ```
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    ///
    /// Outcome::<u8, &str>::failure("nothing here").expect();
    /// ```
    #[track_caller]
    pub fn expect(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => raise(UnwrappedFailure::new::<S, E>(&error, None)),
        }
    }

    /// Returns the success payload, panicking with `cause` chained if the outcome is a failure.
    ///
    /// The cause is reachable through [`std::error::Error::source`] on the
    /// [`UnwrappedFailure`] payload.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrappedFailure`] payload if the outcome is a
    /// [`Failure`](Outcome::Failure).
    #[track_caller]
    pub fn expect_with_cause(self, cause: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => raise(UnwrappedFailure::new::<S, E>(&error, Some(cause.into()))),
        }
    }

    /// Returns the success payload, or the [`UnwrappedFailure`] that [`expect`](Self::expect)
    /// would have panicked with.
    ///
    /// # Errors
    ///
    /// Returns an [`UnwrappedFailure`] if the outcome is a [`Failure`](Outcome::Failure).
    pub fn try_expect(self) -> Result<S, UnwrappedFailure> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(UnwrappedFailure::new::<S, E>(&error, None)),
        }
    }
}

#[track_caller]
fn raise(failure: UnwrappedFailure) -> ! {
    crate::telemetry::unwrapped_failure(&failure);
    std::panic::panic_any(failure)
}
