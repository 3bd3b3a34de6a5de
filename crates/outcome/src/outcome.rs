// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// A value that is either a success carrying `S` or a failure carrying `E`.
///
/// Exactly one variant is active. Combinators consume the outcome and return a new one; the
/// payload is never mutated through the outcome's own interface.
///
/// Two outcomes are equal when they hold the same variant and their payloads compare equal.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let doubled = Outcome::<i32, String>::success(4).map(|x| x * 2);
/// assert_eq!(doubled, Outcome::success(8));
///
/// let failed = Outcome::<i32, &str>::failure("bad").map(|x| x * 2);
/// assert_eq!(failed, Outcome::failure("bad"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<S, E> {
    /// The operation succeeded and produced a value.
    Success(S),

    /// The operation failed with an error.
    Failure(E),
}

impl<S, E> Outcome<S, E> {
    /// Creates a successful outcome.
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Returns `true` if the outcome is a [`Success`](Outcome::Success).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a [`Failure`](Outcome::Failure).
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success discriminant together with both payload slots.
    ///
    /// The slot of the inactive variant is always `None`, so callers read the value only after
    /// checking the flag:
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let outcome = Outcome::<u8, String>::success(7);
    ///
    /// if let (true, Some(value), None) = outcome.check_success() {
    ///     assert_eq!(*value, 7);
    /// }
    /// ```
    #[must_use]
    pub const fn check_success(&self) -> (bool, Option<&S>, Option<&E>) {
        match self {
            Self::Success(value) => (true, Some(value), None),
            Self::Failure(error) => (false, None, Some(error)),
        }
    }

    /// Returns the failure discriminant together with both payload slots.
    ///
    /// Mirror image of [`check_success`](Self::check_success): the flag is `true` for a
    /// [`Failure`](Outcome::Failure) and the inactive slot is `None`.
    #[must_use]
    pub const fn check_failure(&self) -> (bool, Option<&S>, Option<&E>) {
        match self {
            Self::Success(value) => (false, Some(value), None),
            Self::Failure(error) => (true, None, Some(error)),
        }
    }

    /// Borrows the success payload, if any.
    #[must_use]
    pub const fn as_success(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure payload, if any.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts into the success payload, discarding a failure.
    #[must_use]
    pub fn into_success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the failure payload, discarding a success.
    #[must_use]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Converts from `&Outcome<S, E>` to `Outcome<&S, &E>`.
    ///
    /// Useful to run combinators over a borrowed outcome without giving it up.
    pub const fn as_ref(&self) -> Outcome<&S, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts into a standard library [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the failure payload as `Err`.
    pub fn into_result(self) -> Result<S, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        outcome.into_result()
    }
}

/// Lifts a bare value into either slot of an [`Outcome`].
///
/// The target slot is chosen by the method, never by the shape of the value, so a type that
/// could serve as both payloads is still unambiguous.
///
/// # Examples
///
/// ```
/// use outcome::{IntoOutcome, Outcome};
///
/// let ok: Outcome<u32, String> = 5.succeed();
/// let failed: Outcome<u32, String> = "offline".to_string().fail();
///
/// assert!(ok.is_success());
/// assert!(failed.is_failure());
/// ```
pub trait IntoOutcome: Sized {
    /// Wraps `self` as the success payload.
    fn succeed<E>(self) -> Outcome<Self, E> {
        Outcome::Success(self)
    }

    /// Wraps `self` as the failure payload.
    fn fail<S>(self) -> Outcome<S, Self> {
        Outcome::Failure(self)
    }
}

impl<T> IntoOutcome for T {}
