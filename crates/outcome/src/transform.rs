// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::Outcome;

impl<S, E> Outcome<S, E> {
    /// Transforms the success payload, leaving a failure untouched.
    ///
    /// The failure payload keeps its identity while the success type changes to `S2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let length = Outcome::<&str, u8>::success("four").map(str::len);
    /// assert_eq!(length, Outcome::success(4));
    /// ```
    pub fn map<S2>(self, f: impl FnOnce(S) -> S2) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Recovers from a failure by deriving a success value from the error.
    ///
    /// This is not an error transform: the result is always a [`Success`](Outcome::Success).
    /// A success passes through unchanged and `f` is not called. To remap the error type instead,
    /// use [`bind_error`](Self::bind_error).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let port = Outcome::<u16, String>::failure("PORT not set".into()).map_error(|_| 8080);
    /// assert_eq!(port, Outcome::success(8080));
    /// ```
    pub fn map_error(self, f: impl FnOnce(E) -> S) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Success(f(error)),
        }
    }

    /// Chains a computation that may itself fail, flattening the result.
    ///
    /// A failure short-circuits: `f` is not called and the error is carried over to the new
    /// success type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// fn parse(text: &str) -> Outcome<u32, String> {
    ///     text.parse::<u32>().map_err(|e| e.to_string()).into()
    /// }
    ///
    /// let parsed = Outcome::<&str, String>::success("12").bind(parse);
    /// assert_eq!(parsed, Outcome::success(12));
    ///
    /// let rejected = Outcome::<&str, String>::success("twelve").bind(parse);
    /// assert!(rejected.is_failure());
    /// ```
    pub fn bind<S2>(self, f: impl FnOnce(S) -> Outcome<S2, E>) -> Outcome<S2, E> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains a computation on the failure path.
    ///
    /// `f` may recover into a success or produce a failure of a different error type. A success
    /// passes through and `f` is not called.
    pub fn bind_error<E2>(self, f: impl FnOnce(E) -> Outcome<S, E2>) -> Outcome<S, E2> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }
}
