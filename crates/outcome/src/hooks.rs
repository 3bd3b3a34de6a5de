// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::Outcome;

impl<S, E> Outcome<S, E> {
    /// Runs a side effect on the success payload and returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let mut seen = Vec::new();
    ///
    /// let outcome = Outcome::<i32, ()>::success(4)
    ///     .map(|x| x * 2)
    ///     .on_success(|x| seen.push(x.to_string()));
    ///
    /// assert_eq!(outcome, Outcome::success(8));
    /// assert_eq!(seen, ["8"]);
    /// ```
    pub fn on_success(self, f: impl FnOnce(&S)) -> Self {
        if let Self::Success(value) = &self {
            f(value);
        }

        self
    }

    /// Runs a side effect on the failure payload and returns the outcome unchanged.
    pub fn on_error(self, f: impl FnOnce(&E)) -> Self {
        if let Self::Failure(error) = &self {
            f(error);
        }

        self
    }

    /// Reduces the outcome to a single value; exactly one of the callbacks runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::Outcome;
    ///
    /// let status = Outcome::<u32, String>::failure("timeout".into())
    ///     .fold(|n| format!("{n} rows"), |e| format!("error: {e}"));
    ///
    /// assert_eq!(status, "error: timeout");
    /// ```
    pub fn fold<R>(self, on_success: impl FnOnce(S) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_error(error),
        }
    }
}
