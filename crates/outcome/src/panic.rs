// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use futures_util::FutureExt as _;

use crate::UnwrappedFailure;

/// A panic intercepted by one of the bridging combinators.
///
/// Recovery callbacks such as the one passed to [`Outcome::try_of`](crate::Outcome::try_of)
/// receive this value and turn it into a typed failure.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let outcome = Outcome::try_of(
///     || -> u32 { panic!("disk on fire") },
///     |panic| panic.to_string(),
/// );
///
/// assert_eq!(outcome, Outcome::failure("disk on fire".to_string()));
/// ```
pub struct Panic {
    payload: Box<dyn Any + Send + 'static>,
}

impl Panic {
    pub(crate) fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message, if the payload carries one.
    ///
    /// Panics raised through `panic!` carry either a `&'static str` or a `String`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        message_of(self.payload.as_ref())
    }

    /// Attempts to downcast the payload to a concrete type.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Consumes the panic, returning the raw payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Continues unwinding with the original payload.
    pub fn resume(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl Debug for Panic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panic").field("message", &self.message()).finish_non_exhaustive()
    }
}

impl Display for Panic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str("panic with a non-string payload"),
        }
    }
}

impl std::error::Error for Panic {}

fn message_of(payload: &(dyn Any + Send)) -> Option<&str> {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        Some(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        Some(message.as_str())
    } else {
        payload.downcast_ref::<UnwrappedFailure>().map(UnwrappedFailure::message)
    }
}

/// Runs `attempt`, intercepting any panic it raises.
///
/// A panic carrying an [`UnwrappedFailure`] is resumed rather than returned.
pub(crate) fn intercept<T>(attempt: impl FnOnce() -> T) -> Result<T, Panic> {
    catch_unwind(AssertUnwindSafe(attempt)).map_err(triage)
}

/// Awaits `attempt`, intercepting any panic raised while it is polled.
pub(crate) async fn intercept_async<F: Future>(attempt: F) -> Result<F::Output, Panic> {
    AssertUnwindSafe(attempt).catch_unwind().await.map_err(triage)
}

fn triage(payload: Box<dyn Any + Send + 'static>) -> Panic {
    if payload.is::<UnwrappedFailure>() {
        crate::telemetry::panic_resumed(message_of(payload.as_ref()));
        resume_unwind(payload);
    }

    crate::telemetry::panic_intercepted(message_of(payload.as_ref()));
    Panic::new(payload)
}
