// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Log events emitted when the `logs` feature is enabled.

use crate::UnwrappedFailure;

#[cfg_attr(not(any(feature = "logs", test)), expect(unused_variables, reason = "only read by log events"))]
pub(crate) fn panic_intercepted(message: Option<&str>) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "outcome.panic_intercepted",
        tracing::Level::WARN,
        panic.message = message.unwrap_or_default(),
        "panic converted into a failure",
    );
}

#[cfg_attr(not(any(feature = "logs", test)), expect(unused_variables, reason = "only read by log events"))]
pub(crate) fn panic_resumed(message: Option<&str>) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "outcome.panic_resumed",
        tracing::Level::WARN,
        panic.message = message.unwrap_or_default(),
        "forced extraction failure passed through a panic bridge",
    );
}

#[cfg_attr(not(any(feature = "logs", test)), expect(unused_variables, reason = "only read by log events"))]
pub(crate) fn unwrapped_failure(failure: &UnwrappedFailure) {
    #[cfg(any(feature = "logs", test))]
    tracing::event!(
        name: "outcome.unwrapped_failure",
        tracing::Level::ERROR,
        success_type = failure.success_type(),
        error_type = failure.error_type(),
        "forced extraction of a failure",
    );
}
