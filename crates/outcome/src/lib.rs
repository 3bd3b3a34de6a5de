// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A success-or-failure value with synchronous and asynchronous combinators.
//!
//! [`Outcome<S, E>`] holds exactly one success value or exactly one error value. Application
//! code creates it at a boundary (validation, I/O, parsing) and threads it through combinator
//! chains; success-path combinators only run on a success and pass a failure through with its
//! error intact, error-path combinators do the opposite.
//!
//! # Quick Start
//!
//! ```
//! use outcome::Outcome;
//!
//! fn parse_port(text: &str) -> Outcome<u16, String> {
//!     text.parse::<u16>().map_err(|e| format!("invalid port {text:?}: {e}")).into()
//! }
//!
//! let port = parse_port("8080")
//!     .map(|port| port + 1)
//!     .on_error(|e| eprintln!("{e}"))
//!     .fold(|port| port.to_string(), |_| "default".to_string());
//!
//! assert_eq!(port, "8081");
//! ```
//!
//! # Combinators
//!
//! | Purpose | Synchronous | Asynchronous |
//! |---------|-------------|--------------|
//! | Transform the success | [`map`](Outcome::map) | [`map_async`](Outcome::map_async) |
//! | Recover a failure into a success | [`map_error`](Outcome::map_error) | [`map_error_async`](Outcome::map_error_async) |
//! | Chain a fallible step | [`bind`](Outcome::bind) | [`bind_async`](Outcome::bind_async) |
//! | Chain on the failure path | [`bind_error`](Outcome::bind_error) | [`bind_error_async`](Outcome::bind_error_async) |
//! | Side effects | [`on_success`](Outcome::on_success), [`on_error`](Outcome::on_error) | [`on_success_async`](Outcome::on_success_async), [`on_error_async`](Outcome::on_error_async) |
//! | Reduce to one value | [`fold`](Outcome::fold) | [`fold_async`](Outcome::fold_async) |
//! | Guard against panics | [`try_of`](Outcome::try_of), [`map_try`](Outcome::map_try), [`bind_try`](Outcome::bind_try), [`on_success_try`](Outcome::on_success_try) | [`try_of_async`](Outcome::try_of_async), [`map_try_async`](Outcome::map_try_async), [`bind_try_async`](Outcome::bind_try_async), [`on_success_try_async`](Outcome::on_success_try_async) |
//!
//! The asynchronous combinators are also available on any future resolving to an `Outcome`
//! through [`OutcomeFuture`], so a chain keeps reading left to right:
//!
//! ```
//! use outcome::{Outcome, OutcomeFuture};
//!
//! async fn load(id: u32) -> Outcome<String, String> {
//!     Outcome::success(format!("user-{id}"))
//! }
//!
//! # futures::executor::block_on(async {
//! let greeting = load(7)
//!     .map_async(async |name| name.to_uppercase())
//!     .fold_async(async |name| format!("hello {name}"), async |e| e)
//!     .await;
//!
//! assert_eq!(greeting, "hello USER-7");
//! # });
//! ```
//!
//! # Panics and Typed Failures
//!
//! Failures travel in the [`Failure`](Outcome::Failure) variant and never unwind. A panic raised
//! inside a callback propagates as usual, except in the `try` family which converts it into a
//! failure through a recovery callback receiving the intercepted [`Panic`]. Panics raised by a
//! recovery callback are not intercepted.
//!
//! [`Outcome::expect`] is the one deliberate panic: it raises an [`UnwrappedFailure`] when called
//! on a failure. That payload is treated as a programmer error and is re-raised by every `try`
//! combinator instead of being converted back into an `Outcome`.
//!
//! Intercepting panics requires the default `panic = "unwind"` strategy.
//!
//! # Features
//!
//! - **`logs`**: Emits `tracing` events when a panic is intercepted and when a forced extraction
//!   fails.

mod asynchronous;
mod bridge;
mod future_ext;
mod hooks;
mod outcome;
mod panic;
mod telemetry;
mod transform;
mod unwrapped;

pub mod prelude;

pub use future_ext::OutcomeFuture;
pub use outcome::{IntoOutcome, Outcome};
pub use panic::Panic;
pub use unwrapped::UnwrappedFailure;

#[cfg(test)]
mod testing;
