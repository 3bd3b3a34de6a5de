// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Common imports for working with outcomes.
//!
//! Brings the [`Outcome`] type and its extension traits into scope, including
//! [`OutcomeFuture`] which is needed to chain combinators over a pending outcome.

pub use crate::{IntoOutcome, Outcome, OutcomeFuture};
