// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A booking session ties the wizard state machine to durable storage.
//!
//! Commands go through [`BookingSession::dispatch`] one at a time. The
//! session applies each through the pure transition function, installs the
//! new state on success, and writes the archive through its bridge whenever
//! a booking was saved or deleted.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod session;

#[cfg(test)]
mod tests;

pub use error::SessionError;
pub use session::BookingSession;
