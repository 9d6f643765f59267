// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use luxestay::CoreError;
use luxestay_persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced by a booking session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The command was rejected; the session state is unchanged.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The archive could not be restored or written.
    #[error("Booking archive unavailable: {0}")]
    Persistence(#[from] PersistenceError),
}
