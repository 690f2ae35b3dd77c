// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use hotel_booking_domain::{Client, DomainError, Reservation};
use std::sync::Arc;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use state::{BookingPolicy, Outcome, State, TransitionResult};

/// Looks up a registered client.
///
/// This is a read-only lookup that does not change the state.
///
/// # Arguments
///
/// * `state` - The ledger to search
/// * `client_code` - The code of the client
///
/// # Errors
///
/// Returns `DomainError::ClientNotFound` if no client has that code.
pub fn lookup_client(state: &State, client_code: u32) -> Result<&Arc<Client>, DomainError> {
    state
        .find_client(client_code)
        .ok_or(DomainError::ClientNotFound(client_code))
}

/// Looks up a booked reservation.
///
/// # Errors
///
/// Returns `DomainError::ReservationNotFound` if no reservation has that code.
pub fn lookup_reservation(state: &State, reservation_code: u32) -> Result<&Reservation, DomainError> {
    state
        .find_reservation(reservation_code)
        .ok_or(DomainError::ReservationNotFound(reservation_code))
}
