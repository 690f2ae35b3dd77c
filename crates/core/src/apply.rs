// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Outcome, State, TransitionResult};
use crate::{lookup_client, lookup_reservation};
use hotel_booking_domain::{Client, DomainError, Reservation, validate_stay_dates};
use std::sync::Arc;
use time::Date;
use tracing::{debug, warn};

/// Applies a command to the booking ledger, producing a new ledger.
///
/// This function is pure apart from logging. The input state is never
/// modified, and a rejected command consumes no client or reservation code.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
/// * `today` - The current date, used when the policy rejects past check-ins
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A client identity number fails validation
/// - A referenced client or reservation does not exist
/// - Check-out would not be strictly after check-in
/// - The policy rejects past check-ins and the check-in is before `today`
pub fn apply(state: &State, command: Command, today: Date) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let result: Result<TransitionResult, CoreError> = apply_command(state, command, today);

    match &result {
        Ok(transition) => debug!(command = name, outcome = %transition.outcome, "applied command"),
        Err(err) => warn!(command = name, error = %err, "rejected command"),
    }

    result
}

fn apply_command(
    state: &State,
    command: Command,
    today: Date,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::RegisterClient {
            name,
            identity_number,
            phone,
        } => {
            let mut new_state: State = state.clone();
            let client: Client =
                Client::new(&name, &identity_number, &phone, new_state.client_codes())?;
            let client_code: u32 = client.code();
            new_state.clients.push(Arc::new(client));

            Ok(TransitionResult {
                new_state,
                outcome: Outcome::ClientRegistered { client_code },
            })
        }
        Command::BookReservation {
            client_code,
            check_in,
            check_out,
            room_type,
            extra_bed,
        } => {
            let client: Arc<Client> = Arc::clone(lookup_client(state, client_code)?);

            if state.policy.reject_past_check_in {
                validate_stay_dates(check_in, check_out, today)?;
            }

            let mut new_state: State = state.clone();
            let reservation: Reservation = Reservation::new(
                client,
                check_in,
                check_out,
                room_type,
                extra_bed,
                new_state.reservation_codes(),
            )?;
            let outcome: Outcome = Outcome::ReservationBooked {
                reservation_code: reservation.code(),
                total_cost: reservation.total_cost(),
            };
            new_state.reservations.push(reservation);

            Ok(TransitionResult { new_state, outcome })
        }
        Command::ChangeCheckIn {
            reservation_code,
            check_in,
        } => {
            let existing: &Reservation = lookup_reservation(state, reservation_code)?;
            if state.policy.reject_past_check_in {
                validate_stay_dates(check_in, existing.check_out(), today)?;
            }

            reschedule(state, reservation_code, |reservation| {
                reservation.set_check_in(check_in)
            })
        }
        Command::ChangeCheckOut {
            reservation_code,
            check_out,
        } => reschedule(state, reservation_code, |reservation| {
            reservation.set_check_out(check_out)
        }),
    }
}

/// Applies a date change to a copy of one reservation.
fn reschedule(
    state: &State,
    reservation_code: u32,
    change: impl FnOnce(&mut Reservation) -> Result<(), DomainError>,
) -> Result<TransitionResult, CoreError> {
    let mut new_state: State = state.clone();
    let reservation: &mut Reservation = new_state
        .reservations
        .iter_mut()
        .find(|reservation| reservation.code() == reservation_code)
        .ok_or(DomainError::ReservationNotFound(reservation_code))?;

    change(reservation)?;
    let outcome: Outcome = Outcome::ReservationRescheduled {
        reservation_code,
        total_cost: reservation.total_cost(),
    };

    Ok(TransitionResult { new_state, outcome })
}
