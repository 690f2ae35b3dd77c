// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    TODAY, assert_cost, book_command, create_test_state, register_command,
};
use crate::{Command, CoreError, Outcome, State, TransitionResult, apply};
use hotel_booking_domain::{DomainError, RoomType};
use std::sync::Arc;
use time::macros::date;

#[test]
fn test_register_client_adds_client() {
    let state: State = State::default();

    let transition: TransitionResult =
        apply(&state, register_command("12345678Z"), TODAY).unwrap();

    assert_eq!(
        transition.outcome,
        Outcome::ClientRegistered { client_code: 1 }
    );
    assert_eq!(transition.new_state.clients.len(), 1);
    assert_eq!(transition.new_state.clients[0].name(), "Ana Torres");
    assert_eq!(transition.new_state.clients_registered(), 1);
}

#[test]
fn test_register_client_does_not_modify_input_state() {
    let state: State = State::default();

    let _transition: TransitionResult =
        apply(&state, register_command("12345678Z"), TODAY).unwrap();

    assert!(state.clients.is_empty());
    assert_eq!(state.clients_registered(), 0);
}

#[test]
fn test_register_client_codes_are_sequential() {
    let state: State = State::default();
    let first: TransitionResult = apply(&state, register_command("12345678Z"), TODAY).unwrap();
    let second: TransitionResult =
        apply(&first.new_state, register_command("00000000T"), TODAY).unwrap();

    assert_eq!(
        second.outcome,
        Outcome::ClientRegistered { client_code: 2 }
    );
}

#[test]
fn test_invalid_identity_is_rejected() {
    let state: State = State::default();

    let result: Result<TransitionResult, CoreError> =
        apply(&state, register_command("12345678A"), TODAY);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::IdentityLetterMismatch { .. }
        ))
    ));
}

#[test]
fn test_rejected_registration_consumes_no_code() {
    let state: State = State::default();
    assert!(apply(&state, register_command("bad"), TODAY).is_err());

    let transition: TransitionResult =
        apply(&state, register_command("12345678Z"), TODAY).unwrap();
    assert_eq!(
        transition.outcome,
        Outcome::ClientRegistered { client_code: 1 }
    );
}

#[test]
fn test_book_reservation_computes_cost() {
    let state: State = create_test_state(&State::default());

    assert_eq!(state.reservations.len(), 1);
    assert_eq!(state.reservations[0].code(), 1);
    assert_cost(state.reservations[0].total_cost(), 405.0);
}

#[test]
fn test_book_reservation_outcome_reports_cost() {
    let state: State = create_test_state(&State::default());
    let command: Command = Command::BookReservation {
        client_code: 1,
        check_in: date!(2024 - 02 - 01),
        check_out: date!(2024 - 02 - 03),
        room_type: RoomType::Suite,
        extra_bed: true,
    };

    let transition: TransitionResult = apply(&state, command, TODAY).unwrap();

    let Outcome::ReservationBooked {
        reservation_code,
        total_cost,
    } = transition.outcome
    else {
        panic!("expected a booking outcome");
    };
    assert_eq!(reservation_code, 2);
    assert_cost(total_cost, 240.0);
}

#[test]
fn test_reservations_share_the_registered_client() {
    let state: State = create_test_state(&State::default());
    let transition: TransitionResult = apply(
        &state,
        book_command(1, date!(2024 - 05 - 01), date!(2024 - 05 - 02)),
        TODAY,
    )
    .unwrap();

    let new_state: State = transition.new_state;
    assert!(Arc::ptr_eq(
        new_state.reservations[0].client_handle(),
        new_state.reservations[1].client_handle()
    ));
    assert!(Arc::ptr_eq(
        &new_state.clients[0],
        new_state.reservations[1].client_handle()
    ));
}

#[test]
fn test_booking_for_unknown_client_is_rejected() {
    let state: State = State::default();

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        book_command(7, date!(2024 - 01 - 01), date!(2024 - 01 - 02)),
        TODAY,
    );

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::ClientNotFound(7)))
    );
}

#[test]
fn test_booking_with_unordered_dates_is_rejected() {
    let state: State = create_test_state(&State::default());

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        book_command(1, date!(2024 - 01 - 05), date!(2024 - 01 - 05)),
        TODAY,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::CheckOutNotAfterCheckIn { .. }
        ))
    ));
    assert_eq!(state.reservations_booked(), 1);
}

#[test]
fn test_change_check_out_recomputes_cost() {
    let state: State = create_test_state(&State::default());
    let command: Command = Command::ChangeCheckOut {
        reservation_code: 1,
        check_out: date!(2024 - 01 - 08),
    };

    let transition: TransitionResult = apply(&state, command, TODAY).unwrap();

    assert_cost(transition.new_state.reservations[0].total_cost(), 350.0);
    assert_cost(state.reservations[0].total_cost(), 405.0);
}

#[test]
fn test_change_check_in_recomputes_cost() {
    let state: State = create_test_state(&State::default());
    let command: Command = Command::ChangeCheckIn {
        reservation_code: 1,
        check_in: date!(2024 - 01 - 09),
    };

    let transition: TransitionResult = apply(&state, command, TODAY).unwrap();

    assert_eq!(
        transition.outcome,
        Outcome::ReservationRescheduled {
            reservation_code: 1,
            total_cost: 50.0,
        }
    );
}

#[test]
fn test_invalid_check_in_change_leaves_state_unchanged() {
    let state: State = create_test_state(&State::default());
    let command: Command = Command::ChangeCheckIn {
        reservation_code: 1,
        check_in: date!(2024 - 01 - 12),
    };

    let result: Result<TransitionResult, CoreError> = apply(&state, command, TODAY);

    assert!(result.is_err());
    assert_eq!(state.reservations[0].check_in(), date!(2024 - 01 - 01));
    assert_cost(state.reservations[0].total_cost(), 405.0);
}

#[test]
fn test_change_for_unknown_reservation_is_rejected() {
    let state: State = create_test_state(&State::default());
    let command: Command = Command::ChangeCheckOut {
        reservation_code: 42,
        check_out: date!(2024 - 01 - 20),
    };

    let result: Result<TransitionResult, CoreError> = apply(&state, command, TODAY);

    assert_eq!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::ReservationNotFound(42)
        ))
    );
}

#[test]
fn test_command_names() {
    assert_eq!(register_command("12345678Z").name(), "RegisterClient");
    assert_eq!(
        book_command(1, TODAY, TODAY).name(),
        "BookReservation"
    );
}

#[test]
fn test_core_error_exposes_domain_error() {
    let err: CoreError = CoreError::from(DomainError::ClientNotFound(3));
    assert_eq!(err.domain_error(), &DomainError::ClientNotFound(3));
    assert_eq!(err.to_string(), "Domain violation: Client 3 not found");
}
