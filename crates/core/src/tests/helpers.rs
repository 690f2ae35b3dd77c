// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, State, TransitionResult, apply};
use hotel_booking_domain::RoomType;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 01 - 01);

pub fn register_command(identity_number: &str) -> Command {
    Command::RegisterClient {
        name: String::from("Ana Torres"),
        identity_number: String::from(identity_number),
        phone: String::from("600123456"),
    }
}

pub fn book_command(client_code: u32, check_in: Date, check_out: Date) -> Command {
    Command::BookReservation {
        client_code,
        check_in,
        check_out,
        room_type: RoomType::Double,
        extra_bed: false,
    }
}

/// Returns a ledger with client 1 and a 9-night reservation 1 (2024-01-01 to 2024-01-10).
pub fn create_test_state(initial: &State) -> State {
    let registered: TransitionResult =
        apply(initial, register_command("12345678Z"), TODAY).unwrap();
    let booked: TransitionResult = apply(
        &registered.new_state,
        book_command(1, date!(2024 - 01 - 01), date!(2024 - 01 - 10)),
        TODAY,
    )
    .unwrap();
    booked.new_state
}

pub fn assert_cost(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected cost {expected}, got {actual}"
    );
}
