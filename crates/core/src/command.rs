// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_booking_domain::RoomType;
use time::Date;

/// A command represents user intent as data only.
///
/// Commands are the only way to request changes to the booking ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new client.
    RegisterClient {
        /// The client's name.
        name: String,
        /// The unvalidated identity number.
        identity_number: String,
        /// The client's phone number.
        phone: String,
    },
    /// Book a room for an existing client.
    BookReservation {
        /// Code of the client making the booking.
        client_code: u32,
        /// Arrival date.
        check_in: Date,
        /// Departure date.
        check_out: Date,
        /// The room type to book.
        room_type: RoomType,
        /// Whether an extra bed is requested.
        extra_bed: bool,
    },
    /// Move the arrival date of an existing reservation.
    ChangeCheckIn {
        /// Code of the reservation to change.
        reservation_code: u32,
        /// The new arrival date.
        check_in: Date,
    },
    /// Move the departure date of an existing reservation.
    ChangeCheckOut {
        /// Code of the reservation to change.
        reservation_code: u32,
        /// The new departure date.
        check_out: Date,
    },
}

impl Command {
    /// Returns the command name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RegisterClient { .. } => "RegisterClient",
            Self::BookReservation { .. } => "BookReservation",
            Self::ChangeCheckIn { .. } => "ChangeCheckIn",
            Self::ChangeCheckOut { .. } => "ChangeCheckOut",
        }
    }
}
