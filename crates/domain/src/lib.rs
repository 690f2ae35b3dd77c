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

mod client;
mod error;
mod identity;
mod reservation;
mod sequence;
mod stay_dates;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use client::Client;
pub use error::DomainError;
pub use identity::{
    IDENTITY_NUMBER_LENGTH, IdentityNumber, check_letter_for, validate_identity_number,
};
pub use reservation::{
    EXTRA_BED_SURCHARGE, LONG_STAY_DISCOUNT_FACTOR, LONG_STAY_THRESHOLD_NIGHTS, Reservation,
    calculate_stay_cost,
};
pub use sequence::{CLIENT_CODES, CodeSequence, RESERVATION_CODES};
pub use stay_dates::{parse_iso_date, today_utc, validate_check_out_after, validate_stay_dates};
pub use types::RoomType;
