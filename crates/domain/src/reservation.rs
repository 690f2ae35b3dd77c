// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::client::Client;
use crate::error::DomainError;
use crate::sequence::{CodeSequence, RESERVATION_CODES};
use crate::stay_dates::validate_check_out_after;
use crate::types::RoomType;
use std::sync::Arc;
use time::Date;

/// Surcharge added to the nightly rate when an extra bed is requested.
pub const EXTRA_BED_SURCHARGE: f64 = 20.0;

/// Stays longer than this many nights receive the long-stay discount.
pub const LONG_STAY_THRESHOLD_NIGHTS: i64 = 7;

/// Multiplier applied to the total of a long stay (10% off).
pub const LONG_STAY_DISCOUNT_FACTOR: f64 = 0.9;

/// Calculates the cost of a stay.
///
/// The nightly rate comes from the room type plus the extra-bed surcharge.
/// The total is `nights * rate`, reduced by 10% when `nights` is strictly greater
/// than [`LONG_STAY_THRESHOLD_NIGHTS`]. No rounding is applied.
///
/// # Arguments
///
/// * `nights` - Number of nights in the stay
/// * `room_type` - The booked room type
/// * `extra_bed` - Whether an extra bed was requested
#[must_use]
pub fn calculate_stay_cost(nights: i64, room_type: RoomType, extra_bed: bool) -> f64 {
    let mut price_per_night: f64 = room_type.nightly_rate();
    if extra_bed {
        price_per_night += EXTRA_BED_SURCHARGE;
    }

    // Day counts between representable dates are far below 2^52.
    #[allow(clippy::cast_precision_loss)]
    let mut total: f64 = nights as f64 * price_per_night;

    if nights > LONG_STAY_THRESHOLD_NIGHTS {
        total *= LONG_STAY_DISCOUNT_FACTOR;
    }
    total
}

/// A room reservation for one client.
///
/// The check-out date is always strictly after the check-in date, and the
/// stored total cost always matches the current dates.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    /// Sequential code assigned at construction.
    code: u32,
    /// The client holding the reservation. May be shared with other reservations.
    client: Arc<Client>,
    check_in: Date,
    check_out: Date,
    room_type: RoomType,
    extra_bed: bool,
    /// Cached result of [`Reservation::compute_total_cost`].
    total_cost: f64,
}

impl Reservation {
    /// Creates a new reservation, taking its code from `codes`.
    ///
    /// # Arguments
    ///
    /// * `client` - The client making the reservation
    /// * `check_in` - Arrival date
    /// * `check_out` - Departure date
    /// * `room_type` - The booked room type
    /// * `extra_bed` - Whether an extra bed is requested
    /// * `codes` - The sequence to assign the reservation code from
    ///
    /// # Errors
    ///
    /// Returns an error if `check_out` is not strictly after `check_in`. No code
    /// is consumed in that case.
    pub fn new(
        client: Arc<Client>,
        check_in: Date,
        check_out: Date,
        room_type: RoomType,
        extra_bed: bool,
        codes: &CodeSequence,
    ) -> Result<Self, DomainError> {
        validate_check_out_after(check_in, check_out)?;

        let mut reservation: Self = Self {
            code: codes.next_code(),
            client,
            check_in,
            check_out,
            room_type,
            extra_bed,
            total_cost: 0.0,
        };
        reservation.total_cost = reservation.compute_total_cost();
        Ok(reservation)
    }

    /// Creates a new reservation using the process-wide [`RESERVATION_CODES`] sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if `check_out` is not strictly after `check_in`.
    pub fn create(
        client: Arc<Client>,
        check_in: Date,
        check_out: Date,
        room_type: RoomType,
        extra_bed: bool,
    ) -> Result<Self, DomainError> {
        Self::new(
            client,
            check_in,
            check_out,
            room_type,
            extra_bed,
            &RESERVATION_CODES,
        )
    }

    /// Returns how many reservations have been created through [`Reservation::create`].
    #[must_use]
    pub fn total_created() -> u32 {
        RESERVATION_CODES.issued()
    }

    /// Returns the number of nights between check-in and check-out.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).whole_days()
    }

    /// Computes the total cost from the current dates, room type and extra bed.
    #[must_use]
    pub fn compute_total_cost(&self) -> f64 {
        calculate_stay_cost(self.nights(), self.room_type, self.extra_bed)
    }

    /// Moves the check-in date and recomputes the total cost.
    ///
    /// # Errors
    ///
    /// Returns an error if the current check-out is not strictly after
    /// `check_in`. The reservation is left unchanged.
    pub fn set_check_in(&mut self, check_in: Date) -> Result<(), DomainError> {
        validate_check_out_after(check_in, self.check_out)?;
        self.check_in = check_in;
        self.total_cost = self.compute_total_cost();
        Ok(())
    }

    /// Moves the check-out date and recomputes the total cost.
    ///
    /// # Errors
    ///
    /// Returns an error if `check_out` is not strictly after the current
    /// check-in. The reservation is left unchanged.
    pub fn set_check_out(&mut self, check_out: Date) -> Result<(), DomainError> {
        validate_check_out_after(self.check_in, check_out)?;
        self.check_out = check_out;
        self.total_cost = self.compute_total_cost();
        Ok(())
    }

    /// Returns the reservation code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Returns the client holding this reservation.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the shared handle to the client.
    #[must_use]
    pub const fn client_handle(&self) -> &Arc<Client> {
        &self.client
    }

    #[must_use]
    pub const fn check_in(&self) -> Date {
        self.check_in
    }

    #[must_use]
    pub const fn check_out(&self) -> Date {
        self.check_out
    }

    #[must_use]
    pub const fn room_type(&self) -> RoomType {
        self.room_type
    }

    #[must_use]
    pub const fn extra_bed(&self) -> bool {
        self.extra_bed
    }

    /// Returns the stored total cost.
    #[must_use]
    pub const fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

impl std::fmt::Display for Reservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Reservation code: {}", self.code)?;
        writeln!(f, "Client: {}", self.client)?;
        writeln!(f, "Check-in date: {}", self.check_in)?;
        writeln!(f, "Check-out date: {}", self.check_out)?;
        writeln!(f, "Room type: {}", self.room_type)?;
        writeln!(
            f,
            "Extra bed: {}",
            if self.extra_bed { "Yes" } else { "No" }
        )?;
        write!(f, "Total cost: {:.2} Euros", self.total_cost)
    }
}
