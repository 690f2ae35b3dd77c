// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use hotel_booking_domain::{Client, CodeSequence, Reservation};
use std::sync::Arc;

/// Optional rules applied on top of the reservation invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BookingPolicy {
    /// Refuse bookings and check-in changes that start before today.
    pub reject_past_check_in: bool,
}

/// The in-memory booking ledger.
///
/// The ledger owns the code sequences for its clients and reservations, so
/// codes are unique within one ledger and never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    /// The rules in force for this ledger.
    pub policy: BookingPolicy,
    /// Registered clients, shared with their reservations.
    pub clients: Vec<Arc<Client>>,
    /// Booked reservations, in booking order.
    pub reservations: Vec<Reservation>,
    client_codes: CodeSequence,
    reservation_codes: CodeSequence,
}

impl State {
    /// Creates an empty ledger with the given policy.
    #[must_use]
    pub const fn new(policy: BookingPolicy) -> Self {
        Self {
            policy,
            clients: Vec::new(),
            reservations: Vec::new(),
            client_codes: CodeSequence::new(),
            reservation_codes: CodeSequence::new(),
        }
    }

    /// Finds a client by code.
    #[must_use]
    pub fn find_client(&self, code: u32) -> Option<&Arc<Client>> {
        self.clients.iter().find(|client| client.code() == code)
    }

    /// Finds a reservation by code.
    #[must_use]
    pub fn find_reservation(&self, code: u32) -> Option<&Reservation> {
        self.reservations
            .iter()
            .find(|reservation| reservation.code() == code)
    }

    /// Returns all reservations held by one client.
    pub fn reservations_for(&self, client_code: u32) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .iter()
            .filter(move |reservation| reservation.client().code() == client_code)
    }

    /// Returns how many client codes this ledger has issued.
    #[must_use]
    pub fn clients_registered(&self) -> u32 {
        self.client_codes.issued()
    }

    /// Returns how many reservation codes this ledger has issued.
    #[must_use]
    pub fn reservations_booked(&self) -> u32 {
        self.reservation_codes.issued()
    }

    pub(crate) const fn client_codes(&self) -> &CodeSequence {
        &self.client_codes
    }

    pub(crate) const fn reservation_codes(&self) -> &CodeSequence {
        &self.reservation_codes
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(BookingPolicy::default())
    }
}

/// What a successful command changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// A client was registered.
    ClientRegistered {
        /// The code assigned to the client.
        client_code: u32,
    },
    /// A reservation was booked.
    ReservationBooked {
        /// The code assigned to the reservation.
        reservation_code: u32,
        /// The computed total cost.
        total_cost: f64,
    },
    /// A reservation's dates were changed.
    ReservationRescheduled {
        /// The changed reservation.
        reservation_code: u32,
        /// The recomputed total cost.
        total_cost: f64,
    },
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClientRegistered { client_code } => {
                write!(f, "registered client {client_code}")
            }
            Self::ReservationBooked {
                reservation_code,
                total_cost,
            } => write!(
                f,
                "booked reservation {reservation_code} for {total_cost:.2} Euros"
            ),
            Self::ReservationRescheduled {
                reservation_code,
                total_cost,
            } => write!(
                f,
                "rescheduled reservation {reservation_code}, now {total_cost:.2} Euros"
            ),
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition did.
    pub outcome: Outcome,
}
