// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::prompt::{ConsoleError, Prompt};
use hotel_booking::{BookingPolicy, Command, Outcome, State, TransitionResult, apply};
use hotel_booking_domain::RoomType;
use std::io::{BufRead, Write};
use time::Date;
use tracing::info;

/// One interactive booking session: a single client and their reservations.
pub struct Session<R, W> {
    prompt: Prompt<R, W>,
    state: State,
    today: Date,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session with an empty ledger.
    pub const fn new(prompt: Prompt<R, W>, policy: BookingPolicy, today: Date) -> Self {
        Self {
            prompt,
            state: State::new(policy),
            today,
        }
    }

    /// Registers a client, books reservations until the user stops, and
    /// prints every reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the console fails or input ends early.
    pub fn run(mut self) -> Result<(State, Prompt<R, W>), ConsoleError> {
        self.prompt.say("Hotel booking")?;

        let client_code: u32 = self.register_client()?;
        loop {
            self.book_reservation(client_code)?;
            if !self
                .prompt
                .read_yes_no("Book another reservation for this client?")?
            {
                break;
            }
        }

        self.prompt.say("")?;
        self.prompt.say("Reservations")?;
        for reservation in self.state.reservations_for(client_code) {
            self.prompt.say(&reservation.to_string())?;
            self.prompt.say("")?;
        }

        Ok((self.state, self.prompt))
    }

    /// Asks for client details until the identity number is accepted.
    fn register_client(&mut self) -> Result<u32, ConsoleError> {
        let name: String = self.prompt.read_line("Client name")?;
        let phone: String = self.prompt.read_line("Phone")?;

        loop {
            let identity_number: String = self.prompt.read_line("Identity number")?;
            let command: Command = Command::RegisterClient {
                name: name.clone(),
                identity_number,
                phone: phone.clone(),
            };
            if let Some(Outcome::ClientRegistered { client_code }) = self.submit(command)? {
                self.prompt.say(&format!("Registered client {client_code}"))?;
                return Ok(client_code);
            }
        }
    }

    /// Asks for stay details until a reservation is booked.
    fn book_reservation(&mut self, client_code: u32) -> Result<(), ConsoleError> {
        loop {
            let check_in: Date = self.prompt.read_date("Check-in date")?;
            let check_out: Date = self.prompt.read_date("Check-out date")?;
            let room_type: RoomType = self.prompt.read_room_type()?;
            let extra_bed: bool = self.prompt.read_yes_no("Extra bed")?;

            let command: Command = Command::BookReservation {
                client_code,
                check_in,
                check_out,
                room_type,
                extra_bed,
            };
            if let Some(Outcome::ReservationBooked {
                reservation_code,
                total_cost,
            }) = self.submit(command)?
            {
                self.prompt.say(&format!(
                    "Booked reservation {reservation_code}: {total_cost:.2} Euros"
                ))?;
                return Ok(());
            }
        }
    }

    /// Applies a command, reporting a rejection to the user.
    ///
    /// Returns `None` when the command was rejected.
    fn submit(&mut self, command: Command) -> Result<Option<Outcome>, ConsoleError> {
        match apply(&self.state, command, self.today) {
            Ok(TransitionResult { new_state, outcome }) => {
                info!(%outcome, "command accepted");
                self.state = new_state;
                Ok(Some(outcome))
            }
            Err(err) => {
                self.prompt.say(&err.domain_error().to_string())?;
                Ok(None)
            }
        }
    }
}
