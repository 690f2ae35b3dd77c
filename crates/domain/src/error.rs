// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
///
/// Every variant is a validation failure. The `Display` output is the
/// human-readable message shown to whoever supplied the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identity number does not have exactly 9 characters.
    InvalidIdentityLength {
        /// The number of characters supplied.
        length: usize,
    },
    /// Identity number is not 8 digits followed by an uppercase letter.
    InvalidIdentityFormat(String),
    /// Identity number check letter does not match its digits.
    IdentityLetterMismatch {
        /// The identity number as supplied.
        identity_number: String,
        /// The letter the digits require.
        expected: char,
    },
    /// Check-in date lies before the current date.
    CheckInInPast {
        /// The requested check-in date.
        check_in: Date,
        /// The date the check was evaluated against.
        today: Date,
    },
    /// Check-out date is not strictly after the check-in date.
    CheckOutNotAfterCheckIn {
        /// The check-in date.
        check_in: Date,
        /// The offending check-out date.
        check_out: Date,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Room type name is not recognized.
    InvalidRoomType(String),
    /// No client with the given code exists.
    ClientNotFound(u32),
    /// No reservation with the given code exists.
    ReservationNotFound(u32),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidIdentityLength { length } => {
                write!(
                    f,
                    "Identity number must have 9 characters (8 digits and 1 letter), got {length}"
                )
            }
            Self::InvalidIdentityFormat(value) => {
                write!(
                    f,
                    "Identity number '{value}' is malformed: expected 8 digits followed by an uppercase letter"
                )
            }
            Self::IdentityLetterMismatch {
                identity_number,
                expected,
            } => {
                write!(
                    f,
                    "Identity number '{identity_number}' has the wrong check letter: expected '{expected}'"
                )
            }
            Self::CheckInInPast { check_in, today } => {
                write!(
                    f,
                    "Check-in date {check_in} cannot be before the current date {today}"
                )
            }
            Self::CheckOutNotAfterCheckIn {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Check-out date {check_out} must be after check-in date {check_in}"
                )
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidRoomType(value) => {
                write!(f, "Invalid room type '{value}': expected Double or Suite")
            }
            Self::ClientNotFound(code) => write!(f, "Client {code} not found"),
            Self::ReservationNotFound(code) => write!(f, "Reservation {code} not found"),
        }
    }
}

impl std::error::Error for DomainError {}
