// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Calendar date format accepted from users (`yyyy-MM-dd`).
const ISO_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Returns the current UTC calendar date.
#[must_use]
pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Parses an ISO calendar date (`yyyy-MM-dd`).
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the input is not a valid date.
pub fn parse_iso_date(input: &str) -> Result<Date, DomainError> {
    let trimmed: &str = input.trim();
    Date::parse(trimmed, ISO_DATE_FORMAT).map_err(|e| DomainError::DateParseError {
        date_string: trimmed.to_string(),
        error: e.to_string(),
    })
}

/// Validates that a check-out date falls strictly after a check-in date.
///
/// This is the rule every reservation enforces on construction and on each
/// date change.
///
/// # Errors
///
/// Returns `DomainError::CheckOutNotAfterCheckIn` if `check_out <= check_in`.
pub fn validate_check_out_after(check_in: Date, check_out: Date) -> Result<(), DomainError> {
    if check_out <= check_in {
        return Err(DomainError::CheckOutNotAfterCheckIn {
            check_in,
            check_out,
        });
    }
    Ok(())
}

/// Validates a requested stay against the current date.
///
/// Reservations do not call this themselves. Callers that must refuse
/// bookings starting in the past invoke it before construction.
///
/// # Arguments
///
/// * `check_in` - The requested check-in date
/// * `check_out` - The requested check-out date
/// * `today` - The current date; see [`today_utc`]
///
/// # Errors
///
/// Returns an error if:
/// - `check_in` is before `today`
/// - `check_out` is not strictly after `check_in`
pub fn validate_stay_dates(check_in: Date, check_out: Date, today: Date) -> Result<(), DomainError> {
    if check_in < today {
        return Err(DomainError::CheckInInPast { check_in, today });
    }
    validate_check_out_after(check_in, check_out)
}
