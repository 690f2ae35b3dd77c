// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, parse_iso_date, validate_check_out_after, validate_stay_dates};
use time::Date;
use time::macros::date;

#[test]
fn test_parse_iso_date_accepts_valid_dates() {
    assert_eq!(parse_iso_date("2024-01-01").unwrap(), date!(2024 - 01 - 01));
    assert_eq!(parse_iso_date(" 2024-02-29\n").unwrap(), date!(2024 - 02 - 29));
}

#[test]
fn test_parse_iso_date_rejects_invalid_input() {
    for input in ["", "2024/01/01", "01-01-2024", "2023-02-29", "2024-13-01", "tomorrow"] {
        let result: Result<Date, DomainError> = parse_iso_date(input);
        assert!(
            matches!(result, Err(DomainError::DateParseError { .. })),
            "{input:?} should not parse"
        );
    }
}

#[test]
fn test_parse_error_keeps_the_input() {
    let result: Result<Date, DomainError> = parse_iso_date("2024-1-1x");
    let Err(DomainError::DateParseError { date_string, .. }) = result else {
        panic!("expected a parse error");
    };
    assert_eq!(date_string, "2024-1-1x");
}

#[test]
fn test_check_out_after_check_in_is_accepted() {
    assert!(validate_check_out_after(date!(2024 - 01 - 01), date!(2024 - 01 - 02)).is_ok());
}

#[test]
fn test_same_day_check_out_is_rejected() {
    let result: Result<(), DomainError> =
        validate_check_out_after(date!(2024 - 01 - 01), date!(2024 - 01 - 01));
    assert!(matches!(
        result,
        Err(DomainError::CheckOutNotAfterCheckIn { .. })
    ));
}

#[test]
fn test_check_out_before_check_in_is_rejected() {
    let result: Result<(), DomainError> =
        validate_check_out_after(date!(2024 - 01 - 10), date!(2024 - 01 - 01));
    assert!(matches!(
        result,
        Err(DomainError::CheckOutNotAfterCheckIn { .. })
    ));
}

#[test]
fn test_stay_starting_today_is_accepted() {
    let today: Date = date!(2024 - 06 - 15);
    assert!(validate_stay_dates(today, date!(2024 - 06 - 16), today).is_ok());
}

#[test]
fn test_stay_starting_in_the_past_is_rejected() {
    let today: Date = date!(2024 - 06 - 15);
    let result: Result<(), DomainError> =
        validate_stay_dates(date!(2024 - 06 - 14), date!(2024 - 06 - 20), today);
    assert_eq!(
        result,
        Err(DomainError::CheckInInPast {
            check_in: date!(2024 - 06 - 14),
            today,
        })
    );
}

#[test]
fn test_future_stay_still_requires_ordered_dates() {
    let today: Date = date!(2024 - 06 - 15);
    let result: Result<(), DomainError> =
        validate_stay_dates(date!(2024 - 07 - 01), date!(2024 - 07 - 01), today);
    assert!(matches!(
        result,
        Err(DomainError::CheckOutNotAfterCheckIn { .. })
    ));
}
