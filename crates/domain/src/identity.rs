// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! National identity number validation.
//!
//! An identity number is 8 decimal digits followed by a check letter. The
//! letter is chosen from a fixed 23-entry table by the digits modulo 23.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Check letters indexed by `digits % 23`.
const CHECK_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Total number of characters in an identity number.
pub const IDENTITY_NUMBER_LENGTH: usize = 9;

/// Number of leading digits in an identity number.
const DIGIT_COUNT: usize = 8;

/// Returns the check letter required for the given digits.
#[must_use]
pub const fn check_letter_for(number: u32) -> char {
    CHECK_LETTERS[(number % 23) as usize] as char
}

/// Validates an identity number string.
///
/// This function is pure and has no side effects.
///
/// # Arguments
///
/// * `identity_number` - The candidate identity number
///
/// # Errors
///
/// Returns an error if:
/// - The value is not exactly 9 characters long
/// - The first 8 characters are not ASCII digits, or the last is not an uppercase letter
/// - The last letter does not match the check letter for the digits
pub fn validate_identity_number(identity_number: &str) -> Result<(), DomainError> {
    split_identity_number(identity_number).map(|_| ())
}

/// Splits a valid identity number into its digits and check letter.
fn split_identity_number(identity_number: &str) -> Result<(u32, char), DomainError> {
    let length: usize = identity_number.chars().count();
    if length != IDENTITY_NUMBER_LENGTH {
        return Err(DomainError::InvalidIdentityLength { length });
    }

    let Some((letter_index, letter)) = identity_number.char_indices().nth(DIGIT_COUNT) else {
        return Err(DomainError::InvalidIdentityLength { length });
    };
    let digits: &str = &identity_number[..letter_index];

    // Rule: exactly 8 ASCII digits, then one uppercase letter
    if digits.len() != DIGIT_COUNT
        || !digits.bytes().all(|b| b.is_ascii_digit())
        || !letter.is_uppercase()
    {
        return Err(DomainError::InvalidIdentityFormat(
            identity_number.to_string(),
        ));
    }

    let number: u32 = digits
        .parse()
        .map_err(|_| DomainError::InvalidIdentityFormat(identity_number.to_string()))?;

    // Rule: letter must match the checksum table
    let expected: char = check_letter_for(number);
    if letter != expected {
        return Err(DomainError::IdentityLetterMismatch {
            identity_number: identity_number.to_string(),
            expected,
        });
    }

    Ok((number, letter))
}

/// A national identity number that has passed checksum validation.
///
/// The only ways to obtain one validate the input first, so holding an
/// `IdentityNumber` is proof that the value is well formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdentityNumber {
    value: String,
    number: u32,
    letter: char,
}

impl IdentityNumber {
    /// Parses and validates an identity number.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`validate_identity_number`].
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let (number, letter) = split_identity_number(value)?;
        Ok(Self {
            value: value.to_string(),
            number,
            letter,
        })
    }

    /// Returns the full identity number.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the numeric part.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Returns the check letter.
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }
}

impl FromStr for IdentityNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for IdentityNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let (number, letter) = split_identity_number(&value)?;
        Ok(Self {
            value,
            number,
            letter,
        })
    }
}

impl From<IdentityNumber> for String {
    fn from(identity_number: IdentityNumber) -> Self {
        identity_number.value
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
