// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kinds of room a reservation can book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// A double room, with two single beds or one double bed.
    Double,
    /// A suite, the higher category.
    Suite,
}

impl RoomType {
    /// All room types, in display order.
    pub const ALL: [Self; 2] = [Self::Double, Self::Suite];

    /// Converts this room type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Double => "Double",
            Self::Suite => "Suite",
        }
    }

    /// Returns the price of one night, before surcharges and discounts.
    #[must_use]
    pub const fn nightly_rate(&self) -> f64 {
        match self {
            Self::Double => 50.0,
            Self::Suite => 100.0,
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    /// Parses a room type name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        Self::ALL
            .into_iter()
            .find(|room_type| room_type.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::InvalidRoomType(trimmed.to_string()))
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
