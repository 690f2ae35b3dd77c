// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::identity::IdentityNumber;
use crate::sequence::{CLIENT_CODES, CodeSequence};
use serde::{Deserialize, Serialize};

/// A hotel client.
///
/// A client can only be constructed with a valid identity number, and
/// receives a sequential code when it is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Sequential code assigned at construction.
    code: u32,
    /// The client's name.
    name: String,
    /// The validated national identity number.
    identity_number: IdentityNumber,
    /// Contact phone number. Free text, not validated.
    phone: String,
}

impl Client {
    /// Creates a new client, taking its code from `codes`.
    ///
    /// The identity number is validated before a code is taken, so a
    /// rejected client does not consume a code.
    ///
    /// # Arguments
    ///
    /// * `name` - The client's name
    /// * `identity_number` - The national identity number to validate
    /// * `phone` - The client's phone number
    /// * `codes` - The sequence to assign the client code from
    ///
    /// # Errors
    ///
    /// Returns an error if the identity number fails validation.
    pub fn new(
        name: &str,
        identity_number: &str,
        phone: &str,
        codes: &CodeSequence,
    ) -> Result<Self, DomainError> {
        let identity_number: IdentityNumber = IdentityNumber::parse(identity_number)?;
        Ok(Self {
            code: codes.next_code(),
            name: name.to_string(),
            identity_number,
            phone: phone.to_string(),
        })
    }

    /// Creates a new client using the process-wide [`CLIENT_CODES`] sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity number fails validation.
    pub fn create(name: &str, identity_number: &str, phone: &str) -> Result<Self, DomainError> {
        Self::new(name, identity_number, phone, &CLIENT_CODES)
    }

    /// Returns how many clients have been created through [`Client::create`].
    #[must_use]
    pub fn total_created() -> u32 {
        CLIENT_CODES.issued()
    }

    /// Returns the client code.
    #[must_use]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Replaces the client code.
    ///
    /// Nothing checks the new code against other clients, so this can
    /// produce duplicates.
    pub const fn override_code(&mut self, code: u32) {
        self.code = code;
    }

    /// Returns the client's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the client's name.
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Returns the identity number.
    #[must_use]
    pub const fn identity_number(&self) -> &IdentityNumber {
        &self.identity_number
    }

    /// Replaces the identity number with another validated one.
    pub fn set_identity_number(&mut self, identity_number: IdentityNumber) {
        self.identity_number = identity_number;
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Sets the phone number.
    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }
}

impl std::fmt::Display for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Code: {}, Name: {}, Identity number: {}, Phone: {}",
            self.code, self.name, self.identity_number, self.phone
        )
    }
}
