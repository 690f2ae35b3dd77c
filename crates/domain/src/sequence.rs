// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide sequence used by [`crate::Client::create`].
pub static CLIENT_CODES: CodeSequence = CodeSequence::new();

/// Process-wide sequence used by [`crate::Reservation::create`].
pub static RESERVATION_CODES: CodeSequence = CodeSequence::new();

/// A monotonic source of sequential codes.
///
/// The first code handed out is 1. Codes are never reused or reset, and
/// concurrent callers always receive distinct codes.
#[derive(Debug, Default)]
pub struct CodeSequence {
    issued: AtomicU32,
}

impl CodeSequence {
    /// Creates a sequence that has not issued any codes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issued: AtomicU32::new(0),
        }
    }

    /// Creates a sequence that continues after `issued` codes.
    #[must_use]
    pub const fn starting_after(issued: u32) -> Self {
        Self {
            issued: AtomicU32::new(issued),
        }
    }

    /// Takes the next code.
    pub fn next_code(&self) -> u32 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns how many codes have been issued so far.
    #[must_use]
    pub fn issued(&self) -> u32 {
        self.issued.load(Ordering::SeqCst)
    }
}

// Clones start from the same position but advance independently.
impl Clone for CodeSequence {
    fn clone(&self) -> Self {
        Self::starting_after(self.issued())
    }
}

impl PartialEq for CodeSequence {
    fn eq(&self, other: &Self) -> bool {
        self.issued() == other.issued()
    }
}

impl Eq for CodeSequence {}
