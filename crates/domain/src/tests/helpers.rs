// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Client, CodeSequence};
use std::sync::Arc;

pub const VALID_IDENTITY: &str = "12345678Z";

pub fn create_test_client(codes: &CodeSequence) -> Arc<Client> {
    Arc::new(Client::new("Ana Torres", VALID_IDENTITY, "600123456", codes).unwrap())
}

/// Asserts two currency amounts are equal to within rounding noise.
pub fn assert_cost(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected cost {expected}, got {actual}"
    );
}
