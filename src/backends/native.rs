// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Native exact-precision factorial.
//!
//! Pure and `Send`-friendly: this is the producer the dispatcher ships to
//! the blocking pool, so it must not touch any owner-thread state.

use num_bigint::BigUint;

/// Exact factorial by repeated multiplication. Inputs below 2 (including
/// negatives) yield 1.
pub fn factorial(n: i64) -> BigUint {
    let mut result = BigUint::from(1_u32);
    let mut i = n;
    while i >= 2 {
        result *= BigUint::from(i as u64);
        i -= 1;
    }
    result
}
