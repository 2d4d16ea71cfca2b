// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use shelf_core::Checkpoint;

/// Asserts that a pick is a real candidate of `1..=amount`.
///
/// # Panics
///
/// Panics if the winner is out of range.
pub fn assert_winner_in_range(winner: i64, amount: i64) {
    assert!(
        (1..=amount).contains(&winner),
        "winner {winner} is not one of 1..={amount}"
    );
}

/// Asserts that checkpoints are ordered in time and never lose pages.
///
/// # Panics
///
/// Panics on the first pair that breaks the order.
pub fn assert_non_decreasing(checkpoints: &[Checkpoint]) {
    for pair in checkpoints.windows(2) {
        assert!(pair[0].at() < pair[1].at(), "out of order: {pair:?}");
        assert!(
            pair[0].centipages() <= pair[1].centipages(),
            "pages went down: {pair:?}"
        );
    }
}
