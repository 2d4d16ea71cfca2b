// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use rand::Rng;

/// A source of uniformly distributed integers.
///
/// Callers own their source, so nothing is shared between concurrent callers.
/// Every [`rand::Rng`] is a source; tests may plug in a fixed sequence instead.
pub trait RandomSource {
    /// Returns an integer in the half-open range `[low, high)`.
    ///
    /// Implementations may assume `low < high`.
    fn next(&mut self, low: i64, high: i64) -> i64;
}

impl<R: Rng> RandomSource for R {
    fn next(&mut self, low: i64, high: i64) -> i64 {
        self.random_range(low..high)
    }
}
