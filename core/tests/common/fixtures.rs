// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use jiff::civil::{DateTime, date};
use shelf_core::{ChoosePolicy, Config, RandomSource};

/// A random source replaying a fixed script of values.
///
/// The requested range is recorded but ignored, and the source panics once
/// the script runs out, so a test also pins down the number of draws.
#[derive(Debug, Default)]
pub struct ScriptedRandom {
    script: Vec<i64>,
    cursor: usize,
    /// Ranges requested so far, in order.
    pub requests: Vec<(i64, i64)>,
}

impl ScriptedRandom {
    #[must_use]
    pub fn new(script: &[i64]) -> Self {
        Self {
            script: script.to_vec(),
            ..Default::default()
        }
    }

    /// Whether every scripted value has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next(&mut self, low: i64, high: i64) -> i64 {
        self.requests.push((low, high));
        let value = *self
            .script
            .get(self.cursor)
            .unwrap_or_else(|| panic!("script exhausted after {} draws", self.cursor));
        self.cursor += 1;
        value
    }
}

/// A wall-clock instant on the given day.
///
/// # Example
///
/// ```ignore
/// let now = at(2026, 1, 1, 14, 37);
/// ```
#[must_use]
pub fn at(year: i16, month: i8, day: i8, hour: i8, minute: i8) -> DateTime {
    date(year, month, day).at(hour, minute, 0, 0)
}

/// Creates a test configuration with the given reading window and policy.
#[must_use]
pub fn test_config(start_hour: i8, end_hour: i8, policy: ChoosePolicy) -> Config {
    Config {
        default_start_hour: start_hour,
        default_end_hour: end_hour,
        default_policy: policy,
        schedule_limit: 20,
    }
}
