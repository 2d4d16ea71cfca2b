// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime};

use crate::error::Error;
use crate::pacing::{self, Checkpoint};

/// The hours of the day reading may happen in, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingWindow {
    start_hour: i8,
    end_hour: i8,
}

impl ReadingWindow {
    /// The first reading hour when nothing else is configured.
    pub const DEFAULT_START_HOUR: i8 = 6;

    /// The last reading hour when nothing else is configured.
    pub const DEFAULT_END_HOUR: i8 = 23;

    /// Validates a window: the start is from 0 to 23, the end from 1 to 24,
    /// and the start comes before the end.
    pub fn new(start_hour: i8, end_hour: i8) -> Result<Self, Error> {
        if !(0..=23).contains(&start_hour) || !(1..=24).contains(&end_hour) || start_hour >= end_hour
        {
            return Err(Error::InvalidReadingHours {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    /// The first reading hour.
    pub fn start_hour(&self) -> i8 {
        self.start_hour
    }

    /// The last reading hour.
    pub fn end_hour(&self) -> i8 {
        self.end_hour
    }

    /// Whether reading is allowed during the given hour of the day.
    pub fn contains(&self, hour: i8) -> bool {
        self.start_hour <= hour && hour <= self.end_hour
    }

    /// Computes the reading schedule within this window, starting now.
    pub fn schedule(&self, pages_read: i64, pages_to_read: i64, finish_date: Date) -> Vec<Checkpoint> {
        pacing::calculate(
            pages_read,
            pages_to_read,
            finish_date,
            self.start_hour,
            self.end_hour,
        )
    }

    /// Computes the reading schedule within this window, starting at `now`.
    pub fn schedule_at(
        &self,
        now: DateTime,
        pages_read: i64,
        pages_to_read: i64,
        finish_date: Date,
    ) -> Vec<Checkpoint> {
        pacing::calculate_at(
            now,
            pages_read,
            pages_to_read,
            finish_date,
            self.start_hour,
            self.end_hour,
        )
    }
}

impl Default for ReadingWindow {
    fn default() -> Self {
        Self {
            start_hour: Self::DEFAULT_START_HOUR,
            end_hour: Self::DEFAULT_END_HOUR,
        }
    }
}
