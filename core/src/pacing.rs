// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Hour-by-hour reading pace towards a finish date.
//!
//! The remaining pages are spread evenly over the eligible hours between now
//! and the last reading hour of the finish date. An hour is eligible when its
//! hour of day lies within the inclusive `[start_hour, end_hour]` window.
//!
//! Page counts are kept in hundredths of a page, so the running total never
//! loses precision between steps. The hourly rate is truncated to two
//! decimals, which errs on the side of finishing early.

use std::iter;

use jiff::civil::{Date, DateTime};
use jiff::{ToSpan, Zoned};

/// Hundredths of a page per page.
const CENTI: i64 = 100;

/// A target for the cumulative page count at a given hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    at: DateTime,
    centipages: i64,
}

impl Checkpoint {
    /// The hour this checkpoint is due at.
    pub fn at(&self) -> DateTime {
        self.at
    }

    /// The exact cumulative target, in hundredths of a page.
    pub fn centipages(&self) -> i64 {
        self.centipages
    }

    /// The exact cumulative target, in pages.
    pub fn pages(&self) -> f64 {
        self.centipages as f64 / CENTI as f64
    }

    /// The cumulative target rounded up to a whole page, for display.
    pub fn display_pages(&self) -> i64 {
        ceil_div(self.centipages, CENTI)
    }
}

/// Computes the checkpoints starting from the current local time.
///
/// See [`calculate_at`].
pub fn calculate(
    pages_read: i64,
    pages_to_read: i64,
    finish_date: Date,
    start_hour: i8,
    end_hour: i8,
) -> Vec<Checkpoint> {
    let now = Zoned::now().datetime();
    calculate_at(now, pages_read, pages_to_read, finish_date, start_hour, end_hour)
}

/// Computes one checkpoint per eligible hour, oldest first.
///
/// The current hour counts towards the number of eligible hours, but the
/// first checkpoint is placed at the next full hour. Returns an empty list
/// when no hour is eligible, e.g. when the finish date has passed.
///
/// The hour window is not validated here, see
/// [`ReadingWindow`](crate::ReadingWindow) for that.
#[tracing::instrument(level = "debug")]
pub fn calculate_at(
    now: DateTime,
    pages_read: i64,
    pages_to_read: i64,
    finish_date: Date,
    start_hour: i8,
    end_hour: i8,
) -> Vec<Checkpoint> {
    let count = eligible_hours(now, finish_date, start_hour, end_hour);
    if count == 0 {
        tracing::debug!("no eligible hour left before the finish date");
        return Vec::new();
    }

    // Reading past the total only flattens the plan, it never walks backwards.
    // Wide integers keep huge page counts from overflowing, targets saturate.
    let remaining = (i128::from(pages_to_read) - i128::from(pages_read)).max(0);
    let per_hour = remaining * i128::from(CENTI) / count as i128; // truncates toward zero
    tracing::debug!(count, %remaining, %per_hour, "pacing computed");

    let first = match truncate_to_hour(now).checked_add(1.hour()) {
        Ok(first) => first,
        Err(_) => return Vec::new(),
    };

    hours_from(first)
        .filter(|t| in_window(t.hour(), start_hour, end_hour))
        .take(count)
        .scan(i128::from(pages_read) * i128::from(CENTI), |running, at| {
            *running += per_hour;
            Some(Checkpoint {
                at,
                centipages: saturate(*running),
            })
        })
        .collect()
}

/// Counts the eligible hours from the current hour up to `end_hour` on the
/// finish date, both ends included.
///
/// Runs in constant time whatever the distance to the finish date.
pub fn eligible_hours(now: DateTime, finish_date: Date, start_hour: i8, end_hour: i8) -> usize {
    let deadline = truncate_to_hour(
        finish_date
            .at(0, 0, 0, 0)
            .saturating_add(i64::from(end_hour).hours()),
    );
    let days = match now.date().until(deadline.date()) {
        Ok(span) => i64::from(span.get_days()),
        Err(_) => return 0,
    };

    // Hours are numbered from midnight of the current day.
    let first = i64::from(now.hour());
    let last = days * 24 + i64::from(deadline.hour());
    if last < first {
        return 0;
    }

    let lo = i64::from(start_hour.max(0));
    let width = (i64::from(end_hour.min(23)) - lo + 1).max(0);
    let before = |n: i64| n.div_euclid(24) * width + (n.rem_euclid(24) - lo).clamp(0, width);
    usize::try_from(before(last + 1) - before(first)).unwrap_or(0)
}

/// Totals shown next to a reading schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// Pages left until the end of the book.
    pub remaining_pages: i64,

    /// Number of hours in the schedule.
    pub hours: usize,
}

impl ScheduleSummary {
    /// Summarizes a schedule computed for the given page counts.
    pub fn new(pages_read: i64, pages_to_read: i64, checkpoints: &[Checkpoint]) -> Self {
        Self {
            remaining_pages: pages_to_read.saturating_sub(pages_read),
            hours: checkpoints.len(),
        }
    }

    /// Approximate pages to read per hour, rounded up.
    pub fn pages_per_hour(&self) -> i64 {
        match self.hours {
            0 => 0,
            n => ceil_div(self.remaining_pages, n as i64),
        }
    }
}

fn truncate_to_hour(t: DateTime) -> DateTime {
    t.date().at(t.hour(), 0, 0, 0)
}

fn in_window(hour: i8, start_hour: i8, end_hour: i8) -> bool {
    start_hour <= hour && hour <= end_hour
}

/// Whole hours starting at `start`, ending where the calendar does.
fn hours_from(start: DateTime) -> impl Iterator<Item = DateTime> {
    iter::successors(Some(start), |t| t.checked_add(1.hour()).ok())
}

fn saturate(centipages: i128) -> i64 {
    i64::try_from(centipages).unwrap_or(if centipages < 0 { i64::MIN } else { i64::MAX })
}

fn ceil_div(a: i64, b: i64) -> i64 {
    let q = a.div_euclid(b);
    if a.rem_euclid(b) > 0 { q + 1 } else { q }
}
