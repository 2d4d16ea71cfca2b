// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::date;
use shelf_core::{ReadingWindow, ScheduleSummary, calculate, calculate_at, eligible_hours};

use crate::common::{assert_non_decreasing, at};

#[test]
fn deadline_in_the_past_gives_empty_schedule() {
    let now = at(2026, 10, 18, 9, 30);
    let yesterday = date(2026, 10, 17);
    assert!(calculate_at(now, 50, 100, yesterday, 6, 23).is_empty());
}

#[test]
fn deadline_in_the_past_with_wall_clock() {
    let yesterday = jiff::Zoned::now().date().yesterday().unwrap();
    assert!(calculate(50, 100, yesterday, 6, 23).is_empty());
}

#[test]
fn ten_hours_for_240_pages() {
    let now = at(2026, 1, 1, 14, 0);
    assert_eq!(eligible_hours(now, date(2026, 1, 1), 0, 23), 10);

    let checkpoints = calculate_at(now, 0, 240, date(2026, 1, 1), 0, 23);
    assert_eq!(checkpoints.len(), 10);
    assert_eq!(checkpoints.last().unwrap().display_pages(), 240);
    assert_non_decreasing(&checkpoints);

    for (i, c) in checkpoints.iter().enumerate() {
        assert_eq!(c.display_pages(), 24 * (i as i64 + 1));
    }
}

#[test]
fn flat_when_already_done() {
    let now = at(2026, 2, 1, 6, 45);
    let checkpoints = calculate_at(now, 300, 300, date(2026, 2, 3), 6, 23);
    assert!(!checkpoints.is_empty());
    assert!(checkpoints.iter().all(|c| c.display_pages() == 300));
}

#[test]
fn hourly_timestamps_are_aligned() {
    let now = at(2026, 4, 2, 10, 42);
    let checkpoints = calculate_at(now, 0, 90, date(2026, 4, 4), 8, 20);
    assert_non_decreasing(&checkpoints);
    for c in &checkpoints {
        assert_eq!((c.at().minute(), c.at().second()), (0, 0));
        assert!((8..=20).contains(&c.at().hour()));
    }
    assert_eq!(checkpoints[0].at(), date(2026, 4, 2).at(11, 0, 0, 0));
}

#[test]
fn plan_covers_whole_list_without_truncation() {
    let now = at(2026, 1, 1, 0, 0);
    let finish = date(2026, 1, 1) + 30.days();
    let checkpoints = calculate_at(now, 0, 1000, finish, 0, 23);
    assert_eq!(checkpoints.len(), eligible_hours(now, finish, 0, 23));
    assert!(checkpoints.len() > 20);
}

#[test]
fn never_overshoots_the_book() {
    let now = at(2026, 6, 1, 12, 10);
    let window = ReadingWindow::new(7, 22).unwrap();
    let checkpoints = window.schedule_at(now, 13, 457, date(2026, 6, 9));
    let last = checkpoints.last().unwrap();
    assert!(last.centipages() <= 457 * 100);
    assert!(last.display_pages() <= 457);
}

#[test]
fn summary_reports_remaining_and_rate() {
    let now = at(2026, 1, 1, 14, 0);
    let checkpoints = calculate_at(now, 40, 240, date(2026, 1, 1), 0, 23);
    let summary = ScheduleSummary::new(40, 240, &checkpoints);
    assert_eq!(summary.remaining_pages, 200);
    assert_eq!(summary.hours, 10);
    assert_eq!(summary.pages_per_hour(), 20);
}
