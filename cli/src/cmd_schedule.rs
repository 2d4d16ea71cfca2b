// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jiff::{ToSpan, Zoned};
use jiff::civil::{Date, DateTime};
use shelf_core::{Checkpoint, Config, ScheduleSummary};

use crate::parser::{ArgOutputFormat, parse_date};
use crate::schedule_formatter::ScheduleFormatter;

#[derive(Debug, Clone)]
pub struct CmdSchedule {
    pub read: i64,
    pub total: i64,
    pub finish: String,
    pub start_hour: Option<i8>,
    pub end_hour: Option<i8>,
    pub limit: Option<usize>,
    pub output_format: ArgOutputFormat,
}

/// A validated schedule ready to print.
#[derive(Debug)]
pub struct Plan {
    pub checkpoints: Vec<Checkpoint>,
    pub summary: ScheduleSummary,
    pub limit: usize,
}

impl CmdSchedule {
    pub const NAME: &str = "schedule";

    /// Largest page count accepted for a book.
    pub const MAX_PAGES: i64 = 1_000_000_000;

    /// How far ahead a finish date may be, in days.
    pub const MAX_HORIZON_DAYS: i32 = 3660;

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("pace")
            .about("Plan the hourly page targets to finish a book on time")
            .arg(
                arg!(-r --read <PAGES> "Pages already read")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .required(true),
            )
            .arg(
                arg!(-t --total <PAGES> "Total pages of the book")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .required(true),
            )
            .arg(
                arg!(-f --finish <DATE> "Finish date: YYYY-MM-DD, today, tomorrow, +N or Nd")
                    .required(true),
            )
            .arg(
                arg!(--"start-hour" <HOUR> "First reading hour of the day, defaults to the configured one")
                    .value_parser(value_parser!(i8)),
            )
            .arg(
                arg!(--"end-hour" <HOUR> "Last reading hour of the day, defaults to the configured one")
                    .value_parser(value_parser!(i8)),
            )
            .arg(
                arg!(-n --limit <N> "Maximum number of checkpoints to show")
                    .value_parser(value_parser!(usize)),
            )
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            read: matches.get_one("read").copied().unwrap_or_default(),
            total: matches.get_one("total").copied().unwrap_or_default(),
            finish: matches
                .get_one::<String>("finish")
                .cloned()
                .unwrap_or_default(),
            start_hour: matches.get_one("start-hour").copied(),
            end_hour: matches.get_one("end-hour").copied(),
            limit: matches.get_one("limit").copied(),
            output_format: ArgOutputFormat::from(matches),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "planning the reading schedule...");
        let plan = self.plan(config, Zoned::now().datetime())?;

        if plan.checkpoints.is_empty() {
            println!(
                "{} No reading hour left before the finish date",
                "Warning:".yellow()
            );
            return Ok(());
        }

        let shown = &plan.checkpoints[..plan.checkpoints.len().min(plan.limit)];
        let formatter = ScheduleFormatter::new().with_output_format(self.output_format);
        print!("{}", formatter.format(shown));

        if self.output_format == ArgOutputFormat::Table {
            if shown.len() < plan.checkpoints.len() {
                println!(
                    "{}",
                    format!("... {} more", plan.checkpoints.len() - shown.len()).dimmed()
                );
            }
            println!(
                "{} pages left over {} hours, about {} pages per hour",
                plan.summary.remaining_pages.to_string().bold(),
                plan.summary.hours.to_string().bold(),
                plan.summary.pages_per_hour().to_string().bold(),
            );
        }
        Ok(())
    }

    /// Validates the arguments and computes the schedule as of `now`.
    pub fn plan(&self, config: &Config, now: DateTime) -> Result<Plan, Box<dyn Error>> {
        if self.read < 0 {
            return Err(format!("Pages read cannot be negative, got {}", self.read).into());
        }
        if self.total <= 0 {
            return Err(format!("Total pages must be positive, got {}", self.total).into());
        }
        if self.read > Self::MAX_PAGES || self.total > Self::MAX_PAGES {
            return Err(format!("Page counts cannot exceed {}", Self::MAX_PAGES).into());
        }

        let today = now.date();
        let finish: Date = parse_date(today, &self.finish)?;
        if finish < today {
            return Err(format!("Finish date {finish} is in the past").into());
        }
        let horizon = today.saturating_add(Self::MAX_HORIZON_DAYS.days());
        if finish > horizon {
            return Err(format!("Finish date {finish} is too far ahead, the latest is {horizon}").into());
        }

        let window = config.reading_window(self.start_hour, self.end_hour)?;
        let checkpoints = window.schedule_at(now, self.read, self.total, finish);
        let summary = ScheduleSummary::new(self.read, self.total, &checkpoints);
        Ok(Plan {
            checkpoints,
            summary,
            limit: self.limit.unwrap_or(config.schedule_limit),
        })
    }
}
