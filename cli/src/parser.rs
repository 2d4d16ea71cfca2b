// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use clap::{Arg, ArgMatches, arg, value_parser};
use jiff::ToSpan;
use jiff::civil::Date;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

impl ArgOutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }
}

/// Parses a date relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`, `tomorrow`, and a number of days ahead such
/// as `+3` or `3d`.
pub fn parse_date(today: Date, s: &str) -> Result<Date, String> {
    let s = s.trim();
    match s.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return today.tomorrow().map_err(|e| e.to_string()),
        _ => {}
    }

    let days = s
        .strip_prefix('+')
        .or_else(|| s.strip_suffix('d'))
        .and_then(|n| n.trim().parse::<i32>().ok());
    if let Some(days) = days {
        return today.checked_add(days.days()).map_err(|e| e.to_string());
    }

    s.parse::<Date>().map_err(|_| {
        format!("Invalid date '{s}'. Expected format: YYYY-MM-DD, today, tomorrow, +N or Nd")
    })
}
