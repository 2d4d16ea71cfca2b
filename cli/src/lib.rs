// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of shelf.

mod cli;
mod cmd_choose;
mod cmd_edition;
mod cmd_generate_completion;
mod cmd_schedule;
mod config;
mod parser;
mod schedule_formatter;
mod table;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_choose::CmdChoose;
pub use crate::cmd_edition::{CmdEdition, EditionPage};
pub use crate::cmd_generate_completion::{CmdGenerateCompletion, Shell};
pub use crate::cmd_schedule::{CmdSchedule, Plan};
pub use crate::config::parse_config;
pub use crate::parser::ArgOutputFormat;
