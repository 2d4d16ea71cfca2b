// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use shelf_core::{ChoosePolicy, Config, RandomSource};

#[derive(Debug, Clone, Copy)]
pub struct CmdChoose {
    pub amount: i64,
    pub policy: Option<ChoosePolicy>,
}

impl CmdChoose {
    pub const NAME: &str = "choose";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Pick the next book to read from a numbered list")
            .arg(
                arg!(amount: <AMOUNT> "Number of books on the list")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true),
            )
            .arg(
                arg!(-p --policy <POLICY> "How to favor the books, defaults to the configured policy")
                    .value_parser(value_parser!(ChoosePolicy)),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            amount: matches.get_one("amount").copied().unwrap_or_default(),
            policy: matches.get_one("policy").copied(),
        }
    }

    pub fn run(self, config: &Config) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "choosing a book...");
        let (policy, winner) = self.choose(config, &mut rand::rng())?;
        println!(
            "{} book {} of {} ({})",
            "Read".bold(),
            winner.to_string().green().bold(),
            self.amount,
            policy.name().to_lowercase(),
        );
        Ok(())
    }

    /// Returns the policy in effect and the winning position, counted from 1.
    pub fn choose<R: RandomSource + ?Sized>(
        self,
        config: &Config,
        rng: &mut R,
    ) -> Result<(ChoosePolicy, i64), Box<dyn Error>> {
        if self.amount <= 0 {
            return Err(format!("Expected a positive number of books, got {}", self.amount).into());
        }

        let policy = self.policy.unwrap_or(config.default_policy);
        Ok((policy, policy.choose(self.amount, rng)))
    }
}
