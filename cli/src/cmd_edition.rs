// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgGroup, ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use shelf_core::EditionMapping;

/// The page to convert and which edition it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditionPage {
    Main(i64),
    Alternative(i64),
}

#[derive(Debug, Clone, Copy)]
pub struct CmdEdition {
    pub total: i64,
    pub main_first: i64,
    pub alt_first: i64,
    pub alt_last: i64,
    pub page: EditionPage,
}

impl CmdEdition {
    pub const NAME: &str = "edition";

    pub fn command() -> Command {
        fn pages(arg: clap::Arg) -> clap::Arg {
            arg.value_parser(value_parser!(i64))
                .allow_negative_numbers(true)
        }

        Command::new(Self::NAME)
            .about("Convert a page number between two editions of a book")
            .arg(pages(arg!(--total <PAGES> "Last page of the main edition")).required(true))
            .arg(
                pages(arg!(--"main-first" <PAGE> "First page of the main edition"))
                    .required(true),
            )
            .arg(
                pages(arg!(--"alt-first" <PAGE> "First page of the alternative edition"))
                    .required(true),
            )
            .arg(
                pages(arg!(--"alt-last" <PAGE> "Last page of the alternative edition"))
                    .required(true),
            )
            .arg(pages(arg!(--main <PAGE> "Page in the main edition to convert")))
            .arg(pages(arg!(--alt <PAGE> "Page in the alternative edition to convert")))
            .group(
                ArgGroup::new("page")
                    .args(["main", "alt"])
                    .required(true)
                    .multiple(false),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let get = |id: &str| matches.get_one::<i64>(id).copied();
        let page = match (get("main"), get("alt")) {
            (Some(page), _) => EditionPage::Main(page),
            (None, Some(page)) => EditionPage::Alternative(page),
            (None, None) => unreachable!(),
        };

        Self {
            total: get("total").unwrap_or_default(),
            main_first: get("main-first").unwrap_or_default(),
            alt_first: get("alt-first").unwrap_or_default(),
            alt_last: get("alt-last").unwrap_or_default(),
            page,
        }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting page...");
        let edition = match self.page {
            EditionPage::Main(_) => "alternative",
            EditionPage::Alternative(_) => "main",
        };
        let page = self.convert()?;
        println!("Page {} in the {edition} edition", page.to_string().bold());
        Ok(())
    }

    /// The page number in the other edition.
    pub fn convert(&self) -> Result<i64, Box<dyn Error>> {
        let mapping = EditionMapping::new(self.total, self.main_first, self.alt_first, self.alt_last)?;
        Ok(match self.page {
            EditionPage::Main(page) => mapping.to_alternative(page),
            EditionPage::Alternative(page) => mapping.to_main(page),
        })
    }
}
