// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use shelf_core::Checkpoint;

use crate::parser::ArgOutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleColumn {
    Time,
    Pages,
}

#[derive(Debug)]
pub struct ScheduleFormatter {
    columns: Vec<ScheduleColumn>,
    format: ArgOutputFormat,
}

impl ScheduleFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![ScheduleColumn::Time, ScheduleColumn::Pages],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, checkpoints: &'a [Checkpoint]) -> Display<'a> {
        Display {
            checkpoints,
            formatter: self,
        }
    }
}

pub struct Display<'a> {
    checkpoints: &'a [Checkpoint],
    formatter: &'a ScheduleFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let table = Table::new(TableStyleJson::new(), columns, self.checkpoints);
                write!(f, "{table}")
            }
            ArgOutputFormat::Table => {
                let table = Table::new(TableStyleBasic::new(), columns, self.checkpoints);
                write!(f, "{table}")
            }
        }
    }
}

impl TableColumn<Checkpoint> for ScheduleColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Time => "Time".into(),
            Self::Pages => "Pages".into(),
        }
    }

    fn format<'a>(&self, data: &'a Checkpoint) -> Cow<'a, str> {
        match self {
            Self::Time => data.at().strftime("%Y-%m-%d %H:%M").to_string().into(),
            Self::Pages => data.display_pages().to_string().into(),
        }
    }

    fn json(&self, data: &Checkpoint) -> serde_json::Value {
        match self {
            Self::Time => self.format(data).into_owned().into(),
            Self::Pages => data.display_pages().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Time => PaddingDirection::Left,
            Self::Pages => PaddingDirection::Right,
        }
    }
}
