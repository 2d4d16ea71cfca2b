// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// Renders rows of `T` with one cell per column.
pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, C: TableColumn<T>, T> Table<'a, S, C, T> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, C: TableColumn<T>, T> fmt::Display for Table<'_, S, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    /// The cell as a JSON value, a string of the formatted cell by default.
    fn json(&self, data: &T) -> serde_json::Value {
        serde_json::Value::String(self.format(data).into_owned())
    }

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Aligned columns with a bold header line.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self { separator: "  " }
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let names: Vec<_> = columns.iter().map(|c| c.name()).collect();
        let mut widths: Vec<usize> = names.iter().map(|n| n.width()).collect();
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        let last = columns.len().saturating_sub(1);
        let header: Vec<_> = names
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(i, (name, &w))| pad(name, w, PaddingDirection::Left, i == last))
            .collect();
        writeln!(f, "{}", header.join(self.separator).bold())?;

        for row in &rows {
            let cells: Vec<_> = row
                .iter()
                .zip(columns.iter().zip(&widths))
                .enumerate()
                .map(|(i, (cell, (col, &w)))| pad(cell, w, col.padding_direction(), i == last))
                .collect();
            writeln!(f, "{}", cells.join(self.separator))?;
        }
        Ok(())
    }
}

/// An array of objects keyed by column name.
#[derive(Debug, Clone)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let items: Vec<serde_json::Map<String, serde_json::Value>> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| (col.name().into_owned(), col.json(row)))
                    .collect()
            })
            .collect();
        let json = serde_json::to_string_pretty(&items).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}

fn pad(cell: &str, width: usize, direction: PaddingDirection, last: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        // Last column does not need padding if it's left-aligned
        PaddingDirection::Left if last => cell.to_string(),
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}
