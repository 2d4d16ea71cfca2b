// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Errors raised while validating inputs for the planning tools.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The book choose policy is not known.
    #[error("Unknown book choose policy: {0}")]
    UnknownPolicy(String),

    /// The daily reading window is out of range or empty.
    #[error(
        "Invalid reading hours {start}..{end}: the start must be from 0 to 23, \
the end from 1 to 24, and the start must be before the end"
    )]
    InvalidReadingHours {
        /// The first hour of the window.
        start: i8,
        /// The last hour of the window.
        end: i8,
    },

    /// The page ranges of two editions cannot be mapped onto each other.
    #[error("Invalid edition mapping: {0}")]
    InvalidEdition(&'static str),
}
