// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Planning tools for a personal library: pick the next book to read and pace
//! the reading of the current one towards a finish date.

mod chooser;
mod config;
mod edition;
mod error;
mod pacing;
mod random;
mod window;

pub use crate::chooser::{
    ChoosePolicy, RankWeightedSampler, Sampler, UniformSampler, choose_book, plurality, vote,
};
pub use crate::config::{APP_NAME, Config, expand_path, get_config_dir};
pub use crate::edition::EditionMapping;
pub use crate::error::Error;
pub use crate::pacing::{Checkpoint, ScheduleSummary, calculate, calculate_at, eligible_hours};
pub use crate::random::RandomSource;
pub use crate::window::ReadingWindow;
