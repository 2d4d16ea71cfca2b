// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Picking the next book to read.
//!
//! A pick is a vote: the sampler of the chosen policy is drawn once per
//! candidate and the candidate drawn most often wins. Ties go to the smallest
//! index. Candidates are numbered from 1.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::random::RandomSource;

/// The policy used to pick a book.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ChoosePolicy {
    /// Rank-weighted: earlier candidates are favored.
    #[default]
    #[serde(rename = "prioritized", alias = "0")]
    #[cfg_attr(feature = "clap", value(name = "prioritized", alias = "0"))]
    Prioritized,

    /// Uniform: every candidate is equally likely on each draw.
    #[serde(rename = "random", alias = "1")]
    #[cfg_attr(feature = "clap", value(name = "random", alias = "1"))]
    Random,
}

impl ChoosePolicy {
    /// All policies, ordered by id.
    pub const fn all() -> [ChoosePolicy; 2] {
        [ChoosePolicy::Prioritized, ChoosePolicy::Random]
    }

    /// The stable numeric id of the policy.
    pub const fn id(self) -> u8 {
        match self {
            ChoosePolicy::Prioritized => 0,
            ChoosePolicy::Random => 1,
        }
    }

    /// The human readable name of the policy.
    pub const fn name(self) -> &'static str {
        match self {
            ChoosePolicy::Prioritized => "Earlier first",
            ChoosePolicy::Random => "At random",
        }
    }

    /// Looks a policy up by its numeric id.
    pub fn from_id(id: u8) -> Result<Self, Error> {
        Self::all()
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| Error::UnknownPolicy(id.to_string()))
    }

    /// Picks one of `books_amount` candidates with this policy.
    ///
    /// See [`choose_book`].
    pub fn choose<R: RandomSource + ?Sized>(self, books_amount: i64, rng: &mut R) -> i64 {
        choose_book(self, books_amount, rng)
    }
}

impl fmt::Display for ChoosePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChoosePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prioritized" | "0" => Ok(ChoosePolicy::Prioritized),
            "random" | "1" => Ok(ChoosePolicy::Random),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// Picks one of `books_amount` candidates, returning its 1-based index.
///
/// Runs exactly `books_amount` draws of the policy's sampler and returns the
/// plurality winner. A non-positive amount yields the sentinel `0`.
pub fn choose_book<R: RandomSource + ?Sized>(
    policy: ChoosePolicy,
    books_amount: i64,
    rng: &mut R,
) -> i64 {
    if books_amount <= 0 {
        return 0;
    }

    let trials = books_amount as usize;
    let winner = match policy {
        ChoosePolicy::Prioritized => vote(&RankWeightedSampler::new(books_amount), trials, rng),
        ChoosePolicy::Random => vote(&UniformSampler::new(books_amount), trials, rng),
    }
    .unwrap_or(0);

    tracing::trace!(?policy, books_amount, winner, "book chosen");
    winner
}

/// A single random draw over a set of 1-based candidates.
pub trait Sampler {
    /// Number of candidates.
    fn candidates(&self) -> i64;

    /// Draws one candidate.
    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i64;
}

/// Every candidate has the same chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformSampler {
    amount: i64,
}

impl UniformSampler {
    /// Creates a sampler over `1..=amount`. `amount` must be positive.
    pub fn new(amount: i64) -> Self {
        debug_assert!(amount > 0, "a sampler needs at least one candidate");
        Self { amount }
    }
}

impl Sampler for UniformSampler {
    fn candidates(&self) -> i64 {
        self.amount
    }

    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.next(1, self.amount + 1)
    }
}

/// Candidate `i` of `n` weighs `n - i + 1`, so the first one is the heaviest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankWeightedSampler {
    /// Running weight totals, `cumulative[i]` closes the bucket of candidate `i + 1`.
    cumulative: Vec<i64>,
}

impl RankWeightedSampler {
    /// Creates a sampler over `1..=amount`. `amount` must be positive.
    pub fn new(amount: i64) -> Self {
        debug_assert!(amount > 0, "a sampler needs at least one candidate");
        let cumulative = (1..=amount)
            .scan(0, |sum, i| {
                *sum += amount - i + 1;
                Some(*sum)
            })
            .collect();
        Self { cumulative }
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> i64 {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Maps a ticket in `[0, total_weight]` to the candidate owning it.
    fn candidate_for(&self, ticket: i64) -> i64 {
        let idx = self.cumulative.partition_point(|&c| c < ticket);
        idx.min(self.cumulative.len() - 1) as i64 + 1
    }
}

impl Sampler for RankWeightedSampler {
    fn candidates(&self) -> i64 {
        self.cumulative.len() as i64
    }

    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i64 {
        // Both ends are inclusive, ticket 0 lands in the first bucket.
        let ticket = rng.next(0, self.total_weight() + 1);
        self.candidate_for(ticket)
    }
}

/// Draws `trials` times from `sampler` and returns the plurality winner.
///
/// Returns `None` when `trials` is zero.
pub fn vote<S, R>(sampler: &S, trials: usize, rng: &mut R) -> Option<i64>
where
    S: Sampler + ?Sized,
    R: RandomSource + ?Sized,
{
    plurality((0..trials).map(|_| sampler.draw(&mut *rng)))
}

/// Returns the most frequent value, ties resolved to the smallest one.
pub fn plurality(trials: impl IntoIterator<Item = i64>) -> Option<i64> {
    let mut tally: BTreeMap<i64, usize> = BTreeMap::new();
    for t in trials {
        *tally.entry(t).or_default() += 1;
    }

    let mut best: Option<(i64, usize)> = None;
    for (value, count) in tally {
        match best {
            Some((_, c)) if c >= count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}
