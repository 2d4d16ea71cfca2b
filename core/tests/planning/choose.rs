// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use rand::SeedableRng;
use rand::rngs::StdRng;
use shelf_core::{
    ChoosePolicy, RankWeightedSampler, Sampler, UniformSampler, choose_book, plurality, vote,
};

use crate::common::{ScriptedRandom, assert_winner_in_range};

#[test]
fn sentinel_for_no_books() {
    for policy in ChoosePolicy::all() {
        let mut rng = ScriptedRandom::new(&[]);
        assert_eq!(choose_book(policy, 0, &mut rng), 0);
        assert_eq!(choose_book(policy, -5, &mut rng), 0);
        assert!(rng.requests.is_empty(), "no draw expected for {policy:?}");
    }
}

#[test]
fn uniform_winner_is_plurality_of_script() {
    let mut rng = ScriptedRandom::new(&[2, 2, 1, 2, 3]);
    assert_eq!(ChoosePolicy::Random.choose(5, &mut rng), 2);
    assert!(rng.is_exhausted());
    assert!(rng.requests.iter().all(|&r| r == (1, 6)));
}

#[test]
fn uniform_breaks_ties_towards_first_book() {
    let mut rng = ScriptedRandom::new(&[4, 2, 4, 2]);
    assert_eq!(ChoosePolicy::Random.choose(4, &mut rng), 2);
}

#[test]
fn weighted_draws_over_whole_ticket_range() {
    // weights 3, 2, 1 -> cumulative 3, 5, 6, tickets 0..=6
    let mut rng = ScriptedRandom::new(&[6, 5, 6]);
    assert_eq!(ChoosePolicy::Prioritized.choose(3, &mut rng), 3);
    assert!(rng.requests.iter().all(|&r| r == (0, 7)));
    assert!(rng.is_exhausted());
}

#[test]
fn winners_stay_in_range_with_real_randomness() {
    let mut rng = StdRng::seed_from_u64(0xB00C);
    for policy in ChoosePolicy::all() {
        for amount in [1, 2, 3, 10, 57] {
            for _ in 0..50 {
                assert_winner_in_range(choose_book(policy, amount, &mut rng), amount);
            }
        }
    }
}

#[test]
fn weighted_policy_prefers_first_over_last() {
    let mut rng = StdRng::seed_from_u64(11);
    let (mut first, mut last) = (0, 0);
    for _ in 0..3000 {
        match choose_book(ChoosePolicy::Prioritized, 3, &mut rng) {
            1 => first += 1,
            3 => last += 1,
            _ => {}
        }
    }
    assert!(first >= last, "first={first} last={last}");
}

#[test]
fn samplers_compose_with_vote() {
    let uniform = UniformSampler::new(6);
    let weighted = RankWeightedSampler::new(6);
    assert_eq!(uniform.candidates(), 6);
    assert_eq!(weighted.candidates(), 6);
    assert_eq!(weighted.total_weight(), 21);

    let mut rng = ScriptedRandom::new(&[5, 1, 5]);
    assert_eq!(vote(&uniform, 3, &mut rng), Some(5));

    // tickets 0 and 6 both belong to book 1, ticket 21 to book 6
    let mut rng = ScriptedRandom::new(&[21, 0, 6]);
    assert_eq!(vote(&weighted, 3, &mut rng), Some(1));
}

#[test]
fn plurality_matches_manual_tally() {
    assert_eq!(plurality([3, 1, 2, 3, 1]), Some(1));
    assert_eq!(plurality([9, 9, 1]), Some(9));
}

#[test]
fn works_through_trait_object() {
    let mut rng = StdRng::seed_from_u64(5);
    let source: &mut dyn shelf_core::RandomSource = &mut rng;
    assert_winner_in_range(choose_book(ChoosePolicy::Random, 8, source), 8);
}
