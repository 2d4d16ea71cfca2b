// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::date;
use rand::SeedableRng;
use rand::rngs::StdRng;
use shelf_core::{ChoosePolicy, Error};

use crate::common::{ScriptedRandom, at, test_config};

#[test]
fn configured_window_drives_schedule() {
    let config = test_config(9, 17, ChoosePolicy::Prioritized);
    let window = config.reading_window(None, None).unwrap();

    let checkpoints = window.schedule_at(at(2026, 3, 10, 18, 20), 10, 100, date(2026, 3, 11));
    assert_eq!(checkpoints.len(), 9);
    assert_eq!(checkpoints[8].display_pages(), 100);
}

#[test]
fn overrides_replace_configured_hours() {
    let config = test_config(9, 17, ChoosePolicy::Prioritized);
    let window = config.reading_window(Some(0), Some(23)).unwrap();
    assert!(window.contains(0));
    assert!(window.contains(23));
}

#[test]
fn invalid_configured_window_is_reported() {
    let config = test_config(20, 8, ChoosePolicy::Prioritized);
    assert_eq!(
        config.reading_window(None, None),
        Err(Error::InvalidReadingHours { start: 20, end: 8 })
    );
}

#[test]
fn configured_policy_drives_choice() {
    let config = test_config(6, 23, ChoosePolicy::Random);
    let mut rng = ScriptedRandom::new(&[3, 3, 1]);
    assert_eq!(config.default_policy.choose(3, &mut rng), 3);
    assert_eq!(rng.requests, vec![(1, 4); 3]);

    let mut rng = StdRng::seed_from_u64(1);
    let winner = config.default_policy.choose(12, &mut rng);
    assert!((1..=12).contains(&winner));
}
