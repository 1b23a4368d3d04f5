//! Prompt scheduling — randomized placement of knock prompts on the timeline.
//!
//! The scheduler is the only randomized part of the pipeline. It takes its
//! random source as a parameter so schedules are reproducible under test;
//! entropy seeding belongs to the CLI entry point, not here.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::instrument::KnockTimbre;

/// Minimum spacing between prompts, in minutes.
pub const MIN_INTERVAL_MINUTES: f64 = 3.0;
/// Upper bound (exclusive) of the random spacing, in minutes.
pub const MAX_INTERVAL_MINUTES: f64 = 5.0;

/// A scheduled prompt: the instant one knock pattern begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    /// Offset from the start of the track, in seconds.
    pub instant: f64,
    /// The timbre struck at this instant.
    pub timbre: KnockTimbre,
}

/// Schedule prompts over `total_seconds` using the given random source.
///
/// Starting at zero, intervals are drawn uniformly from [3, 5) minutes and
/// accumulated; a trigger is emitted at each accumulated instant that still
/// falls inside `[0, total_seconds)`. Instants are strictly increasing, and
/// nothing is emitted at or past the boundary.
pub fn schedule_with_rng<R: Rng>(total_seconds: f64, rng: &mut R) -> Vec<Trigger> {
    let mut triggers = Vec::new();
    let mut elapsed = 0.0;

    loop {
        let interval = rng.gen_range(MIN_INTERVAL_MINUTES..MAX_INTERVAL_MINUTES);
        elapsed += interval * 60.0;
        if elapsed >= total_seconds {
            break;
        }
        triggers.push(Trigger {
            instant: elapsed,
            timbre: KnockTimbre::default(),
        });
    }

    triggers
}

/// Schedule prompts with a fixed seed. Same seed, same schedule.
pub fn schedule_seeded(total_seconds: f64, seed: u64) -> Vec<Trigger> {
    let mut rng = StdRng::seed_from_u64(seed);
    schedule_with_rng(total_seconds, &mut rng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instants_strictly_increasing_and_in_range() {
        let total = 90.0 * 60.0;
        let triggers = schedule_seeded(total, 42);
        assert!(!triggers.is_empty(), "90 minutes should hold several prompts");

        let mut prev = 0.0;
        for t in &triggers {
            assert!(t.instant > prev, "instants must strictly increase");
            assert!(t.instant < total, "instant {} past the end", t.instant);
            prev = t.instant;
        }
    }

    #[test]
    fn spacing_within_interval_bounds() {
        let triggers = schedule_seeded(120.0 * 60.0, 7);
        let mut prev = 0.0;
        for t in &triggers {
            let gap = t.instant - prev;
            assert!(
                gap >= MIN_INTERVAL_MINUTES * 60.0,
                "gap {gap} under 3 minutes"
            );
            assert!(gap < MAX_INTERVAL_MINUTES * 60.0, "gap {gap} at/over 5 minutes");
            prev = t.instant;
        }
    }

    #[test]
    fn same_seed_same_schedule() {
        let a = schedule_seeded(90.0 * 60.0, 1234);
        let b = schedule_seeded(90.0 * 60.0, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a = schedule_seeded(90.0 * 60.0, 1);
        let b = schedule_seeded(90.0 * 60.0, 2);
        assert_ne!(a, b, "two seeds producing identical schedules is ~impossible");
    }

    #[test]
    fn one_minute_track_has_no_prompts() {
        // The minimum interval is 3 minutes, so a 1-minute track is silent
        // regardless of seed.
        for seed in 0..32 {
            assert!(schedule_seeded(60.0, seed).is_empty());
        }
    }

    #[test]
    fn prompt_count_matches_interval_bounds() {
        // 90 minutes at one prompt per [3, 5) minutes: 18..=30 prompts.
        let n = schedule_seeded(90.0 * 60.0, 99).len();
        assert!((18..=30).contains(&n), "unexpected prompt count {n}");
    }

    #[test]
    fn zero_duration_is_empty() {
        assert!(schedule_seeded(0.0, 5).is_empty());
    }
}
