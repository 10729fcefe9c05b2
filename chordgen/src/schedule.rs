// Duration scheduling: how many chords, and how many beats each one lasts.
//
// The active `ScheduleMode` is resolved once from configuration (see
// config.rs) and handed to both this module and progression.rs, so the
// duration list and the symbol list always come out the same length.

use crate::progression::Preset;
use chordgen_prng::SeededRng;

/// Which of the mutually exclusive scheduling strategies drives a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// A fixed preset progression, every chord lasting `chord_duration`.
    NamedPreset {
        preset: &'static Preset,
        chord_duration: u32,
    },
    /// `length` random chords of `chord_duration` beats each.
    FixedCount { length: usize, chord_duration: u32 },
    /// Random chords with durations drawn from `[min, max]` until exactly
    /// `total` beats are filled.
    Budget { total: u32, min: u32, max: u32 },
    /// No scheduling inputs were given; the run produces nothing.
    None,
}

impl ScheduleMode {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleMode::NamedPreset { .. } => "named preset",
            ScheduleMode::FixedCount { .. } => "fixed count",
            ScheduleMode::Budget { .. } => "budget",
            ScheduleMode::None => "none",
        }
    }
}

/// Produce the per-chord durations, in beats, for `mode`.
///
/// Budget mode draws uniformly from `[min, max]` and clamps the last draw to
/// whatever is left, so the result always sums to `total`. Budget bounds are
/// validated when the mode is resolved; `min > max` panics here.
pub fn schedule_durations(mode: &ScheduleMode, rng: &mut SeededRng) -> Vec<u32> {
    match *mode {
        ScheduleMode::NamedPreset {
            preset,
            chord_duration,
        } => vec![chord_duration; preset.symbols.len()],
        ScheduleMode::FixedCount {
            length,
            chord_duration,
        } => vec![chord_duration; length],
        ScheduleMode::Budget { total, min, max } => {
            let mut durations = Vec::new();
            let mut remaining = total;
            while remaining > 0 {
                // Never draw zero, or a zero-width range would spin forever.
                let duration = rng.range_u32_inclusive(min, max).clamp(1, remaining);
                durations.push(duration);
                remaining -= duration;
            }
            durations
        }
        ScheduleMode::None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::find_preset;

    #[test]
    fn preset_durations_follow_preset_length() {
        let preset = find_preset("II-V-I").unwrap();
        let mode = ScheduleMode::NamedPreset {
            preset,
            chord_duration: 4,
        };
        let mut rng = SeededRng::new(1);
        assert_eq!(schedule_durations(&mode, &mut rng), vec![4, 4, 4]);

        let wow = ScheduleMode::NamedPreset {
            preset: find_preset("wow").unwrap(),
            chord_duration: 2,
        };
        assert_eq!(schedule_durations(&wow, &mut rng), vec![2, 2]);
    }

    #[test]
    fn fixed_count_repeats_duration() {
        let mode = ScheduleMode::FixedCount {
            length: 6,
            chord_duration: 3,
        };
        let mut rng = SeededRng::new(1);
        let durations = schedule_durations(&mode, &mut rng);
        assert_eq!(durations.len(), 6);
        assert!(durations.iter().all(|&d| d == 3));
    }

    #[test]
    fn budget_sums_to_total() {
        let mode = ScheduleMode::Budget {
            total: 10,
            min: 3,
            max: 4,
        };
        for seed in 0..200 {
            let mut rng = SeededRng::new(seed);
            let durations = schedule_durations(&mode, &mut rng);
            assert_eq!(durations.iter().sum::<u32>(), 10, "seed {seed}");
            let (last, body) = durations.split_last().unwrap();
            assert!(body.iter().all(|d| (3..=4).contains(d)), "seed {seed}: {durations:?}");
            assert!((1..=4).contains(last), "seed {seed}: {durations:?}");
        }
    }

    #[test]
    fn budget_across_bounds() {
        for (total, min, max) in [(1, 1, 1), (16, 1, 4), (7, 8, 12), (100, 5, 5), (33, 2, 9)] {
            let mode = ScheduleMode::Budget { total, min, max };
            let mut rng = SeededRng::new(total as u64 * 31 + max as u64);
            let durations = schedule_durations(&mode, &mut rng);
            assert_eq!(durations.iter().sum::<u32>(), total);
            assert!(durations.iter().all(|d| (1..=max).contains(d)));
        }
    }

    #[test]
    fn budget_smaller_than_min_is_one_clamped_chord() {
        let mode = ScheduleMode::Budget {
            total: 2,
            min: 3,
            max: 6,
        };
        let mut rng = SeededRng::new(9);
        assert_eq!(schedule_durations(&mode, &mut rng), vec![2]);
    }

    #[test]
    fn no_mode_schedules_nothing() {
        let mut rng = SeededRng::new(0);
        assert!(schedule_durations(&ScheduleMode::None, &mut rng).is_empty());
    }
}
