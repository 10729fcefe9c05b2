// The generation pipeline: schedule -> select -> realize -> arrange.
//
// Scheduler and selector both receive the resolved `ScheduleMode`, and the
// selector is told how many durations were scheduled, so the two lists pair
// up one to one. Each pair is realized and arranged independently.

use crate::config::{GeneratorConfig, Settings};
use crate::error::Result;
use crate::progression::select_progression;
use crate::realize::{RealizedChord, realize_chord};
use crate::schedule::{ScheduleMode, schedule_durations};
use crate::theory::{DegreeSymbol, NoteName, Scale};
use crate::voicing::arrange;
use chordgen_prng::SeededRng;
use serde::Serialize;
use tracing::{info, warn};

/// The result of one run: the event list handed to a sink, plus the key and
/// scale it was built in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    pub key: NoteName,
    pub scale: Scale,
    pub chords: Vec<RealizedChord>,
}

impl Generation {
    pub fn symbols(&self) -> Vec<DegreeSymbol> {
        self.chords.iter().map(|c| c.symbol).collect()
    }

    pub fn total_beats(&self) -> u32 {
        self.chords.iter().map(|c| c.duration).sum()
    }
}

pub fn generate(settings: &Settings, rng: &mut SeededRng) -> Generation {
    let durations = schedule_durations(&settings.mode, rng);
    let progression = select_progression(&settings.mode, durations.len(), rng);

    if settings.mode == ScheduleMode::None {
        warn!("no scheduling inputs given; the progression is empty");
    }
    info!(
        "{} {} ({} mode): {}",
        settings.key,
        settings.scale,
        settings.mode.label(),
        progression
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let chords = progression
        .into_iter()
        .zip(durations)
        .map(|(symbol, duration)| {
            let mut chord = realize_chord(settings.scale, settings.key, symbol, duration);
            arrange(&mut chord, settings.key, settings.auto_inversions);
            chord
        })
        .collect();

    Generation {
        key: settings.key,
        scale: settings.scale,
        chords,
    }
}

/// Resolve `config` and generate in one step.
pub fn run(config: &GeneratorConfig, rng: &mut SeededRng) -> Result<Generation> {
    let settings = config.resolve(rng)?;
    Ok(generate(&settings, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;

    fn c_major() -> GeneratorConfig {
        GeneratorConfig {
            base_note: Some("C".into()),
            scale: Some("Major".into()),
            ..Default::default()
        }
    }

    #[test]
    fn two_five_one_in_c() {
        let cfg = GeneratorConfig {
            progression_name: "II-V-I".into(),
            chord_duration: 4,
            ..c_major()
        };
        let generation = run(&cfg, &mut SeededRng::new(0)).unwrap();
        let symbols: Vec<String> = generation.symbols().iter().map(|s| s.to_string()).collect();
        assert_eq!(symbols, ["II", "V", "I"]);
        let durations: Vec<u32> = generation.chords.iter().map(|c| c.duration).collect();
        assert_eq!(durations, [4, 4, 4]);
        assert_eq!(generation.chords[0].pitches, vec![62, 65, 69]);
        assert_eq!(generation.chords[1].pitches, vec![67, 71, 74]);
        assert_eq!(generation.chords[2].pitches, vec![60, 64, 67]);
        assert_eq!(generation.total_beats(), 12);
    }

    #[test]
    fn wow_with_inversions() {
        let cfg = GeneratorConfig {
            progression_name: "wow".into(),
            chord_duration: 2,
            auto_inversions: true,
            ..c_major()
        };
        let generation = run(&cfg, &mut SeededRng::new(0)).unwrap();
        // VI: A C E -> [69, 72, 76] -> E folds to 64.
        assert_eq!(generation.chords[0].pitches, vec![64, 69, 72]);
        // VII-7: B D F A -> [71, 74, 77, 81] -> folded and sorted.
        assert_eq!(generation.chords[1].pitches, vec![62, 65, 69, 71]);
    }

    #[test]
    fn budget_run_fills_exactly() {
        let cfg = GeneratorConfig {
            progression_duration: 10,
            min_chord_duration: 3,
            max_chord_duration: 4,
            ..c_major()
        };
        for seed in 0..50 {
            let generation = run(&cfg, &mut SeededRng::new(seed)).unwrap();
            assert_eq!(generation.total_beats(), 10);
            for chord in &generation.chords {
                let expected = if chord.symbol.is_seventh() { 4 } else { 3 };
                assert_eq!(chord.pitches.len(), expected);
                assert!(chord.is_ascending());
            }
        }
    }

    #[test]
    fn same_seed_same_generation() {
        let cfg = GeneratorConfig {
            progression_length: 16,
            chord_duration: 1,
            auto_inversions: true,
            ..Default::default()
        };
        let a = run(&cfg, &mut SeededRng::new(2024)).unwrap();
        let b = run(&cfg, &mut SeededRng::new(2024)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.chords.len(), 16);
    }

    #[test]
    fn no_mode_is_empty_not_an_error() {
        let generation = run(&c_major(), &mut SeededRng::new(0)).unwrap();
        assert!(generation.chords.is_empty());
        assert_eq!(generation.total_beats(), 0);
    }

    #[test]
    fn lookup_failure_aborts_whole_run() {
        let cfg = GeneratorConfig {
            base_note: Some("X".into()),
            progression_name: "II-V-I".into(),
            chord_duration: 4,
            ..c_major()
        };
        assert!(matches!(
            run(&cfg, &mut SeededRng::new(0)),
            Err(GenerateError::UnknownNote(_))
        ));
    }
}
