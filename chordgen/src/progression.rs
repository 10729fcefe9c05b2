// Progression selection: which degree symbols to play.
//
// Named presets are returned verbatim. Otherwise symbols are sampled
// uniformly with replacement from all fourteen (seven triads, seven
// sevenths), one per duration the scheduler produced.

use crate::error::{GenerateError, Result};
use crate::schedule::ScheduleMode;
use crate::theory::DegreeSymbol;
use chordgen_prng::SeededRng;

/// A named, fixed progression.
#[derive(Debug, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub symbols: &'static [DegreeSymbol],
}

const I: DegreeSymbol = DegreeSymbol::triad(0);
const II: DegreeSymbol = DegreeSymbol::triad(1);
const IV: DegreeSymbol = DegreeSymbol::triad(3);
const V: DegreeSymbol = DegreeSymbol::triad(4);
const VI: DegreeSymbol = DegreeSymbol::triad(5);
const VII_7: DegreeSymbol = DegreeSymbol::seventh(6);

pub static PRESETS: [Preset; 4] = [
    Preset {
        name: "II-V-I",
        symbols: &[II, V, I],
    },
    Preset {
        name: "I-V-VI-IV",
        symbols: &[I, V, VI, IV],
    },
    Preset {
        name: "I-IV-V-I",
        symbols: &[I, IV, V, I],
    },
    Preset {
        name: "wow",
        symbols: &[VI, VII_7],
    },
];

pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| GenerateError::UnknownProgression(name.to_string()))
}

/// Choose the symbol sequence for `mode`.
///
/// `count` must be the length of the duration list scheduled for the same
/// mode; it is ignored for presets (whose length is fixed) and for
/// `ScheduleMode::None`.
pub fn select_progression(
    mode: &ScheduleMode,
    count: usize,
    rng: &mut SeededRng,
) -> Vec<DegreeSymbol> {
    match mode {
        ScheduleMode::NamedPreset { preset, .. } => preset.symbols.to_vec(),
        ScheduleMode::FixedCount { .. } | ScheduleMode::Budget { .. } => (0..count)
            .filter_map(|_| rng.choose(&DegreeSymbol::ALL).copied())
            .collect(),
        ScheduleMode::None => Vec::new(),
    }
}
