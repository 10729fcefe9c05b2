// Generator configuration and its resolution into run settings.
//
// `GeneratorConfig` is the raw, user-facing form: plain strings and integers,
// every field defaulted, loadable from JSON or filled in from CLI flags (see
// main.rs). `GeneratorConfig::resolve` turns it into `Settings`, which is
// what the pipeline consumes. Resolution is where every lookup happens, so
// an unknown note, scale, or preset aborts the run before any chord exists.
//
// Scheduling mode precedence, first match wins:
// 1. a non-empty `progression_name` selects a named preset;
// 2. `progression_length > 0 && chord_duration > 0` selects fixed count;
// 3. `progression_duration`, `min_chord_duration` and `max_chord_duration`
//    all positive select budget mode;
// otherwise the mode is `ScheduleMode::None` and the run is empty.

use crate::error::{GenerateError, Result};
use crate::progression::find_preset;
use crate::schedule::ScheduleMode;
use crate::theory::{NoteName, Scale};
use chordgen_prng::SeededRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Tempo used by the MIDI sink unless configured otherwise.
pub const DEFAULT_TEMPO_BPM: u16 = 60;

/// Slowest tempo whose microseconds-per-beat still fits MIDI's 24-bit tempo
/// field.
pub const MIN_TEMPO_BPM: u16 = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Key root, one of the twelve sharp-spelled note names. Random if unset.
    pub base_note: Option<String>,
    /// `Major` or `Minor`. Random if unset.
    pub scale: Option<String>,
    /// Preset key (`II-V-I`, `I-V-VI-IV`, `I-IV-V-I`, `wow`), or empty.
    pub progression_name: String,
    pub progression_length: usize,
    /// Beats per chord in preset and fixed-count modes.
    pub chord_duration: u32,
    /// Total beats to fill in budget mode.
    pub progression_duration: u32,
    pub min_chord_duration: u32,
    pub max_chord_duration: u32,
    /// Fold chord tones down to within an octave of the key root.
    pub auto_inversions: bool,
    pub tempo_bpm: u16,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            base_note: None,
            scale: None,
            progression_name: String::new(),
            progression_length: 0,
            chord_duration: 0,
            progression_duration: 0,
            min_chord_duration: 0,
            max_chord_duration: 0,
            auto_inversions: false,
            tempo_bpm: DEFAULT_TEMPO_BPM,
        }
    }
}

/// Fully resolved inputs for one generation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub key: NoteName,
    pub scale: Scale,
    pub mode: ScheduleMode,
    pub auto_inversions: bool,
    pub tempo_bpm: u16,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Resolve names and pick random defaults. The key is drawn before the
    /// scale, and both before any scheduling draw.
    pub fn resolve(&self, rng: &mut SeededRng) -> Result<Settings> {
        let key = match &self.base_note {
            Some(name) => name.parse()?,
            None => rng.choose(&NoteName::ALL).copied().unwrap_or(NoteName::C),
        };
        let scale = match &self.scale {
            Some(name) => name.parse()?,
            None => rng.choose(&Scale::ALL).copied().unwrap_or(Scale::Major),
        };
        if self.tempo_bpm < MIN_TEMPO_BPM {
            return Err(GenerateError::InvalidTempo(self.tempo_bpm));
        }
        Ok(Settings {
            key,
            scale,
            mode: self.schedule_mode()?,
            auto_inversions: self.auto_inversions,
            tempo_bpm: self.tempo_bpm,
        })
    }

    pub fn schedule_mode(&self) -> Result<ScheduleMode> {
        if !self.progression_name.is_empty() {
            let preset = find_preset(&self.progression_name)?;
            if self.chord_duration == 0 {
                warn!(
                    "preset '{}' with chord duration 0: every chord will be silent",
                    preset.name
                );
            }
            return Ok(ScheduleMode::NamedPreset {
                preset,
                chord_duration: self.chord_duration,
            });
        }

        if self.progression_length > 0 && self.chord_duration > 0 {
            return Ok(ScheduleMode::FixedCount {
                length: self.progression_length,
                chord_duration: self.chord_duration,
            });
        }

        let (total, min, max) = (
            self.progression_duration,
            self.min_chord_duration,
            self.max_chord_duration,
        );
        if total > 0 && min > 0 && max > 0 {
            if min > max {
                return Err(GenerateError::InvalidDurationBounds { min, max });
            }
            return Ok(ScheduleMode::Budget { total, min, max });
        }

        Ok(ScheduleMode::None)
    }
}
