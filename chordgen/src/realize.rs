// Chord realization: degree symbol + key + scale -> absolute pitches.
//
// Each chord tone is placed in the octave that starts at the key's root above
// `BASE_PITCH`. Tones come out in stacking order (root, third, fifth,
// seventh), which is not necessarily ascending once the stack wraps past the
// seventh degree; voicing.rs fixes the order afterwards.

use crate::theory::{DegreeSymbol, NoteName, Scale};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// MIDI number of the octave anchor (middle C). A key's root sits at
/// `BASE_PITCH + key.index()`.
pub const BASE_PITCH: i32 = 60;

/// A chord ready for arrangement or output: absolute pitches plus a duration
/// in beats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RealizedChord {
    pub symbol: DegreeSymbol,
    pub pitches: Vec<i32>,
    pub duration: u32,
}

impl RealizedChord {
    pub fn is_ascending(&self) -> bool {
        self.pitches.windows(2).all(|w| w[0] <= w[1])
    }
}

/// Pitch of the key's root in the anchor octave.
pub fn root_pitch(key: NoteName) -> i32 {
    BASE_PITCH + key.index()
}

pub fn realize_chord(
    scale: Scale,
    key: NoteName,
    symbol: DegreeSymbol,
    duration: u32,
) -> RealizedChord {
    let intervals = scale.intervals();
    let pitches: Vec<i32> = symbol
        .tones()
        .into_iter()
        .map(|degree| intervals[degree] + root_pitch(key))
        .collect();
    debug!(
        "{} {} {} ({}, {:?}): {:?}",
        key,
        scale,
        symbol,
        scale.degree_label(symbol.root()),
        scale.quality(symbol.root()),
        pitches
    );
    RealizedChord {
        symbol,
        pitches,
        duration,
    }
}
