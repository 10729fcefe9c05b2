// Voice arrangement: octave placement of a realized chord's tones.
//
// Two passes. The ascending pass lifts each tone by octaves until it is not
// below its predecessor. The optional inversion pass then folds every tone
// down by octaves until it sits no more than an octave above the key root.
// Folding can reorder tones, so an inverted chord is re-sorted ascending
// afterwards; the pitch-class content never changes.

use crate::realize::{RealizedChord, root_pitch};
use crate::theory::NoteName;

const OCTAVE: i32 = 12;

/// Arrange `chord` in place.
pub fn arrange(chord: &mut RealizedChord, key: NoteName, auto_inversions: bool) {
    ascend(&mut chord.pitches);
    if auto_inversions {
        invert(&mut chord.pitches, root_pitch(key) + OCTAVE);
        chord.pitches.sort_unstable();
    }
}

/// Raise tones by octaves, left to right, until the list is non-decreasing.
/// Positions are never swapped.
pub fn ascend(pitches: &mut [i32]) {
    for i in 1..pitches.len() {
        while pitches[i] < pitches[i - 1] {
            pitches[i] += OCTAVE;
        }
    }
}

/// Lower every tone above `ceiling` by octaves until it is at or below it.
pub fn invert(pitches: &mut [i32], ceiling: i32) {
    for pitch in pitches.iter_mut() {
        while *pitch > ceiling {
            *pitch -= OCTAVE;
        }
    }
}
