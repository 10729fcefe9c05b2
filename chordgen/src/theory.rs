// Static music-theory tables: note names, scales, and degree symbols.
//
// Everything here is immutable `const` data plus pure lookups. The three
// string-level lookups (`note_index`, `scale_intervals`, `degree_tones`) are
// what configuration parsing goes through; the rest of the pipeline works on
// the typed forms (`NoteName`, `Scale`, `DegreeSymbol`) once they are parsed.
//
// Chord qualities per scale degree are recorded for display and logging only.
// Pitch derivation in realize.rs never consults them: a diminished triad is
// built from scale tones exactly like any other triad.

use crate::error::{GenerateError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the twelve pitch classes. The index (C = 0 .. B = 11) is the only
/// value used downstream; sharps are the canonical spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteName {
    C,
    #[serde(rename = "C#")]
    CSharp,
    D,
    #[serde(rename = "D#")]
    DSharp,
    E,
    F,
    #[serde(rename = "F#")]
    FSharp,
    G,
    #[serde(rename = "G#")]
    GSharp,
    A,
    #[serde(rename = "A#")]
    ASharp,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    const NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];

    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize]
    }
}

impl FromStr for NoteName {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .position(|&n| n == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| GenerateError::UnknownNote(s.to_string()))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Triad color of a scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
}

/// The supported scales, each a pattern of seven semitone offsets from the
/// root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    Major,
    Minor,
}

impl Scale {
    pub const ALL: [Scale; 2] = [Scale::Major, Scale::Minor];

    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "Major",
            Scale::Minor => "Minor",
        }
    }

    /// Semitone offsets from the root for degrees I..VII.
    pub fn intervals(self) -> [i32; 7] {
        match self {
            Scale::Major => [0, 2, 4, 5, 7, 9, 11],
            Scale::Minor => [0, 2, 3, 5, 7, 8, 10],
        }
    }

    /// Triad quality of the chord built on `degree` (0-based, taken mod 7).
    pub fn quality(self, degree: usize) -> ChordQuality {
        use ChordQuality::*;
        let table = match self {
            Scale::Major => [Major, Minor, Minor, Major, Major, Minor, Diminished],
            Scale::Minor => [Minor, Diminished, Major, Minor, Minor, Major, Major],
        };
        table[degree % 7]
    }

    /// Roman-numeral label for `degree`, lowercase for minor and diminished
    /// triads (I, ii, iii, IV, ...).
    pub fn degree_label(self, degree: usize) -> String {
        let numeral = NUMERALS[degree % 7];
        match self.quality(degree) {
            ChordQuality::Major => numeral.to_string(),
            ChordQuality::Minor => numeral.to_lowercase(),
            // Major keeps its leading-tone triad uppercase.
            ChordQuality::Diminished if self == Scale::Major => numeral.to_string(),
            ChordQuality::Diminished => numeral.to_lowercase(),
        }
    }
}

impl FromStr for Scale {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|scale| scale.name() == s)
            .ok_or_else(|| GenerateError::UnknownScale(s.to_string()))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

const SEVENTH_SUFFIX: &str = "-7";

/// A roman-numeral chord request: `V` for a triad on the fifth degree, `V-7`
/// for the seventh chord on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DegreeSymbol {
    root: u8,
    seventh: bool,
}

impl DegreeSymbol {
    /// All fourteen symbols: the triads I..VII, then the sevenths I-7..VII-7.
    pub const ALL: [DegreeSymbol; 14] = [
        Self::triad(0),
        Self::triad(1),
        Self::triad(2),
        Self::triad(3),
        Self::triad(4),
        Self::triad(5),
        Self::triad(6),
        Self::seventh(0),
        Self::seventh(1),
        Self::seventh(2),
        Self::seventh(3),
        Self::seventh(4),
        Self::seventh(5),
        Self::seventh(6),
    ];

    pub const fn triad(root: u8) -> Self {
        DegreeSymbol {
            root: root % 7,
            seventh: false,
        }
    }

    pub const fn seventh(root: u8) -> Self {
        DegreeSymbol {
            root: root % 7,
            seventh: true,
        }
    }

    /// Zero-based scale degree of the chord root (I = 0 .. VII = 6).
    pub fn root(self) -> usize {
        self.root as usize
    }

    pub fn is_seventh(self) -> bool {
        self.seventh
    }

    /// Scale-degree indices of the chord tones, stacked in thirds from the
    /// root: `[d, d+2, d+4]`, plus `d+6` for a seventh, all mod 7.
    pub fn tones(self) -> Vec<usize> {
        let count = if self.seventh { 4 } else { 3 };
        (0..count).map(|k| (self.root() + 2 * k) % 7).collect()
    }
}

impl FromStr for DegreeSymbol {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self> {
        let (numeral, seventh) = match s.strip_suffix(SEVENTH_SUFFIX) {
            Some(head) => (head, true),
            None => (s, false),
        };
        let root = NUMERALS
            .iter()
            .position(|&n| n == numeral)
            .ok_or_else(|| GenerateError::UnknownDegree(s.to_string()))?;
        Ok(DegreeSymbol {
            root: root as u8,
            seventh,
        })
    }
}

impl TryFrom<String> for DegreeSymbol {
    type Error = GenerateError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<DegreeSymbol> for String {
    fn from(symbol: DegreeSymbol) -> String {
        symbol.to_string()
    }
}

impl fmt::Display for DegreeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NUMERALS[self.root()])?;
        if self.seventh {
            f.write_str(SEVENTH_SUFFIX)?;
        }
        Ok(())
    }
}

/// Pitch-class index (0-11) of a canonical note name.
pub fn note_index(name: &str) -> Result<i32> {
    Ok(name.parse::<NoteName>()?.index())
}

/// Semitone offsets of the named scale.
pub fn scale_intervals(scale_name: &str) -> Result<[i32; 7]> {
    Ok(scale_name.parse::<Scale>()?.intervals())
}

/// Zero-based scale-degree indices of a degree symbol's chord tones.
pub fn degree_tones(symbol: &str) -> Result<Vec<usize>> {
    Ok(symbol.parse::<DegreeSymbol>()?.tones())
}
