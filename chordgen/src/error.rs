// Error types for progression generation.
//
// Lookup failures (note, scale, degree, preset) and invalid scheduling bounds
// are detected while resolving configuration, before any chord is realized,
// so a failed run never produces partial output. The MIDI sink adds its own
// failure cases (pitch range, I/O).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("unknown note '{0}' (expected one of C, C#, D, D#, E, F, F#, G, G#, A, A#, B)")]
    UnknownNote(String),
    #[error("unknown scale '{0}' (expected Major or Minor)")]
    UnknownScale(String),
    #[error("unknown degree symbol '{0}'")]
    UnknownDegree(String),
    #[error("unknown progression preset '{0}'")]
    UnknownProgression(String),
    #[error("minimum chord duration {min} exceeds maximum {max}")]
    InvalidDurationBounds { min: u32, max: u32 },
    #[error("tempo {0} BPM cannot be written as MIDI (minimum 4 BPM)")]
    InvalidTempo(u16),
    #[error("chord duration of {0} beats is too long to write as MIDI")]
    DurationOutOfRange(u32),
    #[error("pitch {0} cannot be written as a MIDI key (0-127)")]
    PitchOutOfRange(i32),
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
