// chordgen: scale-degree chord progression generator.
//
// Builds a progression of roman-numeral chord symbols, realizes each symbol
// as absolute MIDI pitches in a chosen key and scale, arranges the voicing,
// and schedules the chords in time. The resulting event list (pitch set plus
// duration per chord) is handed to a sink; the bundled sink writes MIDI.
//
// Architecture:
// - theory.rs: Static tables: note names, scales, degree symbols and their tones
// - schedule.rs: Scheduling modes and per-chord duration generation
// - progression.rs: Named presets and random symbol selection
// - realize.rs: Degree symbol -> absolute pitches
// - voicing.rs: Ascending-order and inversion passes
// - config.rs: Raw configuration and its resolution into run settings
// - pipeline.rs: schedule -> select -> realize -> arrange
// - midi.rs: MIDI file output
// - error.rs: Error type shared by all of the above
//
// All randomness flows through one `chordgen_prng::SeededRng` passed in by
// the caller, so output is reproducible given a seed.

pub mod config;
pub mod error;
pub mod midi;
pub mod pipeline;
pub mod progression;
pub mod realize;
pub mod schedule;
pub mod theory;
pub mod voicing;
