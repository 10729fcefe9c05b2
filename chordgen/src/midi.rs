// MIDI output for a generated progression.
//
// Writes a Standard MIDI File (format 1) with a tempo track and a single note
// track. Chords play back to back from beat 0; every tone of a chord starts
// on the chord's onset and is held for its full duration. One beat is one
// quarter note. All notes go to channel 0 at a fixed velocity.
//
// Uses the `midly` crate for MIDI writing.

use crate::error::{GenerateError, Result};
use crate::pipeline::Generation;
use crate::theory::{NoteName, Scale};
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Ticks per quarter note (one beat).
const TICKS_PER_BEAT: u16 = 480;

/// Note-on velocity for every tone.
pub const VELOCITY: u8 = 100;

const CHANNEL: u8 = 0;

/// Largest value a delta time or tempo field can hold.
const MAX_DELTA_TICKS: u32 = 0x0FFF_FFFF;
const MAX_TEMPO_MICROSECONDS: u32 = 0xFF_FFFF;

/// Output file name used when none is given, e.g. `C#_Major.mid`.
pub fn default_file_name(key: NoteName, scale: Scale) -> String {
    format!("{key}_{scale}.mid")
}

/// Encode `generation` as MIDI and write it to `path`.
pub fn write_midi(generation: &Generation, tempo_bpm: u16, path: &Path) -> Result<()> {
    let buf = midi_bytes(generation, tempo_bpm)?;
    std::fs::write(path, &buf)?;
    Ok(())
}

/// Encode `generation` as an in-memory SMF byte stream.
pub fn midi_bytes(generation: &Generation, tempo_bpm: u16) -> Result<Vec<u8>> {
    let smf = generation_to_smf(generation, tempo_bpm)?;
    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    Ok(buf)
}

fn key_of(pitch: i32) -> Result<u7> {
    u8::try_from(pitch)
        .ok()
        .filter(|&p| p <= 127)
        .map(u7::new)
        .ok_or(GenerateError::PitchOutOfRange(pitch))
}

/// Microseconds per beat, or `InvalidTempo` when it will not fit in 24 bits.
fn tempo_of(tempo_bpm: u16) -> Result<u24> {
    60_000_000u32
        .checked_div(tempo_bpm as u32)
        .filter(|&us| us <= MAX_TEMPO_MICROSECONDS)
        .map(u24::new)
        .ok_or(GenerateError::InvalidTempo(tempo_bpm))
}

fn ticks_of(duration: u32) -> Result<u32> {
    duration
        .checked_mul(TICKS_PER_BEAT as u32)
        .filter(|&ticks| ticks <= MAX_DELTA_TICKS)
        .ok_or(GenerateError::DurationOutOfRange(duration))
}

fn generation_to_smf(generation: &Generation, tempo_bpm: u16) -> Result<Smf<'static>> {
    let tempo = tempo_of(tempo_bpm)?;
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_BEAT)),
    ));

    // Track 0: tempo
    smf.tracks.push(vec![
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::Tempo(tempo)),
        },
        TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
        },
    ]);

    // Track 1: chords
    let channel = u4::new(CHANNEL);
    let mut track: Track<'static> = vec![TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::TrackName("Chords".as_bytes())),
    }];

    for chord in &generation.chords {
        let keys = chord
            .pitches
            .iter()
            .map(|&p| key_of(p))
            .collect::<Result<Vec<u7>>>()?;

        for &key in &keys {
            track.push(TrackEvent {
                delta: u28::new(0),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOn {
                        key,
                        vel: u7::new(VELOCITY),
                    },
                },
            });
        }

        // The first note-off carries the whole chord length; the rest follow
        // on the same tick.
        let mut delta = ticks_of(chord.duration)?;
        for &key in &keys {
            track.push(TrackEvent {
                delta: u28::new(delta),
                kind: TrackEventKind::Midi {
                    channel,
                    message: MidiMessage::NoteOff {
                        key,
                        vel: u7::new(0),
                    },
                },
            });
            delta = 0;
        }
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);

    Ok(smf)
}
