// End-to-end: configuration in, MIDI file out.

use chordgen::config::GeneratorConfig;
use chordgen::midi::{VELOCITY, write_midi};
use chordgen::pipeline::run;
use chordgen_prng::SeededRng;
use midly::{MidiMessage, Smf, TrackEventKind};

fn note_ons(smf: &Smf) -> Vec<(u32, u8, u8)> {
    let mut tick = 0;
    let mut out = Vec::new();
    for event in &smf.tracks[1] {
        tick += event.delta.as_int();
        if let TrackEventKind::Midi {
            message: MidiMessage::NoteOn { key, vel },
            ..
        } = &event.kind
        {
            out.push((tick, key.as_int(), vel.as_int()));
        }
    }
    out
}

#[test]
fn preset_progression_round_trips_through_midi() {
    let config = GeneratorConfig {
        base_note: Some("C".into()),
        scale: Some("Major".into()),
        progression_name: "II-V-I".into(),
        chord_duration: 4,
        ..Default::default()
    };
    let generation = run(&config, &mut SeededRng::new(1)).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("C_Major.mid");
    write_midi(&generation, config.tempo_bpm, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let smf = Smf::parse(&bytes).unwrap();
    assert_eq!(smf.tracks.len(), 2);
    assert_eq!(
        note_ons(&smf),
        vec![
            (0, 62, VELOCITY),
            (0, 65, VELOCITY),
            (0, 69, VELOCITY),
            (1920, 67, VELOCITY),
            (1920, 71, VELOCITY),
            (1920, 74, VELOCITY),
            (3840, 60, VELOCITY),
            (3840, 64, VELOCITY),
            (3840, 67, VELOCITY),
        ]
    );
}

#[test]
fn budget_progression_covers_requested_beats() {
    let config = GeneratorConfig {
        progression_duration: 16,
        min_chord_duration: 1,
        max_chord_duration: 4,
        auto_inversions: true,
        ..Default::default()
    };
    for seed in 0..20 {
        let generation = run(&config, &mut SeededRng::new(seed)).unwrap();
        assert_eq!(generation.total_beats(), 16);
        let ceiling = 60 + generation.key.index() + 12;
        for chord in &generation.chords {
            assert!(chord.is_ascending());
            assert!(chord.pitches.iter().all(|&p| p <= ceiling));
        }
        let dir = tempfile::tempdir().unwrap();
        write_midi(&generation, 60, &dir.path().join("out.mid")).unwrap();
    }
}

#[test]
fn event_list_serializes() {
    let config = GeneratorConfig {
        base_note: Some("A".into()),
        scale: Some("Minor".into()),
        progression_name: "wow".into(),
        chord_duration: 2,
        ..Default::default()
    };
    let generation = run(&config, &mut SeededRng::new(3)).unwrap();
    let json = serde_json::to_value(&generation).unwrap();
    assert_eq!(json["key"], "A");
    assert_eq!(json["scale"], "Minor");
    assert_eq!(json["chords"][1]["symbol"], "VII-7");
    assert_eq!(json["chords"][0]["duration"], 2);
}
