// chordgen CLI entry point.
//
// Resolves configuration (optional JSON file, then flags on top), generates a
// progression, prints it, and writes it to MIDI.
//
// Usage:
//   cargo run -p chordgen -- --progression-duration 16 --min-chord-duration 1
//     --max-chord-duration 4 -i
//   cargo run -p chordgen -- --base-note D --scale Minor --progression-name II-V-I
//     --chord-duration 4 --seed 7 --output two_five_one.mid
//
// Set RUST_LOG=chordgen=debug to see every realized chord.

use chordgen::config::GeneratorConfig;
use chordgen::error::Result;
use chordgen::midi::{default_file_name, write_midi};
use chordgen::pipeline::generate;
use chordgen_prng::{SeededRng, entropy_seed};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Generate a chord progression and write it as a MIDI file
#[derive(Parser)]
#[command(name = "generate", version, about, long_about = None)]
struct Cli {
    /// JSON config file; flags given here override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Key root (C, C#, D, ... B); random when omitted
    #[arg(long)]
    base_note: Option<String>,

    /// Scale (Major or Minor); random when omitted
    #[arg(short, long)]
    scale: Option<String>,

    /// Named preset: II-V-I, I-V-VI-IV, I-IV-V-I or wow
    #[arg(long)]
    progression_name: Option<String>,

    /// Number of random chords (with --chord-duration)
    #[arg(long)]
    progression_length: Option<usize>,

    /// Beats per chord for presets and fixed-length progressions
    #[arg(long)]
    chord_duration: Option<u32>,

    /// Total beats to fill with randomly timed chords
    #[arg(long)]
    progression_duration: Option<u32>,

    /// Shortest chord, in beats, when filling a total duration
    #[arg(long)]
    min_chord_duration: Option<u32>,

    /// Longest chord, in beats, when filling a total duration
    #[arg(long)]
    max_chord_duration: Option<u32>,

    /// Fold chord tones to within an octave of the key root
    #[arg(short = 'i', long)]
    auto_inversions: bool,

    /// Tempo in BPM (default 60)
    #[arg(long)]
    tempo: Option<u16>,

    /// Seed for reproducible output; drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Output path (default: <key>_<scale>.mid)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also print the generated chords as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(v) = &self.base_note {
            config.base_note = Some(v.clone());
        }
        if let Some(v) = &self.scale {
            config.scale = Some(v.clone());
        }
        if let Some(v) = &self.progression_name {
            config.progression_name = v.clone();
        }
        if let Some(v) = self.progression_length {
            config.progression_length = v;
        }
        if let Some(v) = self.chord_duration {
            config.chord_duration = v;
        }
        if let Some(v) = self.progression_duration {
            config.progression_duration = v;
        }
        if let Some(v) = self.min_chord_duration {
            config.min_chord_duration = v;
        }
        if let Some(v) = self.max_chord_duration {
            config.max_chord_duration = v;
        }
        if let Some(v) = self.tempo {
            config.tempo_bpm = v;
        }
        config.auto_inversions |= self.auto_inversions;
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    cli.apply(&mut config);

    let seed = match cli.seed {
        Some(seed) => seed,
        None => entropy_seed()?,
    };
    info!("seed {seed}");
    let mut rng = SeededRng::new(seed);

    let settings = config.resolve(&mut rng)?;
    let generation = generate(&settings, &mut rng);

    let symbols: Vec<String> = generation.symbols().iter().map(|s| s.to_string()).collect();
    println!("{} {} {:?}", generation.key, generation.scale, symbols);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&generation)?);
    }

    let path = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(default_file_name(generation.key, generation.scale)));
    write_midi(&generation, settings.tempo_bpm, &path)?;
    info!(
        "wrote {} chords ({} beats at {} BPM) to {}",
        generation.chords.len(),
        generation.total_beats(),
        settings.tempo_bpm,
        path.display()
    );
    Ok(())
}
