// keychord voicing CLI.
//
// Voices a chord progression given as chord symbols and prints one line per
// chord: the symbol, the note names bass-first, and how far the voices moved
// from the previous chord. With `--json` it prints the voicings as a JSON
// array instead.
//
// Usage:
//   voice [CHORD ...] [OPTIONS]
//     --config <PATH>     JSON VoicingConfig (default: built-in C3..C6, 5 voices)
//     --min-note <N>      Lowest playable MIDI pitch
//     --max-note <N>      Highest playable MIDI pitch
//     --voices <N>        Voices per chord, bass included
//     --json              Print voicings as JSON
//
// Example:
//   voice C Am/E F G7
//
// Set RUST_LOG=keychord_voicing=debug to see fallback decisions.

use std::path::PathBuf;

use keychord_voicing::{ChordIntent, VoicingConfig, movement_cost, voice_progression};
use tracing_subscriber::EnvFilter;

struct Args {
    chords: Vec<String>,
    config_path: Option<PathBuf>,
    min_note: Option<u8>,
    max_note: Option<u8>,
    voices: Option<usize>,
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args();

    let mut config = match &args.config_path {
        Some(path) => VoicingConfig::load(path).unwrap_or_else(|e| {
            eprintln!("Failed to load {}: {e}", path.display());
            std::process::exit(1);
        }),
        None => VoicingConfig::default(),
    };
    if let Some(n) = args.min_note {
        config.min_note = n;
    }
    if let Some(n) = args.max_note {
        config.max_note = n;
    }
    if let Some(n) = args.voices {
        config.voice_count = n;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    }

    if args.chords.is_empty() {
        eprintln!("No chords given. Example: voice C Am/E F G7");
        std::process::exit(1);
    }

    let intents: Vec<ChordIntent> = args
        .chords
        .iter()
        .map(|symbol| {
            ChordIntent::parse(symbol, config.min_note).unwrap_or_else(|e| {
                eprintln!("Bad chord {symbol:?}: {e}");
                std::process::exit(1);
            })
        })
        .collect();

    let voicings = voice_progression(&intents, None, &config);

    if args.json {
        match serde_json::to_string_pretty(&voicings) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize voicings: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut total = 0;
    for (i, (intent, voicing)) in intents.iter().zip(&voicings).enumerate() {
        let names = voicing.names().join(" ");
        if i == 0 {
            println!("{:<10} {}", intent.symbol(), names);
        } else {
            let moved = movement_cost(&voicings[i - 1].notes, &voicing.notes);
            total += moved;
            println!("{:<10} {:<24} (moved {moved})", intent.symbol(), names);
        }
    }
    if voicings.len() > 1 {
        println!("Total movement: {total} semitones");
    }
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching,
/// like the project's other binaries.
fn parse_args() -> Args {
    let mut args = Args {
        chords: Vec::new(),
        config_path: None,
        min_note: None,
        max_note: None,
        voices: None,
        json: false,
    };
    let argv: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < argv.len() {
        match argv[i].as_str() {
            "--config" => {
                i += 1;
                args.config_path = Some(argv.get(i).map(PathBuf::from).unwrap_or_else(|| {
                    eprintln!("--config requires a path");
                    std::process::exit(1);
                }));
            }
            "--min-note" => {
                i += 1;
                args.min_note = Some(parse_value(&argv, i, "--min-note"));
            }
            "--max-note" => {
                i += 1;
                args.max_note = Some(parse_value(&argv, i, "--max-note"));
            }
            "--voices" => {
                i += 1;
                args.voices = Some(parse_value(&argv, i, "--voices"));
            }
            "--json" => args.json = true,
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {other}");
                std::process::exit(1);
            }
            chord => args.chords.push(chord.to_string()),
        }
        i += 1;
    }

    args
}

fn parse_value<T: std::str::FromStr>(argv: &[String], i: usize, flag: &str) -> T {
    argv.get(i).and_then(|v| v.parse().ok()).unwrap_or_else(|| {
        eprintln!("{flag} requires a valid number");
        std::process::exit(1);
    })
}
