//! Example: compute harmonic matches for a key and tempo
//!
//! Usage: cargo run --example match_key -- <KEY> <BPM> [--json]
//!
//! Prints the match lists and pitch-shift choices for the given Camelot
//! key, e.g. `cargo run --example match_key -- 8A 120`.

use std::process;

use harmonic_match::{find_matches, CamelotKey, EngineConfig, Match, PitchChoice};

fn print_matches(title: &str, matches: &[Match]) {
    println!("{}:", title);
    for m in matches {
        println!(
            "  {:>3}  {:6.2}-{:6.2} BPM  {} - {}",
            m.key.to_string(),
            m.bpm_range.lower,
            m.bpm_range.upper,
            m.kind,
            m.description
        );
    }
}

fn print_choices(title: &str, choices: &[PitchChoice]) {
    println!("{}:", title);
    for c in choices {
        println!(
            "  {:>3} @ {:6.2} BPM -> {:3}  ({})",
            c.original_key.to_string(),
            c.bpm,
            c.becomes_key.to_string(),
            c.match_type
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <KEY> <BPM> [--json]", args[0]);
        eprintln!("Example: {} 8A 120", args[0]);
        process::exit(1);
    }

    let key: CamelotKey = args[1].parse()?;
    let bpm: f64 = args[2].parse()?;
    let as_json = args.iter().any(|a| a == "--json");

    let config = EngineConfig::default();
    let result = find_matches(key, config.clamp_bpm(bpm), &config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Key {} at {:.2}-{:.2} BPM (pitched up: {}, pitched down: {})",
        result.original.key,
        result.original.bpm_range.lower,
        result.original.bpm_range.upper,
        result.original.pitched_up_becomes,
        result.original.pitched_down_becomes
    );
    println!();
    print_matches("Perfect matches", &result.perfect_matches);
    print_matches("Good matches", &result.good_matches);
    print_matches("Advanced matches", &result.advanced_matches);
    println!();
    print_choices("Pitch UP these to match", &result.pitch_up_choices);
    print_choices("Pitch DOWN these to match", &result.pitch_down_choices);

    Ok(())
}
