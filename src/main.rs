// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::Result;

use chordsheet::config::PracticeFile;
use chordsheet::{Engine, Rhythm, Score};

fn print_usage() {
    println!("CHORDSHEET - Chord Progression Practice Sheets");
    println!();
    println!("Usage: chordsheet [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --list-progressions               List progressions by category");
    println!("  --list-keys                       List available keys");
    println!("  --list-rhythms                    List rhythm styles");
    println!("  --render <PROG> <KEY> [RHYTHM]    Render a progression (default rhythm: block)");
    println!("  --config <FILE>                   Render the selections from a YAML config file");
    println!("  --yaml                            Emit the rendered score as YAML");
    println!("  --help                            Show this help message");
}

fn list_progressions(engine: &Engine) {
    for category in engine.catalog().categories() {
        println!("{}:", category);
        for name in engine.catalog().progression_names(category) {
            println!("  {}", name);
        }
    }
}

fn list_keys(engine: &Engine) {
    for key in engine.catalog().keys() {
        println!("{:<10} ({})", key.name, key.symbol);
    }
}

fn list_rhythms() {
    for rhythm in Rhythm::ALL {
        println!(
            "{:<12} {} events per chord",
            rhythm.name(),
            rhythm.events_per_chord()
        );
    }
}

fn print_score(score: &Score, as_yaml: bool) -> Result<()> {
    if as_yaml {
        print!("{}", serde_yaml::to_string(score)?);
        return Ok(());
    }

    for (index, event) in score.events.iter().enumerate() {
        let pitches: Vec<String> = event.pitches.iter().map(|p| p.to_string()).collect();
        let label = event.label.as_deref().unwrap_or("");
        println!(
            "{:>3}: {:<22} {:>2}  {}",
            index + 1,
            pitches.join(" "),
            event.duration.code(),
            label
        );
    }

    if score.beams.is_empty() {
        println!("Beams: none");
    } else {
        let spans: Vec<String> = score
            .beams
            .iter()
            .map(|b| format!("[{}-{}]", b.start, b.end - 1))
            .collect();
        println!("Beams: {}", spans.join(" "));
    }

    Ok(())
}

fn render_selection(
    engine: &Engine,
    progression: &str,
    key: &str,
    rhythm: &str,
    as_yaml: bool,
) -> Result<()> {
    let rhythm = match Rhythm::from_str(rhythm) {
        Some(rhythm) => rhythm,
        None => {
            println!("Nothing to render: unknown rhythm {:?}", rhythm);
            return Ok(());
        }
    };

    match engine.render(progression, key, rhythm) {
        Some(score) => print_score(&score, as_yaml)?,
        None => println!("Nothing to render: unknown progression or key"),
    }

    Ok(())
}

fn render_from_config(engine: &Engine, path: &str, as_yaml: bool) -> Result<()> {
    let file = PracticeFile::load(path)?;
    for warning in file.validate(engine.catalog()) {
        eprintln!("Warning: {}", warning);
    }

    render_selection(
        engine,
        &file.practice.progression,
        &file.practice.key,
        &file.practice.rhythm,
        as_yaml,
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("CHORDSHEET - Chord Progression Practice Sheets");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let as_yaml = args.iter().any(|arg| arg == "--yaml");
    let args: Vec<String> = args.into_iter().filter(|arg| arg != "--yaml").collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    match args[1].as_str() {
        "--list-progressions" => {
            let engine = Engine::new()?;
            list_progressions(&engine);
        }
        "--list-keys" => {
            let engine = Engine::new()?;
            list_keys(&engine);
        }
        "--list-rhythms" => {
            list_rhythms();
        }
        "--render" => {
            if args.len() < 4 {
                eprintln!("Error: --render requires a progression name and a key name");
                eprintln!("Use --list-progressions and --list-keys to see the catalogs");
                std::process::exit(1);
            }
            let rhythm = if args.len() >= 5 { args[4].as_str() } else { "block" };
            let engine = Engine::new()?;
            render_selection(&engine, &args[2], &args[3], rhythm, as_yaml)?;
        }
        "--config" => {
            if args.len() < 3 {
                eprintln!("Error: --config requires a file path");
                std::process::exit(1);
            }
            let engine = Engine::new()?;
            render_from_config(&engine, &args[2], as_yaml)?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
