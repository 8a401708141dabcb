//! rfgrid-playtest: headless harness for the RF GRID scoring engine.
//!
//! Usage:
//!   rfgrid-playtest score --bs 2 --ris 1 --array 0
//!   rfgrid-playtest level
//!   rfgrid-playtest replay --script session.json [--seed 42] [--ticks 300]

use std::path::PathBuf;
use std::process;

use rfgrid_core::commands::PlayerCommand;
use rfgrid_core::enums::{ComponentKind, LevelId};
use rfgrid_sim::level::build_level;
use rfgrid_sim::objectives::evaluate;
use rfgrid_sim::scoring::{is_success, score_counts, KindCounts};
use rfgrid_sim::{PlacementEngine, SimConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "score" => cmd_score(&args[2..]),
        "level" => cmd_level(),
        "replay" => cmd_replay(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "rfgrid-playtest: RF GRID scoring harness\n\
         \n\
         Commands:\n\
         \n\
         score     Score a board described by piece counts\n\
         \n\
           --bs <N>       Number of 28 GHz base stations (default: 0)\n\
           --ris <N>      Number of RIS panels (default: 0)\n\
           --array <N>    Number of phased arrays (default: 0)\n\
         \n\
         level     Print the Fenway level configuration as JSON\n\
         \n\
         replay    Feed a JSON array of player commands to the controller\n\
         \n\
           --script <path>  Command script (JSON array of PlayerCommand)\n\
           --seed <N>       RNG seed for component ids (default: 42)\n\
           --ticks <N>      Ticks to run after queueing (default: 300)\n\
         \n\
         Examples:\n\
         \n\
           rfgrid-playtest score --bs 2 --ris 1\n\
           rfgrid-playtest replay --script tools/rfgrid-playtest/demos/fenway_walkthrough.json\n"
    );
}

fn cmd_score(args: &[String]) {
    let mut counts = KindCounts::default();

    let mut i = 0;
    while i < args.len() {
        let target = match args[i].as_str() {
            "--bs" => &mut counts.transmitters,
            "--ris" => &mut counts.ris_panels,
            "--array" => &mut counts.phased_arrays,
            other => {
                eprintln!("Unknown option: {other}");
                process::exit(1);
            }
        };
        i += 1;
        *target = parse_number(args.get(i), &args[i - 1]);
        i += 1;
    }

    let metrics = score_counts(&counts);
    let level = build_level(LevelId::Fenway);
    let objectives = evaluate(&level.objectives, &metrics);

    log::info!(
        "{} transmitters, {} RIS, {} arrays",
        counts.transmitters,
        counts.ris_panels,
        counts.phased_arrays
    );

    let report = serde_json::json!({
        "metrics": metrics,
        "objectives": objectives,
        "success": is_success(&metrics),
    });
    print_json(&report);
}

fn cmd_level() {
    let level = build_level(LevelId::Fenway);
    let catalog: Vec<_> = ComponentKind::ALL
        .iter()
        .map(|kind| (kind, rfgrid_core::catalog::definition(*kind)))
        .collect();
    print_json(&serde_json::json!({
        "level": level,
        "catalog": catalog,
    }));
}

fn cmd_replay(args: &[String]) {
    let mut script: Option<PathBuf> = None;
    let mut config = SimConfig::default();
    let mut ticks: u64 = 300;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--script" => {
                i += 1;
                script = args.get(i).map(PathBuf::from);
            }
            "--seed" => {
                i += 1;
                config.seed = parse_number(args.get(i), "--seed");
            }
            "--ticks" => {
                i += 1;
                ticks = parse_number(args.get(i), "--ticks");
            }
            other => {
                eprintln!("Unknown option: {other}");
                process::exit(1);
            }
        }
        i += 1;
    }

    let Some(script) = script else {
        eprintln!("Error: --script is required");
        process::exit(1);
    };

    let json = match std::fs::read_to_string(&script) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error reading {}: {e}", script.display());
            process::exit(1);
        }
    };
    let commands: Vec<PlayerCommand> = match serde_json::from_str(&json) {
        Ok(commands) => commands,
        Err(e) => {
            eprintln!("Error parsing {}: {e}", script.display());
            process::exit(1);
        }
    };

    log::info!(
        "replaying {} commands from {} for {ticks} ticks",
        commands.len(),
        script.display()
    );

    let mut engine = PlacementEngine::new(config);
    engine.queue_commands(commands);

    let mut alerts = Vec::new();
    let mut events = Vec::new();
    let mut last = engine.take_snapshot();
    for _ in 0..ticks {
        last = engine.tick();
        alerts.append(&mut last.alerts);
        events.append(&mut last.events);
    }
    last.alerts = alerts;
    last.events = events;

    print_json(&last);
}

fn parse_number<T: std::str::FromStr>(value: Option<&String>, flag: &str) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("Error: {flag} expects a number");
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            process::exit(1);
        }
    }
}
