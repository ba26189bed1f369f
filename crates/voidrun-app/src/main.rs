use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};

use voidrun_app::config::AppConfig;
use voidrun_app::console::{ConsoleSink, FrameSink, JsonSink};
use voidrun_app::file_store::FileStore;
use voidrun_app::game_loop::{self, LoopCommand};
use voidrun_app::script;
use voidrun_sim::store::AchievementStore;
use voidrun_sim::SimulationEngine;

fn cli() -> Command {
    Command::new("voidrun")
        .about("Grid-based space shooter. Type W/A/S/D to move, F to fire, P to pause, then Enter.")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(clap::value_parser!(u64))
                .help("Spawn RNG seed"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Report movement, shots, hits, pickups and level-ups"),
        )
        .arg(
            Arg::new("ticks")
                .short('t')
                .long("ticks")
                .value_name("N")
                .value_parser(clap::value_parser!(u64))
                .help("Stop after N ticks"),
        )
        .arg(
            Arg::new("achievements")
                .long("achievements")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("File mastered achievements are appended to"),
        )
        .arg(
            Arg::new("script")
                .long("script")
                .value_name("FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Replay whitespace-separated input tokens headlessly, one per tick"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Write frames as JSON Lines instead of drawing the grid"),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .action(ArgAction::SetTrue)
                .help("Print previously mastered achievements and exit"),
        )
}

fn frame_sink(json: bool) -> Box<dyn FrameSink> {
    if json {
        Box::new(JsonSink::stdout())
    } else {
        Box::new(ConsoleSink::stdout())
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(seed) = matches.get_one::<u64>("seed") {
        config.sim.seed = *seed;
    }
    if matches.get_flag("verbose") {
        config.sim.verbose = true;
    }
    if let Some(ticks) = matches.get_one::<u64>("ticks") {
        config.max_ticks = Some(*ticks);
    }
    if let Some(path) = matches.get_one::<PathBuf>("achievements") {
        config.achievement_file = path.clone();
    }

    env_logger::Builder::new()
        .filter_level(config.log_filter().context("Invalid log level")?)
        .parse_default_env()
        .init();

    let store = FileStore::new(&config.achievement_file);

    if matches.get_flag("history") {
        let lines = store.read().with_context(|| {
            format!("Failed to read {}", store.location().display())
        })?;
        if lines.is_empty() {
            println!("No achievements mastered yet.");
        }
        for line in lines {
            println!("{line}");
        }
        return Ok(());
    }

    if let Some(path) = matches.get_one::<PathBuf>("script") {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let tokens = script::parse_script(&text);
        let mut engine = SimulationEngine::new(config.sim.clone(), Box::new(store))?;
        let mut sink = frame_sink(matches.get_flag("json"));
        let outcome = script::replay(&mut engine, &tokens, config.max_ticks, sink.as_mut())?;
        log::info!("Replayed {} tokens over {} ticks", tokens.len(), outcome.ticks);
        return Ok(());
    }

    let handle = game_loop::spawn_game_loop(
        config,
        Box::new(store),
        frame_sink(matches.get_flag("json")),
    )
    .context("Failed to spawn game loop thread")?;

    let tx = handle.sender();
    std::thread::Builder::new()
        .name("voidrun-input".into())
        .spawn(move || {
            for line in io::stdin().lock().lines().map_while(Result::ok) {
                for token in line.split_whitespace() {
                    if tx.send(LoopCommand::Input(token.to_string())).is_err() {
                        return;
                    }
                }
            }
            let _ = tx.send(LoopCommand::Shutdown);
        })
        .context("Failed to spawn input thread")?;

    let outcome = handle.join()?;
    if outcome.report.is_none() {
        log::info!("Stopped after {} ticks", outcome.ticks);
    }
    Ok(())
}
