//! Tests for configuration, the achievement file, rendering and the drivers.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use voidrun_core::entity::Entity;
use voidrun_core::enums::GamePhase;
use voidrun_core::state::{FrameSnapshot, GameOverReport};
use voidrun_sim::store::{AchievementStore, MemoryStore};
use voidrun_sim::{SimConfig, SimulationEngine};

use crate::config::{AppConfig, ConfigError, DEFAULT_ACHIEVEMENT_FILE};
use crate::console::{render_grid, ConsoleSink, FrameSink, JsonSink};
use crate::file_store::FileStore;
use crate::game_loop::{spawn_game_loop, LoopCommand};
use crate::script::{parse_script, replay};

// ---- Helpers ----

/// Sink that keeps everything it is given, shareable with the test body.
#[derive(Clone, Default)]
struct RecordingSink {
    lines: Arc<Mutex<Vec<String>>>,
    frames: Arc<Mutex<Vec<FrameSnapshot>>>,
    reports: Arc<Mutex<Vec<GameOverReport>>>,
}

impl FrameSink for RecordingSink {
    fn log(&mut self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }

    fn frame(&mut self, snapshot: &FrameSnapshot) -> io::Result<()> {
        self.lines
            .lock()
            .unwrap()
            .extend(snapshot.log_lines.iter().cloned());
        self.frames.lock().unwrap().push(snapshot.clone());
        Ok(())
    }

    fn game_over(&mut self, report: &GameOverReport) -> io::Result<()> {
        self.reports.lock().unwrap().push(report.clone());
        Ok(())
    }
}

fn quiet_sim() -> SimConfig {
    SimConfig {
        start_spawn_rate: 0,
        ..Default::default()
    }
}

fn temp_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("voidrun-test-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("achievements.log")
}

// ---- Config ----

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.sim.seed, 42);
    assert!(!config.sim.verbose);
    assert_eq!(config.sim.start_spawn_rate, 2);
    assert_eq!(config.achievement_file, PathBuf::from(DEFAULT_ACHIEVEMENT_FILE));
    assert!(config.max_ticks.is_none());
}

#[test]
fn test_config_partial_toml_keeps_defaults() {
    let config = AppConfig::from_toml(
        r#"
        tick_millis = 50
        max_ticks = 300

        [sim]
        seed = 7
        verbose = true
        "#,
    )
    .unwrap();
    assert_eq!(config.tick_millis, 50);
    assert_eq!(config.max_ticks, Some(300));
    assert_eq!(config.sim.seed, 7);
    assert!(config.sim.verbose);
    assert_eq!(config.sim.start_spawn_rate, 2);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_config_parse_error() {
    let err = AppConfig::from_toml("tick_millis = \"fast\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_missing_file() {
    let err = AppConfig::load(&temp_path("no-config").with_extension("toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_log_filter_and_tick_duration() {
    let mut config = AppConfig::default();
    config.log_level = "debug".into();
    assert_eq!(config.log_filter().unwrap(), log::LevelFilter::Debug);
    config.log_level = "loud".into();
    assert!(config.log_filter().is_err());

    config.tick_millis = 0;
    assert_eq!(config.tick_duration().as_millis(), 1);
}

// ---- File store ----

#[test]
fn test_file_store_missing_file_reads_empty() {
    let store = FileStore::new(temp_path("missing"));
    assert!(store.read().unwrap().is_empty());
}

#[test]
fn test_file_store_appends_lines() {
    let path = temp_path("append");
    let mut store = FileStore::new(&path);
    store.save("Mastered: Survivor").unwrap();
    store.save("Mastered: Sharp Shooter").unwrap();

    // A fresh store on the same file sees both lines.
    let reopened = FileStore::new(&path);
    assert_eq!(
        reopened.read().unwrap(),
        vec!["Mastered: Survivor", "Mastered: Sharp Shooter"]
    );
    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn test_file_store_set_location() {
    let first = temp_path("loc-a");
    let second = temp_path("loc-b");
    let mut store = FileStore::default();
    assert_eq!(store.location(), PathBuf::from(DEFAULT_ACHIEVEMENT_FILE).as_path());

    store.set_location(&first);
    store.save("one").unwrap();
    store.set_location(&second);
    assert_eq!(store.location(), second.as_path());
    assert!(store.read().unwrap().is_empty());

    let _ = std::fs::remove_dir_all(first.parent().unwrap());
}

// ---- Console ----

#[test]
fn test_render_grid_places_glyphs() {
    let mut engine = SimulationEngine::new(quiet_sim(), Box::new(MemoryStore::new())).unwrap();
    engine.add_entity(Entity::asteroid(0, 0));
    let snap = engine.advance(1).unwrap();

    let grid = render_grid(&snap);
    let rows: Vec<&str> = grid.lines().collect();
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|r| r.len() == 10));
    assert_eq!(rows[1], "O.........");
    assert_eq!(rows[10], ".....A....");
}

#[test]
fn test_console_sink_writes_stats_and_log() {
    let mut engine = SimulationEngine::new(
        SimConfig {
            verbose: true,
            ..quiet_sim()
        },
        Box::new(MemoryStore::new()),
    )
    .unwrap();
    engine.handle_input("P");
    let snap = engine.advance(3).unwrap();

    let mut sink = ConsoleSink::new(Vec::new()).with_grid(false);
    sink.log("Game paused.").unwrap();
    sink.frame(&snap).unwrap();
    let text = String::from_utf8(sink.into_inner()).unwrap();

    assert!(text.starts_with("Game paused.\n"));
    assert!(text.contains("[tick 3] Score: 0 | Health: 100 | Level: 1 | Time Survived: 0 seconds"));
    assert!(text.contains("-- paused --"));
}

#[test]
fn test_json_sink_writes_one_record_per_line() {
    let mut engine = SimulationEngine::new(
        SimConfig {
            verbose: true,
            ..quiet_sim()
        },
        Box::new(MemoryStore::new()),
    )
    .unwrap();
    for _ in 0..5 {
        engine.add_entity(Entity::enemy(5, 9));
    }
    let mut sink = JsonSink::new(Vec::new());

    let outcome = replay(&mut engine, &parse_script("F"), Some(10), &mut sink).unwrap();
    assert_eq!(outcome.ticks, 1);

    let text = String::from_utf8(sink.into_inner()).unwrap();
    let records: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let types: Vec<&str> = records.iter().map(|r| r["type"].as_str().unwrap()).collect();
    assert_eq!(types, vec!["log", "frame", "game_over"]);

    assert_eq!(records[0]["line"], "Bullet fired!");
    let snapshot: FrameSnapshot = serde_json::from_value(records[1]["snapshot"].clone()).unwrap();
    assert_eq!(snapshot.phase, GamePhase::GameOver);
    assert_eq!(snapshot.time.tick, 1);
    assert_eq!(snapshot.stat("Health"), Some("0"));
    let report: GameOverReport = serde_json::from_value(records[2]["report"].clone()).unwrap();
    assert_eq!(report.shots_fired, 1);
    assert_eq!(Some(&report), outcome.report.as_ref());
}

// ---- Script replay ----

#[test]
fn test_parse_script() {
    assert_eq!(parse_script(" d\nD  f\tP \n"), vec!["d", "D", "f", "P"]);
    assert!(parse_script("   ").is_empty());
}

#[test]
fn test_replay_one_token_per_tick() {
    let mut engine = SimulationEngine::new(
        SimConfig {
            verbose: true,
            ..quiet_sim()
        },
        Box::new(MemoryStore::new()),
    )
    .unwrap();
    let mut sink = RecordingSink::default();
    let tokens = parse_script("D D X W");

    let outcome = replay(&mut engine, &tokens, None, &mut sink).unwrap();

    assert_eq!(outcome.ticks, 4);
    assert!(outcome.report.is_none());
    assert_eq!(engine.ship().pos().x, 7);
    assert_eq!(engine.ship().pos().y, 9);
    let lines = sink.lines.lock().unwrap();
    assert_eq!(
        *lines,
        vec![
            "Ship moved to (6, 10)",
            "Ship moved to (7, 10)",
            "Invalid input. Use W, A, S, D, F, or P.",
            "Ship moved to (7, 9)",
        ]
    );
    assert_eq!(sink.frames.lock().unwrap().len(), 4);
}

#[test]
fn test_replay_runs_to_max_ticks() {
    let mut engine = SimulationEngine::new(quiet_sim(), Box::new(MemoryStore::new())).unwrap();
    let mut sink = RecordingSink::default();
    let outcome = replay(&mut engine, &parse_script("F"), Some(12), &mut sink).unwrap();

    assert_eq!(outcome.ticks, 12);
    // The bullet climbed off the top of the grid.
    assert!(engine.registry().is_empty());
    assert_eq!(engine.stats().shots_fired(), 1);
}

#[test]
fn test_replay_stops_on_game_over() {
    let mut engine = SimulationEngine::new(quiet_sim(), Box::new(MemoryStore::new())).unwrap();
    for _ in 0..5 {
        engine.add_entity(Entity::enemy(5, 9));
    }
    let mut sink = RecordingSink::default();

    let outcome = replay(&mut engine, &[], Some(50), &mut sink).unwrap();

    assert_eq!(outcome.ticks, 1);
    let report = outcome.report.unwrap();
    assert_eq!(report.final_score, 0);
    assert_eq!(sink.reports.lock().unwrap().len(), 1);
    assert_eq!(
        sink.frames.lock().unwrap().last().unwrap().phase,
        GamePhase::GameOver
    );
}

// ---- Game loop thread ----

#[test]
fn test_command_channel_round_trip() {
    let (tx, rx) = std::sync::mpsc::channel::<LoopCommand>();
    tx.send(LoopCommand::Input("W".into())).unwrap();
    tx.send(LoopCommand::Shutdown).unwrap();

    let commands: Vec<LoopCommand> = rx.try_iter().collect();
    assert_eq!(
        commands,
        vec![LoopCommand::Input("W".into()), LoopCommand::Shutdown]
    );
}

#[test]
fn test_game_loop_stops_at_max_ticks() {
    let sink = RecordingSink::default();
    let config = AppConfig {
        sim: quiet_sim(),
        tick_millis: 1,
        max_ticks: Some(5),
        ..Default::default()
    };

    let handle =
        spawn_game_loop(config, Box::new(MemoryStore::new()), Box::new(sink.clone())).unwrap();
    let outcome = handle.join().unwrap();

    assert_eq!(outcome.ticks, 5);
    let frames = sink.frames.lock().unwrap();
    let ticks: Vec<u64> = frames.iter().map(|f| f.time.tick).collect();
    assert_eq!(ticks, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_game_loop_applies_input_before_shutdown() {
    let sink = RecordingSink::default();
    let config = AppConfig {
        sim: SimConfig {
            verbose: true,
            ..quiet_sim()
        },
        tick_millis: 20,
        ..Default::default()
    };

    let handle =
        spawn_game_loop(config, Box::new(MemoryStore::new()), Box::new(sink.clone())).unwrap();
    assert!(handle.send_input("A"));
    handle.shutdown();
    let outcome = handle.join().unwrap();

    assert!(outcome.report.is_none());
    assert!(sink
        .lines
        .lock()
        .unwrap()
        .contains(&"Ship moved to (4, 10)".to_string()));
}
