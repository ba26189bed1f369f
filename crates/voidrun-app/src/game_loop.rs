//! Game loop thread. Runs the simulation at a fixed tick length.
//!
//! The engine is created inside this thread and never leaves it. Input
//! tokens arrive via an `mpsc` channel and are applied between ticks, in
//! arrival order. Frames go to a `FrameSink`.

use std::io;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use voidrun_core::enums::GamePhase;
use voidrun_core::state::GameOverReport;
use voidrun_sim::store::AchievementStore;
use voidrun_sim::{SimError, SimulationEngine};

use crate::config::AppConfig;
use crate::console::FrameSink;

/// Commands sent from the input reader to the game loop thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopCommand {
    /// One raw input token, forwarded to `SimulationEngine::handle_input`.
    Input(String),
    /// Stop after the commands already queued.
    Shutdown,
}

#[derive(Debug, Error)]
pub enum LoopError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error("frame sink failed: {0}")]
    Sink(#[from] io::Error),
    #[error("game loop thread panicked")]
    Panicked,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopOutcome {
    /// Ticks advanced, paused ones included.
    pub ticks: u64,
    /// Present when the ship was destroyed.
    pub report: Option<GameOverReport>,
}

/// Owner's side of a running game loop.
pub struct GameLoopHandle {
    tx: mpsc::Sender<LoopCommand>,
    thread: JoinHandle<Result<LoopOutcome, LoopError>>,
}

impl GameLoopHandle {
    pub fn sender(&self) -> mpsc::Sender<LoopCommand> {
        self.tx.clone()
    }

    /// Queue one input token. Returns false once the loop has stopped.
    pub fn send_input(&self, token: impl Into<String>) -> bool {
        self.tx.send(LoopCommand::Input(token.into())).is_ok()
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(LoopCommand::Shutdown);
    }

    /// Wait for the loop to finish. The loop keeps running until it ends on
    /// its own or a Shutdown has been sent.
    pub fn join(self) -> Result<LoopOutcome, LoopError> {
        self.thread.join().map_err(|_| LoopError::Panicked)?
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    config: AppConfig,
    store: Box<dyn AchievementStore>,
    sink: Box<dyn FrameSink>,
) -> io::Result<GameLoopHandle> {
    let (tx, rx) = mpsc::channel::<LoopCommand>();

    let thread = std::thread::Builder::new()
        .name("voidrun-game-loop".into())
        .spawn(move || -> Result<LoopOutcome, LoopError> {
            let engine = SimulationEngine::new(config.sim.clone(), store)?;
            run_game_loop(engine, rx, sink, &config)
        })?;

    Ok(GameLoopHandle { tx, thread })
}

/// The game loop. Runs until game over, `max_ticks`, a Shutdown command or
/// channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    rx: mpsc::Receiver<LoopCommand>,
    mut sink: Box<dyn FrameSink>,
    config: &AppConfig,
) -> Result<LoopOutcome, LoopError> {
    let tick_duration = config.tick_duration();
    let mut next_tick_time = Instant::now();
    let mut tick: u64 = 0;

    loop {
        // 1. Drain all pending commands
        loop {
            match rx.try_recv() {
                Ok(LoopCommand::Input(token)) => {
                    apply_input(&mut engine, &token, sink.as_mut())?;
                }
                Ok(LoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!("Game loop stopped after {tick} ticks");
                    return Ok(LoopOutcome { ticks: tick, report: None });
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick and hand the frame over
        tick += 1;
        if let Some(report) = run_tick(&mut engine, tick, sink.as_mut())? {
            return Ok(LoopOutcome {
                ticks: tick,
                report: Some(report),
            });
        }
        if config.max_ticks.is_some_and(|max| tick >= max) {
            info!("Tick limit reached ({tick})");
            return Ok(LoopOutcome { ticks: tick, report: None });
        }

        // 3. Sleep until next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, reset to avoid catch-up spiral
            debug!("game loop fell behind at tick {tick}");
            next_tick_time = now;
        }
    }
}

/// Route one token to the engine and show what it produced.
pub(crate) fn apply_input(
    engine: &mut SimulationEngine,
    token: &str,
    sink: &mut dyn FrameSink,
) -> Result<(), LoopError> {
    for event in engine.handle_input(token) {
        sink.log(&event.to_string())?;
    }
    Ok(())
}

/// Advance one tick and render it. Returns the final report once the game is over.
pub(crate) fn run_tick(
    engine: &mut SimulationEngine,
    tick: u64,
    sink: &mut dyn FrameSink,
) -> Result<Option<GameOverReport>, LoopError> {
    let snapshot = engine.advance(tick)?;
    sink.frame(&snapshot)?;
    if snapshot.phase != GamePhase::GameOver {
        return Ok(None);
    }
    let report = engine.game_over_report().cloned();
    if let Some(report) = &report {
        sink.game_over(report)?;
    }
    Ok(report)
}
