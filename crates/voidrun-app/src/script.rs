//! Headless replay of a recorded input script.
//!
//! A script is whitespace-separated tokens. One token is applied before
//! each tick; ticks run back to back with no sleeping.

use log::info;

use voidrun_sim::SimulationEngine;

use crate::console::FrameSink;
use crate::game_loop::{apply_input, run_tick, LoopError, LoopOutcome};

pub fn parse_script(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Replay `tokens` against `engine`.
///
/// Runs `max_ticks` ticks when given, otherwise one tick per token. Stops
/// early on game over.
pub fn replay(
    engine: &mut SimulationEngine,
    tokens: &[String],
    max_ticks: Option<u64>,
    sink: &mut dyn FrameSink,
) -> Result<LoopOutcome, LoopError> {
    let total = max_ticks.unwrap_or(tokens.len() as u64);
    let mut inputs = tokens.iter();

    for tick in 1..=total {
        if let Some(token) = inputs.next() {
            apply_input(engine, token, sink)?;
        }
        if let Some(report) = run_tick(engine, tick, sink)? {
            info!("Replay ended in game over at tick {tick}");
            return Ok(LoopOutcome {
                ticks: tick,
                report: Some(report),
            });
        }
    }
    info!("Replay finished after {total} ticks");
    Ok(LoopOutcome {
        ticks: total,
        report: None,
    })
}
