//! VOIDRUN console driver.
//!
//! Wires the simulation to a terminal: configuration, the achievement file,
//! the tick loop thread and the console renderer.

pub mod config;
pub mod console;
pub mod file_store;
pub mod game_loop;
pub mod script;

pub use voidrun_core as core;

#[cfg(test)]
mod tests;
