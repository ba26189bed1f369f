//! Core types and definitions for the VOIDRUN simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! grid types, entities, the ship, commands, state snapshots, events,
//! errors, and constants. It has no dependency on any runtime or driver.

pub mod commands;
pub mod constants;
pub mod entity;
pub mod enums;
pub mod error;
pub mod events;
pub mod ship;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
