//! Simulation engine for VOIDRUN.
//!
//! Owns the entity registry, the ship, player statistics and achievements,
//! runs the per-tick systems in a fixed order, and produces
//! `FrameSnapshot`s for the driver. Completely headless, enabling
//! deterministic testing.

pub mod achievements;
pub mod clock;
pub mod engine;
pub mod registry;
pub mod rng;
pub mod stats;
pub mod store;
pub mod systems;

pub use engine::{SimConfig, SimError, SimulationEngine};
pub use voidrun_core as core;
