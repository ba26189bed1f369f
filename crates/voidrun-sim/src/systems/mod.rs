//! Systems that operate on the simulation state each tick.
//!
//! Systems are free functions over borrowed state. They do not own state;
//! the engine sequences them and holds everything they touch.

pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod progression;
pub mod snapshot;
pub mod spawner;
