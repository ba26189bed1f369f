//! Simulation constants and tuning parameters.

// --- Grid ---

/// Number of columns on the play field.
pub const GRID_WIDTH: i32 = 10;

/// Number of rows on the play field. Row 0 is the top.
pub const GRID_HEIGHT: i32 = 20;

// --- Ship ---

/// Column the ship starts in.
pub const SHIP_START_X: i32 = 5;

/// Row the ship starts in.
pub const SHIP_START_Y: i32 = 10;

/// Ship health ceiling (and starting health).
pub const SHIP_MAX_HEALTH: u32 = 100;

/// Damage dealt when an asteroid reaches the ship.
pub const ASTEROID_DAMAGE: u32 = 10;

/// Damage dealt when an enemy reaches the ship.
pub const ENEMY_DAMAGE: u32 = 20;

// --- Power-ups ---

/// Health restored by a health power-up (capped at `SHIP_MAX_HEALTH`).
pub const HEALTH_POWER_UP_AMOUNT: u32 = 20;

/// Score granted by a shield power-up.
pub const SHIELD_POWER_UP_SCORE: u64 = 50;

/// Power-ups only descend on ticks that are a multiple of this.
pub const POWER_UP_MOVE_INTERVAL: u64 = 10;

// --- Spawning ---

/// Upper bound (exclusive) of every spawn chance roll.
pub const SPAWN_ROLL_BOUND: u32 = 100;

/// Spawn rate (percentage chance per tick) at level 1.
pub const START_SPAWN_RATE: u32 = 2;

/// Enemy spawn chance as a fraction of the asteroid chance.
pub const ENEMY_SPAWN_FACTOR: f64 = 0.5;

/// Power-up spawn chance as a fraction of the asteroid chance.
pub const POWER_UP_SPAWN_FACTOR: f64 = 0.25;

/// Row every new entity appears on.
pub const SPAWN_ROW: i32 = 0;

// --- Progression ---

/// Level the game starts at.
pub const START_LEVEL: u32 = 1;

/// Score needed per level to advance (`level * SCORE_THRESHOLD`).
pub const SCORE_THRESHOLD: u64 = 100;

/// Spawn rate gained on each level-up.
pub const SPAWN_RATE_INCREASE: u32 = 5;

// --- Achievements ---

/// Progress at or above which an achievement counts as mastered.
pub const MASTERY_THRESHOLD: f64 = 0.999;

/// Progress at or above which an achievement reaches the Expert tier.
pub const EXPERT_THRESHOLD: f64 = 0.5;

/// Seconds survived for full Survivor progress.
pub const SURVIVOR_TARGET_SECS: f64 = 120.0;

/// Enemies destroyed for full Enemy Exterminator progress.
pub const EXTERMINATOR_TARGET_HITS: f64 = 20.0;

/// Sharp Shooter only counts once more than this many shots were fired.
pub const SHARP_SHOOTER_MIN_SHOTS: u32 = 10;

/// Accuracy that yields full Sharp Shooter progress.
pub const SHARP_SHOOTER_TARGET_ACCURACY: f64 = 0.99;

/// Achievement progress is summarised in the log every this many ticks (verbose only).
pub const ACHIEVEMENT_LOG_INTERVAL: u64 = 100;

pub const SURVIVOR: &str = "Survivor";
pub const ENEMY_EXTERMINATOR: &str = "Enemy Exterminator";
pub const SHARP_SHOOTER: &str = "Sharp Shooter";
