//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the ship, the entity registry, player stats,
//! achievements and the spawn RNG. The driver calls `advance` once per
//! tick and `handle_input` once per keystroke; both run to completion on
//! the caller's thread. Completely headless, enabling deterministic testing.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use voidrun_core::commands::PlayerCommand;
use voidrun_core::constants::{ACHIEVEMENT_LOG_INTERVAL, START_SPAWN_RATE};
use voidrun_core::entity::Entity;
use voidrun_core::enums::GamePhase;
use voidrun_core::error::AchievementError;
use voidrun_core::events::GameEvent;
use voidrun_core::ship::Ship;
use voidrun_core::state::{FrameSnapshot, GameOverReport};
use voidrun_core::types::SimTime;

use crate::achievements::{self, AchievementTracker};
use crate::clock::Clock;
use crate::registry::EntityRegistry;
use crate::rng::{SeededRng, SpawnRng};
use crate::stats::PlayerStats;
use crate::store::AchievementStore;
use crate::systems;
use crate::systems::collision::CollisionResult;
use crate::systems::progression::Progression;
use crate::systems::spawner::SpawnResult;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same spawns.
    pub seed: u64,
    /// Report movement, firing, hits, pickups and level-ups in the log.
    pub verbose: bool,
    /// Spawn rate at level 1.
    pub start_spawn_rate: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            verbose: false,
            start_spawn_rate: START_SPAWN_RATE,
        }
    }
}

/// Fatal simulation errors. These indicate wiring bugs, not runtime data.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Achievement(#[from] AchievementError),
}

/// The simulation engine. Owns all sim state.
pub struct SimulationEngine {
    ship: Ship,
    registry: EntityRegistry,
    stats: PlayerStats,
    progression: Progression,
    achievements: AchievementTracker,
    rng: Box<dyn SpawnRng>,
    phase: GamePhase,
    time: SimTime,
    verbose: bool,
    /// Events produced during the current tick, drained into the snapshot.
    events: Vec<GameEvent>,
    game_over: Option<GameOverReport>,
}

impl SimulationEngine {
    /// Create an engine with the default achievements registered.
    pub fn new(config: SimConfig, store: Box<dyn AchievementStore>) -> Result<Self, SimError> {
        let mut tracker = AchievementTracker::new(store);
        for achievement in achievements::default_achievements()? {
            tracker.register(achievement)?;
        }
        info!(
            "Simulation created (seed {}, spawn rate {}%)",
            config.seed, config.start_spawn_rate
        );
        Ok(Self {
            ship: Ship::new(),
            registry: EntityRegistry::new(),
            stats: PlayerStats::new(),
            progression: Progression::with_spawn_rate(config.start_spawn_rate),
            achievements: tracker,
            rng: Box::new(SeededRng::new(config.seed)),
            phase: GamePhase::default(),
            time: SimTime::default(),
            verbose: config.verbose,
            events: Vec::new(),
            game_over: None,
        })
    }

    /// Replace the spawn RNG.
    pub fn with_rng(mut self, rng: Box<dyn SpawnRng>) -> Self {
        self.rng = rng;
        self
    }

    /// Replace the survival clock. Counters are reset.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.stats = PlayerStats::with_clock(clock);
        self
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    // --- Tick ---

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// While paused or after game over no gameplay phase runs; the snapshot
    /// still reflects the current state.
    pub fn advance(&mut self, tick: u64) -> Result<FrameSnapshot, SimError> {
        self.time.tick = tick;

        if self.phase == GamePhase::Running {
            self.run_systems(tick)?;
            self.time.ticks_run += 1;
        }
        self.time.elapsed_secs = self.stats.elapsed_secs();

        let events = std::mem::take(&mut self.events);
        Ok(systems::snapshot::build_snapshot(
            &self.ship,
            &self.registry,
            &self.stats,
            &self.progression,
            &self.achievements,
            self.time,
            self.phase,
            &events,
        ))
    }

    /// Run all phases in order.
    fn run_systems(&mut self, tick: u64) -> Result<(), SimError> {
        // 1. Movement + out-of-bounds cleanup
        self.update_entities(tick);
        // 2. Collisions
        self.check_collisions();
        // 3. Spawning
        self.spawn_entities();
        // 4. Level progression
        self.level_up();
        // 5. Achievements
        self.refresh_achievements(tick)?;
        // 6. Game over
        self.check_game_over();
        Ok(())
    }

    /// Move every entity, then drop the ones that left the grid.
    pub fn update_entities(&mut self, tick: u64) {
        systems::movement::run(&mut self.registry, tick);
        systems::cleanup::run(&mut self.registry);
    }

    /// Resolve ship and bullet collisions.
    pub fn check_collisions(&mut self) -> CollisionResult {
        let mut events = Vec::new();
        let result = systems::collision::run(
            &mut self.ship,
            &mut self.registry,
            &mut self.stats,
            &mut events,
        );
        for event in events {
            Self::push_event(self.verbose, &mut self.events, event);
        }
        if result.removed > 0 {
            debug!("collisions: {result:?}");
        }
        result
    }

    /// Roll for new asteroids, enemies and power-ups.
    pub fn spawn_entities(&mut self) -> SpawnResult {
        systems::spawner::run(
            self.rng.as_mut(),
            &mut self.registry,
            &self.ship,
            self.progression.spawn_rate,
        )
    }

    /// Gain a level if the score threshold has been reached.
    pub fn level_up(&mut self) -> bool {
        match systems::progression::level_up(&mut self.progression, &self.ship) {
            Some(event) => {
                Self::push_event(self.verbose, &mut self.events, event);
                true
            }
            None => false,
        }
    }

    /// Recompute achievement progress from live stats and log new masteries.
    pub fn refresh_achievements(&mut self, tick: u64) -> Result<(), SimError> {
        for (name, progress) in achievements::progress_from_stats(&self.stats) {
            self.achievements.update(name, progress)?;
        }
        for name in self.achievements.log_mastered() {
            Self::push_event(
                self.verbose,
                &mut self.events,
                GameEvent::AchievementMastered { name },
            );
        }
        if tick.is_multiple_of(ACHIEVEMENT_LOG_INTERVAL) {
            let summary = GameEvent::AchievementProgress {
                achievements: self.achievements.views(),
            };
            Self::push_event(self.verbose, &mut self.events, summary);
        }
        Ok(())
    }

    /// Enter the terminal phase once the ship has no health left.
    pub fn check_game_over(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return true;
        }
        if !self.ship.is_destroyed() {
            return false;
        }
        self.phase = GamePhase::GameOver;
        let report = systems::snapshot::build_game_over_report(
            &self.ship,
            &self.stats,
            &self.progression,
            &self.achievements,
        );
        info!(
            "Game over at tick {} (score {}, level {})",
            self.time.tick, report.final_score, report.level
        );
        self.game_over = Some(report);
        Self::push_event(self.verbose, &mut self.events, GameEvent::GameOver);
        true
    }

    // --- Input ---

    /// Route one input token. Returns the events it produced.
    ///
    /// While paused every token except the pause toggle is ignored; after
    /// game over every token is ignored.
    pub fn handle_input(&mut self, token: &str) -> Vec<GameEvent> {
        let parsed = PlayerCommand::parse(token);
        match self.phase {
            GamePhase::GameOver => {
                debug!("input '{token}' ignored after game over");
                return Vec::new();
            }
            GamePhase::Paused if parsed != Ok(PlayerCommand::TogglePause) => {
                debug!("input '{token}' ignored while paused");
                return Vec::new();
            }
            _ => {}
        }

        match parsed {
            Ok(command) => self.handle_command(command),
            Err(e) => {
                warn!("Invalid input '{token}'");
                vec![GameEvent::InvalidInput {
                    message: e.to_string(),
                }]
            }
        }
    }

    /// Handle a single parsed command.
    pub fn handle_command(&mut self, command: PlayerCommand) -> Vec<GameEvent> {
        let mut out = Vec::new();
        match (self.phase, command) {
            (GamePhase::GameOver, _) => {}
            (GamePhase::Paused, PlayerCommand::TogglePause)
            | (GamePhase::Running, PlayerCommand::TogglePause) => {
                let event = self.toggle_pause();
                Self::push_event(self.verbose, &mut out, event);
            }
            (GamePhase::Paused, _) => {}
            (GamePhase::Running, PlayerCommand::Move { direction }) => {
                match self.ship.move_in(direction) {
                    Ok(()) => {
                        let pos = self.ship.pos();
                        Self::push_event(self.verbose, &mut out, GameEvent::ShipMoved { pos });
                    }
                    Err(e) => {
                        warn!("{e}");
                        out.push(GameEvent::MoveRejected {
                            message: e.to_string(),
                        });
                    }
                }
            }
            (GamePhase::Running, PlayerCommand::Fire) => {
                self.fire_bullet();
                self.stats.record_shot_fired();
                Self::push_event(self.verbose, &mut out, GameEvent::BulletFired);
            }
        }
        out
    }

    /// Spawn a bullet on the ship's cell.
    pub fn fire_bullet(&mut self) {
        let pos = self.ship.pos();
        self.registry.add(Entity::bullet(pos.x, pos.y));
    }

    fn toggle_pause(&mut self) -> GameEvent {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Running;
            info!("Game unpaused");
            GameEvent::Unpaused
        } else {
            self.phase = GamePhase::Paused;
            info!("Game paused");
            GameEvent::Paused
        }
    }

    fn push_event(verbose: bool, out: &mut Vec<GameEvent>, event: GameEvent) {
        if event.is_verbose_only() && !verbose {
            debug!("{event}");
            return;
        }
        out.push(event);
    }

    // --- Accessors ---

    /// Track an additional entity (for scenarios and tests).
    pub fn add_entity(&mut self, entity: Entity) {
        self.registry.add(entity);
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn level(&self) -> u32 {
        self.progression.level
    }

    pub fn spawn_rate(&self) -> u32 {
        self.progression.spawn_rate
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    pub fn achievement_store(&self) -> &dyn AchievementStore {
        self.achievements.store()
    }

    /// Final statistics, available once the game is over.
    pub fn game_over_report(&self) -> Option<&GameOverReport> {
        self.game_over.as_ref()
    }
}
