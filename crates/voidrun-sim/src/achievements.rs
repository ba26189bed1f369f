//! Achievement registry, progress updates and mastery logging.
//!
//! Achievements are registered once, updated with absolute progress values
//! every tick, and never removed. A mastered achievement is written to the
//! external store at most once per run.

use std::collections::HashSet;

use log::{error, info};

use voidrun_core::constants::{
    ENEMY_EXTERMINATOR, EXTERMINATOR_TARGET_HITS, MASTERY_THRESHOLD, SHARP_SHOOTER,
    SHARP_SHOOTER_MIN_SHOTS, SHARP_SHOOTER_TARGET_ACCURACY, SURVIVOR, SURVIVOR_TARGET_SECS,
};
use voidrun_core::enums::Tier;
use voidrun_core::error::AchievementError;
use voidrun_core::state::AchievementView;

use crate::stats::PlayerStats;
use crate::store::AchievementStore;

/// A single achievement. Identity is the name.
#[derive(Debug, Clone)]
pub struct Achievement {
    name: String,
    description: String,
    /// Always within [0.0, 1.0].
    progress: f64,
}

impl PartialEq for Achievement {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Achievement {}

impl Achievement {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, AchievementError> {
        let name = name.into();
        let description = description.into();
        if name.is_empty() {
            return Err(AchievementError::EmptyName);
        }
        if description.is_empty() {
            return Err(AchievementError::EmptyDescription);
        }
        Ok(Self {
            name,
            description,
            progress: 0.0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set progress, clamped into [0, 1]. NaN is treated as no progress.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    pub fn tier(&self) -> Tier {
        Tier::from_progress(self.progress)
    }

    pub fn is_mastered(&self) -> bool {
        self.progress >= MASTERY_THRESHOLD
    }

    pub fn view(&self) -> AchievementView {
        AchievementView {
            name: self.name.clone(),
            description: self.description.clone(),
            progress: self.progress,
            tier: self.tier(),
        }
    }
}

/// The three achievements every run tracks.
pub fn default_achievements() -> Result<Vec<Achievement>, AchievementError> {
    Ok(vec![
        Achievement::new(SURVIVOR, "Survive for 2 minutes")?,
        Achievement::new(ENEMY_EXTERMINATOR, "Destroy 20 enemies")?,
        Achievement::new(
            SHARP_SHOOTER,
            "Keep 99% accuracy over more than 10 shots",
        )?,
    ])
}

/// Absolute progress for each default achievement, computed from live stats.
pub fn progress_from_stats(stats: &PlayerStats) -> [(&'static str, f64); 3] {
    let survivor = (stats.elapsed_secs() as f64 / SURVIVOR_TARGET_SECS).min(1.0);
    let exterminator = (stats.shots_hit() as f64 / EXTERMINATOR_TARGET_HITS).min(1.0);
    let sharp_shooter = if stats.shots_fired() > SHARP_SHOOTER_MIN_SHOTS {
        (stats.accuracy() / SHARP_SHOOTER_TARGET_ACCURACY).min(1.0)
    } else {
        0.0
    };
    [
        (SURVIVOR, survivor),
        (ENEMY_EXTERMINATOR, exterminator),
        (SHARP_SHOOTER, sharp_shooter),
    ]
}

/// Owns registered achievements and the store mastered ones are written to.
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
    logged: HashSet<String>,
    store: Box<dyn AchievementStore>,
}

impl AchievementTracker {
    pub fn new(store: Box<dyn AchievementStore>) -> Self {
        Self {
            achievements: Vec::new(),
            logged: HashSet::new(),
            store,
        }
    }

    pub fn register(&mut self, achievement: Achievement) -> Result<(), AchievementError> {
        if self.achievements.contains(&achievement) {
            return Err(AchievementError::Duplicate(achievement.name));
        }
        self.achievements.push(achievement);
        Ok(())
    }

    /// Overwrite (not add to) the named achievement's progress.
    pub fn update(&mut self, name: &str, progress: f64) -> Result<(), AchievementError> {
        if name.is_empty() {
            return Err(AchievementError::EmptyName);
        }
        let target = self
            .achievements
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| AchievementError::Unknown(name.to_string()))?;
        target.set_progress(progress);
        Ok(())
    }

    /// Write every newly mastered achievement to the store.
    /// Returns the names logged by this call.
    pub fn log_mastered(&mut self) -> Vec<String> {
        let mut newly = Vec::new();
        for achievement in &self.achievements {
            if !achievement.is_mastered() || self.logged.contains(&achievement.name) {
                continue;
            }
            if let Err(e) = self.store.save(&format!("Mastered: {}", achievement.name)) {
                error!("Failed to save mastered achievement '{}': {e}", achievement.name);
            }
            info!("Achievement mastered: {}", achievement.name);
            self.logged.insert(achievement.name.clone());
            newly.push(achievement.name.clone());
        }
        newly
    }

    pub fn get(&self, name: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.name == name)
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn views(&self) -> Vec<AchievementView> {
        self.achievements.iter().map(Achievement::view).collect()
    }

    pub fn store(&self) -> &dyn AchievementStore {
        self.store.as_ref()
    }
}
