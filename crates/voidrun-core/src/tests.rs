#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::*;
    use crate::entity::Entity;
    use crate::enums::*;
    use crate::error::{BoundaryError, CommandError};
    use crate::events::GameEvent;
    use crate::ship::Ship;
    use crate::state::{AchievementView, EntityView, GameOverReport};
    use crate::types::{Direction, GridPos};

    // ---- Ship health and score ----

    #[test]
    fn test_damage_clamps_at_zero() {
        for damage in [0, 1, 10, 20, 99, 100, 101, 500, u32::MAX] {
            let mut ship = Ship::new();
            ship.take_damage(damage);
            let expected = SHIP_MAX_HEALTH.saturating_sub(damage);
            assert_eq!(ship.health(), expected, "damage {damage}");
        }
    }

    #[test]
    fn test_heal_caps_at_max() {
        for start in [0, 1, 50, 79, 80, 81, 100] {
            let mut ship = Ship::at(5, 10, start);
            PowerUpKind::Health.apply_effect(&mut ship);
            assert_eq!(ship.health(), (start + 20).min(100), "start {start}");
        }
    }

    #[test]
    fn test_shield_always_adds_fifty() {
        for prior in [0, 1, 49, 1_000, 123_456] {
            let mut ship = Ship::new();
            ship.add_score(prior);
            PowerUpKind::Shield.apply_effect(&mut ship);
            assert_eq!(ship.score(), prior + 50);
        }
    }

    #[test]
    fn test_damage_then_heal_does_not_overshoot() {
        let mut ship = Ship::new();
        assert_eq!(ship.pos(), GridPos::new(5, 10));
        assert_eq!(ship.health(), 100);

        ship.take_damage(30);
        assert_eq!(ship.health(), 70);

        PowerUpKind::Health.apply_effect(&mut ship);
        assert_eq!(ship.health(), 90);
    }

    #[test]
    fn test_ship_at_clamps_health() {
        let ship = Ship::at(2, 4, 250);
        assert_eq!(ship.health(), SHIP_MAX_HEALTH);
        assert!(!ship.is_destroyed());
        assert!(Ship::at(0, 0, 0).is_destroyed());
    }

    // ---- Ship movement ----

    #[test]
    fn test_ship_moves_one_cell() {
        let mut ship = Ship::new();
        ship.move_in(Direction::Up).unwrap();
        assert_eq!(ship.pos(), GridPos::new(5, 9));
        ship.move_in(Direction::Left).unwrap();
        assert_eq!(ship.pos(), GridPos::new(4, 9));
        ship.move_in(Direction::Down).unwrap();
        ship.move_in(Direction::Right).unwrap();
        assert_eq!(ship.pos(), GridPos::new(5, 10));
    }

    #[test]
    fn test_ship_rejects_move_off_grid() {
        let mut ship = Ship::at(0, 0, 100);
        let err = ship.move_in(Direction::Left).unwrap_err();
        assert_eq!(
            err,
            BoundaryError {
                direction: Direction::Left
            }
        );
        assert_eq!(err.to_string(), "Cannot move left. Out of bounds!");
        assert!(ship.move_in(Direction::Up).is_err());
        assert_eq!(ship.pos(), GridPos::new(0, 0));

        let mut ship = Ship::at(GRID_WIDTH - 1, GRID_HEIGHT - 1, 100);
        assert!(ship.move_in(Direction::Right).is_err());
        assert!(ship.move_in(Direction::Down).is_err());
        assert_eq!(ship.pos(), GridPos::new(9, 19));
    }

    // ---- Grid ----

    #[test]
    fn test_grid_bounds() {
        assert!(GridPos::new(0, 0).in_bounds());
        assert!(GridPos::new(9, 19).in_bounds());
        assert!(!GridPos::new(-1, 0).in_bounds());
        assert!(!GridPos::new(0, -1).in_bounds());
        assert!(!GridPos::new(10, 0).in_bounds());
        assert!(!GridPos::new(0, 20).in_bounds());
    }

    // ---- Entity movement ----

    #[test]
    fn test_hazards_descend_every_tick() {
        let mut asteroid = Entity::asteroid(3, 4);
        let mut enemy = Entity::enemy(6, 0);
        for tick in 1..=3 {
            asteroid.tick(tick);
            enemy.tick(tick);
        }
        assert_eq!(asteroid.pos(), GridPos::new(3, 7));
        assert_eq!(enemy.pos(), GridPos::new(6, 3));
    }

    #[test]
    fn test_bullet_climbs_every_tick() {
        let mut bullet = Entity::bullet(5, 10);
        bullet.tick(1);
        bullet.tick(2);
        assert_eq!(bullet.pos(), GridPos::new(5, 8));
    }

    #[test]
    fn test_power_up_moves_every_tenth_tick() {
        let mut power_up = Entity::power_up(PowerUpKind::Shield, 2, 3);
        power_up.tick(7);
        assert_eq!(power_up.pos(), GridPos::new(2, 3));
        power_up.tick(10);
        assert_eq!(power_up.pos(), GridPos::new(2, 4));
        power_up.tick(11);
        assert_eq!(power_up.pos(), GridPos::new(2, 4));
        power_up.tick(20);
        assert_eq!(power_up.pos(), GridPos::new(2, 5));
    }

    #[test]
    fn test_bullet_target_classification() {
        assert!(Entity::enemy(0, 0).is_bullet_target());
        assert!(Entity::asteroid(0, 0).is_bullet_target());
        assert!(!Entity::bullet(0, 0).is_bullet_target());
        assert!(!Entity::power_up(PowerUpKind::Health, 0, 0).is_bullet_target());
        assert!(Entity::bullet(0, 0).is_bullet());
    }

    // ---- Rendering ----

    #[test]
    fn test_render_descriptions() {
        assert_eq!(Entity::asteroid(3, 7).render().to_string(), "Asteroid(3, 7)");
        assert_eq!(Entity::bullet(5, 10).render().to_string(), "Bullet(5, 10)");
        assert_eq!(Ship::at(2, 4, 100).render().to_string(), "Ship(2, 4)");
        assert_eq!(
            Entity::power_up(PowerUpKind::Health, 1, 0).render(),
            EntityView {
                kind: EntityKind::HealthPowerUp,
                x: 1,
                y: 0
            }
        );
    }

    // ---- Commands ----

    #[test]
    fn test_command_parsing_is_case_insensitive() {
        let cases = [
            ("w", PlayerCommand::Move { direction: Direction::Up }),
            ("A", PlayerCommand::Move { direction: Direction::Left }),
            ("s", PlayerCommand::Move { direction: Direction::Down }),
            ("D", PlayerCommand::Move { direction: Direction::Right }),
            ("f", PlayerCommand::Fire),
            ("P", PlayerCommand::TogglePause),
        ];
        for (token, expected) in cases {
            assert_eq!(PlayerCommand::parse(token), Ok(expected), "token {token}");
        }
        assert_eq!("p".parse::<PlayerCommand>(), Ok(PlayerCommand::TogglePause));
    }

    #[test]
    fn test_invalid_command_message() {
        let err = PlayerCommand::parse("X").unwrap_err();
        assert_eq!(err, CommandError::Invalid("X".into()));
        assert_eq!(err.to_string(), "Invalid input. Use W, A, S, D, F, or P.");
        assert!(PlayerCommand::parse("WW").is_err());
        assert!(PlayerCommand::parse("").is_err());
    }

    // ---- Tiers ----

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::from_progress(0.0), Tier::Novice);
        assert_eq!(Tier::from_progress(0.499), Tier::Novice);
        assert_eq!(Tier::from_progress(0.5), Tier::Expert);
        assert_eq!(Tier::from_progress(0.998), Tier::Expert);
        assert_eq!(Tier::from_progress(0.999), Tier::Master);
        assert_eq!(Tier::from_progress(1.0), Tier::Master);
    }

    // ---- Event text ----

    #[test]
    fn test_event_text() {
        let level_up = GameEvent::LevelUp {
            level: 2,
            spawn_rate: 7,
        };
        assert_eq!(
            level_up.to_string(),
            "Level Up! Welcome to Level 2. Spawn rate increased to 7%."
        );
        let hit = GameEvent::ShipHit {
            by: Entity::enemy(5, 10).render(),
            damage: ENEMY_DAMAGE,
        };
        assert_eq!(hit.to_string(), "Hit by Enemy(5, 10)! Health reduced by 20.");
        assert_eq!(
            GameEvent::ShipMoved {
                pos: GridPos::new(5, 9)
            }
            .to_string(),
            "Ship moved to (5, 9)"
        );
        assert!(level_up.is_verbose_only());
        assert!(!GameEvent::Paused.is_verbose_only());
    }

    #[test]
    fn test_game_over_report_text() {
        let report = GameOverReport {
            shots_fired: 12,
            shots_hit: 3,
            enemies_destroyed: 3,
            survival_secs: 45,
            final_score: 150,
            level: 2,
            achievements: vec![AchievementView {
                name: SURVIVOR.into(),
                description: "Survive for 2 minutes".into(),
                progress: 0.375,
                tier: Tier::Novice,
            }],
        };
        let text = report.to_string();
        assert!(text.contains("Shots Fired: 12\n"));
        assert!(text.contains("Survival Time: 45 seconds\n"));
        assert!(text.contains("Survivor - Survive for 2 minutes (38% complete, Tier: Novice)"));
    }

    // ---- Serialization ----

    #[test]
    fn test_entity_serde() {
        let entities = vec![
            Entity::bullet(1, 2),
            Entity::asteroid(3, 4),
            Entity::enemy(5, 6),
            Entity::power_up(PowerUpKind::Shield, 7, 8),
        ];
        let json = serde_json::to_string(&entities).unwrap();
        let back: Vec<Entity> = serde_json::from_str(&json).unwrap();
        assert_eq!(entities, back);
    }

    #[test]
    fn test_game_phase_default_is_running() {
        assert_eq!(GamePhase::default(), GamePhase::Running);
    }
}
