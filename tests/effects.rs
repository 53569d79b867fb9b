#[cfg(test)]
mod tests {
    use asciipal::libs::activity::ActivityTotals;
    use asciipal::libs::effects::{BubbleSystem, EffectsManager, CREATURE_DEFS, MAX_BUBBLES};
    use asciipal::libs::scene::Region;

    fn busy() -> ActivityTotals {
        ActivityTotals {
            total_keypresses: 10_000,
            total_clicks: 500,
            total_mouse_distance: 0.0,
            total_active_seconds: 6000.0,
        }
    }

    #[test]
    fn test_spawn_rate_is_capped() {
        assert_eq!(BubbleSystem::spawn_rate(&ActivityTotals::default()), 0.0);
        assert!((BubbleSystem::spawn_rate(&busy()) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_quiet_session_has_no_particles() {
        let mut effects = EffectsManager::seeded(7);
        for frame in 0..50 {
            assert!(effects.update(&ActivityTotals::default(), 0, 20, 6, frame, false, false).is_empty());
        }
    }

    #[test]
    fn test_bubbles_stay_in_bounds_and_capped() {
        let mut effects = EffectsManager::seeded(42);
        for frame in 0..300 {
            let cells = effects.bubbles.update(&busy(), 20, 6);
            assert!(cells.len() <= MAX_BUBBLES, "frame {}", frame);
            assert!(cells.iter().all(|p| p.x < 20 && p.y < 6));
        }
    }

    #[test]
    fn test_fireflies_only_at_night_or_in_flow() {
        let mut effects = EffectsManager::seeded(3);
        assert!(effects.fireflies.update(false, false, 20, 6, 0).is_empty());

        for frame in 0..20 {
            let night = effects.fireflies.update(true, false, 20, 6, frame);
            assert!(night.len() <= 5);
            assert!(night.iter().all(|p| p.x < 20 && p.y < 6));
        }
        for frame in 0..20 {
            assert!(effects.fireflies.update(false, true, 20, 6, frame).len() <= 3);
        }
    }

    #[test]
    fn test_creature_unlock_rules() {
        let fish = &CREATURE_DEFS[0];
        assert_eq!(fish.name, "fish");
        assert!(!fish.is_unlocked_by(&ActivityTotals { total_keypresses: 499, ..Default::default() }, 0));
        assert!(fish.is_unlocked_by(&ActivityTotals { total_keypresses: 500, ..Default::default() }, 0));

        let snail = CREATURE_DEFS.iter().find(|def| def.name == "snail").unwrap();
        assert!(!snail.is_unlocked_by(&busy(), 2));
        assert!(snail.is_unlocked_by(&ActivityTotals::default(), 3));
    }

    #[test]
    fn test_creatures_join_and_stay_inside() {
        let mut effects = EffectsManager::seeded(11);
        let totals = ActivityTotals { total_keypresses: 2500, ..Default::default() };
        for frame in 0..40 {
            let cells = effects.creatures.update(&totals, 0, 24, 6, frame);
            assert!(cells.iter().all(|cell| cell.col < 24 && cell.row < 6));
            assert!(cells.iter().all(|cell| matches!(cell.region, Region::Fish | Region::Cat)));
        }
        assert_eq!(effects.creatures.unlocked(), vec!["fish", "cat"]);
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let mut first = EffectsManager::seeded(99);
        let mut second = EffectsManager::seeded(99);
        for frame in 0..30 {
            assert_eq!(
                first.update(&busy(), 12, 30, 6, frame, true, false),
                second.update(&busy(), 12, 30, 6, frame, true, false)
            );
        }
    }
}
