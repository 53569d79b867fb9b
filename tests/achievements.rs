#[cfg(test)]
mod tests {
    use asciipal::libs::achievements::{break_streak, group_thousands, AchievementManager, BANNER_TICKS, STATS_FILE_NAME};
    use asciipal::libs::activity::ActivityTotals;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StatsTestContext {
        temp_dir: TempDir,
    }

    impl StatsTestContext {
        fn stats_path(&self) -> PathBuf {
            self.temp_dir.path().join("nested").join(STATS_FILE_NAME)
        }
    }

    impl TestContext for StatsTestContext {
        fn setup() -> Self {
            StatsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn keys(count: u64) -> ActivityTotals {
        ActivityTotals {
            total_keypresses: count,
            ..Default::default()
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(100_000), "100,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_break_streak() {
        let mut days = BTreeMap::new();
        assert_eq!(break_streak(&days), 0);

        days.insert(day(1), 2);
        days.insert(day(2), 1);
        days.insert(day(3), 3);
        assert_eq!(break_streak(&days), 3);

        // A gap in the calendar ends the streak.
        days.remove(&day(2));
        assert_eq!(break_streak(&days), 1);

        // Trailing days without breaks are skipped.
        days.insert(day(2), 1);
        days.insert(day(4), 0);
        assert_eq!(break_streak(&days), 3);

        // A zero day in the middle ends the streak.
        days.insert(day(2), 0);
        assert_eq!(break_streak(&days), 1);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_missing_file_starts_fresh(ctx: &mut StatsTestContext) {
        let manager = AchievementManager::with_path(ctx.stats_path());
        assert_eq!(manager.stats().lifetime_keypresses, 0);
        assert!(manager.stats().unlocked.is_empty());
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_corrupt_file_starts_fresh(ctx: &mut StatsTestContext) {
        let path = ctx.stats_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();
        let manager = AchievementManager::with_path(&path);
        assert_eq!(manager.stats().lifetime_clicks, 0);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_milestone_banner_lasts_for_a_while(ctx: &mut StatsTestContext) {
        let mut manager = AchievementManager::with_path(ctx.stats_path());
        assert_eq!(manager.update(&keys(999), 0, day(5)), None);

        let banner = manager.update(&keys(1000), 0, day(5));
        assert_eq!(banner.as_deref(), Some("★ Keypresses: 1,000! ★"));
        assert_eq!(manager.stats().unlocked, vec!["keypresses_1000".to_string()]);

        for _ in 1..BANNER_TICKS {
            assert!(manager.update(&keys(1001), 0, day(5)).is_some());
        }
        assert_eq!(manager.update(&keys(1002), 0, day(5)), None);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_one_milestone_per_update(ctx: &mut StatsTestContext) {
        let mut manager = AchievementManager::with_path(ctx.stats_path());
        manager.update(&keys(6000), 0, day(5));
        assert_eq!(manager.stats().unlocked.len(), 1);
        manager.update(&keys(6000), 0, day(5));
        assert_eq!(manager.stats().unlocked, vec!["keypresses_1000".to_string(), "keypresses_5000".to_string()]);
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_active_time_and_distance_milestones(ctx: &mut StatsTestContext) {
        let mut manager = AchievementManager::with_path(ctx.stats_path());
        let totals = ActivityTotals {
            total_active_seconds: 3600.0,
            ..Default::default()
        };
        assert_eq!(manager.update(&totals, 0, day(5)).as_deref(), Some("★ Active Time: 1h! ★"));

        let totals = ActivityTotals {
            total_active_seconds: 3600.0,
            total_mouse_distance: 1_000_000.0,
            ..Default::default()
        };
        manager.update(&totals, 0, day(5));
        assert!(manager.stats().unlocked.contains(&"mouse_km_10".to_string()));
    }

    #[test_context(StatsTestContext)]
    #[test]
    fn test_session_totals_add_to_saved_totals(ctx: &mut StatsTestContext) {
        let path = ctx.stats_path();
        let mut manager = AchievementManager::with_path(&path);
        manager.update(&keys(400), 2, day(5));
        manager.update_break_streak();
        manager.save().unwrap();
        assert!(path.exists());

        let mut reloaded = AchievementManager::with_path(&path);
        assert_eq!(reloaded.stats().lifetime_keypresses, 400);
        assert_eq!(reloaded.stats().daily_breaks.get(&day(5)), Some(&2));
        assert_eq!(reloaded.stats().break_streak, 1);

        reloaded.update(&keys(50), 1, day(6));
        assert_eq!(reloaded.stats().lifetime_keypresses, 450);
        reloaded.update(&keys(70), 1, day(6));
        assert_eq!(reloaded.stats().lifetime_keypresses, 470);
        reloaded.update_break_streak();
        assert_eq!(reloaded.stats().break_streak, 2);
    }
}
