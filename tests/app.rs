#[cfg(test)]
mod tests {
    use asciipal::libs::achievements::{AchievementManager, STATS_FILE_NAME};
    use asciipal::libs::activity::{ActivityTracker, DEFAULT_WINDOW_SECONDS};
    use asciipal::libs::app::{render_status, simulate_input, App, RunOptions};
    use asciipal::libs::breaks::{BreakStage, BreakStatus};
    use asciipal::libs::config::{Config, NotificationLevel};
    use asciipal::libs::messages::Message;
    use asciipal::libs::mood::MoodState;
    use asciipal::libs::overlay::MenuAction;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};

    /// Demo app writing its stats into a temporary directory.
    struct AppTestContext {
        temp_dir: TempDir,
    }

    impl AppTestContext {
        fn stats_path(&self) -> PathBuf {
            self.temp_dir.path().join(STATS_FILE_NAME)
        }

        fn options(&self) -> RunOptions {
            RunOptions {
                headless: true,
                demo: true,
                config_path: self.temp_dir.path().join("config.json"),
                seed: Some(7),
                ..Default::default()
            }
        }

        fn app(&self) -> App {
            let config = Config {
                system_resources_enabled: false,
                ..Config::default()
            };
            App::new(config, self.options(), AchievementManager::with_path(self.stats_path()))
        }
    }

    impl AsyncTestContext for AppTestContext {
        async fn setup() -> Self {
            AppTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn status(stage: BreakStage, should_break: bool) -> BreakStatus {
        BreakStatus {
            should_break,
            stage,
            seconds_until_break: 0.0,
            break_seconds_remaining: 0.0,
        }
    }

    #[test]
    fn test_silent_notifications_keep_the_mood() {
        let due = status(BreakStage::Tantrum, true);
        assert_eq!(render_status(NotificationLevel::Silent, MoodState::Excited, &due), (MoodState::Excited, None));
    }

    #[test]
    fn test_break_in_progress() {
        let resting = BreakStatus {
            break_seconds_remaining: 200.0,
            ..status(BreakStage::OnBreak, false)
        };
        assert_eq!(
            render_status(NotificationLevel::Gentle, MoodState::Watching, &resting),
            (MoodState::Sleeping, Some("Break: resting".to_string()))
        );
        assert_eq!(
            render_status(NotificationLevel::Verbose, MoodState::Watching, &resting),
            (MoodState::Sleeping, Some("Break: resting (4m left)".to_string()))
        );
    }

    #[test]
    fn test_overdue_break_overrides_mood() {
        assert_eq!(
            render_status(NotificationLevel::Gentle, MoodState::Excited, &status(BreakStage::Suggestion, true)),
            (MoodState::Watching, Some("Break: suggestion".to_string()))
        );
        assert_eq!(
            render_status(NotificationLevel::Gentle, MoodState::Excited, &status(BreakStage::Tantrum, true)),
            (MoodState::Alarmed, Some("Break: tantrum".to_string()))
        );
        assert_eq!(
            render_status(NotificationLevel::Verbose, MoodState::Idle, &status(BreakStage::Insistence, true)),
            (MoodState::Alarmed, Some("Break: insistence (due now)".to_string()))
        );
    }

    #[test]
    fn test_upcoming_break_only_in_verbose_mode() {
        let soon = BreakStatus {
            seconds_until_break: 130.0,
            ..status(BreakStage::Suggestion, false)
        };
        assert_eq!(render_status(NotificationLevel::Gentle, MoodState::Idle, &soon), (MoodState::Idle, None));
        assert_eq!(
            render_status(NotificationLevel::Verbose, MoodState::Idle, &soon),
            (MoodState::Idle, Some("Break soon: 3m".to_string()))
        );
    }

    #[test]
    fn test_demo_cycle_input() {
        let mut tracker = ActivityTracker::new(DEFAULT_WINDOW_SECONDS, 0.0);
        for tick in 0..80 {
            simulate_input(&mut tracker, tick, tick as f64 * 5.0);
        }
        let totals = tracker.totals(400.0);
        assert_eq!(totals.total_keypresses, 24);
        assert_eq!(totals.total_clicks, 24);
        assert!(totals.total_mouse_distance > 12.0 * 400.0);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_demo_ticks_advance_virtual_time(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert_eq!(app.now(), 0.0);
        for _ in 0..10 {
            app.tick().unwrap();
        }
        assert_eq!(app.tick_count(), 10);
        assert_eq!(app.now(), 50.0);
        assert!(app.is_headless());
        assert!(app.last_headless_line().is_some_and(|line| line.starts_with("State=")));

        let display = app.last_display().unwrap();
        assert!(display.height() > 1);
        assert!(display.width() >= 34);
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_menu_actions(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        app.tick().unwrap();

        app.handle_action(MenuAction::TakeBreak);
        assert!(app.break_manager().is_on_break());
        app.tick().unwrap();
        assert_eq!(app.state(), MoodState::Sleeping);
        assert_eq!(app.last_headless_line(), Some("State=sleeping Break: resting"));

        app.handle_action(MenuAction::SkipBreak);
        assert!(!app.break_manager().is_on_break());
        assert_eq!(app.break_manager().breaks_taken(), 0);

        app.handle_action(MenuAction::Quit);
        assert!(!app.is_running());
    }

    #[test_context(AppTestContext)]
    #[test]
    fn test_shutdown_saves_stats(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        for _ in 0..80 {
            app.tick().unwrap();
        }
        match app.summary() {
            Message::SessionSummary { keypresses, clicks, breaks_taken, .. } => {
                assert_eq!(keypresses, 24);
                assert_eq!(clicks, 24);
                assert_eq!(breaks_taken, 0);
            }
            other => panic!("unexpected message: {:?}", other),
        }

        app.shutdown();
        app.shutdown();
        assert!(!app.is_running());

        let reloaded = AchievementManager::with_path(ctx.stats_path());
        assert_eq!(reloaded.stats().lifetime_keypresses, 24);
        assert_eq!(reloaded.stats().lifetime_clicks, 24);
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_weather_toggle_from_menu(ctx: &mut AppTestContext) {
        let mut app = ctx.app();
        assert!(!app.config().weather_enabled);

        app.handle_action(MenuAction::ToggleWeather);
        assert!(app.config().weather_enabled);
        assert!(app.weather().is_enabled());

        app.handle_action(MenuAction::ToggleWeather);
        assert!(!app.config().weather_enabled);
        assert_eq!(app.weather().current_kind(), None);
        app.shutdown();
    }

    #[test_context(AppTestContext)]
    #[tokio::test]
    async fn test_run_stops_after_max_ticks(ctx: &mut AppTestContext) {
        let options = RunOptions {
            max_ticks: Some(3),
            ..ctx.options()
        };
        let config = Config {
            system_resources_enabled: false,
            ..Config::default()
        };
        let app = App::new(config, options, AchievementManager::with_path(ctx.stats_path()));
        app.run().await.unwrap();
        assert!(ctx.stats_path().exists());
    }
}
