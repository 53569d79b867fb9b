#[cfg(test)]
mod tests {
    use asciipal::libs::activity::ActivitySnapshot;
    use asciipal::libs::config::Config;
    use asciipal::commands::state::initial_state;
    use asciipal::libs::mood::{MoodState, StateMachine};

    fn active() -> ActivitySnapshot {
        ActivitySnapshot {
            seconds_since_input: 0.5,
            total_active_seconds: 60.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_target_state_priorities() {
        let config = Config::default();
        let mut machine = StateMachine::new(&config);

        let sleeping = ActivitySnapshot { seconds_since_input: 200.0, click_rate: 10.0, ..active() };
        assert_eq!(machine.target_state(&sleeping), MoodState::Sleeping);

        let idle = ActivitySnapshot { seconds_since_input: 15.0, ..active() };
        assert_eq!(machine.target_state(&idle), MoodState::Idle);

        let alarmed = ActivitySnapshot { click_rate: 6.0, mouse_speed: 900.0, ..active() };
        assert_eq!(machine.target_state(&alarmed), MoodState::Alarmed);

        let dizzy = ActivitySnapshot { mouse_speed: 900.0, typing_wpm: 120.0, ..active() };
        assert_eq!(machine.target_state(&dizzy), MoodState::Dizzy);

        let excited = ActivitySnapshot { typing_wpm: 120.0, ..active() };
        assert_eq!(machine.target_state(&excited), MoodState::Excited);

        machine.set_sweating(true);
        assert_eq!(machine.target_state(&excited), MoodState::Sweating);
        machine.set_sweating(false);

        let cheering = ActivitySnapshot { total_active_seconds: 45.0 * 60.0, ..active() };
        assert_eq!(machine.target_state(&cheering), MoodState::Cheering);

        let watching = ActivitySnapshot { typing_wpm: 20.0, ..active() };
        assert_eq!(machine.target_state(&watching), MoodState::Watching);

        assert_eq!(machine.target_state(&active()), MoodState::Idle);
    }

    #[test]
    fn test_first_change_is_immediate() {
        let config = Config::default();
        let mut machine = StateMachine::new(&config);
        let transition = machine.update(&ActivitySnapshot { typing_wpm: 120.0, ..active() }, 0.1);
        assert!(transition.changed);
        assert_eq!(transition.state, MoodState::Excited);
    }

    #[test]
    fn test_cooldown_holds_state() {
        let config = Config::default();
        let mut machine = StateMachine::new(&config);
        machine.update(&ActivitySnapshot { typing_wpm: 120.0, ..active() }, 10.0);

        let dizzy = ActivitySnapshot { mouse_speed: 900.0, ..active() };
        let held = machine.update(&dizzy, 11.0);
        assert!(!held.changed);
        assert_eq!(held.state, MoodState::Excited);

        let moved = machine.update(&dizzy, 12.5);
        assert!(moved.changed);
        assert_eq!(moved.state, MoodState::Dizzy);
    }

    #[test]
    fn test_clock_reset_ignores_cooldown() {
        let config = Config::default();
        let mut machine = StateMachine::new(&config);
        assert!(machine.update(&ActivitySnapshot { typing_wpm: 120.0, ..active() }, 100.0).changed);

        // The session clock restarted behind the last transition.
        let moved = machine.update(&ActivitySnapshot { mouse_speed: 900.0, ..active() }, 50.0);
        assert!(moved.changed);
        assert_eq!(moved.state, MoodState::Dizzy);

        // The cooldown is measured from the new clock from here on.
        let held = machine.update(&ActivitySnapshot { typing_wpm: 120.0, ..active() }, 51.0);
        assert!(!held.changed);
        assert_eq!(held.state, MoodState::Dizzy);
    }

    #[test]
    fn test_same_target_is_not_a_change() {
        let config = Config::default();
        let mut machine = StateMachine::new(&config);
        let transition = machine.update(&active(), 5.0);
        assert!(!transition.changed);
        assert_eq!(transition.state, MoodState::Idle);
    }

    #[test]
    fn test_force_state_restarts_cooldown() {
        let config = Config::default();
        let mut machine = StateMachine::new(&config);
        machine.force_state(MoodState::Cheering, 20.0);
        assert_eq!(machine.state(), MoodState::Cheering);

        let held = machine.update(&ActivitySnapshot { typing_wpm: 120.0, ..active() }, 21.0);
        assert_eq!(held.state, MoodState::Cheering);
    }

    #[test]
    fn test_zero_cooldown_follows_every_snapshot() {
        let config = Config::default();
        let mut machine = StateMachine::with_cooldown(&config, 0.0);
        assert!(machine.update(&ActivitySnapshot { typing_wpm: 120.0, ..active() }, 1.0).changed);
        assert!(machine.update(&ActivitySnapshot { mouse_speed: 900.0, ..active() }, 1.0).changed);
        assert_eq!(machine.state(), MoodState::Dizzy);
    }

    #[test]
    fn test_mood_names() {
        let names: Vec<&str> = MoodState::ALL.iter().map(|state| state.as_str()).collect();
        assert_eq!(names, ["idle", "sleeping", "watching", "excited", "dizzy", "alarmed", "cheering", "sweating"]);
        assert_eq!(MoodState::Sweating.to_string(), "sweating");
    }

    #[test]
    fn test_fresh_session_starts_idle() {
        assert_eq!(initial_state(&Config::default()), MoodState::Idle);
    }
}
