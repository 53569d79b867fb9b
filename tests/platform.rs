#[cfg(test)]
mod tests {
    use asciipal::libs::platform::{platform_name, runtime_summary};

    #[test]
    fn test_platform_name_is_known() {
        assert!(!platform_name().is_empty());
        if cfg!(target_os = "linux") {
            assert_eq!(platform_name(), "Linux");
        }
    }

    #[test]
    fn test_summary_with_reason() {
        let lines = runtime_summary(false, true, true, Some("no display"));
        assert!(lines[0].starts_with("platform="));
        assert!(lines[1].starts_with("session_type="));
        assert_eq!(&lines[2..], ["input_monitor_supported=false", "input_monitor_reason=no display", "headless=true", "pomodoro_mode=true"]);
    }

    #[test]
    fn test_summary_without_reason() {
        let lines = runtime_summary(true, false, false, None);
        assert_eq!(lines.len(), 5);
        assert!(!lines.iter().any(|line| line.starts_with("input_monitor_reason=")));
        assert!(lines.contains(&"input_monitor_supported=true".to_string()));
    }
}
