use std::env;

pub fn platform_name() -> &'static str {
    match env::consts::OS {
        "macos" => "Darwin",
        "windows" => "Windows",
        "linux" => "Linux",
        other => other,
    }
}

fn session_type() -> Option<String> {
    env::var("XDG_SESSION_TYPE").ok().filter(|value| !value.is_empty())
}

/// Notes printed before the companion starts.
pub fn startup_warnings() -> Vec<String> {
    let mut warnings = Vec::new();
    if cfg!(target_os = "macos") {
        warnings.push("macOS may require Accessibility permission: System Settings > Privacy & Security > Accessibility.".to_string());
    }
    if cfg!(target_os = "linux") && session_type().is_some_and(|session| session.eq_ignore_ascii_case("wayland")) {
        warnings.push("Wayland may block global input capture; X11 is more reliable for now.".to_string());
    }
    warnings
}

/// `key=value` diagnostics for the `doctor` command.
pub fn runtime_summary(input_supported: bool, headless: bool, pomodoro_mode: bool, input_reason: Option<&str>) -> Vec<String> {
    let mut lines = vec![
        format!("platform={}", platform_name()),
        format!("session_type={}", session_type().unwrap_or_else(|| "unknown".to_string())),
        format!("input_monitor_supported={}", input_supported),
    ];
    if let Some(reason) = input_reason {
        lines.push(format!("input_monitor_reason={}", reason));
    }
    lines.push(format!("headless={}", headless));
    lines.push(format!("pomodoro_mode={}", pomodoro_mode));
    lines
}
