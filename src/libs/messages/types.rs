#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigCreated(String), // path
    ConfigPath(String),    // path
    ConfigInvalid(String), // validation error
    ConfigModuleTimings,
    ConfigOpenFailed(String), // error

    // === COMPANION MESSAGES ===
    CompanionStarted {
        headless: bool,
        demo: bool,
    },
    CompanionStopped,
    CompanionTickFailed(String), // error
    OverlayUnavailable(String),  // error
    StartupNote(String),         // note
    CompanionStatus {
        state: String,
        break_line: Option<String>,
    },
    CurrentMood(String), // mood name
    Diagnostic(String),  // key=value line
    ConfigDump(String),  // JSON
    ConfigOpened(String), // path

    // === SIGNAL MESSAGES ===
    ReceivedSigterm,
    ReceivedSigint,
    ReceivedCtrlC,
    CtrlCListenFailed(String), // error
    SignalHandlingNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,

    // === INPUT MONITOR MESSAGES ===
    InputMonitorUnavailable,
    ErrorInRdevListener(String), // error

    // === BREAK MESSAGES ===
    BreakForced,
    BreakSkipped,

    // === WEATHER MESSAGES ===
    WeatherEnabled,
    WeatherDisabled,
    WeatherFetchFailed(String), // error
    WeatherUpdated(String),     // effect name

    // === STATS MESSAGES ===
    StatsLoadFailed(String), // error
    StatsSaveFailed(String), // error
    StatsHeader,
    AchievementsHeader,
    NoAchievementsYet,

    // === SESSION SUMMARY ===
    SessionSummary {
        active_seconds: u64,
        keypresses: u64,
        clicks: u64,
        mouse_distance: u64,
        breaks_taken: u32,
        break_seconds: u64,
    },

    // === PROMPTS ===
    PromptBreakInterval,
    PromptBreakDuration,
    PromptPomodoroMode,
    PromptPomodoroWork,
    PromptPomodoroBreak,
    PromptIdleTimeout,
    PromptSleepTimeout,
    PromptNotifications,
}
