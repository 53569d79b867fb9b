//! Runtime diagnostics.
//!
//! Starts the input hook briefly to find out whether global capture works
//! on this machine, then prints one `key=value` line per finding.

use crate::libs::activity::{ActivityTracker, SessionClock, DEFAULT_WINDOW_SECONDS};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::monitor::InputMonitor;
use crate::libs::platform::{runtime_summary, startup_warnings};
use crate::{msg_print, msg_warning};
use anyhow::Result;
use parking_lot::Mutex;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

const PROBE_DELAY: Duration = Duration::from_millis(300);

pub async fn cmd(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(&Config::resolve_path(config_path)?)?;

    for warning in startup_warnings() {
        msg_warning!(Message::StartupNote(warning));
    }

    let clock = SessionClock::new();
    let tracker = Arc::new(Mutex::new(ActivityTracker::new(DEFAULT_WINDOW_SECONDS, clock.now())));
    let mut monitor = InputMonitor::new(tracker, clock);
    monitor.start();
    tokio::time::sleep(PROBE_DELAY).await;
    monitor.stop();

    let supported = monitor.is_supported();
    if !supported {
        msg_warning!(Message::InputMonitorUnavailable);
    }

    let headless = !io::stdout().is_terminal();
    let reason = monitor.unavailable_reason();
    for line in runtime_summary(supported, headless, config.pomodoro_mode, reason.as_deref()) {
        msg_print!(Message::Diagnostic(line));
    }
    Ok(())
}
