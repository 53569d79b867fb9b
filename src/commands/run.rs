//! Runs the companion loop.

use crate::libs::achievements::AchievementManager;
use crate::libs::app::{App, RunOptions};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::platform::startup_warnings;
use crate::msg_warning;
use anyhow::Result;
use clap::Args;
use std::path::Path;
use std::time::Duration;

/// How long the input listener gets to report a startup failure.
const INPUT_PROBE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Print status lines instead of drawing the terminal overlay
    #[arg(long)]
    pub headless: bool,

    /// Stop after N ticks
    #[arg(long, value_name = "N")]
    pub max_ticks: Option<u64>,

    /// Stop after N seconds of wall time
    #[arg(long, value_name = "N")]
    pub duration_seconds: Option<u64>,

    /// Generate synthetic activity instead of listening to real input
    #[arg(long)]
    pub demo: bool,

    /// Do not print the session summary on exit
    #[arg(long)]
    pub no_summary: bool,
}

pub async fn cmd(args: RunArgs, config_path: Option<&Path>) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    let config = Config::load(&path)?;
    let options = RunOptions {
        headless: args.headless,
        max_ticks: args.max_ticks,
        duration_seconds: args.duration_seconds,
        demo: args.demo,
        show_summary: !args.no_summary,
        config_path: path,
        seed: None,
    };

    for warning in startup_warnings() {
        msg_warning!(Message::StartupNote(warning));
    }

    let mut app = App::new(config, options, AchievementManager::new()?);
    if !args.demo {
        app.start_input();
        tokio::time::sleep(INPUT_PROBE_DELAY).await;
        if !app.input_monitor().is_supported() {
            msg_warning!(Message::InputMonitorUnavailable);
        }
    }

    app.run().await
}
