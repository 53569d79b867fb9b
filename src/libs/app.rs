//! The companion loop.
//!
//! Every tick reads the activity window, advances the break timer and the
//! mood, composes a frame and paints it either into the terminal overlay or
//! as a one-line status on stdout.

use crate::libs::achievements::AchievementManager;
use crate::libs::activity::{ActivityTotals, ActivityTracker, SessionClock, DEFAULT_WINDOW_SECONDS};
use crate::libs::aquarium::build_aquarium_scene;
use crate::libs::battery::BatteryMonitor;
use crate::libs::breaks::{BreakManager, BreakStage, BreakStatus};
use crate::libs::character::CharacterRenderer;
use crate::libs::config::{Config, NotificationLevel};
use crate::libs::effects::EffectsManager;
use crate::libs::messages::Message;
use crate::libs::monitor::InputMonitor;
use crate::libs::mood::{MoodState, StateMachine};
use crate::libs::overlay::{MenuAction, Overlay};
use crate::libs::resources::{ResourceMonitor, SATURATION_THRESHOLD};
use crate::libs::scene::{ColoredDisplay, SceneBuilder, StatusLines};
use crate::libs::signals::shutdown_signal;
use crate::libs::time_awareness::{DayPeriod, TimeAwareness};
use crate::libs::weather::WeatherManager;
use crate::{msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::{Local, Timelike};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::process::Command;
use std::sync::Arc;
use tokio::time::{self, Duration, MissedTickBehavior};

pub const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Ticks per animation frame.
const TICKS_PER_FRAME: u32 = 3;

/// Narrowest content area of the scene.
pub const SCENE_WIDTH: usize = 34;

/// Virtual seconds added per tick in demo mode.
const DEMO_SECONDS_PER_TICK: f64 = 5.0;
const DEMO_CYCLE_TICKS: u64 = 80;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub headless: bool,
    pub max_ticks: Option<u64>,
    pub duration_seconds: Option<u64>,
    pub demo: bool,
    pub show_summary: bool,
    /// Where `open config` points the editor.
    pub config_path: PathBuf,
    /// Fixed seed for the particle effects.
    pub seed: Option<u64>,
}

/// Decides what the break timer shows, and whether it overrides the mood.
pub fn render_status(level: NotificationLevel, current: MoodState, status: &BreakStatus) -> (MoodState, Option<String>) {
    let verbose = level == NotificationLevel::Verbose;
    if level == NotificationLevel::Silent {
        return (current, None);
    }

    if status.stage == BreakStage::OnBreak {
        if verbose {
            let minutes = ((status.break_seconds_remaining + 59.0) / 60.0).floor() as u64;
            return (MoodState::Sleeping, Some(format!("Break: resting ({}m left)", minutes)));
        }
        return (MoodState::Sleeping, Some("Break: resting".to_string()));
    }

    if status.should_break {
        let state = match status.stage {
            BreakStage::Insistence | BreakStage::Tantrum => MoodState::Alarmed,
            _ => MoodState::Watching,
        };
        if verbose {
            return (state, Some(format!("Break: {} (due now)", status.stage)));
        }
        return (state, Some(format!("Break: {}", status.stage)));
    }

    if verbose && status.stage == BreakStage::Suggestion {
        let minutes = ((status.seconds_until_break + 59.0) / 60.0).floor() as u64;
        return (current, Some(format!("Break soon: {}m", minutes)));
    }

    (current, None)
}

/// Synthetic input for one demo tick. The 80-tick cycle walks through
/// idle, slow typing, fast typing, mouse travel, clicking and idle again.
pub fn simulate_input(tracker: &mut ActivityTracker, demo_tick: u64, now: f64) {
    match demo_tick % DEMO_CYCLE_TICKS {
        0..=11 => {}
        12..=27 => {
            if demo_tick % 2 == 0 {
                tracker.record_keypress(now);
            }
        }
        28..=43 => tracker.record_keypress(now),
        44..=55 => tracker.record_mouse_move(320.0, 280.0, now),
        56..=67 => {
            tracker.record_click(now);
            tracker.record_click(now);
        }
        _ => {}
    }
}

/// Opens `path` with the platform's default editor.
pub fn open_in_editor(path: &std::path::Path) -> Result<()> {
    let program = if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "notepad"
    } else {
        "xdg-open"
    };
    Command::new(program).arg(path).spawn()?;
    Ok(())
}

pub struct App {
    config: Config,
    options: RunOptions,
    clock: SessionClock,
    tracker: Arc<Mutex<ActivityTracker>>,
    state_machine: StateMachine,
    break_manager: BreakManager,
    character: CharacterRenderer,
    time_awareness: TimeAwareness,
    weather: WeatherManager,
    effects: EffectsManager,
    achievements: AchievementManager,
    battery: BatteryMonitor,
    resources: ResourceMonitor,
    input_monitor: InputMonitor,
    overlay: Option<Overlay>,
    startup_notes: Vec<String>,
    state: MoodState,
    demo_ticks: u64,
    demo_time: f64,
    anim_frame: usize,
    anim_tick_counter: u32,
    tick_count: u64,
    last_headless_line: Option<String>,
    last_display: Option<ColoredDisplay>,
    running: bool,
    shutdown_done: bool,
}

impl App {
    pub fn new(config: Config, options: RunOptions, achievements: AchievementManager) -> Self {
        let clock = SessionClock::new();
        let start = if options.demo { 0.0 } else { clock.now() };
        let tracker = Arc::new(Mutex::new(ActivityTracker::new(DEFAULT_WINDOW_SECONDS, start)));
        let character = CharacterRenderer::new(&config);

        let effects = match options.seed {
            Some(seed) => EffectsManager::seeded(seed),
            None => EffectsManager::new(),
        };

        Self {
            state_machine: StateMachine::new(&config),
            break_manager: BreakManager::new(&config, start),
            time_awareness: TimeAwareness::new(&config),
            weather: WeatherManager::new(&config),
            input_monitor: InputMonitor::new(Arc::clone(&tracker), clock),
            battery: BatteryMonitor::new(),
            resources: ResourceMonitor::new(),
            character,
            effects,
            achievements,
            overlay: None,
            startup_notes: Vec::new(),
            config,
            options,
            clock,
            tracker,
            state: MoodState::Idle,
            demo_ticks: 0,
            demo_time: 0.0,
            anim_frame: 0,
            anim_tick_counter: 0,
            tick_count: 0,
            last_headless_line: None,
            last_display: None,
            running: true,
            shutdown_done: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_headless(&self) -> bool {
        self.options.headless
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn startup_notes(&self) -> &[String] {
        &self.startup_notes
    }

    pub fn state(&self) -> MoodState {
        self.state
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn anim_frame(&self) -> usize {
        self.anim_frame
    }

    pub fn break_manager(&self) -> &BreakManager {
        &self.break_manager
    }

    pub fn achievements(&self) -> &AchievementManager {
        &self.achievements
    }

    pub fn input_monitor(&self) -> &InputMonitor {
        &self.input_monitor
    }

    pub fn weather(&self) -> &WeatherManager {
        &self.weather
    }

    pub fn last_display(&self) -> Option<&ColoredDisplay> {
        self.last_display.as_ref()
    }

    pub fn last_headless_line(&self) -> Option<&str> {
        self.last_headless_line.as_deref()
    }

    /// Session time: the virtual clock in demo mode, wall time otherwise.
    pub fn now(&self) -> f64 {
        if self.options.demo {
            self.demo_time
        } else {
            self.clock.now()
        }
    }

    pub fn totals(&self) -> ActivityTotals {
        self.tracker.lock().totals(self.now())
    }

    /// Starts the global input hook unless demo input is in use.
    pub fn start_input(&mut self) {
        if !self.options.demo {
            self.input_monitor.start();
        }
    }

    /// Switches the terminal to the overlay. On failure the app falls back
    /// to headless mode and records a startup note.
    pub fn attach_overlay(&mut self) {
        if self.options.headless || self.overlay.is_some() {
            return;
        }
        match Overlay::new(&self.config) {
            Ok(mut overlay) => {
                overlay.set_min_width(self.character.max_art_width().max(SCENE_WIDTH));
                self.overlay = Some(overlay);
            }
            Err(e) => {
                self.options.headless = true;
                let note = Message::OverlayUnavailable(e.to_string()).to_string();
                msg_warning!(Message::StartupNote(note.clone()));
                self.startup_notes.push(note);
            }
        }
    }

    /// Runs until a stop condition, a quit key or a shutdown signal.
    pub async fn run(mut self) -> Result<()> {
        self.start_input();
        self.weather.start();
        msg_info!(Message::CompanionStarted {
            headless: self.options.headless,
            demo: self.options.demo,
        });
        self.attach_overlay();

        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);
        let mut ticker = time::interval(TICK_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.running {
            tokio::select! {
                _ = ticker.tick() => {
                    if let Err(e) = self.tick() {
                        msg_error!(Message::CompanionTickFailed(e.to_string()));
                    }
                    self.handle_pending_actions();
                    self.check_limits();
                }
                _ = &mut shutdown => {
                    self.running = false;
                }
            }
        }

        self.shutdown();
        msg_info!(Message::CompanionStopped);
        if self.options.show_summary {
            msg_print!(self.summary());
        }
        Ok(())
    }

    fn handle_pending_actions(&mut self) {
        let actions = match self.overlay.as_mut().map(Overlay::poll_actions) {
            Some(Ok(actions)) => actions,
            Some(Err(e)) => {
                tracing::warn!(error = %e, "failed to read terminal events");
                Vec::new()
            }
            None => Vec::new(),
        };
        for action in actions {
            self.handle_action(action);
        }
    }

    fn check_limits(&mut self) {
        if self.options.max_ticks.is_some_and(|max| self.tick_count >= max) {
            self.running = false;
        }
        if self.options.duration_seconds.is_some_and(|limit| self.clock.now() >= limit as f64) {
            self.running = false;
        }
    }

    pub fn tick(&mut self) -> Result<()> {
        let now = self.now();
        let (snapshot, totals) = {
            let mut tracker = self.tracker.lock();
            if self.options.demo {
                simulate_input(&mut tracker, self.demo_ticks, now);
            }
            (tracker.snapshot(now), tracker.totals(now))
        };
        if self.options.demo {
            self.demo_ticks += 1;
            self.demo_time += DEMO_SECONDS_PER_TICK;
        }

        let status = self.break_manager.update(&snapshot, now);
        let saturated = self.config.system_resources_enabled && self.resources.is_saturated(SATURATION_THRESHOLD);
        self.state_machine.set_sweating(saturated);
        let transition = self.state_machine.update(&snapshot, now);
        if transition.changed {
            self.anim_frame = 0;
            self.anim_tick_counter = 0;
        }
        self.anim_tick_counter += 1;
        if self.anim_tick_counter >= TICKS_PER_FRAME {
            self.anim_tick_counter = 0;
            self.anim_frame += 1;
        }

        let (state, break_line) = render_status(self.config.notifications, transition.state, &status);
        self.state = state;
        let display = self.compose(state, transition.state, break_line.clone(), &totals);

        match self.overlay.as_mut() {
            Some(overlay) => overlay.paint(&display)?,
            None => {
                let line = Message::CompanionStatus {
                    state: state.to_string(),
                    break_line,
                }
                .to_string();
                if self.last_headless_line.as_deref() != Some(line.as_str()) {
                    msg_print!(line);
                    self.last_headless_line = Some(line);
                }
            }
        }

        self.last_display = Some(display);
        self.tick_count += 1;
        Ok(())
    }

    fn compose(&mut self, state: MoodState, mood: MoodState, break_line: Option<String>, totals: &ActivityTotals) -> ColoredDisplay {
        let frame = self.anim_frame;
        let width = self.character.max_art_width().max(SCENE_WIDTH);
        let hour = Local::now().hour();
        let aquarium = build_aquarium_scene(totals, width, frame);

        let mut scene = SceneBuilder::new(self.character.art_for(state, frame), &aquarium.plants, width);
        if let Some(decoration) = self.weather.current_effect(frame) {
            scene.decorate(decoration);
        }
        if let Some(decoration) = self.time_awareness.current_effect(frame, hour) {
            scene.decorate(decoration);
        }

        let (content_width, content_height) = scene.content_size();
        let breaks_taken = self.break_manager.breaks_taken();
        let is_night = DayPeriod::from_hour(hour) == DayPeriod::Night;
        let is_flow = mood == MoodState::Excited;
        let cells = self.effects.update(totals, breaks_taken, content_width, content_height, frame, is_night, is_flow);
        scene.paint_effects(&cells);

        let today = Local::now().date_naive();
        let (sysinfo, battery) = if self.config.system_resources_enabled {
            (self.resources.format_lines(), self.battery.format_line())
        } else {
            (Vec::new(), None)
        };
        let status = StatusLines {
            progress: aquarium.progress,
            break_line,
            achievement: self.achievements.update(totals, breaks_taken, today),
            sysinfo,
            battery,
        };
        status.write_to(&mut scene);
        scene.build()
    }

    pub fn handle_action(&mut self, action: MenuAction) {
        let now = self.now();
        match action {
            MenuAction::TakeBreak => {
                self.break_manager.force_break(now);
                tracing::info!("{}", Message::BreakForced);
            }
            MenuAction::SkipBreak => {
                self.break_manager.skip_break(now);
                tracing::info!("{}", Message::BreakSkipped);
            }
            MenuAction::ToggleWeather => {
                self.config.weather_enabled = self.weather.toggle();
                let message = if self.config.weather_enabled { Message::WeatherEnabled } else { Message::WeatherDisabled };
                tracing::info!("{}", message);
            }
            MenuAction::OpenConfig => match open_in_editor(&self.options.config_path) {
                Ok(()) => tracing::info!("{}", Message::ConfigOpened(self.options.config_path.display().to_string())),
                Err(e) => tracing::warn!("{}", Message::ConfigOpenFailed(e.to_string())),
            },
            MenuAction::Quit => self.running = false,
        }
    }

    pub fn summary(&self) -> Message {
        let totals = self.totals();
        Message::SessionSummary {
            active_seconds: totals.total_active_seconds as u64,
            keypresses: totals.total_keypresses,
            clicks: totals.total_clicks,
            mouse_distance: totals.total_mouse_distance as u64,
            breaks_taken: self.break_manager.breaks_taken(),
            break_seconds: self.break_manager.total_break_seconds() as u64,
        }
    }

    /// Saves stats and releases the terminal. Only the first call does anything.
    pub fn shutdown(&mut self) {
        if self.shutdown_done {
            return;
        }
        self.shutdown_done = true;
        self.running = false;
        self.achievements.update_break_streak();
        if let Err(e) = self.achievements.save() {
            msg_warning!(Message::StatsSaveFailed(e.to_string()));
        }
        self.weather.stop();
        self.input_monitor.stop();
        if let Some(mut overlay) = self.overlay.take() {
            if let Err(e) = overlay.close() {
                tracing::warn!(error = %e, "failed to restore terminal");
            }
        }
    }
}
