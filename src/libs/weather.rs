//! Weather decorations fed by wttr.in.
//!
//! A background task polls `https://wttr.in/<location>?format=j1`, maps the
//! WWO condition code to an effect and stores it for the render loop.
//! Failures are logged and the last known effect is kept.

use crate::libs::config::{Config, MIN_WEATHER_POLL_MINUTES};
use crate::libs::messages::Message;
use crate::libs::scene::Decoration;
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};

const WTTR_URL: &str = "https://wttr.in";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherKind {
    Clear,
    Cloudy,
    Rain,
    HeavyRain,
    Snow,
    Thunder,
    Fog,
    Sleet,
}

impl WeatherKind {
    /// Maps a WWO weather condition code (as used by wttr.in) to an effect.
    pub fn from_code(code: u32) -> Option<Self> {
        use WeatherKind::*;
        let kind = match code {
            113 => Clear,
            116 | 119 | 122 => Cloudy,
            143 | 248 | 260 => Fog,
            176 | 263 | 266 | 293 | 296 | 299 | 302 | 353 => Rain,
            305 | 308 | 356 | 359 => HeavyRain,
            179 | 227 | 230 | 323 | 326 | 329 | 332 | 335 | 338 | 368 | 371 => Snow,
            182 | 185 | 281 | 284 | 311 | 314 | 317 | 320 | 350 | 362 | 365 | 374 | 377 => Sleet,
            200 | 386 | 389 | 392 | 395 => Thunder,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "clear",
            WeatherKind::Cloudy => "cloudy",
            WeatherKind::Rain => "rain",
            WeatherKind::HeavyRain => "heavy_rain",
            WeatherKind::Snow => "snow",
            WeatherKind::Thunder => "thunder",
            WeatherKind::Fog => "fog",
            WeatherKind::Sleet => "sleet",
        }
    }

    pub fn decoration(self, frame: usize) -> Decoration {
        let frames: [&'static str; 2] = match self {
            WeatherKind::Clear => ["° . ° . °", ". ° . ° ."],
            WeatherKind::Cloudy => ["~ ░ ~ ░ ~", "░ ~ ░ ~ ░"],
            WeatherKind::Rain => ["░ ╽ ░ ╽ ░", "╽ ░ ╽ ░ ╽"],
            WeatherKind::HeavyRain => ["╽╽ ╽╽ ╽╽╽", "╽╽╽ ╽╽ ╽╽"],
            WeatherKind::Snow => ["* + * + *", "+ * + * +"],
            WeatherKind::Thunder => ["! ╽ ! ╽ !", "╽ ! ╽ ! ╽"],
            WeatherKind::Fog => ["░░░░░░░░░", "▒▒▒▒▒▒▒▒▒"],
            WeatherKind::Sleet => ["╽ * ╽ * ╽", "* ╽ * ╽ *"],
        };
        Decoration::above(frames[frame % 2])
    }
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    #[serde(rename = "weatherCode")]
    weather_code: String,
}

/// Extracts the current condition code from a wttr.in `j1` document.
pub fn parse_weather_code(body: &str) -> Result<u32> {
    let response: WttrResponse = serde_json::from_str(body)?;
    let condition = response
        .current_condition
        .first()
        .ok_or_else(|| msg_error_anyhow!(Message::WeatherFetchFailed("no current condition".to_string())))?;
    Ok(condition.weather_code.trim().parse()?)
}

pub struct WeatherClient {
    client: Client,
}

impl WeatherClient {
    pub fn new() -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("asciipal"));
        let client = Client::builder().default_headers(headers).timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }

    pub fn url(location: &str) -> String {
        format!("{}/{}?format=j1", WTTR_URL, location.trim())
    }

    pub async fn fetch(&self, location: &str) -> Result<Option<WeatherKind>> {
        let body = self.client.get(Self::url(location)).send().await?.error_for_status()?.text().await?;
        Ok(WeatherKind::from_code(parse_weather_code(&body)?))
    }
}

/// Owns the polling task and the latest effect.
pub struct WeatherManager {
    enabled: bool,
    location: String,
    poll_interval: Duration,
    current: Arc<Mutex<Option<WeatherKind>>>,
    task: Option<JoinHandle<()>>,
}

impl WeatherManager {
    pub fn new(config: &Config) -> Self {
        let minutes = config.weather_poll_minutes.max(MIN_WEATHER_POLL_MINUTES);
        Self {
            enabled: config.weather_enabled,
            location: config.weather_location.clone(),
            poll_interval: Duration::from_secs(u64::from(minutes) * 60),
            current: Arc::new(Mutex::new(None)),
            task: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Starts polling in the background. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        if !self.enabled || self.task.is_some() {
            return;
        }
        let client = match WeatherClient::new() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "weather client unavailable");
                return;
            }
        };
        let location = self.location.clone();
        let current = Arc::clone(&self.current);
        let poll_interval = self.poll_interval;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = time::interval(poll_interval);
            loop {
                ticker.tick().await;
                match client.fetch(&location).await {
                    Ok(kind) => {
                        if let Some(kind) = kind {
                            msg_debug!(Message::WeatherUpdated(kind.to_string()));
                        }
                        *current.lock() = kind;
                    }
                    Err(e) => tracing::warn!("{}", Message::WeatherFetchFailed(e.to_string())),
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Flips the feature on or off; turning it off also clears the effect.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            self.start();
        } else {
            self.stop();
            self.clear_effect();
        }
        self.enabled
    }

    pub fn set_effect(&self, kind: Option<WeatherKind>) {
        *self.current.lock() = kind;
    }

    pub fn clear_effect(&self) {
        self.set_effect(None);
    }

    pub fn current_kind(&self) -> Option<WeatherKind> {
        *self.current.lock()
    }

    pub fn current_effect(&self, frame: usize) -> Option<Decoration> {
        if !self.enabled {
            return None;
        }
        self.current_kind().map(|kind| kind.decoration(frame))
    }
}

impl Drop for WeatherManager {
    fn drop(&mut self) {
        self.stop();
    }
}
