//! Time-of-day decorations.

use crate::libs::config::Config;
use crate::libs::scene::Decoration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    /// Morning 6–12, afternoon 12–17, evening 17–21, night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=11 => DayPeriod::Morning,
            12..=16 => DayPeriod::Afternoon,
            17..=20 => DayPeriod::Evening,
            _ => DayPeriod::Night,
        }
    }

    fn frames(self) -> [Decoration; 2] {
        match self {
            DayPeriod::Morning => [Decoration::above("☀ ~ ☀ ~ ☀"), Decoration::above("~ ☀ ~ ☀ ~")],
            DayPeriod::Afternoon => [Decoration::default(), Decoration::default()],
            DayPeriod::Evening => [
                Decoration { above: "☽ . ☽ . ☽", below: "~ . ~ . ~" },
                Decoration { above: ". ☽ . ☽ .", below: ". ~ . ~ ." },
            ],
            DayPeriod::Night => [
                Decoration { above: "★ . ★ . ★", below: "z z z z z" },
                Decoration { above: ". ★ . ★ .", below: " z z z z " },
            ],
        }
    }

    pub fn decoration(self, frame: usize) -> Decoration {
        self.frames()[frame % 2]
    }
}

pub struct TimeAwareness {
    enabled: bool,
}

impl TimeAwareness {
    pub fn new(config: &Config) -> Self {
        Self { enabled: config.time_awareness_enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Decoration for `hour`, or `None` when the feature is off.
    pub fn current_effect(&self, frame: usize, hour: u32) -> Option<Decoration> {
        self.enabled.then(|| DayPeriod::from_hour(hour).decoration(frame))
    }
}
