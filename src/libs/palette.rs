//! Color tables for the terminal overlay.

use crate::libs::config::{ColorScheme, Config};
use crate::libs::scene::Region;
use crossterm::style::Color;
use std::collections::HashMap;

/// Background painted behind the frame in widget mode.
pub const WIDGET_BACKGROUND: &str = "#1a1a2e";

/// Per-region foregrounds. Status and default cells use the scheme foreground.
struct RegionColors {
    character: &'static str,
    plant: &'static str,
    border: &'static str,
    bubble: &'static str,
    firefly: &'static str,
    fish: &'static str,
    butterfly: &'static str,
    snail: &'static str,
    cat: &'static str,
    crab: &'static str,
    seahorse: &'static str,
    weather: &'static str,
    progress: &'static str,
    achievement: &'static str,
    sysinfo: &'static str,
}

impl RegionColors {
    fn get(&self, region: Region) -> Option<&'static str> {
        let hex = match region {
            Region::Character => self.character,
            Region::Plant => self.plant,
            Region::Border => self.border,
            Region::Bubble => self.bubble,
            Region::Firefly => self.firefly,
            Region::Fish => self.fish,
            Region::Butterfly => self.butterfly,
            Region::Snail => self.snail,
            Region::Cat => self.cat,
            Region::Crab => self.crab,
            Region::Seahorse => self.seahorse,
            Region::Weather => self.weather,
            Region::Progress => self.progress,
            Region::Achievement => self.achievement,
            Region::Sysinfo => self.sysinfo,
            Region::Status | Region::Default => return None,
        };
        Some(hex)
    }
}

const DEFAULT_REGIONS: RegionColors = RegionColors {
    character: "#4CAF50",
    plant: "#2E7D32",
    border: "#9E9E9E",
    bubble: "#42A5F5",
    firefly: "#FFD54F",
    fish: "#FF7043",
    butterfly: "#CE93D8",
    snail: "#8D6E63",
    cat: "#FFB74D",
    crab: "#E53935",
    seahorse: "#26A69A",
    weather: "#90A4AE",
    progress: "#78909C",
    achievement: "#FFA000",
    sysinfo: "#78909C",
};

const GREEN_TERMINAL_REGIONS: RegionColors = RegionColors {
    character: "#00FF7F",
    plant: "#32CD32",
    border: "#3A5F0B",
    bubble: "#00FFFF",
    firefly: "#FFFF00",
    fish: "#FF6347",
    butterfly: "#FF69B4",
    snail: "#CD853F",
    cat: "#ADFF2F",
    crab: "#FF4500",
    seahorse: "#7FFFD4",
    weather: "#66BB6A",
    progress: "#4CAF50",
    achievement: "#FFD700",
    sysinfo: "#4CAF50",
};

const PASTEL_REGIONS: RegionColors = RegionColors {
    character: "#6A994E",
    plant: "#A7C957",
    border: "#B8A9C9",
    bubble: "#89CFF0",
    firefly: "#FDFD96",
    fish: "#FFB7C5",
    butterfly: "#DDA0DD",
    snail: "#C9ADA7",
    cat: "#FFDAB9",
    crab: "#F08080",
    seahorse: "#B5EAD7",
    weather: "#A0C4FF",
    progress: "#C9ADA7",
    achievement: "#F4A261",
    sysinfo: "#B8C0D0",
};

const AMBER_TERMINAL_REGIONS: RegionColors = RegionColors {
    character: "#FF6F00",
    plant: "#FFAB00",
    border: "#8D6E00",
    bubble: "#FFECB3",
    firefly: "#FFFF8D",
    fish: "#FF8F00",
    butterfly: "#FFD700",
    snail: "#D2691E",
    cat: "#FFCA28",
    crab: "#E65100",
    seahorse: "#FFE57F",
    weather: "#FFD54F",
    progress: "#FFC107",
    achievement: "#FFE082",
    sysinfo: "#FFC107",
};

const OCEAN_REGIONS: RegionColors = RegionColors {
    character: "#00E676",
    plant: "#66BB6A",
    border: "#0277BD",
    bubble: "#B3E5FC",
    firefly: "#FFF59D",
    fish: "#FF8A65",
    butterfly: "#E040FB",
    snail: "#A1887F",
    cat: "#FFCC80",
    crab: "#FF5252",
    seahorse: "#64FFDA",
    weather: "#4FC3F7",
    progress: "#4DD0E1",
    achievement: "#FFD54F",
    sysinfo: "#26C6DA",
};

/// Light-on-dark variant used by every scheme in widget mode.
const WIDGET_REGIONS: RegionColors = RegionColors {
    character: "#66BB6A",
    plant: "#43A047",
    border: "#B0BEC5",
    bubble: "#64B5F6",
    firefly: "#FFE082",
    fish: "#FF8A65",
    butterfly: "#CE93D8",
    snail: "#A1887F",
    cat: "#FFCC80",
    crab: "#EF5350",
    seahorse: "#4DB6AC",
    weather: "#B0BEC5",
    progress: "#90A4AE",
    achievement: "#FFB300",
    sysinfo: "#90A4AE",
};

/// Foreground and background of a scheme in window mode.
pub fn scheme_colors(scheme: ColorScheme) -> (&'static str, &'static str) {
    match scheme {
        ColorScheme::Default => ("#111111", "#f5f5f5"),
        ColorScheme::GreenTerminal => ("#7CFC00", "#001100"),
        ColorScheme::Pastel => ("#2d3142", "#f4d6cc"),
        ColorScheme::AmberTerminal => ("#FFB000", "#1A0A00"),
        ColorScheme::Ocean => ("#00CED1", "#0A1628"),
    }
}

/// Foreground of a scheme in widget mode.
pub fn widget_foreground(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Default => "#FFFFFF",
        ColorScheme::GreenTerminal => "#7CFC00",
        ColorScheme::Pastel => "#f4d6cc",
        ColorScheme::AmberTerminal => "#FFB000",
        ColorScheme::Ocean => "#00CED1",
    }
}

fn region_table(scheme: ColorScheme, widget_mode: bool) -> &'static RegionColors {
    if widget_mode {
        return &WIDGET_REGIONS;
    }
    match scheme {
        ColorScheme::Default => &DEFAULT_REGIONS,
        ColorScheme::GreenTerminal => &GREEN_TERMINAL_REGIONS,
        ColorScheme::Pastel => &PASTEL_REGIONS,
        ColorScheme::AmberTerminal => &AMBER_TERMINAL_REGIONS,
        ColorScheme::Ocean => &OCEAN_REGIONS,
    }
}

/// Parses `#rrggbb` into a terminal color.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    regions: HashMap<Region, Color>,
}

impl Palette {
    pub fn new(scheme: ColorScheme, widget_mode: bool) -> Self {
        let (fg, bg) = scheme_colors(scheme);
        let (fg, bg) = if widget_mode { (widget_foreground(scheme), WIDGET_BACKGROUND) } else { (fg, bg) };
        let foreground = parse_hex(fg).unwrap_or(Color::Reset);
        let background = parse_hex(bg).unwrap_or(Color::Reset);

        let table = region_table(scheme, widget_mode);
        let regions = Region::ALL
            .iter()
            .map(|&region| {
                let color = table.get(region).and_then(parse_hex).unwrap_or(foreground);
                (region, color)
            })
            .collect();

        Self { foreground, background, regions }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.color_scheme, config.widget_mode)
    }

    pub fn color_for(&self, region: Region) -> Color {
        self.regions.get(&region).copied().unwrap_or(self.foreground)
    }
}
