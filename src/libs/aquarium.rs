//! Seaweed that grows with focused time.

use crate::libs::activity::ActivityTotals;
use crate::libs::character::{text_width, truncate_to_width};

/// Active seconds needed to reach each plant level.
pub const PLANT_THRESHOLDS: [f64; 8] = [300.0, 600.0, 1200.0, 1800.0, 2700.0, 3600.0, 5400.0, 7200.0];

pub const MAX_PLANT_LEVEL: usize = PLANT_THRESHOLDS.len();

const FILLED: char = '█';
const EMPTY: char = '░';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AquariumScene {
    /// Growth progress bar, always present.
    pub progress: String,
    /// Seaweed rows, top to bottom. Empty before the first level.
    pub plants: Vec<String>,
}

pub fn plant_level(totals: &ActivityTotals) -> usize {
    PLANT_THRESHOLDS.iter().filter(|&&threshold| totals.total_active_seconds >= threshold).count()
}

/// Current level and the fraction of the way to the next one (1.0 at max).
pub fn plant_progress(totals: &ActivityTotals) -> (usize, f64) {
    let level = plant_level(totals);
    if level >= MAX_PLANT_LEVEL {
        return (MAX_PLANT_LEVEL, 1.0);
    }
    let lower = if level == 0 { 0.0 } else { PLANT_THRESHOLDS[level - 1] };
    let upper = PLANT_THRESHOLDS[level];
    let fraction = ((totals.total_active_seconds - lower) / (upper - lower)).clamp(0.0, 1.0);
    (level, fraction)
}

/// Number of seaweed columns and rows at a level.
pub fn plant_dimensions(level: usize) -> (usize, usize) {
    match level {
        0 => (0, 0),
        1 => (1, 1),
        2 => (1, 2),
        3 => (2, 2),
        4 => (2, 3),
        5 => (3, 3),
        6 => (3, 4),
        7 => (4, 4),
        _ => (5, 5),
    }
}

/// Renders `[███░░░] 🌿 n/8` filling exactly `width` terminal columns.
pub fn build_progress_bar(level: usize, fraction: f64, width: usize) -> String {
    let label = if level >= MAX_PLANT_LEVEL { " 🌿 MAX".to_string() } else { format!(" 🌿 {}/{}", level, MAX_PLANT_LEVEL) };
    let label_width = text_width(&label);
    if width < label_width + 2 {
        return truncate_to_width(&label, width);
    }
    let inner = width - label_width - 2;
    let filled = if level >= MAX_PLANT_LEVEL {
        inner
    } else {
        ((fraction.clamp(0.0, 1.0) * inner as f64).round() as usize).min(inner)
    };

    let mut bar = String::with_capacity(width * 3);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(inner - filled));
    bar.push(']');
    bar.push_str(&label);
    bar
}

fn column_positions(width: usize) -> [usize; 5] {
    [2, width / 4, width / 2, 3 * width / 4, width.saturating_sub(3)]
}

/// Swaying seaweed rows, each exactly `width` characters.
///
/// Odd columns are one row shorter than even ones so the bed looks uneven.
pub fn build_plants(level: usize, width: usize, frame: usize) -> Vec<String> {
    let (cols, rows) = plant_dimensions(level);
    if cols == 0 || width < 4 {
        return Vec::new();
    }
    let positions = column_positions(width);
    (0..rows)
        .map(|row| {
            let mut buf = vec![' '; width];
            for (i, &pos) in positions.iter().take(cols).enumerate() {
                let height = if i % 2 == 0 { rows } else { rows.saturating_sub(1).max(1) };
                if row < rows - height || pos >= width {
                    continue;
                }
                buf[pos] = if (row + i + frame) % 2 == 0 { '(' } else { ')' };
            }
            buf.into_iter().collect()
        })
        .collect()
}

pub fn build_aquarium_scene(totals: &ActivityTotals, width: usize, frame: usize) -> AquariumScene {
    let (level, fraction) = plant_progress(totals);
    AquariumScene {
        progress: build_progress_bar(level, fraction, width),
        plants: build_plants(level, width, frame),
    }
}
