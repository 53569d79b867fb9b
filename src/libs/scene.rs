//! Frame composition.
//!
//! A frame is the character art merged with the seaweed bed, wrapped in
//! weather and time-of-day decorations, sprinkled with effect particles and
//! followed by the progress bar and status lines. Every cell carries a
//! [`Region`] so the overlay can color it.

use crate::libs::character::text_width;
use crate::libs::effects::EffectCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Character,
    Plant,
    Border,
    Bubble,
    Firefly,
    Fish,
    Butterfly,
    Snail,
    Cat,
    Crab,
    Seahorse,
    Weather,
    Progress,
    Status,
    Achievement,
    Sysinfo,
    Default,
}

impl Region {
    pub const ALL: [Region; 17] = [
        Region::Character,
        Region::Plant,
        Region::Border,
        Region::Bubble,
        Region::Firefly,
        Region::Fish,
        Region::Butterfly,
        Region::Snail,
        Region::Cat,
        Region::Crab,
        Region::Seahorse,
        Region::Weather,
        Region::Progress,
        Region::Status,
        Region::Achievement,
        Region::Sysinfo,
        Region::Default,
    ];
}

/// Lines drawn above and below the art. Empty strings are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoration {
    pub above: &'static str,
    pub below: &'static str,
}

impl Decoration {
    pub const fn above(line: &'static str) -> Self {
        Self { above: line, below: "" }
    }

    pub fn is_empty(&self) -> bool {
        self.above.is_empty() && self.below.is_empty()
    }
}

type Cell = (char, Region);

fn blank_row(width: usize) -> Vec<Cell> {
    vec![(' ', Region::Default); width]
}

fn tagged_row(line: &str, region: Region) -> Vec<Cell> {
    line.chars().map(|ch| (ch, if ch == ' ' { Region::Default } else { region })).collect()
}

/// Centers `line` in `width` columns. Wider lines are returned unchanged.
pub fn center(line: &str, width: usize) -> String {
    let len = text_width(line);
    if len >= width {
        return line.to_string();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(width - len - left))
}

fn merge_cells(art: &str, plants: &[String], width: usize) -> Vec<Vec<Cell>> {
    let art_lines: Vec<&str> = art.lines().collect();
    let art_width = art_lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let width = width.max(art_width);
    let height = art_lines.len().max(plants.len());
    let mut rows: Vec<Vec<Cell>> = (0..height).map(|_| blank_row(width)).collect();

    let left = (width - art_width) / 2;
    let art_top = height - art_lines.len();
    for (i, line) in art_lines.iter().enumerate() {
        for (j, ch) in line.chars().enumerate() {
            if ch != ' ' {
                rows[art_top + i][left + j] = (ch, Region::Character);
            }
        }
    }

    // Plants share the bottom edge with the art and only fill blank cells.
    let plant_top = height - plants.len();
    for (i, line) in plants.iter().enumerate() {
        for (j, ch) in line.chars().enumerate().take(width) {
            let cell = &mut rows[plant_top + i][j];
            if ch != ' ' && cell.0 == ' ' {
                *cell = (ch, Region::Plant);
            }
        }
    }
    rows
}

/// Merges the art (centered in `width`) with the seaweed rows.
///
/// Both are bottom aligned. Plants never overwrite art and a bed taller than
/// the art adds rows above it.
pub fn merge_plants(art: &str, plants: &[String], width: usize) -> Vec<String> {
    merge_cells(art, plants, width).into_iter().map(|row| row.into_iter().map(|(ch, _)| ch).collect()).collect()
}

/// Text lines plus one region tag per character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColoredDisplay {
    pub lines: Vec<String>,
    pub regions: Vec<Vec<Region>>,
}

impl ColoredDisplay {
    fn push_row(&mut self, row: Vec<Cell>) {
        self.lines.push(row.iter().map(|(ch, _)| *ch).collect());
        self.regions.push(row.into_iter().map(|(_, region)| region).collect());
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn width(&self) -> usize {
        self.lines.iter().map(|line| text_width(line)).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Runs of equally tagged characters in `row`, left to right.
    pub fn spans(&self, row: usize) -> Vec<(Region, String)> {
        let (Some(line), Some(tags)) = (self.lines.get(row), self.regions.get(row)) else {
            return Vec::new();
        };
        let mut spans: Vec<(Region, String)> = Vec::new();
        for (ch, &region) in line.chars().zip(tags.iter()) {
            match spans.last_mut() {
                Some((last, text)) if *last == region => text.push(ch),
                _ => spans.push((region, ch.to_string())),
            }
        }
        spans
    }
}

/// Builds one frame bottom-up: content first, then the surrounding lines.
pub struct SceneBuilder {
    width: usize,
    content: Vec<Vec<Cell>>,
    above: Vec<Vec<Cell>>,
    below: Vec<Vec<Cell>>,
    footer: Vec<Vec<Cell>>,
}

impl SceneBuilder {
    pub fn new(art: &str, plants: &[String], width: usize) -> Self {
        let content = merge_cells(art, plants, width);
        let width = content.first().map(Vec::len).unwrap_or(width);
        Self {
            width,
            content,
            above: Vec::new(),
            below: Vec::new(),
            footer: Vec::new(),
        }
    }

    /// Size of the art and plant area that effects are painted into.
    pub fn content_size(&self) -> (usize, usize) {
        (self.width, self.content.len())
    }

    /// Wraps the current frame. Later decorations end up further out.
    pub fn decorate(&mut self, decoration: Decoration) -> &mut Self {
        if !decoration.above.is_empty() {
            self.above.insert(0, tagged_row(&center(decoration.above, self.width), Region::Weather));
        }
        if !decoration.below.is_empty() {
            self.below.push(tagged_row(&center(decoration.below, self.width), Region::Weather));
        }
        self
    }

    /// Paints effect cells into blank content cells. Out of range cells are dropped.
    pub fn paint_effects(&mut self, cells: &[EffectCell]) -> &mut Self {
        for cell in cells {
            if let Some(slot) = self.content.get_mut(cell.row).and_then(|row| row.get_mut(cell.col)) {
                if slot.0 == ' ' {
                    *slot = (cell.ch, cell.region);
                }
            }
        }
        self
    }

    pub fn line(&mut self, text: &str, region: Region) -> &mut Self {
        self.footer.push(text.chars().map(|ch| (ch, region)).collect());
        self
    }

    pub fn build(self) -> ColoredDisplay {
        let mut display = ColoredDisplay::default();
        for row in self.above.into_iter().chain(self.content).chain(self.below).chain(self.footer) {
            display.push_row(row);
        }
        display
    }
}

/// Everything the status area can show under the scene.
#[derive(Debug, Clone, Default)]
pub struct StatusLines {
    pub progress: String,
    pub break_line: Option<String>,
    pub achievement: Option<String>,
    pub sysinfo: Vec<String>,
    pub battery: Option<String>,
}

impl StatusLines {
    pub fn write_to(&self, builder: &mut SceneBuilder) {
        builder.line(&self.progress, Region::Progress);
        if let Some(line) = &self.break_line {
            builder.line(line, Region::Status);
        }
        if let Some(line) = &self.achievement {
            builder.line(line, Region::Achievement);
        }
        for line in &self.sysinfo {
            builder.line(line, Region::Sysinfo);
        }
        if let Some(line) = &self.battery {
            builder.line(line, Region::Sysinfo);
        }
    }
}
