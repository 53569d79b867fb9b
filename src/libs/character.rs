//! ASCII art for each mood.
//!
//! Bundled art ships with the binary. A mood can be overridden with a text
//! file (see `custom_art` in the configuration) holding one or more frames
//! separated by a line containing only `---`.

use crate::libs::config::Config;
use crate::libs::mood::MoodState;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const FRAME_SEPARATOR: &str = "\n---\n";

/// Face used when nothing else can be loaded.
pub const FALLBACK_ART: &str = "(•_•)";

/// Single-frame faces used when a custom art file cannot be used.
pub fn default_face(state: MoodState) -> &'static str {
    match state {
        MoodState::Idle => "(•‿•)",
        MoodState::Sleeping => "(-‿-) zzZ",
        MoodState::Watching => "(°‿°)",
        MoodState::Excited => "\\(★‿★)/",
        MoodState::Dizzy => "(@‿@)~",
        MoodState::Alarmed => "(╯°□°)╯",
        MoodState::Cheering => "\\(°▽°)/",
        MoodState::Sweating => "(;°‿°)",
    }
}

fn bundled_art(state: MoodState) -> &'static str {
    match state {
        MoodState::Idle => "  (•‿•)\n  /|_|\\\n   / \\\n---\n  (•‿•)\n  \\|_|/\n   / \\",
        MoodState::Sleeping => "  (-‿-) z\n  /|_|\\\n   / \\\n---\n  (-‿-) zZ\n  /|_|\\\n   / \\\n---\n  (-‿-) zzZ\n  /|_|\\\n   / \\",
        MoodState::Watching => "  (°‿°)\n  /|_|\\\n   / \\\n---\n   (°‿°)\n  /|_|\\\n   / \\",
        MoodState::Excited => " \\(★‿★)/\n   |_|\n   / \\\n---\n  (★‿★)\n  /|_|\\\n  _/ \\_",
        MoodState::Dizzy => "  (@‿@)~\n  /|_|\\\n   / \\\n---\n ~(@‿@)\n  /|_|\\\n   / \\",
        MoodState::Alarmed => " (╯°□°)╯\n   |_|\n   / \\\n---\n ╰(°□°╰)\n   |_|\n   / \\",
        MoodState::Cheering => " \\(°▽°)/\n   |_|\n   / \\\n---\n  (°▽°)\n  /|_|\\\n   / \\",
        MoodState::Sweating => "  (;°‿°)\n  /|_|\\\n   / \\\n---\n  (°‿°;)\n  /|_|\\\n   / \\",
    }
}

/// Display width of a line in terminal columns. Emoji such as `🌿` take two.
pub fn text_width(line: &str) -> usize {
    UnicodeWidthStr::width(line)
}

/// Longest prefix of `line` that fits in `width` columns. A wide glyph that
/// would straddle the edge is dropped.
pub fn truncate_to_width(line: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in line.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Splits art text into frames and pads every line of every frame to the
/// same width, so the widget keeps its size while animating.
pub fn parse_frames(text: &str) -> Vec<String> {
    let raw: Vec<&str> = text.split(FRAME_SEPARATOR).filter(|frame| !frame.trim().is_empty()).collect();
    if raw.is_empty() {
        return vec![FALLBACK_ART.to_string()];
    }
    let max_width = raw.iter().flat_map(|frame| frame.split('\n')).map(text_width).max().unwrap_or(0);
    raw.iter()
        .map(|frame| frame.split('\n').map(|line| pad_right(line, max_width)).collect::<Vec<_>>().join("\n"))
        .collect()
}

fn pad_right(line: &str, width: usize) -> String {
    let mut padded = line.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(text_width(line))));
    padded
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => std::env::var_os("HOME").or_else(|| std::env::var_os("USERPROFILE")).map(PathBuf::from).map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}

fn load_custom_frames(path: &Path, state: MoodState) -> Vec<String> {
    let path = expand_home(path);
    match fs::read_to_string(&path) {
        Ok(text) => {
            let text = text.trim_matches('\n');
            if text.trim().is_empty() {
                return vec![default_face(state).to_string()];
            }
            parse_frames(text)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "custom art unreadable, using default face");
            vec![default_face(state).to_string()]
        }
    }
}

/// Resolves and caches the frames of every mood.
#[derive(Debug, Clone)]
pub struct CharacterRenderer {
    frames: HashMap<MoodState, Vec<String>>,
    max_art_width: usize,
}

impl CharacterRenderer {
    pub fn new(config: &Config) -> Self {
        let mut cache: HashMap<PathBuf, Vec<String>> = HashMap::new();
        let mut frames = HashMap::new();
        for state in MoodState::ALL {
            let state_frames = match config.custom_art_for(state) {
                Some(path) => cache.entry(path.to_path_buf()).or_insert_with(|| load_custom_frames(path, state)).clone(),
                None => parse_frames(bundled_art(state)),
            };
            frames.insert(state, state_frames);
        }

        // Width is sized from the bundled art so swapping moods never shrinks the widget.
        let max_art_width = MoodState::ALL
            .iter()
            .flat_map(|state| parse_frames(bundled_art(*state)))
            .flat_map(|frame| frame.split('\n').map(text_width).collect::<Vec<_>>())
            .max()
            .unwrap_or(0);

        Self { frames, max_art_width }
    }

    pub fn max_art_width(&self) -> usize {
        self.max_art_width
    }

    pub fn art_for(&self, state: MoodState, frame: usize) -> &str {
        match self.frames.get(&state) {
            Some(frames) if !frames.is_empty() => &frames[frame % frames.len()],
            _ => FALLBACK_ART,
        }
    }

    pub fn frame_count(&self, state: MoodState) -> usize {
        self.frames.get(&state).map_or(1, |frames| frames.len().max(1))
    }
}
