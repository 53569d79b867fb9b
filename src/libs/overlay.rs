//! Terminal overlay.
//!
//! Draws the frame in a box on the alternate screen and turns key presses
//! into [`MenuAction`]s. The terminal is restored when the overlay drops.

use crate::libs::character::text_width;
use crate::libs::config::{Anchor, Config, Position};
use crate::libs::palette::Palette;
use crate::libs::scene::{ColoredDisplay, Region};
use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use std::io::{self, IsTerminal, Stdout, Write};
use std::time::Duration;

/// Cells kept free between the box and the terminal edge.
pub const MARGIN: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    TakeBreak,
    SkipBreak,
    ToggleWeather,
    OpenConfig,
    Quit,
}

impl MenuAction {
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            // Raw mode swallows SIGINT, so Ctrl+C arrives as a key.
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(MenuAction::Quit),
            KeyCode::Char('b') => Some(MenuAction::TakeBreak),
            KeyCode::Char('s') => Some(MenuAction::SkipBreak),
            KeyCode::Char('w') => Some(MenuAction::ToggleWeather),
            KeyCode::Char('c') => Some(MenuAction::OpenConfig),
            KeyCode::Char('q') | KeyCode::Esc => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

fn offset(anchor: Anchor, available: u16, size: u16) -> u16 {
    match anchor {
        Anchor::Start => MARGIN,
        Anchor::Middle => available.saturating_sub(size) / 2,
        Anchor::End => available.saturating_sub(size + MARGIN),
    }
}

/// Top-left corner of a `width` x `height` box anchored at `position`.
pub fn place(position: Position, term_width: u16, term_height: u16, width: u16, height: u16) -> (u16, u16) {
    (offset(position.horizontal(), term_width, width), offset(position.vertical(), term_height, height))
}

pub struct Overlay {
    out: Stdout,
    position: Position,
    palette: Palette,
    widget_mode: bool,
    min_width: usize,
    last_area: Option<(u16, u16, u16, u16)>,
    active: bool,
}

impl Overlay {
    pub fn new(config: &Config) -> Result<Self> {
        let mut out = io::stdout();
        if !out.is_terminal() {
            bail!("stdout is not a terminal");
        }
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(out, EnterAlternateScreen, cursor::Hide, Clear(ClearType::All)) {
            let _ = terminal::disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self {
            out,
            position: config.position,
            palette: Palette::from_config(config),
            widget_mode: config.widget_mode,
            min_width: 0,
            last_area: None,
            active: true,
        })
    }

    /// The box never shrinks below the widest content seen.
    pub fn set_min_width(&mut self, width: usize) {
        self.min_width = self.min_width.max(width);
    }

    pub fn paint(&mut self, display: &ColoredDisplay) -> Result<()> {
        self.set_min_width(display.width());
        let inner = self.min_width;
        let box_width = (inner + 4).min(u16::MAX as usize) as u16;
        let box_height = (display.height() + 2).min(u16::MAX as usize) as u16;
        let (term_width, term_height) = terminal::size()?;
        let (x, y) = place(self.position, term_width, term_height, box_width, box_height);

        let area = (x, y, box_width, box_height);
        if self.last_area != Some(area) {
            queue!(self.out, ResetColor, Clear(ClearType::All))?;
            self.last_area = Some(area);
        }

        let background = if self.widget_mode { self.palette.background } else { Color::Reset };
        let border = self.palette.color_for(Region::Border);
        queue!(self.out, SetBackgroundColor(background), SetForegroundColor(border))?;
        let rule = "─".repeat(inner + 2);
        queue!(self.out, cursor::MoveTo(x, y), Print(format!("┌{}┐", rule)))?;
        queue!(self.out, cursor::MoveTo(x, y + box_height.saturating_sub(1)), Print(format!("└{}┘", rule)))?;

        for row in 0..display.height() {
            let line_y = y + 1 + row as u16;
            queue!(self.out, cursor::MoveTo(x, line_y), SetForegroundColor(border), Print("│ "))?;
            let mut used = 0;
            for (region, text) in display.spans(row) {
                used += text_width(&text);
                queue!(self.out, SetForegroundColor(self.palette.color_for(region)), Print(text))?;
            }
            let pad = " ".repeat(inner.saturating_sub(used));
            queue!(self.out, Print(pad), SetForegroundColor(border), Print(" │"))?;
        }

        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }

    /// Drains pending key events without blocking.
    pub fn poll_actions(&mut self) -> Result<Vec<MenuAction>> {
        let mut actions = Vec::new();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => actions.extend(MenuAction::from_key(key)),
                Event::Resize(..) => self.last_area = None,
                _ => {}
            }
        }
        Ok(actions)
    }

    pub fn close(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Overlay {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
    }
}
