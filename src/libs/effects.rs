//! Particle effects drawn over the aquarium: bubbles, fireflies and
//! companion creatures.
//!
//! Every system owns a seedable RNG so tests can replay a run exactly.

use crate::libs::activity::ActivityTotals;
use crate::libs::scene::Region;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const BUBBLE_CHARS: [char; 3] = ['·', '°', 'o'];
/// Relative spawn weights of [`BUBBLE_CHARS`].
const BUBBLE_WEIGHTS: [u32; 3] = [3, 2, 1];
pub const FIREFLY_CHARS: [char; 3] = ['·', '˙', '°'];

pub const MAX_BUBBLES: usize = 8;
const MAX_SPAWN_RATE: f64 = 0.6;

const NIGHT_FIREFLIES: usize = 5;
const FLOW_FIREFLIES: usize = 3;

const DRIFT: [i64; 4] = [-1, 0, 0, 1];
const VERTICAL_DRIFT: [i64; 5] = [-1, 0, 0, 0, 1];

/// One character drawn into the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectCell {
    pub row: usize,
    pub col: usize,
    pub ch: char,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Particle {
    pub x: usize,
    pub y: usize,
    pub ch: char,
}

fn drift(value: usize, delta: i64, limit: usize) -> usize {
    let max = limit.saturating_sub(1) as i64;
    (value as i64 + delta).clamp(0, max.max(0)) as usize
}

/// Rising bubbles whose spawn rate scales with activity.
pub struct BubbleSystem {
    rng: StdRng,
    bubbles: Vec<Particle>,
}

impl BubbleSystem {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, bubbles: Vec::new() }
    }

    pub fn spawn_rate(totals: &ActivityTotals) -> f64 {
        let rate = (totals.total_keypresses as f64 / 200.0).min(0.3)
            + (totals.total_clicks as f64 / 100.0).min(0.2)
            + (totals.total_active_seconds / 300.0).min(0.2);
        rate.min(MAX_SPAWN_RATE)
    }

    pub fn update(&mut self, totals: &ActivityTotals, width: usize, height: usize) -> Vec<Particle> {
        if width == 0 || height == 0 {
            self.bubbles.clear();
            return Vec::new();
        }

        // Bubbles leaving through the top are dropped.
        let rng = &mut self.rng;
        self.bubbles.retain_mut(|bubble| {
            if bubble.y == 0 {
                return false;
            }
            bubble.y -= 1;
            bubble.x = drift(bubble.x, *DRIFT.choose(rng).unwrap_or(&0), width);
            true
        });

        let rate = Self::spawn_rate(totals);
        if rate > 0.0 && self.bubbles.len() < MAX_BUBBLES && self.rng.gen::<f64>() < rate {
            let x = self.rng.gen_range(1..=width.saturating_sub(2).max(1)).min(width - 1);
            let roll = self.rng.gen_range(0..BUBBLE_WEIGHTS.iter().sum::<u32>());
            let ch = if roll < BUBBLE_WEIGHTS[0] {
                BUBBLE_CHARS[0]
            } else if roll < BUBBLE_WEIGHTS[0] + BUBBLE_WEIGHTS[1] {
                BUBBLE_CHARS[1]
            } else {
                BUBBLE_CHARS[2]
            };
            self.bubbles.push(Particle { x, y: height - 1, ch });
        }

        self.bubbles.clone()
    }
}

/// Ambient particles drifting at night or during a flow state.
pub struct FireflySystem {
    rng: StdRng,
    fireflies: Vec<(Particle, usize)>,
}

impl FireflySystem {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, fireflies: Vec::new() }
    }

    pub fn update(&mut self, is_night: bool, is_flow: bool, width: usize, height: usize, frame: usize) -> Vec<Particle> {
        if !(is_night || is_flow) || width == 0 || height == 0 {
            self.fireflies.clear();
            return Vec::new();
        }

        let limit = if is_night { NIGHT_FIREFLIES } else { FLOW_FIREFLIES };
        self.fireflies.truncate(limit);
        while self.fireflies.len() < limit {
            let x = self.rng.gen_range(1..=width.saturating_sub(2).max(1)).min(width - 1);
            let y = self.rng.gen_range(0..height);
            let ch = *FIREFLY_CHARS.choose(&mut self.rng).unwrap_or(&FIREFLY_CHARS[0]);
            let blink_offset = self.rng.gen_range(0..4);
            self.fireflies.push((Particle { x, y, ch }, blink_offset));
        }

        for (firefly, _) in self.fireflies.iter_mut() {
            firefly.x = drift(firefly.x, *DRIFT.choose(&mut self.rng).unwrap_or(&0), width);
            firefly.y = drift(firefly.y, *VERTICAL_DRIFT.choose(&mut self.rng).unwrap_or(&0), height);
        }

        // Each firefly is dark one frame out of four.
        self.fireflies
            .iter()
            .filter(|(_, offset)| (frame + offset) % 4 != 0)
            .map(|(firefly, _)| *firefly)
            .collect()
    }
}

#[derive(Debug)]
pub struct CreatureDef {
    pub name: &'static str,
    pub region: Region,
    pub right_sprites: &'static [&'static str],
    pub left_sprites: &'static [&'static str],
    pub min_keypresses: u64,
    pub min_active_seconds: f64,
    pub min_breaks: u32,
}

impl CreatureDef {
    pub fn is_unlocked_by(&self, totals: &ActivityTotals, breaks_taken: u32) -> bool {
        totals.total_keypresses >= self.min_keypresses && totals.total_active_seconds >= self.min_active_seconds && breaks_taken >= self.min_breaks
    }
}

pub static CREATURE_DEFS: [CreatureDef; 6] = [
    CreatureDef {
        name: "fish",
        region: Region::Fish,
        right_sprites: &["><>"],
        left_sprites: &["<><"],
        min_keypresses: 500,
        min_active_seconds: 0.0,
        min_breaks: 0,
    },
    CreatureDef {
        name: "butterfly",
        region: Region::Butterfly,
        right_sprites: &["}{", ")("],
        left_sprites: &["}{", ")("],
        min_keypresses: 0,
        min_active_seconds: 1800.0,
        min_breaks: 0,
    },
    CreatureDef {
        name: "snail",
        region: Region::Snail,
        right_sprites: &["@/"],
        left_sprites: &["\\@"],
        min_keypresses: 0,
        min_active_seconds: 0.0,
        min_breaks: 3,
    },
    CreatureDef {
        name: "cat",
        region: Region::Cat,
        right_sprites: &["=^.^="],
        left_sprites: &["=^.^="],
        min_keypresses: 2000,
        min_active_seconds: 0.0,
        min_breaks: 0,
    },
    CreatureDef {
        name: "crab",
        region: Region::Crab,
        right_sprites: &["V(;,;)V", "v(;,;)v"],
        left_sprites: &["V(;,;)V", "v(;,;)v"],
        min_keypresses: 0,
        min_active_seconds: 5000.0,
        min_breaks: 0,
    },
    CreatureDef {
        name: "seahorse",
        region: Region::Seahorse,
        right_sprites: &["S~", "~S"],
        left_sprites: &["S~", "~S"],
        min_keypresses: 0,
        min_active_seconds: 0.0,
        min_breaks: 10,
    },
];

#[derive(Debug)]
struct ActiveCreature {
    def: &'static CreatureDef,
    x: i64,
    y: usize,
    dx: i64,
}

/// Companion creatures that join once their milestone is reached.
pub struct CreatureSystem {
    rng: StdRng,
    creatures: Vec<ActiveCreature>,
}

impl CreatureSystem {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, creatures: Vec::new() }
    }

    pub fn unlocked(&self) -> Vec<&'static str> {
        self.creatures.iter().map(|creature| creature.def.name).collect()
    }

    pub fn update(&mut self, totals: &ActivityTotals, breaks_taken: u32, width: usize, height: usize, frame: usize) -> Vec<EffectCell> {
        if width == 0 || height == 0 {
            return Vec::new();
        }

        for (i, def) in CREATURE_DEFS.iter().enumerate() {
            if self.creatures.iter().any(|creature| creature.def.name == def.name) || !def.is_unlocked_by(totals, breaks_taken) {
                continue;
            }
            // Spread creatures over distinct rows of the content area.
            let y_fraction = (i + 1) as f64 / (CREATURE_DEFS.len() + 1) as f64;
            let y = ((y_fraction * height as f64) as usize).min(height - 1);
            let x = self.rng.gen_range(0..=width.saturating_sub(4)) as i64;
            let dx = if self.rng.gen_bool(0.5) { 1 } else { -1 };
            self.creatures.push(ActiveCreature { def, x, y, dx });
        }

        let mut cells = Vec::new();
        for creature in self.creatures.iter_mut() {
            if frame % 2 == 0 {
                creature.x += creature.dx;
            }

            let sprites = if creature.dx > 0 { creature.def.right_sprites } else { creature.def.left_sprites };
            let sprite = sprites[frame % sprites.len()];
            let sprite_width = sprite.chars().count() as i64;

            if creature.x <= 0 {
                creature.dx = 1;
                creature.x = 0;
            } else if creature.x + sprite_width >= width as i64 {
                creature.dx = -1;
                creature.x = (width as i64 - sprite_width).max(0);
            }

            for (j, ch) in sprite.chars().enumerate() {
                let col = creature.x + j as i64;
                if ch != ' ' && (0..width as i64).contains(&col) {
                    cells.push(EffectCell {
                        row: creature.y,
                        col: col as usize,
                        ch,
                        region: creature.def.region,
                    });
                }
            }
        }
        cells
    }
}

/// Coordinates bubbles, fireflies and creatures.
pub struct EffectsManager {
    pub bubbles: BubbleSystem,
    pub fireflies: FireflySystem,
    pub creatures: CreatureSystem,
}

impl EffectsManager {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Deterministic effects for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        Self {
            bubbles: BubbleSystem::new(StdRng::seed_from_u64(rng.gen())),
            fireflies: FireflySystem::new(StdRng::seed_from_u64(rng.gen())),
            creatures: CreatureSystem::new(StdRng::seed_from_u64(rng.gen())),
        }
    }

    /// Advances all systems one tick and returns the cells to draw inside a
    /// `width` x `height` content area.
    #[allow(clippy::too_many_arguments)]
    pub fn update(&mut self, totals: &ActivityTotals, breaks_taken: u32, width: usize, height: usize, frame: usize, is_night: bool, is_flow: bool) -> Vec<EffectCell> {
        let mut cells: Vec<EffectCell> = self
            .bubbles
            .update(totals, width, height)
            .into_iter()
            .map(|p| EffectCell { row: p.y, col: p.x, ch: p.ch, region: Region::Bubble })
            .collect();
        cells.extend(
            self.fireflies
                .update(is_night, is_flow, width, height, frame)
                .into_iter()
                .map(|p| EffectCell { row: p.y, col: p.x, ch: p.ch, region: Region::Firefly }),
        );
        cells.extend(self.creatures.update(totals, breaks_taken, width, height, frame));
        cells
    }
}

impl Default for EffectsManager {
    fn default() -> Self {
        Self::new()
    }
}
