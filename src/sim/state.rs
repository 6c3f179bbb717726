//! Game state and session bookkeeping
//!
//! `GameState` exclusively owns every entity. Nothing outside the tick and
//! the render pass holds on to an entity between frames.

use std::collections::HashSet;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::entity::{Bullet, Enemy, Particle, Player};
use super::tutorial::{Tutorial, TutorialState};
use crate::color::{Color, Palette};
use crate::consts::*;
use crate::polar;

/// Color filter applied by the render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FilterMode {
    #[default]
    Identity,
    Grayscale,
}

impl FilterMode {
    #[inline]
    pub fn apply(self, color: Color) -> Color {
        match self {
            FilterMode::Identity => color,
            FilterMode::Grayscale => color.gray_scale(),
        }
    }
}

/// Snapshot of a session for logs and the headless runner
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u64,
    pub health: f32,
    pub alive: bool,
    pub elapsed_secs: f32,
    pub ticks: u64,
    pub tutorial: TutorialState,
    pub spawn_interval: f32,
    pub enemies: usize,
    pub bullets: usize,
    pub particles: usize,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Visual only
    pub particles: Vec<Particle>,
    pub tutorial: Tutorial,
    /// Keys currently held down
    pub pressed_keys: HashSet<String>,
    /// Last known pointer position
    pub pointer_pos: Vec2,
    pub score: u64,
    /// Current time between spawns; never increases
    pub enemy_spawn_interval: f32,
    /// Time left until the next spawn
    pub enemy_spawn_cooldown: f32,
    pub paused: bool,
    pub filter: FilterMode,
    pub palette: Palette,
    /// Live particle cap
    pub max_particles: usize,
    /// Simulated seconds (after death slowdown)
    pub elapsed: f32,
    /// Simulation tick counter (ticks while paused are not counted)
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed and default palette
    pub fn new(seed: u64) -> Self {
        log::info!("New session (seed {seed})");
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            tutorial: Tutorial::new(),
            pressed_keys: HashSet::new(),
            pointer_pos: Vec2::ZERO,
            score: 0,
            enemy_spawn_interval: ENEMY_SPAWN_COOLDOWN,
            enemy_spawn_cooldown: ENEMY_SPAWN_COOLDOWN,
            paused: false,
            filter: FilterMode::Identity,
            palette: Palette::default(),
            max_particles: 2000,
            elapsed: 0.0,
            time_ticks: 0,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    pub fn is_player_dead(&self) -> bool {
        !self.player.is_alive()
    }

    /// Gray out the world once the player is dead, however it died
    pub fn sync_death_filter(&mut self) {
        if self.is_player_dead() {
            self.filter = FilterMode::Grayscale;
        }
    }

    /// Flip pause. Grayscale while paused; the death filter is never lifted.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.filter = if self.paused || self.is_player_dead() {
            FilterMode::Grayscale
        } else {
            FilterMode::Identity
        };
        log::info!("{}", if self.paused { "Paused" } else { "Unpaused" });
    }

    /// Spawn one enemy on a circle of `ENEMY_SPAWN_DISTANCE` around the player
    pub fn spawn_enemy(&mut self) {
        let angle = self.rng.random::<f32>() * std::f32::consts::TAU;
        let pos = self.player.pos + polar(ENEMY_SPAWN_DISTANCE, angle);
        self.enemies.push(Enemy::new(pos));
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            score: self.score,
            health: self.player.health,
            alive: self.player.is_alive(),
            elapsed_secs: self.elapsed,
            ticks: self.time_ticks,
            tutorial: self.tutorial.state(),
            spawn_interval: self.enemy_spawn_interval,
            enemies: self.enemies.len(),
            bullets: self.bullets.len(),
            particles: self.particles.len(),
        }
    }
}
