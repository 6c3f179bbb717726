//! Frame driver
//!
//! Owns the clock, the parsed palette and the current session. A platform
//! layer forwards input events and calls `frame` once per animation frame.

use glam::Vec2;
use rand::Rng;

use crate::clock::FrameClock;
use crate::color::Palette;
use crate::error::ConfigError;
use crate::renderer::{Renderer, render_frame};
use crate::settings::Settings;
use crate::sim::{GameState, SessionSummary, tick};

/// Keys that start a new session from the death screen
const RESTART_KEYS: [&str; 2] = ["r", "R"];

pub struct App {
    pub state: GameState,
    clock: FrameClock,
    palette: Palette,
    max_particles: usize,
    restarts: u32,
}

impl App {
    /// Parse the palette and start the first session. Bad colors are fatal.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let palette = Palette::from_settings(settings)?;
        let seed = settings.seed.unwrap_or_else(rand::random);
        let max_particles = settings.max_particles();

        Ok(Self {
            state: new_session(seed, palette, max_particles),
            clock: FrameClock::new(),
            palette,
            max_particles,
            restarts: 0,
        })
    }

    /// Simulate and draw one animation frame
    pub fn frame<R: Renderer>(&mut self, timestamp_ms: f64, renderer: &mut R) {
        let dt = self.clock.tick(timestamp_ms);
        tick(&mut self.state, dt);
        render_frame(&self.state, renderer);
    }

    pub fn key_down(&mut self, key: &str) {
        if self.state.is_player_dead() && RESTART_KEYS.contains(&key) {
            self.restart();
            return;
        }
        self.state.key_down(key);
    }

    pub fn key_up(&mut self, key: &str) {
        self.state.key_up(key);
    }

    pub fn mouse_move(&mut self, pos: Vec2) {
        self.state.mouse_move(pos);
    }

    pub fn mouse_down(&mut self, pos: Vec2) {
        self.state.mouse_down(pos);
    }

    /// Throw the current session away and start a fresh one.
    ///
    /// The next seed comes from the old session's RNG, so a seeded run
    /// stays reproducible across restarts.
    pub fn restart(&mut self) {
        let seed = self.state.rng.random::<u64>();
        log::info!(
            "Restarting after score {} (restart #{})",
            self.state.score,
            self.restarts + 1
        );
        self.state = new_session(seed, self.palette, self.max_particles);
        self.restarts += 1;
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    pub fn summary(&self) -> SessionSummary {
        self.state.summary()
    }
}

fn new_session(seed: u64, palette: Palette, max_particles: usize) -> GameState {
    GameState::new(seed)
        .with_palette(palette)
        .with_max_particles(max_particles)
}
