//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - One `tick` per frame, variable timestep
//! - Seeded RNG only
//! - Input arrives as events applied directly to `GameState`

pub mod collision;
pub mod entity;
pub mod input;
pub mod state;
pub mod tick;
pub mod tutorial;

pub use collision::{bullet_hits_enemy, circles_overlap, enemy_hits_player};
pub use entity::{Bullet, Enemy, Particle, Player, particle_burst};
pub use input::{PAUSE_KEY, key_direction};
pub use state::{FilterMode, GameState, SessionSummary};
pub use tick::tick;
pub use tutorial::{FadeEvent, Popup, Tutorial, TutorialState};
