//! Swarm Survivor - a top-down survive-the-swarm arcade game
//!
//! Core modules:
//! - `sim`: Simulation core (entities, collisions, tutorial, per-tick update)
//! - `renderer`: Renderer contract and the frame render pass
//! - `color`: RGBA colors and the parsed game palette
//! - `settings`: Data-driven configuration (JSON)
//! - `app`: Frame driver tying clock, input, simulation and rendering together

pub mod app;
pub mod clock;
pub mod color;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::App;
pub use clock::FrameClock;
pub use color::{Color, Palette};
pub use error::{ConfigError, ParseError};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 25.0;
    pub const PLAYER_SPEED: f32 = 250.0;
    pub const PLAYER_MAX_HEALTH: f32 = 100.0;
    /// Where the player starts, just inside the top-left corner
    pub const PLAYER_START: (f32, f32) = (PLAYER_RADIUS + 10.0, PLAYER_RADIUS + 10.0);

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 500.0;
    pub const BULLET_RADIUS: f32 = 10.0;
    /// Seconds before a bullet expires
    pub const BULLET_LIFETIME: f32 = 2.0;

    /// Alpha per second for tutorial popup fades
    pub const TUTORIAL_POPUP_SPEED: f32 = 1.7;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = PLAYER_SPEED / 3.0;
    pub const ENEMY_RADIUS: f32 = PLAYER_RADIUS / 2.0;
    /// Initial spawn interval (seconds)
    pub const ENEMY_SPAWN_COOLDOWN: f32 = 1.0;
    /// Spawn interval shrinks by this much after every spawn...
    pub const ENEMY_SPAWN_STEP: f32 = 0.01;
    /// ...but never below this
    pub const ENEMY_SPAWN_MIN_INTERVAL: f32 = 0.01;
    pub const ENEMY_SPAWN_DISTANCE: f32 = 1000.0;
    pub const ENEMY_DAMAGE: f32 = PLAYER_MAX_HEALTH / 10.0;
    pub const ENEMY_KILL_POINT: u64 = 1;

    /// Particle burst defaults
    pub const PARTICLE_RADIUS: f32 = 8.0;
    pub const PARTICLES_COUNT: usize = 50;
    pub const PARTICLE_MAG: f32 = BULLET_SPEED;
    pub const PARTICLE_LIFETIME: f32 = 1.0;

    /// HUD
    pub const HEALTH_BAR_HEIGHT: f32 = 10.0;
    pub const HEALTH_PER_KILL: f32 = ENEMY_DAMAGE / 3.0;

    /// Timestep divisor once the player is dead (slow-motion death screen)
    pub const DEATH_SLOWDOWN: f32 = 50.0;

    /// Default palette (hex literals, parsed once at startup)
    pub const PLAYER_COLOR_HEX: &str = "#f43841";
    pub const ENEMY_COLOR_HEX: &str = "#9e95c7";
    pub const MESSAGE_COLOR_HEX: &str = "#ffffff";
}

/// Convert polar (magnitude, angle in radians) to cartesian (x, y)
#[inline]
pub fn polar(mag: f32, angle: f32) -> Vec2 {
    Vec2::new(angle.cos() * mag, angle.sin() * mag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() <= eps * (1.0 + a.abs().max(b.abs()))
    }

    proptest! {
        #[test]
        fn add_then_sub_is_identity(
            x in -1e4f32..1e4, y in -1e4f32..1e4,
            wx in -1e4f32..1e4, wy in -1e4f32..1e4,
        ) {
            let v = Vec2::new(x, y);
            let w = Vec2::new(wx, wy);
            let r = v + w - w;
            prop_assert!(approx(r.x, v.x, 1e-3));
            prop_assert!(approx(r.y, v.y, 1e-3));
        }

        #[test]
        fn scale_by_one_is_identity(x in -1e6f32..1e6, y in -1e6f32..1e6) {
            let v = Vec2::new(x, y);
            prop_assert_eq!(v * 1.0, v);
        }

        #[test]
        fn normalized_has_unit_length(x in -1e4f32..1e4, y in -1e4f32..1e4) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let n = Vec2::new(x, y).normalize();
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn polar_length_is_magnitude(mag in 0.0f32..1e4, angle in -10.0f32..10.0) {
            prop_assert!(approx(polar(mag, angle).length(), mag, 1e-4));
        }
    }

    #[test]
    fn test_polar_axes() {
        let p = polar(2.0, 0.0);
        assert!((p.x - 2.0).abs() < 1e-6 && p.y.abs() < 1e-6);

        let p = polar(3.0, std::f32::consts::FRAC_PI_2);
        assert!(p.x.abs() < 1e-5 && (p.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        // Zero-length normalize is a known degenerate case; it propagates NaN
        let n = Vec2::ZERO.normalize();
        assert!(!n.x.is_finite());
        assert!(!n.y.is_finite());
    }

    #[test]
    fn test_distance() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }
}
