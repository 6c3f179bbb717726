//! Simulation entities
//!
//! Player, bullets, enemies and particles. Each owns its position and an
//! update rule; the tick decides when they interact.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::polar;

/// The player-controlled circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Always within `[0, PLAYER_MAX_HEALTH]`
    pub health: f32,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            health: PLAYER_MAX_HEALTH,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn update(&mut self, dt: f32, vel: Vec2) {
        self.pos += vel * dt;
    }

    /// Fire a bullet toward `target`.
    ///
    /// A target exactly on the player yields a NaN direction; the bullet is
    /// still created and simply never hits anything.
    pub fn shoot_at(&self, target: Vec2) -> Bullet {
        let dir = (target - self.pos).normalize();
        Bullet::new(
            self.pos + dir * (PLAYER_RADIUS + BULLET_RADIUS),
            dir * BULLET_SPEED,
        )
    }

    pub fn damage(&mut self, value: f32) {
        self.health = (self.health - value).max(0.0);
    }

    /// Raise health up to the max. The dead stay dead.
    pub fn heal(&mut self, value: f32) {
        if !self.is_alive() {
            return;
        }
        self.health = (self.health + value).min(PLAYER_MAX_HEALTH);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_START.0, PLAYER_START.1))
    }
}

/// A straight-flying projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Seconds left; pruned at `<= 0`
    pub lifetime: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            lifetime: BULLET_LIFETIME,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

/// A homing enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub dead: bool,
}

impl Enemy {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, dead: false }
    }

    /// Step toward `target` at `ENEMY_SPEED` (NaN if already on it)
    pub fn update(&mut self, dt: f32, target: Vec2) {
        self.pos += (target - self.pos).normalize() * ENEMY_SPEED * dt;
    }
}

/// Decorative burst fragment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub lifetime: f32,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    pub fn update(&mut self, dt: f32) {
        self.pos += self.vel * dt;
        self.lifetime -= dt;
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime <= 0.0
    }

    /// Linear fade; negative once the lifetime overshoots, so clamp before drawing
    pub fn alpha(&self) -> f32 {
        self.lifetime / PARTICLE_LIFETIME
    }
}

/// Emit a random cluster of particles at `center`, respecting `max_particles`.
///
/// Returns the number of particles actually added.
pub fn particle_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    center: Vec2,
    color: Color,
    max_particles: usize,
) -> usize {
    let wanted = rng.random_range(1..=PARTICLES_COUNT);
    let room = max_particles.saturating_sub(particles.len());
    let count = wanted.min(room);
    if count < wanted && max_particles > 0 {
        log::warn!("Particle cap {max_particles} reached, burst truncated {wanted} -> {count}");
    }

    for _ in 0..count {
        let speed = rng.random::<f32>() * PARTICLE_MAG;
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        particles.push(Particle {
            pos: center,
            vel: polar(speed, angle),
            lifetime: rng.random::<f32>() * PARTICLE_LIFETIME,
            radius: rng.random::<f32>() * PARTICLE_RADIUS,
            color,
        });
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_damage_and_clamp() {
        let mut player = Player::default();
        player.damage(30.0);
        assert_eq!(player.health, 70.0);

        let mut player = Player::default();
        player.damage(200.0);
        assert_eq!(player.health, 0.0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut player = Player::default();
        player.damage(2.0);
        player.heal(HEALTH_PER_KILL);
        assert_eq!(player.health, PLAYER_MAX_HEALTH);

        player.damage(50.0);
        player.heal(10.0);
        assert_eq!(player.health, 60.0);
    }

    #[test]
    fn test_no_resurrection() {
        let mut player = Player::default();
        player.damage(PLAYER_MAX_HEALTH);
        player.heal(HEALTH_PER_KILL);
        assert_eq!(player.health, 0.0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_player_moves_with_velocity() {
        let mut player = Player::new(Vec2::ZERO);
        player.update(0.5, Vec2::new(PLAYER_SPEED, 0.0));
        assert_eq!(player.pos, Vec2::new(125.0, 0.0));
    }

    #[test]
    fn test_shoot_at() {
        let player = Player::new(Vec2::new(100.0, 100.0));
        let bullet = player.shoot_at(Vec2::new(200.0, 100.0));

        assert_eq!(bullet.pos, Vec2::new(100.0 + PLAYER_RADIUS + BULLET_RADIUS, 100.0));
        assert_eq!(bullet.vel, Vec2::new(BULLET_SPEED, 0.0));
        assert_eq!(bullet.lifetime, BULLET_LIFETIME);
    }

    #[test]
    fn test_shoot_at_self_is_degenerate() {
        let player = Player::new(Vec2::new(10.0, 10.0));
        let bullet = player.shoot_at(player.pos);
        assert!(bullet.pos.x.is_nan());
        assert!(bullet.vel.x.is_nan());
        assert_eq!(bullet.lifetime, BULLET_LIFETIME);
    }

    #[test]
    fn test_bullet_decays() {
        let mut bullet = Bullet::new(Vec2::ZERO, Vec2::new(0.0, -10.0));
        bullet.update(1.5);
        assert_eq!(bullet.pos, Vec2::new(0.0, -15.0));
        assert!(!bullet.is_expired());
        bullet.update(0.5);
        assert!(bullet.is_expired());
    }

    #[test]
    fn test_enemy_homes_in() {
        let mut enemy = Enemy::new(Vec2::new(0.0, 100.0));
        enemy.update(0.6, Vec2::ZERO);
        assert!((enemy.pos.y - (100.0 - ENEMY_SPEED * 0.6)).abs() < 1e-4);
        assert!(enemy.pos.x.abs() < 1e-6);
    }

    #[test]
    fn test_enemy_on_target_is_degenerate() {
        let mut enemy = Enemy::new(Vec2::new(5.0, 5.0));
        enemy.update(0.1, Vec2::new(5.0, 5.0));
        assert!(enemy.pos.x.is_nan());
    }

    #[test]
    fn test_particle_alpha_fades() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            lifetime: PARTICLE_LIFETIME,
            radius: 1.0,
            color: Color::WHITE,
        };
        assert_eq!(p.alpha(), 1.0);
        p.update(0.75);
        assert!((p.alpha() - 0.25).abs() < 1e-6);
        p.update(0.5);
        assert!(p.alpha() < 0.0);
        assert!(p.is_expired());
    }

    #[test]
    fn test_particle_burst_bounds() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        let n = particle_burst(&mut particles, &mut rng, Vec2::ONE, Color::WHITE, 10_000);

        assert!((1..=PARTICLES_COUNT).contains(&n));
        assert_eq!(particles.len(), n);
        for p in &particles {
            assert_eq!(p.pos, Vec2::ONE);
            assert!(p.vel.length() <= PARTICLE_MAG + 1e-3);
            assert!((0.0..PARTICLE_LIFETIME).contains(&p.lifetime));
            assert!((0.0..PARTICLE_RADIUS).contains(&p.radius));
        }
    }

    #[test]
    fn test_particle_burst_respects_cap() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        for _ in 0..20 {
            particle_burst(&mut particles, &mut rng, Vec2::ZERO, Color::WHITE, 60);
        }
        assert!(particles.len() <= 60);

        let mut none = Vec::new();
        assert_eq!(particle_burst(&mut none, &mut rng, Vec2::ZERO, Color::WHITE, 0), 0);
    }
}
