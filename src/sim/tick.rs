//! Per-frame simulation tick
//!
//! Core game loop: movement, collisions, pruning and the spawn ramp.

use glam::Vec2;

use super::collision::{bullet_hits_enemy, enemy_hits_player};
use super::entity::particle_burst;
use super::input::key_direction;
use super::state::GameState;
use crate::consts::*;

/// Advance the game state by `dt` seconds of wall time
pub fn tick(state: &mut GameState, dt: f32) {
    state.sync_death_filter();
    if state.paused {
        return;
    }

    // Slow-motion death screen
    let dt = if state.is_player_dead() {
        dt / DEATH_SLOWDOWN
    } else {
        dt
    };

    state.time_ticks += 1;
    state.elapsed += dt;

    // Diagonals are deliberately not normalized
    let mut moved = false;
    let mut vel = Vec2::ZERO;
    for dir in state.pressed_keys.iter().filter_map(|k| key_direction(k)) {
        vel += dir * PLAYER_SPEED;
        moved = true;
    }
    if moved {
        state.tutorial.player_moved();
    }

    state.player.update(dt, vel);
    state.tutorial.update(dt);

    resolve_collisions(state);
    state.sync_death_filter();

    for bullet in &mut state.bullets {
        bullet.update(dt);
    }
    state.bullets.retain(|b| !b.is_expired());

    let target = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.update(dt, target);
    }
    state.enemies.retain(|e| !e.dead);

    for particle in &mut state.particles {
        particle.update(dt);
    }
    state.particles.retain(|p| !p.is_expired());

    if state.tutorial.is_finished() {
        advance_spawner(state, dt);
    }
}

/// Enemy-major collision pass.
///
/// A bullet is not removed from the inner loop after a hit; its lifetime is
/// zeroed so it is pruned this tick, but it is still tested against the
/// remaining enemies.
fn resolve_collisions(state: &mut GameState) {
    let max_particles = state.max_particles;

    for enemy in &mut state.enemies {
        if !enemy.dead {
            for bullet in &mut state.bullets {
                if bullet_hits_enemy(bullet.pos, enemy.pos) {
                    enemy.dead = true;
                    bullet.lifetime = 0.0;
                    state.score += ENEMY_KILL_POINT;
                    particle_burst(
                        &mut state.particles,
                        &mut state.rng,
                        enemy.pos,
                        state.palette.enemy,
                        max_particles,
                    );
                    state.player.heal(HEALTH_PER_KILL);
                    log::trace!("Enemy killed at {:?}, score {}", enemy.pos, state.score);
                }
            }
        }

        if state.player.is_alive() && !enemy.dead && enemy_hits_player(enemy.pos, state.player.pos) {
            enemy.dead = true;
            state.player.damage(ENEMY_DAMAGE);
            particle_burst(
                &mut state.particles,
                &mut state.rng,
                enemy.pos,
                state.palette.player,
                max_particles,
            );
            log::trace!("Player hit, health {}", state.player.health);

            if !state.player.is_alive() {
                log::info!("Player died with score {}", state.score);
            }
        }
    }
}

/// Count down to the next spawn; each spawn shortens the interval
fn advance_spawner(state: &mut GameState, dt: f32) {
    state.enemy_spawn_cooldown -= dt;
    if state.enemy_spawn_cooldown <= 0.0 {
        state.spawn_enemy();
        state.enemy_spawn_cooldown = state.enemy_spawn_interval;
        state.enemy_spawn_interval =
            (state.enemy_spawn_interval - ENEMY_SPAWN_STEP).max(ENEMY_SPAWN_MIN_INTERVAL);
        log::debug!("Spawn interval now {:.2}s", state.enemy_spawn_interval);
    }
}
