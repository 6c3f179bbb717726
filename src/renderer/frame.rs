//! Frame render pass
//!
//! Draw order: player, bullets, particles, enemies, overlays, health bar.
//! Shapes go through the state's filter mode; messages never do.

use super::Renderer;
use crate::consts::*;
use crate::sim::GameState;

pub const PAUSE_MESSAGE: &str = "PAUSED (Press SPACE to continue)";

pub fn death_message(score: u64) -> String {
    format!("Your score: {score} (Press R to restart)")
}

pub fn render_frame<R: Renderer>(state: &GameState, renderer: &mut R) {
    let filter = state.filter;
    let palette = &state.palette;
    let size = renderer.size();

    renderer.clear();

    if state.player.is_alive() {
        renderer.fill_circle(state.player.pos, PLAYER_RADIUS, filter.apply(palette.player));
    }

    for bullet in &state.bullets {
        renderer.fill_circle(bullet.pos, BULLET_RADIUS, filter.apply(palette.player));
    }

    for particle in &state.particles {
        let color = particle.color.with_alpha(particle.alpha().clamp(0.0, 1.0));
        renderer.fill_circle(particle.pos, particle.radius, filter.apply(color));
    }

    for enemy in &state.enemies {
        renderer.fill_circle(enemy.pos, ENEMY_RADIUS, filter.apply(palette.enemy));
    }

    if state.is_player_dead() {
        renderer.fill_message(&death_message(state.score), palette.message);
    }

    if state.paused {
        renderer.fill_message(PAUSE_MESSAGE, palette.message);
    } else {
        let popup = &state.tutorial.popup;
        if !popup.text.is_empty() {
            renderer.fill_message(&popup.text, palette.message.with_alpha(popup.alpha));
        }
    }

    let health_frac = state.player.health / PLAYER_MAX_HEALTH;
    renderer.fill_rect(
        0.0,
        size.y - HEALTH_BAR_HEIGHT,
        size.x * health_frac,
        HEALTH_BAR_HEIGHT,
        filter.apply(palette.player),
    );
}
