//! Collision tests
//!
//! Everything in the arena is a circle, so every test is a center-distance
//! check. Touching counts as a hit (`<=`).

use glam::Vec2;

use crate::consts::*;

/// Whether two circles touch or overlap
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) <= radius_a + radius_b
}

#[inline]
pub fn bullet_hits_enemy(bullet_pos: Vec2, enemy_pos: Vec2) -> bool {
    circles_overlap(bullet_pos, BULLET_RADIUS, enemy_pos, ENEMY_RADIUS)
}

#[inline]
pub fn enemy_hits_player(enemy_pos: Vec2, player_pos: Vec2) -> bool {
    circles_overlap(enemy_pos, ENEMY_RADIUS, player_pos, PLAYER_RADIUS)
}
