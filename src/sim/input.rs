//! Input handling
//!
//! Key and pointer events are applied to the state as they arrive; the next
//! tick reads the aggregate (held keys, queued bullets).

use glam::Vec2;

use super::state::GameState;

/// Key that toggles pause
pub const PAUSE_KEY: &str = " ";

/// Unit direction for a movement key (`w`/`a`/`s`/`d`, screen coordinates)
pub fn key_direction(key: &str) -> Option<Vec2> {
    match key {
        "w" => Some(Vec2::new(0.0, -1.0)),
        "a" => Some(Vec2::new(-1.0, 0.0)),
        "s" => Some(Vec2::new(0.0, 1.0)),
        "d" => Some(Vec2::new(1.0, 0.0)),
        _ => None,
    }
}

impl GameState {
    /// Ignored entirely once the player is dead
    pub fn key_down(&mut self, key: &str) {
        if self.is_player_dead() {
            return;
        }
        if key == PAUSE_KEY {
            self.toggle_pause();
        }
        self.pressed_keys.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.pressed_keys.remove(key);
    }

    pub fn mouse_move(&mut self, pos: Vec2) {
        self.pointer_pos = pos;
    }

    /// Shoot toward `pos` (ignored while paused or dead)
    pub fn mouse_down(&mut self, pos: Vec2) {
        self.pointer_pos = pos;
        if self.paused || self.is_player_dead() {
            return;
        }

        self.tutorial.player_shot();
        let bullet = self.player.shoot_at(pos);
        self.bullets.push(bullet);
    }
}
