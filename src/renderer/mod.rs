//! Rendering module
//!
//! The game never touches pixels. A `Renderer` backend receives shapes and
//! text with normalized RGBA colors and converts them to its native format.

pub mod commands;
pub mod frame;

pub use commands::{CommandBuffer, DrawCommand};
pub use frame::{PAUSE_MESSAGE, death_message, render_frame};

use glam::Vec2;

use crate::color::Color;

/// Drawing backend (canvas, GPU, terminal, test recorder...)
pub trait Renderer {
    /// Viewport size in pixels
    fn size(&self) -> Vec2;

    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Text centered on the viewport
    fn fill_message(&mut self, text: &str, color: Color);
}
