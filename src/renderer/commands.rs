//! Recording renderer
//!
//! Captures draw calls as plain data. Used by the headless runner and tests,
//! and as a hand-off format for backends that batch a whole frame.

use glam::Vec2;
use serde::Serialize;

use super::Renderer;
use crate::color::Color;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Message {
        text: String,
        color: Color,
    },
}

/// A viewport plus the commands drawn into it since the last clear
#[derive(Debug, Clone, Serialize)]
pub struct CommandBuffer {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Message { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (f32, f32, f32, f32, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Rect { x, y, w, h, color } => Some((*x, *y, *w, *h, *color)),
            _ => None,
        })
    }
}

impl Renderer for CommandBuffer {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.commands.push(DrawCommand::Rect { x, y, w, h, color });
    }

    fn fill_message(&mut self, text: &str, color: Color) {
        self.commands.push(DrawCommand::Message {
            text: text.to_string(),
            color,
        });
    }
}
