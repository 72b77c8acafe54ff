//! Collaborator contracts the core draws, plays and waits through.
//!
//! The core decides what goes where; implementations only carry it out.

use std::time::Duration;

use glam::IVec2;

use crate::rect::Rect;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Rendered text with the size the surface measured for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub color: Color,
    pub size: IVec2,
}

impl Label {
    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }
}

/// Drawing target for one frame
pub trait Surface {
    fn fill(&mut self, color: Color);
    fn draw_rect(&mut self, rect: Rect, color: Color);
    fn render_text(&mut self, text: &str, color: Color) -> Label;
    fn blit(&mut self, label: &Label, pos: IVec2);
    fn present(&mut self);
}

/// Fire-and-forget sound effect
pub trait SoundTrigger {
    fn play(&mut self);
}

/// Blocking wait used for the pause after a game is won
pub trait Clock {
    fn wait(&mut self, duration: Duration);
}

/// Sound trigger that plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundTrigger for Silent {
    fn play(&mut self) {}
}
