use crate::{color::Color, error::Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Q,
    F11,
    L,
    R,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    Resized { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: Color,
}

/// Everything drawn during one pass of the loop, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub background: Color,
    pub rects: Vec<FilledRect>,
}

impl Frame {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            rects: Vec::new(),
        }
    }

    pub fn clear(&mut self, background: Color) {
        self.background = background;
        self.rects.clear();
    }
}

/// The window the template draws into and reads input from.
pub trait Display {
    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);

    /// Drains every pending event without blocking.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn present(&mut self, frame: &Frame) -> Result<()>;

    /// Recreates the surface, windowed-resizable or fullscreen.
    fn set_mode(&mut self, width: u32, height: u32, fullscreen: bool) -> Result<()>;

    fn set_caption(&mut self, caption: &str) -> Result<()>;
}
