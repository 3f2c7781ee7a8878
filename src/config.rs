use std::time::Duration;

use crate::color::Color;

pub const DISPLAY_WIDTH: u32 = 800;
pub const DISPLAY_HEIGHT: u32 = 800;
pub const GRID_SIZE: usize = 16;
pub const TICK_SPEED: Duration = Duration::from_millis(100);

/// Process-wide settings. Created once at startup and mutated in place by
/// the key handlers; nothing here reacts to a change until the template
/// re-reads the field.
#[derive(Debug, Clone)]
pub struct Config {
    pub display_width: u32,
    pub display_height: u32,
    pub fullscreen: bool,
    pub limit_tick_speed: bool,
    pub tick_speed: Duration,
    pub grid_size: usize,

    // Colors
    pub white: Color,
    pub black: Color,
    pub red: Color,
    pub green: Color,
    pub blue: Color,
    pub yellow: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            fullscreen: false,
            limit_tick_speed: true,
            tick_speed: TICK_SPEED,
            grid_size: GRID_SIZE,
            white: Color::WHITE,
            black: Color::BLACK,
            red: Color::RED,
            green: Color::GREEN,
            blue: Color::BLUE,
            yellow: Color::YELLOW,
        }
    }
}

impl Config {
    /// Locations with no entities are drawn in this color.
    pub fn background(&self) -> Color {
        self.white
    }
}
