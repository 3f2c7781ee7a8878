pub mod color;
pub mod config;
pub mod display;
pub mod entity;
pub mod environment;
pub mod error;
pub mod grid;
pub mod location;
pub mod renderer;
#[cfg(feature = "sdl")]
pub mod sdl_display;
pub mod template;

pub use error::{Error, Result};
