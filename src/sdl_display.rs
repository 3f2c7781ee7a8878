use log::info;
use sdl2::{
    event::{Event, WindowEvent},
    keyboard::Keycode,
    rect::Rect,
    render::Canvas,
    video::Window,
    EventPump, Sdl, VideoSubsystem,
};

use crate::{
    config::Config,
    display::{Display, Frame, InputEvent, Key},
    error::{Error, Result},
};

fn display_error(e: impl ToString) -> Error {
    Error::Display(e.to_string())
}

pub struct SdlDisplay {
    _sdl_context: Sdl,
    video_subsystem: VideoSubsystem,
    canvas: Canvas<Window>,
    event_pump: EventPump,
    caption: String,
}

impl SdlDisplay {
    pub fn new(config: &Config) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(display_error)?;
        let video_subsystem = sdl_context.video().map_err(display_error)?;
        let event_pump = sdl_context.event_pump().map_err(display_error)?;
        let caption = String::new();
        let canvas = build_canvas(
            &video_subsystem,
            &caption,
            config.display_width,
            config.display_height,
            config.fullscreen,
        )?;

        Ok(Self {
            _sdl_context: sdl_context,
            video_subsystem,
            canvas,
            event_pump,
            caption,
        })
    }
}

fn build_canvas(
    video_subsystem: &VideoSubsystem,
    caption: &str,
    width: u32,
    height: u32,
    fullscreen: bool,
) -> Result<Canvas<Window>> {
    let mut builder = video_subsystem.window(caption, width, height);
    if fullscreen {
        builder.fullscreen();
    } else {
        builder.position_centered().resizable();
    }
    let window = builder.build().map_err(display_error)?;
    window.into_canvas().build().map_err(display_error)
}

fn key_from(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Q => Key::Q,
        Keycode::F11 => Key::F11,
        Keycode::L => Key::L,
        Keycode::R => Key::R,
        _ => Key::Other,
    }
}

impl Display for SdlDisplay {
    fn size(&self) -> (u32, u32) {
        self.canvas.window().size()
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.event_pump
            .poll_iter()
            .filter_map(|event| match event {
                Event::Quit { .. } => Some(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => Some(InputEvent::KeyDown(key_from(keycode))),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(width, height),
                    ..
                } => Some(InputEvent::Resized {
                    width: width.max(0) as u32,
                    height: height.max(0) as u32,
                }),
                _ => None,
            })
            .collect()
    }

    fn present(&mut self, frame: &Frame) -> Result<()> {
        self.canvas.set_draw_color(frame.background);
        self.canvas.clear();
        for rect in &frame.rects {
            // Round the edges rather than the size so neighbouring cells
            // meet without gaps.
            let left = rect.x.round() as i32;
            let top = rect.y.round() as i32;
            let right = (rect.x + rect.width).round() as i32;
            let bottom = (rect.y + rect.height).round() as i32;
            if right <= left || bottom <= top {
                continue;
            }
            let cell = Rect::new(left, top, (right - left) as u32, (bottom - top) as u32);
            self.canvas.set_draw_color(rect.color);
            self.canvas.fill_rect(cell).map_err(display_error)?;
        }
        self.canvas.present();
        Ok(())
    }

    fn set_mode(&mut self, width: u32, height: u32, fullscreen: bool) -> Result<()> {
        info!(
            "recreating {}x{} window (fullscreen: {})",
            width, height, fullscreen
        );
        self.canvas = build_canvas(
            &self.video_subsystem,
            &self.caption,
            width,
            height,
            fullscreen,
        )?;
        Ok(())
    }

    fn set_caption(&mut self, caption: &str) -> Result<()> {
        self.caption = caption.to_string();
        self.canvas
            .window_mut()
            .set_title(caption)
            .map_err(display_error)
    }
}
