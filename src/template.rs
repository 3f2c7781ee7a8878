use std::thread;

use log::{debug, info, trace};

use crate::{
    color::Color,
    config::Config,
    display::{Display, Frame, InputEvent, Key},
    entity::Entity,
    environment::Environment,
    error::{Error, Result},
    location::Location,
    renderer::Renderer,
};

pub const TEMPLATE_NAME: &str = "EnvGameTemplate";
pub const ENVIRONMENT_NAME: &str = "environment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Stopped,
}

/// Color a location is drawn in: its top entity's, else the background.
pub fn color_of_location(config: &Config, location: &Location) -> Color {
    location
        .top_entity()
        .map(Entity::color)
        .unwrap_or_else(|| config.background())
}

/// Owns the world and the display and drives the frame loop.
pub struct EnvGameTemplate<D: Display> {
    config: Config,
    display: D,
    environment: Environment,
    frame: Frame,
    state: State,
    tick: u64,
    location_width: f32,
    location_height: f32,
}

impl<D: Display> EnvGameTemplate<D> {
    pub fn new(config: Config, display: D) -> Result<Self> {
        let mut template = Self {
            frame: Frame::new(config.background()),
            environment: Environment::new(ENVIRONMENT_NAME, config.grid_size),
            config,
            display,
            state: State::Running,
            tick: 0,
            location_width: 0.0,
            location_height: 0.0,
        };
        template.initialize()?;
        Ok(template)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn location_size(&self) -> (f32, f32) {
        (self.location_width, self.location_height)
    }

    /// The last frame handed to the display.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    fn initialize(&mut self) -> Result<()> {
        self.tick = 0;
        self.environment = Environment::new(ENVIRONMENT_NAME, self.config.grid_size);
        let (width, height) = self.display.size();
        self.initialize_location_size(width, height);
        self.display.set_caption(&format!(
            "{} - {}x{}",
            TEMPLATE_NAME, self.config.grid_size, self.config.grid_size
        ))?;
        info!(
            "initialized {} with a {}x{} grid",
            self.environment.name(),
            self.config.grid_size,
            self.config.grid_size
        );
        Ok(())
    }

    fn initialize_location_size(&mut self, width: u32, height: u32) {
        let grid = self.environment.grid();
        self.location_width = width as f32 / grid.rows() as f32;
        self.location_height = height as f32 / grid.columns() as f32;
        debug!(
            "display is {}x{}, locations are {}x{}",
            width, height, self.location_width, self.location_height
        );
    }

    pub fn restart(&mut self) -> Result<()> {
        info!("restarting");
        self.initialize()
    }

    pub fn quit(&mut self) {
        info!("quitting after {} ticks", self.tick);
        self.state = State::Stopped;
    }

    /// Runs frames until the template stops. The display is released when
    /// the template is dropped.
    pub fn run(&mut self) -> Result<()> {
        while self.state == State::Running {
            self.step()?;
        }
        Ok(())
    }

    /// One pass of the loop: drain events, redraw, present, then sleep and
    /// count a tick if tick speed is limited.
    ///
    /// A quit event stops immediately without drawing. The `q` key only marks
    /// the template stopped, so the rest of the queue is handled and this
    /// frame is still drawn.
    pub fn step(&mut self) -> Result<()> {
        for event in self.display.poll_events() {
            match event {
                InputEvent::Quit => {
                    self.quit();
                    return Ok(());
                }
                InputEvent::KeyDown(key) => self.handle_key_down(key)?,
                InputEvent::Resized { width, height } => {
                    self.initialize_location_size(width, height)
                }
            }
        }

        self.draw_environment();
        self.display.present(&self.frame)?;
        trace!("presented {} locations", self.frame.rects.len());

        // Ticks only advance while the speed is limited.
        if self.config.limit_tick_speed {
            thread::sleep(self.config.tick_speed);
            self.tick += 1;
        }
        Ok(())
    }

    pub fn handle_key_down(&mut self, key: Key) -> Result<()> {
        debug!("key down: {:?}", key);
        match key {
            Key::Q => self.quit(),
            Key::F11 => {
                self.config.fullscreen = !self.config.fullscreen;
                info!("fullscreen: {}", self.config.fullscreen);
                self.display.set_mode(
                    self.config.display_width,
                    self.config.display_height,
                    self.config.fullscreen,
                )?;
                // A recreated window reports no resize of its own.
                let (width, height) = self.display.size();
                self.initialize_location_size(width, height);
            }
            Key::L => {
                self.config.limit_tick_speed = !self.config.limit_tick_speed;
                info!("limit tick speed: {}", self.config.limit_tick_speed);
            }
            Key::R => self.restart()?,
            Key::Other => {}
        }
        Ok(())
    }

    fn draw_environment(&mut self) {
        let mut renderer = Renderer::new(&mut self.frame);
        renderer.clear(self.config.background());
        for location in self.environment.grid().locations() {
            renderer.draw_rectangle(
                location.x() as f32 * self.location_width,
                location.y() as f32 * self.location_height,
                self.location_width,
                self.location_height,
                color_of_location(&self.config, location),
            );
        }
    }

    pub fn location_of(&self, entity: &Entity) -> Result<&Location> {
        let id = entity.location_id().ok_or(Error::NotPresent(entity.id()))?;
        self.environment.grid().location(id)
    }

    /// Removes the entity from its location if it is still there.
    pub fn remove_entity(&mut self, entity: &Entity) -> Result<Option<Entity>> {
        if !self.location_of(entity)?.is_entity_present(entity.id()) {
            return Ok(None);
        }
        self.environment.remove_entity(entity).map(Some)
    }
}
