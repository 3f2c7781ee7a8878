use crate::{
    color::Color,
    display::{FilledRect, Frame},
};

/// Draws filled rectangles into a borrowed frame. Rectangles outside the
/// visible area are kept; the display clips them when presenting.
pub struct Renderer<'a> {
    frame: &'a mut Frame,
}

impl<'a> Renderer<'a> {
    pub fn new(frame: &'a mut Frame) -> Self {
        Self { frame }
    }

    pub fn clear(&mut self, color: Color) {
        self.frame.clear(color);
    }

    pub fn draw_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.frame.rects.push(FilledRect {
            x,
            y,
            width,
            height,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_rects() {
        let mut frame = Frame::new(Color::WHITE);
        let mut renderer = Renderer::new(&mut frame);
        renderer.draw_rectangle(-10.0, 5000.0, 20.0, 20.0, Color::RED);
        renderer.clear(Color::BLACK);
        renderer.draw_rectangle(0.0, 0.0, 1.0, 1.0, Color::BLUE);

        assert_eq!(frame.background, Color::BLACK);
        assert_eq!(frame.rects.len(), 1);
        assert_eq!(frame.rects[0].color, Color::BLUE);
    }
}
