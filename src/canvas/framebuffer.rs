/*
 * Software canvas
 *
 * The canvas is a 0x00RRGGBB framebuffer shared by all the pens. Each pen
 * draws on its own layer: the layer keeps its segments so it can be erased
 * on its own, the framebuffer is then rebuilt from the remaining layers.
 * Cursors are not part of the framebuffer, they are composited when the
 * frame is handed to the window.
 */
use super::DrawingSink;
use crate::curve::{Color, Point};
use crate::error::SpiroError;
use std::cell::RefCell;
use std::rc::Rc;

pub const BACKGROUND: u32 = 0x00FF_FFFF;
const CURSOR_RADIUS: i64 = 5;

pub type SharedCanvas = Rc<RefCell<Canvas>>;

#[derive(Debug, Clone, Copy)]
struct Segment {
    from: Point,
    to: Point,
    color: u32,
}

#[derive(Debug)]
struct Layer {
    color: u32,
    segments: Vec<Segment>,
    position: Point,
    pen_down: bool,
    cursor_visible: bool,
}

impl Layer {
    fn new() -> Layer {
        Layer {
            color: 0x0000_0000,
            segments: Vec::new(),
            position: Point::new(0.0, 0.0),
            pen_down: true,
            cursor_visible: true,
        }
    }
}

#[derive(Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    layers: Vec<Layer>,
    closed: bool,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
            layers: Vec::new(),
            closed: false,
        }
    }

    pub fn shared(width: usize, height: usize) -> SharedCanvas {
        Rc::new(RefCell::new(Canvas::new(width, height)))
    }

    pub fn add_layer(&mut self) -> usize {
        self.layers.push(Layer::new());
        self.layers.len() - 1
    }

    pub fn get_dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Once closed, every pen operation fails.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn position(&self, layer: usize) -> Option<Point> {
        self.layers.get(layer).map(|l| l.position)
    }

    pub fn is_cursor_visible(&self, layer: usize) -> bool {
        self.layers.get(layer).map_or(false, |l| l.cursor_visible)
    }

    pub fn is_pen_down(&self, layer: usize) -> bool {
        self.layers.get(layer).map_or(false, |l| l.pen_down)
    }

    pub fn segment_count(&self, layer: usize) -> usize {
        self.layers.get(layer).map_or(0, |l| l.segments.len())
    }

    /// Frame to display: the framebuffer with the visible cursors on top.
    pub fn compose(&self, frame: &mut Vec<u32>) {
        frame.clear();
        frame.extend_from_slice(&self.pixels);
        for layer in self.layers.iter().filter(|l| l.cursor_visible) {
            let (x, y) = self.to_screen(layer.position);
            let corners = [
                (x, y - CURSOR_RADIUS),
                (x + CURSOR_RADIUS, y),
                (x, y + CURSOR_RADIUS),
                (x - CURSOR_RADIUS, y),
            ];
            for side in 0..corners.len() {
                let (from, to) = (corners[side], corners[(side + 1) % corners.len()]);
                plot_line(frame, self.width, self.height, from, to, layer.color);
            }
        }
    }

    pub fn move_to(&mut self, layer: usize, point: Point) -> Result<(), SpiroError> {
        self.layer_mut(layer)?.position = point;
        Ok(())
    }

    pub fn line_to(&mut self, layer: usize, point: Point) -> Result<(), SpiroError> {
        let segment = {
            let layer = self.layer_mut(layer)?;
            let segment = Segment {
                from: layer.position,
                to: point,
                color: layer.color,
            };
            layer.position = point;
            if !layer.pen_down {
                return Ok(());
            }
            layer.segments.push(segment);
            segment
        };
        self.draw_segment(segment);

        Ok(())
    }

    pub fn set_pen(&mut self, layer: usize, down: bool) -> Result<(), SpiroError> {
        self.layer_mut(layer)?.pen_down = down;
        Ok(())
    }

    pub fn set_color(&mut self, layer: usize, color: Color) -> Result<(), SpiroError> {
        self.layer_mut(layer)?.color = color.to_rgb24();
        Ok(())
    }

    pub fn set_cursor(&mut self, layer: usize, visible: bool) -> Result<(), SpiroError> {
        self.layer_mut(layer)?.cursor_visible = visible;
        Ok(())
    }

    pub fn clear_layer(&mut self, layer: usize) -> Result<(), SpiroError> {
        self.layer_mut(layer)?.segments.clear();
        self.redraw();
        Ok(())
    }

    fn layer_mut(&mut self, layer: usize) -> Result<&mut Layer, SpiroError> {
        if self.closed {
            return Err(SpiroError::SinkFailure("canvas closed"));
        }
        self.layers
            .get_mut(layer)
            .ok_or(SpiroError::SinkFailure("no such layer"))
    }

    fn redraw(&mut self) {
        for pixel in self.pixels.iter_mut() {
            *pixel = BACKGROUND;
        }
        let segments: Vec<Segment> = self
            .layers
            .iter()
            .flat_map(|l| l.segments.iter().copied())
            .collect();
        for segment in segments {
            self.draw_segment(segment);
        }
    }

    fn draw_segment(&mut self, segment: Segment) {
        let from = self.to_screen(segment.from);
        let to = self.to_screen(segment.to);
        plot_line(&mut self.pixels, self.width, self.height, from, to, segment.color);
    }

    fn to_screen(&self, point: Point) -> (i64, i64) {
        (
            (self.width as f64 / 2.0 + point.x).round() as i64,
            (self.height as f64 / 2.0 - point.y).round() as i64,
        )
    }
}

/*
 * Bresenham, pixels outside of the buffer are skipped.
 */
fn plot_line(buffer: &mut [u32], width: usize, height: usize, from: (i64, i64), to: (i64, i64), color: u32) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x >= 0 && y >= 0 && (x as usize) < width && (y as usize) < height {
            buffer[y as usize * width + x as usize] = color;
        }
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/*
 * Pen
 * A drawing sink bound to one layer of a shared canvas.
 */
#[derive(Debug, Clone)]
pub struct Pen {
    canvas: SharedCanvas,
    layer: usize,
}

impl Pen {
    pub fn new(canvas: &SharedCanvas) -> Pen {
        let layer = canvas.borrow_mut().add_layer();
        Pen {
            canvas: canvas.clone(),
            layer,
        }
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    fn with_canvas<F>(&self, op: F) -> Result<(), SpiroError>
    where
        F: FnOnce(&mut Canvas, usize) -> Result<(), SpiroError>,
    {
        let mut canvas = self
            .canvas
            .try_borrow_mut()
            .map_err(|_| SpiroError::SinkFailure("canvas already in use"))?;
        op(&mut *canvas, self.layer)
    }
}

impl DrawingSink for Pen {
    fn move_to(&mut self, point: Point) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| c.move_to(l, point))
    }

    fn line_to(&mut self, point: Point) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| c.line_to(l, point))
    }

    fn pen_up(&mut self) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| c.set_pen(l, false))
    }

    fn pen_down(&mut self) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| c.set_pen(l, true))
    }

    fn set_color(&mut self, color: Color) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| c.set_color(l, color))
    }

    fn show_cursor(&mut self) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| c.set_cursor(l, true))
    }

    fn hide_cursor(&mut self) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| c.set_cursor(l, false))
    }

    fn clear(&mut self) -> Result<(), SpiroError> {
        self.with_canvas(|c, l| {
            c.set_pen(l, false)?;
            c.clear_layer(l)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_the_center() {
        let canvas = Canvas::shared(100, 80);
        let mut pen = Pen::new(&canvas);
        pen.set_color(Color::new(1.0, 0.0, 0.0)).unwrap();
        pen.line_to(Point::new(0.0, 0.0)).unwrap();
        assert_eq!(Some(0xFF0000), canvas.borrow().pixel(50, 40));
    }

    #[test]
    fn test_y_points_up() {
        let canvas = Canvas::shared(100, 100);
        let mut pen = Pen::new(&canvas);
        pen.move_to(Point::new(0.0, 10.0)).unwrap();
        pen.line_to(Point::new(0.0, 20.0)).unwrap();
        let canvas = canvas.borrow();
        assert_eq!(Some(0x000000), canvas.pixel(50, 35));
        assert_eq!(Some(BACKGROUND), canvas.pixel(50, 65));
    }

    #[test]
    fn test_pen_up_does_not_draw() {
        let canvas = Canvas::shared(100, 100);
        let mut pen = Pen::new(&canvas);
        pen.pen_up().unwrap();
        pen.line_to(Point::new(30.0, 0.0)).unwrap();
        assert_eq!(0, canvas.borrow().segment_count(pen.layer()));
        assert_eq!(Some(Point::new(30.0, 0.0)), canvas.borrow().position(pen.layer()));
        assert!(canvas.borrow().pixels().iter().all(|p| *p == BACKGROUND));
        pen.pen_down().unwrap();
        pen.line_to(Point::new(30.0, 30.0)).unwrap();
        assert_eq!(1, canvas.borrow().segment_count(pen.layer()));
    }

    #[test]
    fn test_horizontal_line() {
        let canvas = Canvas::shared(20, 20);
        let mut pen = Pen::new(&canvas);
        pen.move_to(Point::new(-5.0, 0.0)).unwrap();
        pen.line_to(Point::new(5.0, 0.0)).unwrap();
        let canvas = canvas.borrow();
        for x in 5..=15 {
            assert_eq!(Some(0x000000), canvas.pixel(x, 10));
        }
        assert_eq!(Some(BACKGROUND), canvas.pixel(4, 10));
        assert_eq!(Some(BACKGROUND), canvas.pixel(16, 10));
    }

    #[test]
    fn test_clear_only_erases_its_own_layer() {
        let canvas = Canvas::shared(100, 100);
        let mut first = Pen::new(&canvas);
        let mut second = Pen::new(&canvas);
        first.set_color(Color::new(1.0, 0.0, 0.0)).unwrap();
        second.set_color(Color::new(0.0, 0.0, 1.0)).unwrap();
        first.move_to(Point::new(-20.0, 10.0)).unwrap();
        first.line_to(Point::new(20.0, 10.0)).unwrap();
        second.move_to(Point::new(-20.0, -10.0)).unwrap();
        second.line_to(Point::new(20.0, -10.0)).unwrap();

        first.clear().unwrap();
        let c = canvas.borrow();
        assert_eq!(0, c.segment_count(first.layer()));
        assert_eq!(Some(BACKGROUND), c.pixel(50, 40));
        assert_eq!(Some(0x0000FF), c.pixel(50, 60));
        assert_eq!(Some(Point::new(20.0, 10.0)), c.position(first.layer()));
        assert!(!c.is_pen_down(first.layer()));
    }

    #[test]
    fn test_lines_are_clipped() {
        let canvas = Canvas::shared(10, 10);
        let mut pen = Pen::new(&canvas);
        pen.move_to(Point::new(-500.0, -500.0)).unwrap();
        pen.line_to(Point::new(500.0, 500.0)).unwrap();
        assert_eq!(Some(0x000000), canvas.borrow().pixel(5, 5));
    }

    #[test]
    fn test_closed_canvas_fails() {
        let canvas = Canvas::shared(10, 10);
        let mut pen = Pen::new(&canvas);
        canvas.borrow_mut().close();
        assert_eq!(
            Err(SpiroError::SinkFailure("canvas closed")),
            pen.line_to(Point::new(1.0, 1.0))
        );
    }

    #[test]
    fn test_compose_draws_visible_cursors() {
        let canvas = Canvas::shared(40, 40);
        let mut pen = Pen::new(&canvas);
        let mut frame = Vec::new();
        canvas.borrow().compose(&mut frame);
        assert_eq!(Some(&0x000000), frame.get(15 * 40 + 20));

        pen.hide_cursor().unwrap();
        canvas.borrow().compose(&mut frame);
        assert!(frame.iter().all(|p| *p == BACKGROUND));
    }
}
