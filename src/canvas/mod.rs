use super::curve::{Color, Point};
use super::error::SpiroError;

mod export;
mod framebuffer;
mod window;

pub use export::{save_png, snapshot_file_name, to_rgb_image};
pub use framebuffer::{Canvas, Pen, SharedCanvas, BACKGROUND};
pub use window::{trigger_for_key, Window};

/*
 * DrawingSink
 * this trait defines what a curve needs from its rendering surface. Every
 * curve instance owns its own sink, positions are in viewport coordinates
 * (origin at the center, y pointing up).
 * Any failure means the surface is gone, callers must not retry.
 */
pub trait DrawingSink {
    /// Move without drawing, whatever the pen state.
    fn move_to(&mut self, point: Point) -> Result<(), SpiroError>;
    /// Move and draw a segment when the pen is down.
    fn line_to(&mut self, point: Point) -> Result<(), SpiroError>;
    fn pen_up(&mut self) -> Result<(), SpiroError>;
    fn pen_down(&mut self) -> Result<(), SpiroError>;
    fn set_color(&mut self, color: Color) -> Result<(), SpiroError>;
    fn show_cursor(&mut self) -> Result<(), SpiroError>;
    fn hide_cursor(&mut self) -> Result<(), SpiroError>;
    /// Erase every segment drawn through this sink, the position is kept.
    fn clear(&mut self) -> Result<(), SpiroError>;
}
