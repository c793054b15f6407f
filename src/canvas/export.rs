use super::Canvas;
use chrono::NaiveDateTime;
use image::{ImageResult, Rgb, RgbImage};
use std::path::Path;

/// Snapshot of the framebuffer, cursors are left out.
pub fn to_rgb_image(canvas: &Canvas) -> RgbImage {
    let (width, height) = canvas.get_dimensions();
    RgbImage::from_fn(width as u32, height as u32, |x, y| {
        let pixel = canvas.pixel(x as usize, y as usize).unwrap_or(super::BACKGROUND);
        Rgb([(pixel >> 16) as u8, (pixel >> 8) as u8, pixel as u8])
    })
}

pub fn save_png(canvas: &Canvas, path: &Path) -> ImageResult<()> {
    to_rgb_image(canvas).save_with_format(path, image::ImageFormat::Png)
}

/// `spiro-05Mar2024-140709.png`
pub fn snapshot_file_name(now: &NaiveDateTime) -> String {
    format!("spiro-{}.png", now.format("%d%b%Y-%H%M%S"))
}
