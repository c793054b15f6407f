/*
 * MiniFB window
 *
 * Presents the canvas in a native window and turns key presses into
 * trigger names for the input bindings:
 * Space    restart
 * T        toggle
 * S        save
 */
use super::Canvas;
use crate::error::SpiroError;
use crate::input::{RESTART, SAVE, TOGGLE};
use minifb::{Key, KeyRepeat, Scale, ScaleMode, WindowOptions};

pub fn trigger_for_key(key: Key) -> Option<&'static str> {
    match key {
        Key::Space => Some(RESTART),
        Key::T => Some(TOGGLE),
        Key::S => Some(SAVE),
        _ => None,
    }
}

pub struct Window {
    window: minifb::Window,
    frame: Vec<u32>,
}

impl Window {
    pub fn open(title: &str, width: usize, height: usize) -> minifb::Result<Window> {
        let window = minifb::Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                scale: Scale::X1,
                scale_mode: ScaleMode::AspectRatioStretch,
                ..WindowOptions::default()
            },
        )?;

        Ok(Window {
            window,
            frame: Vec::with_capacity(width * height),
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Also refreshes the keyboard state.
    pub fn present(&mut self, canvas: &Canvas) -> Result<(), SpiroError> {
        let (width, height) = canvas.get_dimensions();
        canvas.compose(&mut self.frame);
        self.window
            .update_with_buffer(&self.frame, width, height)
            .map_err(|_| SpiroError::SinkFailure("window refused the frame"))
    }

    /// Triggers for the keys pressed since the last frame.
    pub fn pressed_triggers(&self) -> Vec<&'static str> {
        self.window
            .get_keys_pressed(KeyRepeat::No)
            .unwrap_or_default()
            .into_iter()
            .filter_map(trigger_for_key)
            .collect()
    }
}
